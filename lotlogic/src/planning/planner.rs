use anyhow::{Context, Result, ensure};
use log::{info, warn};

use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::SPolygon;
use crate::planning::footprint::{FitOutcome, HouseDesign, place_footprint, refit};
use crate::planning::fsr::{FsrRule, fsr_target_area, scale_to_area};
use crate::planning::orientation::{
    Rotation, RotationDecision, apply_rotation, frontage_midpoint, resolve_orientation,
};
use crate::planning::setback::{Setbacks, inset_polygon_per_side};
use crate::planning::side_labels::{
    SideValues, edge_labels, identity_side_values, map_values_to_sides,
};
use crate::projection::{GeoRing, LngLat, Projection, SiteProjection};
use crate::util::{LabelMode, PlannerConfig, assertions};

/// Everything the planner needs to know about a single parcel selection
#[derive(Clone, Debug)]
pub struct Site {
    /// Closed quadrilateral ring, edge 0 faces the street
    pub parcel: GeoRing,
    /// Authoritative street frontage line, if known
    pub frontage: Option<[LngLat; 2]>,
    pub setbacks: Setbacks,
    pub fsr: FsrRule,
    pub design: Option<HouseDesign>,
    /// Per-side length annotations, in no guaranteed order
    pub side_values: Option<[f64; 4]>,
    /// Rotation currently applied by the caller
    pub rotation: Rotation,
}

/// A derived buildable region
#[derive(Clone, Debug)]
pub struct Envelope {
    pub ring: GeoRing,
    pub polygon: SPolygon,
    pub area: f64,
}

/// The house footprint as it should be displayed
#[derive(Clone, Debug)]
pub struct PlacedHouse {
    pub design_id: String,
    pub title: String,
    pub ring: GeoRing,
    pub polygon: SPolygon,
    pub area: f64,
    pub bearing: f64,
    pub outcome: FitOutcome,
    /// Rotation after applying the orientation decision
    pub rotation: Rotation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeoLabel {
    pub edge: usize,
    pub position: LngLat,
    pub text: String,
}

/// All derived geometry for one [`Site`]
#[derive(Clone, Debug)]
pub struct SitePlan {
    /// Projection all metric polygons of this plan are expressed in
    pub projection: SiteProjection,
    pub parcel: SPolygon,
    pub lot_area: f64,
    /// `None` when the setbacks are too deep for the parcel
    pub setback_envelope: Option<Envelope>,
    /// Corners of the setback envelope that were approximated
    pub degenerate_corners: Vec<usize>,
    pub fsr_envelope: Option<Envelope>,
    pub house: Option<PlacedHouse>,
    pub frontage_midpoint: LngLat,
    pub orientation: Option<RotationDecision>,
    pub side_values: Option<SideValues>,
    pub edge_labels: Vec<GeoLabel>,
}

/// Stateless facade chaining setback inset, FSR scaling, footprint placement,
/// orientation and side labelling for a site.
#[derive(Clone, Debug, Default)]
pub struct SitePlanner {
    config: PlannerConfig,
}

impl SitePlanner {
    pub fn new(config: PlannerConfig) -> Self {
        SitePlanner { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Errors are reserved for invalid input (non-quadrilateral parcel, non-positive floor area, invalid design).
    /// Degenerate geometry results in a plan with the affected parts left empty.
    pub fn plan(&self, site: &Site) -> Result<SitePlan> {
        ensure!(
            site.parcel.n_points() == 5,
            "parcel must be a quadrilateral (5 points including the closing one), got {} points",
            site.parcel.n_points()
        );

        let projection = self.config.projection.anchored_at(site.parcel.vertex_mean());
        let parcel = {
            let metric = projection.to_metric(&site.parcel);
            SPolygon::try_new(metric[..4].to_vec()).context("parcel is degenerate")?
        };
        let lot_area = parcel.area();

        let frontage_mid = frontage_midpoint(
            &parcel,
            site.frontage
                .map(|[a, b]| [projection.project(a), projection.project(b)]),
        );

        let (setback_envelope, degenerate_corners) =
            match inset_polygon_per_side(&parcel, &site.setbacks, self.config.parallel_tolerance) {
                Some(inset) => (
                    Some(envelope(&projection, inset.polygon)),
                    inset.degenerate_corners,
                ),
                None => (None, vec![]),
            };

        let fsr_envelope = match &setback_envelope {
            Some(sb) => {
                let target = fsr_target_area(lot_area, site.fsr, sb.area)?;
                Some(envelope(&projection, scale_to_area(&sb.polygon, target)?))
            }
            None => None,
        };

        let (house, orientation) = match (&site.design, &fsr_envelope) {
            (Some(design), Some(fsr)) => match design.footprint_spec() {
                Some(spec) => {
                    let placed = place_footprint(
                        &spec,
                        fsr.polygon.centroid(),
                        &fsr.polygon,
                        &parcel,
                        &self.config.shrink,
                    )
                    .with_context(|| format!("failed to place design {}", design.id))?;

                    let decision = resolve_orientation(&placed.polygon, frontage_mid, site.rotation);
                    let rotation = decision.recommended(site.rotation);
                    //a flip is not a symmetry of every footprint shape, containment is re-evaluated
                    let (polygon, outcome) = match rotation {
                        Rotation::Deg0 => (placed.polygon, placed.outcome),
                        Rotation::Deg180 => refit(
                            apply_rotation(&placed.polygon, rotation),
                            placed.outcome,
                            &fsr.polygon,
                            &self.config.shrink,
                        ),
                    };
                    debug_assert!(assertions::outcome_consistent(&polygon, &fsr.polygon, outcome));

                    let house = PlacedHouse {
                        design_id: design.id.clone(),
                        title: design.title.clone(),
                        ring: projection.polygon_to_geographic(&polygon),
                        area: polygon.area(),
                        polygon,
                        bearing: placed.bearing,
                        outcome,
                        rotation,
                    };
                    (Some(house), Some(decision))
                }
                None => {
                    warn!(
                        "[PLAN] design {} has neither dimensions nor a parsable area",
                        design.id
                    );
                    (None, None)
                }
            },
            (Some(design), None) => {
                warn!(
                    "[PLAN] no buildable envelope, design {} cannot be placed",
                    design.id
                );
                (None, None)
            }
            (None, _) => (None, None),
        };

        let side_values = site.side_values.map(|values| match self.config.label_mode {
            LabelMode::RankMatched => map_values_to_sides(&parcel, values),
            LabelMode::Identity => identity_side_values(values),
        });

        let edge_labels = side_values
            .map(|sv| {
                edge_labels(&parcel, &sv)
                    .into_iter()
                    .map(|l| GeoLabel {
                        edge: l.edge,
                        position: projection.unproject(l.position),
                        text: l.text,
                    })
                    .collect()
            })
            .unwrap_or_default();

        info!(
            "[PLAN] lot: {:.1} m², setback envelope: {}, fsr envelope: {}, house: {}",
            lot_area,
            fmt_area(setback_envelope.as_ref().map(|e| e.area)),
            fmt_area(fsr_envelope.as_ref().map(|e| e.area)),
            house
                .as_ref()
                .map_or("none".to_string(), |h| format!("{:.1} m² ({:?})", h.area, h.outcome)),
        );

        Ok(SitePlan {
            projection,
            parcel,
            lot_area,
            setback_envelope,
            degenerate_corners,
            fsr_envelope,
            house,
            frontage_midpoint: projection.unproject(frontage_mid),
            orientation,
            side_values,
            edge_labels,
        })
    }
}

fn envelope(projection: &SiteProjection, polygon: SPolygon) -> Envelope {
    let ring = projection.polygon_to_geographic(&polygon);
    debug_assert!(assertions::ring_is_closed(&ring));
    Envelope {
        ring,
        area: polygon.area(),
        polygon,
    }
}

fn fmt_area(area: Option<f64>) -> String {
    area.map_or("none".to_string(), |a| format!("{a:.1} m²"))
}
