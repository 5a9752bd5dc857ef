use anyhow::{Result, ensure};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Shape, Transformable, TransformableFrom};
use crate::geometry::primitives::{Point, Rect, SPolygon};
use crate::planning::fsr::scale_to_area;
use crate::util::{ShrinkConfig, assertions};

/// Real-world size of a house design
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FootprintSpec {
    /// Width (along the dominant parcel edge) and depth, in metres
    Dimensions { width: f64, depth: f64 },
    /// Only the floor area is known (m²)
    Area(f64),
}

/// A design from the house catalogue
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct HouseDesign {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub depth: Option<f64>,
    /// Declared floor area, as found in the catalogue (e.g. `"182.5 m²"`)
    #[serde(default)]
    pub area: Option<String>,
}

impl HouseDesign {
    /// Explicit dimensions take precedence over the declared area.
    pub fn footprint_spec(&self) -> Option<FootprintSpec> {
        match (self.width, self.depth) {
            (Some(width), Some(depth))
                if width > 0.0 && depth > 0.0 && width.is_finite() && depth.is_finite() =>
            {
                Some(FootprintSpec::Dimensions { width, depth })
            }
            _ => self
                .area
                .as_deref()
                .and_then(parse_area)
                .filter(|a| *a > 0.0 && a.is_finite())
                .map(FootprintSpec::Area),
        }
    }
}

/// Parses an area string by discarding everything except ASCII digits and `.`.
///
/// Note that a unit written as `m2` contributes its digit: `"200m2"` parses as `2002`.
pub fn parse_area(s: &str) -> Option<f64> {
    let digits = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect::<String>();
    digits.parse().ok()
}

/// Whether a placed footprint ended up inside its envelope
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FitOutcome {
    /// Fitted at full size
    Fits,
    /// Fitted after `attempts` shrink steps
    ShrunkToFit { attempts: usize },
    /// Still not contained after `attempts` shrink steps; the footprint may exceed the envelope
    GaveUp { attempts: usize },
}

impl FitOutcome {
    pub fn is_contained(&self) -> bool {
        !matches!(self, FitOutcome::GaveUp { .. })
    }

    /// Number of shrink steps applied
    pub fn attempts(&self) -> usize {
        match *self {
            FitOutcome::Fits => 0,
            FitOutcome::ShrunkToFit { attempts } | FitOutcome::GaveUp { attempts } => attempts,
        }
    }
}

/// A house footprint positioned on a parcel (metric space)
#[derive(Clone, Debug)]
pub struct PlacedFootprint {
    /// Vertex 0→1 is the front of the house, vertex 2→3 its rear
    pub polygon: SPolygon,
    /// Compass bearing (degrees) of the dominant parcel edge the footprint is aligned with
    pub bearing: f64,
    /// Index of the dominant parcel edge
    pub dominant_edge: usize,
    /// Cumulative linear scale applied by the containment correction
    pub scale: f64,
    pub outcome: FitOutcome,
}

/// Places a house footprint centered at `anchor`, aligned with the longest edge of `parcel`,
/// and shrinks it until it lies inside `envelope` (see [`shrink_to_fit`]).
///
/// When only an area is known, the footprint is `envelope` scaled to that area.
///
/// All sizing happens in the metric plane of the site projection (anchored at the parcel's vertex mean),
/// which agrees with metres-per-degree sampled at the envelope centroid to well below a millimetre on parcel-sized extents.
pub fn place_footprint(
    spec: &FootprintSpec,
    anchor: Point,
    envelope: &SPolygon,
    parcel: &SPolygon,
    config: &ShrinkConfig,
) -> Result<PlacedFootprint> {
    ensure!(
        config.factor > 0.0 && config.factor < 1.0,
        "shrink factor must lie in (0, 1), got {}",
        config.factor
    );

    let (dominant_edge, edge) = parcel.longest_edge();
    let bearing = edge.bearing();

    let candidate = match *spec {
        FootprintSpec::Dimensions { width, depth } => {
            ensure!(
                (width * depth).is_finite() && width > 0.0 && depth > 0.0,
                "footprint dimensions must be positive and finite, got {width} x {depth}"
            );
            let rect = Rect::centered(width, depth)?;
            let t = Transformation::empty().rotate_translate(edge.angle(), anchor.into());
            SPolygon::from(rect).transform_clone(&t)
        }
        FootprintSpec::Area(area) => scale_to_area(envelope, area)?,
    };
    ensure!(
        candidate.area().is_finite() && candidate.centroid().is_finite(),
        "footprint candidate is degenerate (area {}, centroid {:?})",
        candidate.area(),
        candidate.centroid()
    );

    debug!(
        "[FP] candidate footprint of {:.2} m², aligned with edge {dominant_edge} (bearing {bearing:.1}°)",
        candidate.area()
    );

    let (polygon, scale, outcome) = shrink_to_fit(candidate, envelope, config);
    debug_assert!(assertions::outcome_consistent(&polygon, envelope, outcome));

    Ok(PlacedFootprint {
        polygon,
        bearing,
        dominant_edge,
        scale,
        outcome,
    })
}

/// Re-checks a footprint that was moved after placement (e.g. flipped by the orientation resolver)
/// and shrinks it further when it no longer lies inside `envelope`.
///
/// The returned outcome counts the shrink steps of `prior` and of this pass together.
pub fn refit(
    footprint: SPolygon,
    prior: FitOutcome,
    envelope: &SPolygon,
    config: &ShrinkConfig,
) -> (SPolygon, FitOutcome) {
    let (polygon, _, outcome) = shrink_to_fit(footprint, envelope, config);
    let attempts = prior.attempts() + outcome.attempts();
    let outcome = match (outcome.is_contained(), attempts) {
        (false, _) => FitOutcome::GaveUp { attempts },
        (true, 0) => FitOutcome::Fits,
        (true, _) => FitOutcome::ShrunkToFit { attempts },
    };
    debug_assert!(assertions::outcome_consistent(&polygon, envelope, outcome));
    (polygon, outcome)
}

/// Repeatedly shrinks `candidate` about its own centroid by `config.factor` until `envelope` surrounds it,
/// for at most `config.max_attempts` steps. Returns the last attempt, its cumulative scale and the outcome.
pub fn shrink_to_fit(
    candidate: SPolygon,
    envelope: &SPolygon,
    config: &ShrinkConfig,
) -> (SPolygon, f64, FitOutcome) {
    if envelope.surrounds(&candidate) {
        return (candidate, 1.0, FitOutcome::Fits);
    }

    let pivot = candidate.centroid();
    let mut shrunk = candidate.clone();
    let mut scale = 1.0;

    for attempt in 1..=config.max_attempts {
        scale *= config.factor;
        shrunk.transform_from(&candidate, &Transformation::scaling_about(scale, pivot));
        if envelope.surrounds(&shrunk) {
            debug!("[FP] footprint fits after {attempt} shrink steps (scale {scale:.4})");
            return (shrunk, scale, FitOutcome::ShrunkToFit { attempts: attempt });
        }
    }

    warn!(
        "[FP] footprint does not fit its envelope after {} shrink steps (scale {scale:.4})",
        config.max_attempts
    );
    (
        shrunk,
        scale,
        FitOutcome::GaveUp {
            attempts: config.max_attempts,
        },
    )
}
