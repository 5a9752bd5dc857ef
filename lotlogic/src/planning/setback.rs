use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::geometry::geo_enums::Winding;
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Edge, SPolygon};
use crate::projection::{GeoRing, Projection};

/// Minimum clearances (metres) between the parcel boundary and any building.
///
/// Edge 0 of a parcel is its front, edge 2 its rear; edges 1 and 3 share the side setback.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Setbacks {
    pub front: f64,
    pub side: f64,
    pub rear: f64,
}

impl Setbacks {
    pub fn uniform(d: f64) -> Self {
        Setbacks {
            front: d,
            side: d,
            rear: d,
        }
    }

    /// Setback distance assigned to edge `i` of a quadrilateral parcel
    pub fn for_edge(&self, i: usize) -> f64 {
        match i % 4 {
            0 => self.front,
            2 => self.rear,
            _ => self.side,
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.front, self.side, self.rear]
            .iter()
            .all(|d| d.is_finite() && *d >= 0.0)
    }
}

/// Result of a per-side inset in the metric plane
#[derive(Clone, Debug)]
pub struct SetbackInset {
    /// The inner polygon, edge `i` is parallel to edge `i` of the parcel
    pub polygon: SPolygon,
    /// Vertices for which the adjacent offset lines were (nearly) parallel.
    /// Their position is approximated and might not be geometrically exact.
    pub degenerate_corners: Vec<usize>,
}

/// Unit normal of `edge` pointing towards the interior of a polygon with the given winding
pub fn inward_normal(edge: &Edge, winding: Winding) -> (f64, f64) {
    let (nx, ny) = edge.left_normal();
    match winding {
        Winding::CounterClockwise => (nx, ny),
        Winding::Clockwise => (-nx, -ny),
    }
}

/// Offsets each edge of a quadrilateral parcel inwards by its own setback distance and
/// intersects consecutive offset lines to obtain the corners of the inner polygon.
///
/// Returns `None` when the parcel is not a quadrilateral, the setbacks are invalid,
/// or the setbacks are too deep for the parcel (the inset collapses, flips or self-intersects).
pub fn inset_polygon_per_side(
    parcel: &SPolygon,
    setbacks: &Setbacks,
    parallel_tolerance: f64,
) -> Option<SetbackInset> {
    if parcel.n_vertices() != 4 {
        warn!(
            "[SB] per-side inset requires a quadrilateral, got {} vertices",
            parcel.n_vertices()
        );
        return None;
    }
    if !setbacks.is_valid() {
        warn!("[SB] invalid setbacks: {setbacks:?}");
        return None;
    }

    let winding = parcel.winding();

    let offset_edges = parcel
        .edge_iter()
        .enumerate()
        .map(|(i, edge)| {
            let (nx, ny) = inward_normal(&edge, winding);
            let d = setbacks.for_edge(i);
            edge.shifted((nx * d, ny * d))
        })
        .collect_vec();

    //vertex i lies on the corner between offset edge i-1 and offset edge i
    let mut degenerate_corners = vec![];
    let vertices = (0..4)
        .map(|i| {
            let prev = &offset_edges[(i + 3) % 4];
            let next = &offset_edges[i];
            match prev.line_intersection(next, parallel_tolerance) {
                Some(corner) => corner,
                None => {
                    warn!(
                        "[SB] offset edges {} and {i} are parallel, approximating corner {i}",
                        (i + 3) % 4
                    );
                    degenerate_corners.push(i);
                    next.start
                }
            }
        })
        .collect_vec();

    let polygon = match SPolygon::try_new(vertices) {
        Ok(polygon) => polygon,
        Err(e) => {
            warn!("[SB] inset collapsed: {e}");
            return None;
        }
    };

    if polygon.winding() != winding || has_reversed_edges(parcel, &polygon) {
        warn!("[SB] setbacks {setbacks:?} exceed the parcel dimensions, inset is inverted");
        return None;
    }
    if self_intersects(&polygon) {
        warn!("[SB] setbacks {setbacks:?} produce a self-intersecting inset");
        return None;
    }

    debug!(
        "[SB] inset parcel of {:.2} m² to {:.2} m²",
        parcel.area(),
        polygon.area()
    );

    Some(SetbackInset {
        polygon,
        degenerate_corners,
    })
}

/// Per-side inset of a geographic parcel ring.
///
/// Returns `None` when the ring has fewer than 5 points or the inset is degenerate (see [`inset_polygon_per_side`]).
pub fn inset_per_side(
    ring: &GeoRing,
    setbacks: &Setbacks,
    projection: &impl Projection,
    parallel_tolerance: f64,
) -> Option<GeoRing> {
    if ring.n_points() < 5 {
        return None;
    }
    let metric = projection.to_metric(ring);
    let parcel = SPolygon::try_new(metric[..metric.len() - 1].to_vec()).ok()?;
    let inset = inset_polygon_per_side(&parcel, setbacks, parallel_tolerance)?;

    Some(projection.polygon_to_geographic(&inset.polygon))
}

fn has_reversed_edges(parcel: &SPolygon, inset: &SPolygon) -> bool {
    //an over-deep inset can keep its winding while every edge points backwards
    parcel.edge_iter().zip(inset.edge_iter()).any(|(pe, ie)| {
        let ((px, py), (ix, iy)) = (pe.direction(), ie.direction());
        px * ix + py * iy <= 0.0
    })
}

fn self_intersects(quad: &SPolygon) -> bool {
    //in a quadrilateral, only opposite edges can cross
    quad.edge(0).collides_with(&quad.edge(2)) || quad.edge(1).collides_with(&quad.edge(3))
}

