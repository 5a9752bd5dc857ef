use float_cmp::approx_eq;
use log::error;

use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape};
use crate::geometry::primitives::{Point, SPolygon};
use crate::planning::footprint::FitOutcome;
use crate::projection::GeoRing;

//Various checks to verify the correctness of derived geometry
//Used in debug_assert!() blocks

pub fn ring_is_closed(ring: &GeoRing) -> bool {
    ring.n_points() >= 4 && ring.points().first() == ring.points().last()
}

/// Every vertex of `inset` lies inside `parcel` or on its boundary
pub fn inset_within_parcel(parcel: &SPolygon, inset: &SPolygon) -> bool {
    let on_boundary = |p: &Point| parcel.edge_iter().any(|e| e.distance_to(p) < 1e-6);
    for (i, p) in inset.vertices.iter().enumerate() {
        if !parcel.collides_with(p) && !on_boundary(p) {
            error!("inset vertex {i} {p:?} lies outside of the parcel");
            return false;
        }
    }
    true
}

/// Scaling to `target_area` hit the target within a relative tolerance
pub fn area_matches(polygon: &SPolygon, target_area: f64) -> bool {
    let area = polygon.area();
    match approx_eq!(f64, area, target_area, epsilon = target_area * 1e-6) {
        true => true,
        false => {
            error!("polygon area {area} does not match target {target_area}");
            false
        }
    }
}

/// A contained outcome implies the envelope actually surrounds the footprint
pub fn outcome_consistent(footprint: &SPolygon, envelope: &SPolygon, outcome: FitOutcome) -> bool {
    !outcome.is_contained() || envelope.surrounds(footprint)
}
