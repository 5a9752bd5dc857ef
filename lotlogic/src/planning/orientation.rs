use std::f64::consts::PI;

use log::debug;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{DistanceTo, Shape, Transformable};
use crate::geometry::primitives::{Point, SPolygon};
use crate::util::FPA;

/// Rotation applied on top of a placed footprint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg180,
}

impl Rotation {
    pub fn degrees(&self) -> f64 {
        match self {
            Rotation::Deg0 => 0.0,
            Rotation::Deg180 => 180.0,
        }
    }

    /// Only multiples of 180° are representable
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        match degrees.rem_euclid(360.0) {
            d if d == 0.0 => Some(Rotation::Deg0),
            d if d == 180.0 => Some(Rotation::Deg180),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg0,
        }
    }
}

/// Recommendation of the orientation resolver
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationDecision {
    pub should_flip: bool,
    /// Distance (m) from the frontage midpoint to the midpoint of the footprint's front edge (vertex 0→1)
    pub front_distance: f64,
    /// Distance (m) from the frontage midpoint to the midpoint of the footprint's rear edge (vertex 2→3)
    pub rear_distance: f64,
}

impl RotationDecision {
    /// Rotation the caller should end up with, given its current one
    pub fn recommended(&self, current: Rotation) -> Rotation {
        match self.should_flip {
            true => current.flipped(),
            false => current,
        }
    }
}

/// Decides whether a placed footprint faces away from the street.
///
/// The front edge (vertex 0→1) should be the one nearest to the frontage.
/// A flip is only recommended when `current` is [`Rotation::Deg0`]; once a rotation has been applied,
/// manually or by an earlier decision, the resolver leaves it alone.
pub fn resolve_orientation(
    rectangle: &SPolygon,
    frontage_midpoint: Point,
    current: Rotation,
) -> RotationDecision {
    assert!(
        rectangle.n_vertices() >= 4,
        "footprint must have at least 4 vertices"
    );
    let front_mid = rectangle.vertex(0).midpoint(&rectangle.vertex(1));
    let rear_mid = rectangle.vertex(2).midpoint(&rectangle.vertex(3));

    let front_distance = front_mid.distance_to(&frontage_midpoint);
    let rear_distance = rear_mid.distance_to(&frontage_midpoint);

    //equidistant edges (within tolerance) never trigger a flip
    let should_flip = current == Rotation::Deg0 && FPA(front_distance) > FPA(rear_distance);
    debug!(
        "[OR] front: {front_distance:.2} m, rear: {rear_distance:.2} m, current: {}°, flip: {should_flip}",
        current.degrees()
    );

    RotationDecision {
        should_flip,
        front_distance,
        rear_distance,
    }
}

/// Midpoint of the street frontage: the midpoint of `frontage` if supplied,
/// otherwise the midpoint of the longest edge of the parcel.
pub fn frontage_midpoint(parcel: &SPolygon, frontage: Option<[Point; 2]>) -> Point {
    match frontage {
        Some([a, b]) => a.midpoint(&b),
        None => parcel.longest_edge().1.centroid(),
    }
}

/// Applies `rotation` to a footprint about its centroid
pub fn apply_rotation(footprint: &SPolygon, rotation: Rotation) -> SPolygon {
    match rotation {
        Rotation::Deg0 => footprint.clone(),
        Rotation::Deg180 => {
            footprint.transform_clone(&Transformation::rotation_about(PI, footprint.centroid()))
        }
    }
}
