use crate::geometry::Transformation;
use crate::geometry::primitives::{Point, Rect};

/// Intersection test between `Self` and `T`, boundaries included.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Euclidean distance (metres) between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Zero when the two touch or overlap
    fn distance_to(&self, other: &T) -> f64;

    fn sq_distance_to(&self, other: &T) -> f64;
}

/// Geometry that can be moved, rotated and scaled in the metric plane.
pub trait Transformable: Clone {
    fn transform(&mut self, t: &Transformation) -> &mut Self;

    /// Transformed copy, `self` is left as is
    fn transform_clone(&self, t: &Transformation) -> Self {
        let mut moved = self.clone();
        moved.transform(t);
        moved
    }
}

/// Overwrites `self` with `reference` under `t`, reusing the existing vertex buffer.
///
/// The shrink loop derives every attempt from the same unshrunk footprint this way.
pub trait TransformableFrom: Transformable {
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self;
}

/// Measurements shared by parcels, envelopes and footprints.
pub trait Shape {
    fn centroid(&self) -> Point;

    /// Area in m² (always positive, independent of winding)
    fn area(&self) -> f64;

    fn bbox(&self) -> Rect;
}
