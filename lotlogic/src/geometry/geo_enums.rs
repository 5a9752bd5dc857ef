#[derive(Debug, PartialEq, Clone, Copy)]
/// Possible relations between two geometric entities A and B.
/// A is `GeoRelation` to B
pub enum GeoRelation {
    /// A ∩ B ≠ ∅ and neither A ⊆ B nor B ⊆ A
    Intersecting,
    /// A ⊆ B
    Enclosed,
    /// B ⊆ A
    Surrounding,
    /// A ∩ B = ∅
    Disjoint,
}

/// Orientation of the vertices of a polygon
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Winding {
    /// Positive signed area
    CounterClockwise,
    /// Negative signed area
    Clockwise,
}

impl Winding {
    /// Winding implied by a signed area (shoelace formula), `None` if the area is zero.
    pub fn from_signed_area(signed_area: f64) -> Option<Self> {
        match signed_area {
            a if a > 0.0 => Some(Winding::CounterClockwise),
            a if a < 0.0 => Some(Winding::Clockwise),
            _ => None,
        }
    }
}
