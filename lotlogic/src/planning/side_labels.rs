//! Assigns per-side length values ("s-values") to parcel edges.
//!
//! The values arrive without any identifier linking them to a specific edge. The default
//! mapping pairs them with edges by rank of magnitude, which is a heuristic: when two edges
//! have nearly equal lengths their labels may be swapped. Upstream data tagging each value with
//! its edge index would make this exact.

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Point, SPolygon};

/// One value per parcel edge: `s1` belongs to edge 0, `s2` to edge 1, ...
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SideValues {
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
    pub s4: f64,
}

impl SideValues {
    pub fn as_array(&self) -> [f64; 4] {
        [self.s1, self.s2, self.s3, self.s4]
    }

    pub fn for_edge(&self, i: usize) -> f64 {
        self.as_array()[i]
    }
}

impl From<[f64; 4]> for SideValues {
    fn from([s1, s2, s3, s4]: [f64; 4]) -> Self {
        SideValues { s1, s2, s3, s4 }
    }
}

/// Pairs the i-th shortest edge of `parcel` with the i-th smallest value.
/// Ties keep their original order, both for edges and for values.
pub fn map_values_to_sides(parcel: &SPolygon, values: [f64; 4]) -> SideValues {
    assert_eq!(
        parcel.n_vertices(),
        4,
        "side values can only be mapped onto a quadrilateral"
    );
    let lengths = parcel.edge_lengths();

    let edges_by_length = (0..4).sorted_by_key(|&i| OrderedFloat(lengths[i]));
    let sorted_values = values.into_iter().sorted_by_key(|&v| OrderedFloat(v));

    let mut mapped = [0.0; 4];
    for (edge, value) in edges_by_length.zip(sorted_values) {
        mapped[edge] = value;
    }
    SideValues::from(mapped)
}

/// `s1` to edge 0, `s2` to edge 1, ...
pub fn identity_side_values(values: [f64; 4]) -> SideValues {
    SideValues::from(values)
}

/// Text marker for a parcel edge
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeLabel {
    pub edge: usize,
    /// Midpoint of the edge
    pub position: Point,
    pub value: f64,
    pub text: String,
}

pub fn edge_labels(parcel: &SPolygon, values: &SideValues) -> Vec<EdgeLabel> {
    parcel
        .edge_iter()
        .take(4)
        .enumerate()
        .map(|(i, edge)| {
            let value = values.for_edge(i);
            EdgeLabel {
                edge: i,
                position: edge.centroid(),
                value,
                text: format!("{value:.2} m"),
            }
        })
        .collect()
}
