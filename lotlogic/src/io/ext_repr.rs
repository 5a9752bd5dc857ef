use serde::{Deserialize, Serialize};

use crate::planning::footprint::{FitOutcome, HouseDesign};
use crate::planning::fsr::FsrRule;
use crate::planning::setback::Setbacks;
use crate::planning::side_labels::SideValues;

/// GeoJSON `Polygon` geometry. Only the first (outer) ring is used by the planner.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename = "Polygon")]
pub struct ExtPolygon {
    /// Rings of `[longitude, latitude]` positions, each one closed
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// GeoJSON `LineString` geometry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename = "LineString")]
pub struct ExtLineString {
    pub coordinates: Vec<[f64; 2]>,
}

/// External representation of a [`Site`](crate::planning::Site).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSite {
    /// Identifier of the parcel
    pub id: String,
    /// Parcel boundary, edge 0 (first to second position) faces the street
    pub parcel: ExtPolygon,
    /// Street frontage line with exactly 2 positions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontage: Option<ExtLineString>,
    pub setbacks: Setbacks,
    /// Either `{"ratio": r}` or `{"target_area": a}`
    pub fsr: FsrRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<HouseDesign>,
    /// Per-side lengths, in no guaranteed order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_values: Option<[f64; 4]>,
    /// Rotation (degrees) currently applied to the house, 0 or 180
    #[serde(default)]
    pub rotation: f64,
}

/// A point marker with display text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLabel {
    pub position: [f64; 2],
    pub text: String,
}

/// External representation of an [`Envelope`](crate::planning::Envelope)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtEnvelope {
    pub geometry: ExtPolygon,
    /// Area in m²
    pub area: f64,
}

/// External representation of a [`PlacedHouse`](crate::planning::PlacedHouse)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtHouse {
    pub design_id: String,
    pub title: String,
    pub geometry: ExtPolygon,
    /// Area in m²
    pub area: f64,
    /// Compass bearing (degrees) of the parcel edge the house is aligned with
    pub bearing: f64,
    pub fit: FitOutcome,
    /// Rotation (degrees) after the orientation check, 0 or 180
    pub rotation: f64,
}

/// External representation of a [`SitePlan`](crate::planning::SitePlan)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSitePlan {
    pub id: String,
    /// Area of the lot in m²
    pub lot_area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setback_envelope: Option<ExtEnvelope>,
    /// Corners of the setback envelope that had to be approximated
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degenerate_corners: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fsr_envelope: Option<ExtEnvelope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<ExtHouse>,
    pub frontage_midpoint: [f64; 2],
    /// Whether the orientation check recommended a 180° flip
    pub should_flip: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_values: Option<SideValues>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edge_labels: Vec<ExtLabel>,
}
