use anyhow::{Result, ensure};
use geo_types::{Coord, LineString, Polygon};

use crate::projection::{GeoRing, LngLat};

impl From<&GeoRing> for Polygon<f64> {
    fn from(ring: &GeoRing) -> Self {
        let exterior = ring
            .points()
            .iter()
            .map(|p| Coord { x: p.lng, y: p.lat })
            .collect::<Vec<_>>();
        Polygon::new(LineString::new(exterior), vec![])
    }
}

impl TryFrom<&Polygon<f64>> for GeoRing {
    type Error = anyhow::Error;

    /// Only the exterior ring is used, interiors (holes) are rejected.
    fn try_from(polygon: &Polygon<f64>) -> Result<Self> {
        ensure!(
            polygon.interiors().is_empty(),
            "parcels with holes are not supported"
        );
        GeoRing::try_new(
            polygon
                .exterior()
                .coords()
                .map(|c| LngLat::new(c.x, c.y))
                .collect(),
        )
    }
}
