use anyhow::{Result, ensure};
use itertools::Itertools;

/// Geographic coordinate in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        LngLat { lng, lat }
    }

    pub fn is_valid(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite() && self.lat.abs() <= 90.0
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        LngLat { lng, lat }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(p: LngLat) -> Self {
        [p.lng, p.lat]
    }
}

/// Closed ring of geographic coordinates: the first and last point are identical.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoRing {
    points: Vec<LngLat>,
}

impl GeoRing {
    pub fn try_new(points: Vec<LngLat>) -> Result<Self> {
        ensure!(
            points.len() >= 4,
            "ring must contain at least 4 points (3 distinct + closing point), got {}",
            points.len()
        );
        ensure!(
            points.first() == points.last(),
            "ring is not closed: {:?} != {:?}",
            points.first(),
            points.last()
        );
        ensure!(
            points.iter().all(|p| p.is_valid()),
            "ring contains invalid coordinates: {points:?}"
        );
        Ok(GeoRing { points })
    }

    pub(crate) fn closed_unchecked(points: Vec<LngLat>) -> Self {
        debug_assert!(points.len() >= 4 && points.first() == points.last());
        GeoRing { points }
    }

    /// All points, including the closing one
    pub fn points(&self) -> &[LngLat] {
        &self.points
    }

    /// The distinct vertices, without the closing point
    pub fn vertices(&self) -> &[LngLat] {
        &self.points[..self.points.len() - 1]
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// Arithmetic mean of the distinct vertices, used to anchor a local projection
    pub fn vertex_mean(&self) -> LngLat {
        let n = self.vertices().len() as f64;
        let (lng, lat) = self
            .vertices()
            .iter()
            .fold((0.0, 0.0), |(lng, lat), p| (lng + p.lng, lat + p.lat));
        LngLat::new(lng / n, lat / n)
    }

    /// Coordinates as `[lng, lat]` pairs, GeoJSON style
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| (*p).into()).collect_vec()
    }
}
