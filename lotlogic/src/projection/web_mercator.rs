use std::f64::consts::FRAC_PI_4;

use crate::geometry::primitives::Point;
use crate::projection::{LngLat, Projection};

const EARTH_RADIUS: f64 = 6_378_137.0;
/// Latitudes beyond this are clamped (EPSG:3857 bounds)
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Spherical (Web) Mercator projection.
///
/// Raw EPSG:3857 units overstate ground distances by `1 / cos(lat)`.
/// [`WebMercator::true_scale_at`] compensates for this at a chosen latitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WebMercator {
    scale: f64,
}

impl WebMercator {
    /// Plain EPSG:3857
    pub fn global() -> Self {
        WebMercator { scale: 1.0 }
    }

    /// Mercator plane whose units are ground metres at latitude `lat` (degrees)
    pub fn true_scale_at(lat: f64) -> Self {
        WebMercator {
            scale: lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians().cos(),
        }
    }
}

impl Projection for WebMercator {
    fn project(&self, p: LngLat) -> Point {
        let lat = p.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = EARTH_RADIUS * p.lng.to_radians();
        let y = EARTH_RADIUS * (FRAC_PI_4 + lat / 2.0).tan().ln();
        Point(x * self.scale, y * self.scale)
    }

    fn unproject(&self, Point(x, y): Point) -> LngLat {
        let (x, y) = (x / self.scale, y / self.scale);
        let lng = (x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - 2.0 * FRAC_PI_4).to_degrees();
        LngLat::new(lng, lat)
    }
}
