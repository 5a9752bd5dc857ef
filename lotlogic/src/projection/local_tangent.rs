use crate::geometry::primitives::Point;
use crate::projection::{LngLat, Projection};

// WGS84 ellipsoid
const WGS84_A: f64 = 6_378_137.0;
const WGS84_E2: f64 = 0.006_694_379_990_14;

/// Metres per degree of longitude and latitude at latitude `lat` (degrees) on the WGS84 ellipsoid.
pub fn meters_per_degree(lat: f64) -> (f64, f64) {
    let (sin_lat, cos_lat) = lat.to_radians().sin_cos();
    let w = 1.0 - WGS84_E2 * sin_lat * sin_lat;

    //radius of curvature in the prime vertical
    let n = WGS84_A / w.sqrt();
    //radius of curvature in the meridian
    let m = WGS84_A * (1.0 - WGS84_E2) / w.powf(1.5);

    (n * cos_lat.abs() * std::f64::consts::PI / 180.0, m * std::f64::consts::PI / 180.0)
}

/// Equirectangular plane tangent to the ellipsoid at `origin`.
///
/// Distances are true metres at the origin and accurate to well below a millimetre
/// across anything the size of a residential parcel. The inverse is exact up to floating point rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalTangentPlane {
    origin: LngLat,
    m_per_deg_lng: f64,
    m_per_deg_lat: f64,
}

impl LocalTangentPlane {
    pub fn new(origin: LngLat) -> Self {
        let (m_per_deg_lng, m_per_deg_lat) = meters_per_degree(origin.lat);
        LocalTangentPlane {
            origin,
            m_per_deg_lng,
            m_per_deg_lat,
        }
    }

    pub fn origin(&self) -> LngLat {
        self.origin
    }
}

impl Projection for LocalTangentPlane {
    fn project(&self, p: LngLat) -> Point {
        Point(
            (p.lng - self.origin.lng) * self.m_per_deg_lng,
            (p.lat - self.origin.lat) * self.m_per_deg_lat,
        )
    }

    fn unproject(&self, Point(x, y): Point) -> LngLat {
        LngLat::new(
            self.origin.lng + x / self.m_per_deg_lng,
            self.origin.lat + y / self.m_per_deg_lat,
        )
    }
}
