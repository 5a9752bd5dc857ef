//! All distance, offset and area arithmetic happens in a Euclidean plane measured in metres.
//! Geographic rings are converted into that plane through a [`Projection`] and back again;
//! no function in this library mixes the two coordinate spaces.

mod geo_ring;
#[cfg(feature = "geo-interop")]
mod geo_interop;
mod local_tangent;
mod web_mercator;

use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Point, SPolygon};

#[doc(inline)]
pub use geo_ring::{GeoRing, LngLat};
#[doc(inline)]
pub use local_tangent::{LocalTangentPlane, meters_per_degree};
#[doc(inline)]
pub use web_mercator::WebMercator;

/// Invertible mapping between geographic coordinates and a planar metric space.
pub trait Projection {
    fn project(&self, p: LngLat) -> Point;

    fn unproject(&self, p: Point) -> LngLat;

    /// Projects a closed geographic ring, preserving point order and closure.
    fn to_metric(&self, ring: &GeoRing) -> Vec<Point> {
        ring.points().iter().map(|p| self.project(*p)).collect()
    }

    /// Inverse of [`Projection::to_metric`]: `ring` must be closed and contain at least 4 points.
    fn to_geographic(&self, ring: &[Point]) -> GeoRing {
        assert!(
            ring.len() >= 4 && ring.first() == ring.last(),
            "metric ring must be closed and contain at least 4 points: {ring:?}"
        );
        GeoRing::closed_unchecked(ring.iter().map(|p| self.unproject(*p)).collect())
    }

    /// Converts an (open) polygon into a closed geographic ring.
    fn polygon_to_geographic(&self, polygon: &SPolygon) -> GeoRing {
        let mut points = polygon
            .vertices
            .iter()
            .map(|p| self.unproject(*p))
            .collect::<Vec<_>>();
        points.push(points[0]);
        GeoRing::closed_unchecked(points)
    }
}

/// Which planar projection to use for a site
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Equirectangular plane tangent at the anchor, scaled with the WGS84 ellipsoid radii
    #[default]
    LocalTangent,
    /// Spherical Web Mercator, rescaled to true metres at the anchor's latitude
    WebMercator,
}

impl ProjectionKind {
    pub fn anchored_at(&self, anchor: LngLat) -> SiteProjection {
        match self {
            ProjectionKind::LocalTangent => {
                SiteProjection::LocalTangent(LocalTangentPlane::new(anchor))
            }
            ProjectionKind::WebMercator => {
                SiteProjection::WebMercator(WebMercator::true_scale_at(anchor.lat))
            }
        }
    }
}

/// A [`Projection`] anchored at a specific site
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SiteProjection {
    LocalTangent(LocalTangentPlane),
    WebMercator(WebMercator),
}

impl Projection for SiteProjection {
    fn project(&self, p: LngLat) -> Point {
        match self {
            SiteProjection::LocalTangent(proj) => proj.project(p),
            SiteProjection::WebMercator(proj) => proj.project(p),
        }
    }

    fn unproject(&self, p: Point) -> LngLat {
        match self {
            SiteProjection::LocalTangent(proj) => proj.unproject(p),
            SiteProjection::WebMercator(proj) => proj.unproject(p),
        }
    }
}
