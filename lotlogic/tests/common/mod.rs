#![allow(dead_code)]

use lotlogic::geometry::primitives::{Point, SPolygon};
use lotlogic::planning::footprint::HouseDesign;
use lotlogic::planning::fsr::FsrRule;
use lotlogic::planning::orientation::Rotation;
use lotlogic::planning::setback::Setbacks;
use lotlogic::planning::Site;
use lotlogic::projection::{GeoRing, LngLat, LocalTangentPlane, Projection};

/// Somewhere in Sydney
pub const ORIGIN: LngLat = LngLat {
    lng: 151.2093,
    lat: -33.8688,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Axis-aligned square of `side` metres centered on the origin, counterclockwise from the bottom left
pub fn square(side: f64) -> SPolygon {
    let h = side / 2.0;
    SPolygon::try_new(vec![
        Point(-h, -h),
        Point(h, -h),
        Point(h, h),
        Point(-h, h),
    ])
    .unwrap()
}

/// Closed geographic ring whose local tangent projection at [`ORIGIN`] yields `points`
pub fn geo_ring(points: &[Point]) -> GeoRing {
    let plane = LocalTangentPlane::new(ORIGIN);
    let mut ring = points.iter().map(|p| plane.unproject(*p)).collect::<Vec<_>>();
    ring.push(ring[0]);
    GeoRing::try_new(ring).unwrap()
}

pub fn geo_point(p: Point) -> LngLat {
    LocalTangentPlane::new(ORIGIN).unproject(p)
}

pub fn design(id: &str, width: f64, depth: f64) -> HouseDesign {
    HouseDesign {
        id: id.to_string(),
        title: format!("The {id}"),
        width: Some(width),
        depth: Some(depth),
        area: None,
    }
}

/// 20 m square parcel with 3 m setbacks all around and an FSR of 0.6
pub fn square_site(design: Option<HouseDesign>) -> Site {
    Site {
        parcel: geo_ring(&square(20.0).vertices),
        frontage: None,
        setbacks: Setbacks::uniform(3.0),
        fsr: FsrRule::Ratio(0.6),
        design,
        side_values: None,
        rotation: Rotation::Deg0,
    }
}
