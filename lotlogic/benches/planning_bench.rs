use std::f64::consts::PI;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

use lotlogic::geometry::Transformation;
use lotlogic::geometry::geo_traits::Transformable;
use lotlogic::geometry::primitives::{Rect, SPolygon};
use lotlogic::planning::footprint::{FitOutcome, HouseDesign};
use lotlogic::planning::fsr::FsrRule;
use lotlogic::planning::orientation::Rotation;
use lotlogic::planning::setback::{Setbacks, inset_polygon_per_side};
use lotlogic::planning::{Site, SitePlanner};
use lotlogic::projection::{LngLat, LocalTangentPlane, Projection};

criterion_main!(benches);
criterion_group!(benches, inset_bench, plan_bench);

const N_PARCELS: usize = 100;
const ORIGIN: LngLat = LngLat {
    lng: 151.2093,
    lat: -33.8688,
};

/// Randomly sized and rotated rectangular parcels
fn random_parcels(rng: &mut SmallRng) -> Vec<SPolygon> {
    (0..N_PARCELS)
        .map(|_| {
            let rect = Rect::centered(rng.random_range(12.0..40.0), rng.random_range(20.0..60.0))
                .unwrap();
            let t = Transformation::from_rotation(rng.random_range(-PI..PI));
            SPolygon::from(rect).transform_clone(&t)
        })
        .collect()
}

fn inset_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let parcels = random_parcels(&mut rng);
    let setbacks = Setbacks {
        front: 4.5,
        side: 0.9,
        rear: 3.0,
    };

    c.bench_function("inset_per_side", |b| {
        b.iter(|| {
            parcels
                .iter()
                .filter_map(|p| inset_polygon_per_side(p, &setbacks, 1e-9))
                .count()
        })
    });
}

/// Full planning pipeline, for designs that fit right away and designs that need to be shrunk
fn plan_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let plane = LocalTangentPlane::new(ORIGIN);
    let parcels = random_parcels(&mut rng);
    let planner = SitePlanner::default();

    let mut group = c.benchmark_group("plan");
    for (width, depth) in [(8.0, 10.0), (14.0, 22.0)] {
        let sites = parcels
            .iter()
            .map(|p| {
                let mut ring = p.vertices.iter().map(|v| plane.unproject(*v)).collect::<Vec<_>>();
                ring.push(ring[0]);
                Site {
                    parcel: lotlogic::projection::GeoRing::try_new(ring).unwrap(),
                    frontage: None,
                    setbacks: Setbacks::uniform(2.0),
                    fsr: FsrRule::Ratio(0.5),
                    design: Some(HouseDesign {
                        id: format!("{width}x{depth}"),
                        width: Some(width),
                        depth: Some(depth),
                        ..Default::default()
                    }),
                    side_values: None,
                    rotation: Rotation::Deg0,
                }
            })
            .collect::<Vec<_>>();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{depth}")),
            &sites,
            |b, sites| {
                b.iter(|| {
                    sites
                        .iter()
                        .filter_map(|s| planner.plan(s).ok())
                        .filter(|p| p.house.as_ref().is_some_and(|h| h.outcome == FitOutcome::Fits))
                        .count()
                })
            },
        );
    }
    group.finish();
}
