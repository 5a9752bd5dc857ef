mod common;

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use test_case::test_case;

    use lotlogic::geometry::geo_traits::{DistanceTo, Shape};
    use lotlogic::geometry::primitives::Point;
    use lotlogic::io::export::export_plan;
    use lotlogic::planning::footprint::{FitOutcome, HouseDesign};
    use lotlogic::planning::fsr::FsrRule;
    use lotlogic::planning::orientation::Rotation;
    use lotlogic::planning::setback::Setbacks;
    use lotlogic::planning::{Site, SitePlanner};
    use lotlogic::projection::{LngLat, Projection, ProjectionKind};
    use lotlogic::util::{LabelMode, PlannerConfig};

    use crate::common::{design, geo_point, geo_ring, init_logger, square, square_site};

    #[test]
    fn plan_square_parcel() {
        init_logger();
        let site = square_site(Some(design("cottage", 10.0, 15.0)));
        let plan = SitePlanner::default().plan(&site).unwrap();

        assert!(approx_eq!(f64, plan.lot_area, 400.0, epsilon = 1e-6));
        let setback = plan.setback_envelope.as_ref().unwrap();
        assert!(approx_eq!(f64, setback.area, 196.0, epsilon = 1e-6));
        assert!(plan.parcel.surrounds(&setback.polygon));
        assert!(plan.degenerate_corners.is_empty());

        //FSR of 0.6 permits 240 m², capped by the 196 m² setback envelope
        let fsr = plan.fsr_envelope.as_ref().unwrap();
        assert!(approx_eq!(f64, fsr.area, 196.0, epsilon = 1e-6));

        let house = plan.house.as_ref().unwrap();
        assert_eq!(house.design_id, "cottage");
        assert_eq!(house.outcome, FitOutcome::ShrunkToFit { attempts: 4 });
        assert!(fsr.polygon.surrounds(&house.polygon));
        assert!(approx_eq!(f64, house.area, 150.0 * 0.98f64.powi(8), epsilon = 1e-6));
        assert_eq!(house.ring.n_points(), 5);

        //frontage defaults to the longest (first) edge, the house front already faces it
        let decision = plan.orientation.unwrap();
        assert!(!decision.should_flip);
        assert_eq!(house.rotation, Rotation::Deg0);
    }

    #[test]
    fn fsr_envelope_smaller_than_setback_envelope() {
        init_logger();
        let mut site = square_site(Some(design("studio", 6.0, 8.0)));
        site.fsr = FsrRule::Ratio(0.3);
        let plan = SitePlanner::default().plan(&site).unwrap();

        let setback = plan.setback_envelope.as_ref().unwrap();
        let fsr = plan.fsr_envelope.as_ref().unwrap();
        assert!((fsr.area - 120.0).abs() < 0.12);
        assert!(setback.polygon.surrounds(&fsr.polygon));
        assert_eq!(plan.house.as_ref().unwrap().outcome, FitOutcome::Fits);
    }

    #[test]
    fn deep_setbacks_leave_plan_empty() {
        init_logger();
        let mut site = square_site(Some(design("cottage", 10.0, 15.0)));
        site.setbacks = Setbacks::uniform(12.0);
        let plan = SitePlanner::default().plan(&site).unwrap();

        assert!(plan.setback_envelope.is_none());
        assert!(plan.fsr_envelope.is_none());
        assert!(plan.house.is_none());
        assert!(plan.orientation.is_none());
        assert!(approx_eq!(f64, plan.lot_area, 400.0, epsilon = 1e-6));
    }

    #[test]
    fn invalid_sites_are_rejected() {
        init_logger();
        let planner = SitePlanner::default();

        let mut pentagon = square_site(None);
        pentagon.parcel = geo_ring(&[
            Point(-10.0, -10.0),
            Point(10.0, -10.0),
            Point(12.0, 0.0),
            Point(10.0, 10.0),
            Point(-10.0, 10.0),
        ]);
        assert!(planner.plan(&pentagon).is_err());

        let mut triangle = square_site(None);
        triangle.parcel = geo_ring(&[Point(0.0, 0.0), Point(10.0, 0.0), Point(0.0, 10.0)]);
        assert!(planner.plan(&triangle).is_err());

        let mut no_floor_area = square_site(None);
        no_floor_area.fsr = FsrRule::Ratio(0.0);
        assert!(planner.plan(&no_floor_area).is_err());

        let bad_design = square_site(Some(HouseDesign {
            id: "bad".into(),
            width: Some(10.0),
            depth: Some(10.0),
            ..Default::default()
        }));
        let mut config = PlannerConfig::default();
        config.shrink.factor = 1.0;
        assert!(SitePlanner::new(config).plan(&bad_design).is_err());
    }

    #[test]
    fn design_without_size_is_skipped() {
        init_logger();
        let site = square_site(Some(HouseDesign {
            id: "unknown".into(),
            area: Some("tba".into()),
            ..Default::default()
        }));
        let plan = SitePlanner::default().plan(&site).unwrap();
        assert!(plan.fsr_envelope.is_some());
        assert!(plan.house.is_none());
    }

    #[test]
    fn house_flips_towards_rear_frontage() {
        init_logger();
        let mut site = square_site(Some(design("cottage", 8.0, 10.0)));
        site.frontage = Some([geo_point(Point(-10.0, 10.0)), geo_point(Point(10.0, 10.0))]);
        let plan = SitePlanner::default().plan(&site).unwrap();

        let decision = plan.orientation.unwrap();
        assert!(decision.should_flip);
        assert!(decision.front_distance > decision.rear_distance);

        let house = plan.house.as_ref().unwrap();
        assert_eq!(house.rotation, Rotation::Deg180);
        let frontage = plan.projection.project(plan.frontage_midpoint);
        let front_mid = house.polygon.vertex(0).midpoint(&house.polygon.vertex(1));
        let rear_mid = house.polygon.vertex(2).midpoint(&house.polygon.vertex(3));
        assert!(front_mid.distance_to(&frontage) < rear_mid.distance_to(&frontage));
    }

    #[test]
    fn existing_rotation_is_kept() {
        init_logger();
        let mut site = square_site(Some(design("cottage", 8.0, 10.0)));
        site.frontage = Some([geo_point(Point(-10.0, 10.0)), geo_point(Point(10.0, 10.0))]);
        site.rotation = Rotation::Deg180;
        let plan = SitePlanner::default().plan(&site).unwrap();

        assert!(!plan.orientation.unwrap().should_flip);
        assert_eq!(plan.house.unwrap().rotation, Rotation::Deg180);
    }

    #[test]
    fn flipped_area_only_house_stays_inside_envelope() {
        init_logger();
        let site = Site {
            parcel: geo_ring(&[
                Point(-15.0, -10.0),
                Point(15.0, -10.0),
                Point(5.0, 10.0),
                Point(-5.0, 10.0),
            ]),
            //street along the narrow rear edge
            frontage: Some([geo_point(Point(5.0, 10.0)), geo_point(Point(-5.0, 10.0))]),
            setbacks: Setbacks::uniform(1.0),
            fsr: FsrRule::Ratio(1.0),
            design: Some(HouseDesign {
                id: "courtyard".into(),
                area: Some("250".into()),
                ..Default::default()
            }),
            side_values: None,
            rotation: Rotation::Deg0,
        };
        let plan = SitePlanner::default().plan(&site).unwrap();

        let fsr = plan.fsr_envelope.as_ref().unwrap();
        let house = plan.house.as_ref().unwrap();
        assert!(plan.orientation.unwrap().should_flip);
        assert_eq!(house.rotation, Rotation::Deg180);
        assert!(matches!(house.outcome, FitOutcome::ShrunkToFit { attempts } if attempts > 0));
        assert!(fsr.polygon.surrounds(&house.polygon));
        assert!(house.area < 250.0);
    }

    #[test]
    fn oversized_design_is_an_error() {
        init_logger();
        let site = square_site(Some(design("huge", 1e200, 1e200)));
        assert!(SitePlanner::default().plan(&site).is_err());
    }

    #[test_case(LabelMode::RankMatched, [10.0, 15.0, 10.0, 15.0]; "rank matched")]
    #[test_case(LabelMode::Identity, [15.0, 10.0, 10.0, 15.0]; "identity")]
    fn side_labels(label_mode: LabelMode, expected: [f64; 4]) {
        init_logger();
        let mut site = square_site(None);
        site.parcel = geo_ring(&[
            Point(-5.0, -7.5),
            Point(5.0, -7.5),
            Point(5.0, 7.5),
            Point(-5.0, 7.5),
        ]);
        site.setbacks = Setbacks::uniform(1.0);
        site.side_values = Some([15.0, 10.0, 10.0, 15.0]);

        let config = PlannerConfig {
            label_mode,
            ..Default::default()
        };
        let plan = SitePlanner::new(config).plan(&site).unwrap();

        assert_eq!(plan.side_values.unwrap().as_array(), expected);
        assert_eq!(plan.edge_labels.len(), 4);
        assert_eq!(plan.edge_labels[0].text, format!("{:.2} m", expected[0]));

        let bottom_mid = geo_point(Point(0.0, -7.5));
        let LngLat { lng, lat } = plan.edge_labels[0].position;
        assert!(approx_eq!(f64, lng, bottom_mid.lng, epsilon = 1e-9));
        assert!(approx_eq!(f64, lat, bottom_mid.lat, epsilon = 1e-9));
    }

    #[test]
    fn web_mercator_plane() {
        init_logger();
        let config = PlannerConfig {
            projection: ProjectionKind::WebMercator,
            ..Default::default()
        };
        let site = square_site(Some(design("cottage", 8.0, 10.0)));
        let plan = SitePlanner::new(config).plan(&site).unwrap();

        assert!((plan.lot_area - 400.0).abs() < 4.0);
        let house = plan.house.as_ref().unwrap();
        assert_eq!(house.outcome, FitOutcome::Fits);
        assert!(approx_eq!(f64, house.area, 80.0, epsilon = 1e-6));
    }

    #[test]
    fn planning_is_idempotent() {
        init_logger();
        let mut site = square_site(Some(design("cottage", 10.0, 15.0)));
        site.side_values = Some([20.0, 20.0, 20.0, 20.0]);
        let planner = SitePlanner::default();

        let first = export_plan("lot", &planner.plan(&site).unwrap());
        let second = export_plan("lot", &planner.plan(&site).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn house_is_centered_in_fsr_envelope() {
        init_logger();
        let mut site = square_site(Some(design("cottage", 8.0, 10.0)));
        site.parcel = geo_ring(&square(20.0).vertices);
        site.setbacks = Setbacks {
            front: 6.0,
            side: 1.5,
            rear: 3.0,
        };
        let plan = SitePlanner::default().plan(&site).unwrap();

        let fsr_centroid = plan.fsr_envelope.as_ref().unwrap().polygon.centroid();
        let house_centroid = plan.house.as_ref().unwrap().polygon.centroid();
        assert!(fsr_centroid.distance_to(&house_centroid) < 1e-6);
    }
}
