mod common;

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use serde_json::json;

    use lotlogic::io::export::export_plan;
    use lotlogic::io::ext_repr::{ExtPolygon, ExtSite, ExtSitePlan};
    use lotlogic::io::import::{import_polygon, import_site};
    use lotlogic::io::svg::{Color, SvgDrawOptions, SvgPlanTheme, plan_to_svg};
    use lotlogic::planning::footprint::FitOutcome;
    use lotlogic::planning::fsr::FsrRule;
    use lotlogic::planning::orientation::Rotation;
    use lotlogic::planning::SitePlanner;
    use lotlogic::util::PlannerConfig;

    use crate::common::{design, init_logger, square_site};

    fn site_json() -> serde_json::Value {
        json!({
            "id": "lot-12",
            "parcel": {
                "type": "Polygon",
                "coordinates": [[
                    [151.2092, -33.8689],
                    [151.2094, -33.8689],
                    [151.2094, -33.8687],
                    [151.2092, -33.8687],
                    [151.2092, -33.8689]
                ]]
            },
            "frontage": {
                "type": "LineString",
                "coordinates": [[151.2092, -33.8689], [151.2094, -33.8689]]
            },
            "setbacks": {"front": 4.5, "side": 0.9, "rear": 3.0},
            "fsr": {"ratio": 0.5},
            "design": {"id": "d-101", "title": "The Hampton", "width": 9.5, "depth": 12.0},
            "side_values": [22.24, 18.53, 22.24, 18.53]
        })
    }

    #[test]
    fn import_and_plan_site() {
        init_logger();
        let ext_site: ExtSite = serde_json::from_value(site_json()).unwrap();
        let site = import_site(&ext_site).unwrap();

        assert_eq!(site.parcel.n_points(), 5);
        assert!(site.frontage.is_some());
        assert_eq!(site.fsr, FsrRule::Ratio(0.5));
        assert_eq!(site.rotation, Rotation::Deg0);

        let plan = SitePlanner::default().plan(&site).unwrap();
        let house = plan.house.as_ref().unwrap();
        assert_eq!(house.design_id, "d-101");
        assert!(house.outcome.is_contained());

        let ext_plan = export_plan(&ext_site.id, &plan);
        let value = serde_json::to_value(&ext_plan).unwrap();
        assert_eq!(value["id"], "lot-12");
        assert_eq!(value["house"]["geometry"]["type"], "Polygon");
        assert_eq!(value["house"]["geometry"]["coordinates"][0].as_array().unwrap().len(), 5);
        assert_eq!(value["edge_labels"].as_array().unwrap().len(), 4);
        assert!(value["fsr_envelope"]["area"].as_f64().unwrap() > 0.0);

        let parsed: ExtSitePlan = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.id, ext_plan.id);
        assert_eq!(parsed.house.unwrap().fit, house.outcome);
    }

    #[test]
    fn invalid_external_sites() {
        init_logger();
        let mut rotated = site_json();
        rotated["rotation"] = json!(90.0);
        let ext_site: ExtSite = serde_json::from_value(rotated).unwrap();
        assert!(import_site(&ext_site).is_err());

        let mut long_frontage = site_json();
        long_frontage["frontage"]["coordinates"] = json!([[151.2092, -33.8689], [151.2093, -33.8689], [151.2094, -33.8689]]);
        let ext_site: ExtSite = serde_json::from_value(long_frontage).unwrap();
        assert!(import_site(&ext_site).is_err());

        let mut open_ring = site_json();
        open_ring["parcel"]["coordinates"][0].as_array_mut().unwrap().pop();
        let ext_site: ExtSite = serde_json::from_value(open_ring).unwrap();
        assert!(import_site(&ext_site).is_err());

        let empty = ExtPolygon {
            coordinates: vec![],
        };
        assert!(import_polygon(&empty).is_err());
    }

    #[test]
    fn fit_outcome_representation() {
        assert_eq!(
            serde_json::to_value(FitOutcome::ShrunkToFit { attempts: 4 }).unwrap(),
            json!({"status": "shrunk_to_fit", "attempts": 4})
        );
        assert_eq!(
            serde_json::to_value(FitOutcome::Fits).unwrap(),
            json!({"status": "fits"})
        );
    }

    #[test]
    fn config_defaults() {
        let config: PlannerConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.shrink.max_attempts, 80);
        assert!(approx_eq!(f64, config.shrink.factor, 0.98));

        let config: PlannerConfig =
            serde_json::from_value(json!({"projection": "web_mercator", "label_mode": "identity"}))
                .unwrap();
        assert_ne!(config, PlannerConfig::default());
    }

    #[test]
    fn draw_plan() {
        init_logger();
        let mut site = square_site(Some(design("cottage", 10.0, 15.0)));
        site.side_values = Some([20.0, 20.0, 20.0, 20.0]);
        let plan = SitePlanner::default().plan(&site).unwrap();

        let document = plan_to_svg(&plan, SvgDrawOptions::default(), "cottage on lot");
        let svg = document.to_string();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("id=\"house\""));
        assert!(svg.contains("20.00 m"));

        let options = SvgDrawOptions {
            theme: SvgPlanTheme::GRAY,
            edge_labels: false,
            ..Default::default()
        };
        let svg = plan_to_svg(&plan, options, "cottage on lot").to_string();
        assert!(!svg.contains("20.00 m"));
    }

    #[test]
    fn color_parsing() {
        let color = Color::parse("#C7A900").unwrap();
        assert_eq!(color.to_string(), "#C7A900");
        assert!(Color::parse("#C7A9").is_err());
        assert!(Color::parse("#GGGGGG").is_err());
    }
}
