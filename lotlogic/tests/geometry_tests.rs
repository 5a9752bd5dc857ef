mod common;

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use lotlogic::geometry::Transformation;
    use lotlogic::geometry::geo_enums::{GeoRelation, Winding};
    use lotlogic::geometry::geo_traits::{CollidesWith, Shape, Transformable};
    use lotlogic::geometry::primitives::{Edge, Point, Rect, SPolygon};

    use crate::common::square;

    #[test]
    fn polygon_rejects_degenerate_input() {
        assert!(SPolygon::try_new(vec![Point(0.0, 0.0), Point(1.0, 0.0)]).is_err());
        assert!(
            SPolygon::try_new(vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(2.0, 0.0)]).is_err()
        );
        assert!(
            SPolygon::try_new(vec![
                Point(0.0, 0.0),
                Point(1.0, 0.0),
                Point(1.0, 0.0),
                Point(0.0, 1.0)
            ])
            .is_err()
        );
        assert!(
            SPolygon::try_new(vec![Point(0.0, 0.0), Point(f64::NAN, 0.0), Point(0.0, 1.0)])
                .is_err()
        );
    }

    #[test]
    fn vertex_order_is_preserved() {
        let cw = vec![
            Point(0.0, 0.0),
            Point(0.0, 10.0),
            Point(10.0, 10.0),
            Point(10.0, 0.0),
        ];
        let poly = SPolygon::try_new(cw.clone()).unwrap();
        assert_eq!(poly.vertices, cw);
        assert_eq!(poly.winding(), Winding::Clockwise);
        assert!(approx_eq!(f64, poly.area(), 100.0));
        assert_eq!(poly.edge(0), Edge::try_new(cw[0], cw[1]).unwrap());
        assert_eq!(square(10.0).winding(), Winding::CounterClockwise);
    }

    #[test]
    fn longest_edge_prefers_first_on_ties() {
        let (i, _) = square(10.0).longest_edge();
        assert_eq!(i, 0);

        let rect = SPolygon::from(Rect::try_new(0.0, 0.0, 5.0, 12.0).unwrap());
        let (i, e) = rect.longest_edge();
        assert_eq!(i, 1);
        assert!(approx_eq!(f64, e.length(), 12.0));
    }

    #[test_case(Point(0.0, 0.0), Point(0.0, 1.0), 0.0; "north")]
    #[test_case(Point(0.0, 0.0), Point(1.0, 0.0), 90.0; "east")]
    #[test_case(Point(0.0, 0.0), Point(0.0, -1.0), 180.0; "south")]
    #[test_case(Point(0.0, 0.0), Point(-1.0, 0.0), 270.0; "west")]
    #[test_case(Point(0.0, 0.0), Point(1.0, 1.0), 45.0; "north east")]
    fn edge_bearing(start: Point, end: Point, expected: f64) {
        let edge = Edge::try_new(start, end).unwrap();
        assert!(approx_eq!(f64, edge.bearing(), expected, epsilon = 1e-9));
    }

    #[test]
    fn line_intersection_of_offset_lines() {
        let a = Edge::try_new(Point(0.0, 0.0), Point(10.0, 0.0)).unwrap();
        let b = Edge::try_new(Point(20.0, 5.0), Point(20.0, 15.0)).unwrap();
        //infinite lines, not segments
        let p = a.line_intersection(&b, 1e-9).unwrap();
        assert!(approx_eq!(f64, p.0, 20.0) && approx_eq!(f64, p.1, 0.0));

        let c = a.shifted((0.0, 3.0));
        assert!(a.line_intersection(&c, 1e-9).is_none());
    }

    #[test]
    fn relation_between_polygons() {
        let outer = square(20.0);
        let inner = square(10.0);
        assert_eq!(outer.relation_to(&inner), GeoRelation::Surrounding);
        assert_eq!(inner.relation_to(&outer), GeoRelation::Enclosed);
        assert!(outer.surrounds(&inner));

        //touching boundaries do not count as containment
        assert!(!outer.surrounds(&outer.clone()));

        let shifted = inner.transform_clone(&Transformation::from_translation((8.0, 0.0)));
        assert_eq!(outer.relation_to(&shifted), GeoRelation::Intersecting);

        let far = inner.transform_clone(&Transformation::from_translation((100.0, 0.0)));
        assert_eq!(outer.relation_to(&far), GeoRelation::Disjoint);
    }

    #[test]
    fn point_in_polygon() {
        let sq = square(10.0);
        assert!(sq.collides_with(&Point(0.0, 0.0)));
        assert!(sq.collides_with(&Point(4.9, -4.9)));
        assert!(!sq.collides_with(&Point(5.1, 0.0)));
    }

    #[test]
    fn transformations_preserve_shape() {
        let sq = square(10.0);
        let t = Transformation::empty().rotate_translate(FRAC_PI_2, (3.0, 4.0));
        let moved = sq.transform_clone(&t);

        assert!(approx_eq!(f64, moved.area(), sq.area(), epsilon = 1e-9));
        assert_eq!(moved.winding(), sq.winding());
        let c = moved.centroid();
        assert!(approx_eq!(f64, c.0, 3.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, c.1, 4.0, epsilon = 1e-9));

        let scaled = sq.transform_clone(&Transformation::scaling_about(0.5, Point(5.0, 5.0)));
        assert!(approx_eq!(f64, scaled.area(), 25.0, epsilon = 1e-9));
        let c = scaled.centroid();
        assert!(approx_eq!(f64, c.0, 2.5, epsilon = 1e-9));
        assert!(approx_eq!(f64, c.1, 2.5, epsilon = 1e-9));
    }

    #[test]
    fn rotation_about_pivot() {
        let p = Point(2.0, 1.0);
        let t = Transformation::rotation_about(std::f64::consts::PI, Point(1.0, 1.0));
        let q = p.transform_clone(&t);
        assert!(approx_eq!(f64, q.0, 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, q.1, 1.0, epsilon = 1e-12));
    }
}
