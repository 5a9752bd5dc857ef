use anyhow::Result;
use anyhow::ensure;
use itertools::Itertools;

use crate::geometry::Transformation;
use crate::geometry::geo_enums::{GeoRelation, Winding};
use crate::geometry::geo_traits::{CollidesWith, Shape, Transformable, TransformableFrom};
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;

/// Geometric primitive representing a simple polygon: <https://en.wikipedia.org/wiki/Simple_polygon>
///
/// Unlike a closed ring, the last vertex is *not* a repetition of the first one.
/// The order of the vertices is preserved as given: edge `i` always runs from vertex `i` to vertex `i + 1`,
/// regardless of the winding. Parcel semantics (front, side, rear) depend on this.
#[derive(Clone, Debug)]
pub struct SPolygon {
    /// Set of bounds describing the polygon
    pub vertices: Vec<Point>,
    /// Area computed with the shoelace formula, positive for counterclockwise vertices
    pub signed_area: f64,
    /// Bounding box
    pub bbox: Rect,
}

impl SPolygon {
    /// Create a new simple polygon from a set of points (not closed).
    pub fn try_new(vertices: Vec<Point>) -> Result<Self> {
        ensure!(
            vertices.len() >= 3,
            "simple polygon must have at least 3 points: {vertices:?}"
        );
        ensure!(
            vertices.iter().all(|p| p.is_finite()),
            "simple polygon contains non-finite coordinates: {vertices:?}"
        );
        ensure!(
            vertices
                .iter()
                .circular_tuple_windows()
                .all(|(a, b)| a != b),
            "simple polygon should not contain consecutive duplicate points: {vertices:?}"
        );

        let signed_area = SPolygon::calculate_signed_area(&vertices);
        ensure!(
            Winding::from_signed_area(signed_area).is_some(),
            "simple polygon has no area: {vertices:?}"
        );

        let bbox = SPolygon::generate_bounding_box(&vertices);

        Ok(SPolygon {
            vertices,
            signed_area,
            bbox,
        })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        Edge {
            start: self.vertices[i],
            end: self.vertices[j],
        }
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    /// Length of every edge, in edge order
    pub fn edge_lengths(&self) -> Vec<f64> {
        self.edge_iter().map(|e| e.length()).collect()
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn winding(&self) -> Winding {
        match self.signed_area > 0.0 {
            true => Winding::CounterClockwise,
            false => Winding::Clockwise,
        }
    }

    /// Index of the longest edge, the first one in case of ties.
    pub fn longest_edge(&self) -> (usize, Edge) {
        self.edge_iter()
            .enumerate()
            .skip(1)
            .fold((0, self.edge(0)), |best, (i, e)| match best.1.length() >= e.length() {
                true => best,
                false => (i, e),
            })
    }

    /// Geometric relation of `self` with respect to `other`.
    /// Touching boundaries are reported as [`GeoRelation::Intersecting`].
    pub fn relation_to(&self, other: &SPolygon) -> GeoRelation {
        if !self.bbox.collides_with(&other.bbox) {
            return GeoRelation::Disjoint;
        }
        let edges_cross = self
            .edge_iter()
            .cartesian_product(other.edge_iter().collect_vec())
            .any(|(e1, e2)| e1.collides_with(&e2));
        if edges_cross {
            return GeoRelation::Intersecting;
        }
        //no boundary crossings: either one contains the other or they are disjoint
        if other.collides_with(&self.vertex(0)) {
            GeoRelation::Enclosed
        } else if self.collides_with(&other.vertex(0)) {
            GeoRelation::Surrounding
        } else {
            GeoRelation::Disjoint
        }
    }

    /// Whether `other` lies entirely within `self`
    pub fn surrounds(&self, other: &SPolygon) -> bool {
        self.relation_to(other) == GeoRelation::Surrounding
    }

    pub fn generate_bounding_box(points: &[Point]) -> Rect {
        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);

        for point in points.iter() {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_signed_area(points: &[Point]) -> f64 {
        let mut sigma: f64 = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }
}

impl Shape for SPolygon {
    fn centroid(&self) -> Point {
        //based on: https://en.wikipedia.org/wiki/Centroid#Of_a_polygon
        //uses the signed area, so both windings are supported
        let mut c_x = 0.0;
        let mut c_y = 0.0;

        for (&Point(x_i, y_i), &Point(x_j, y_j)) in self.vertices.iter().circular_tuple_windows() {
            let cross = x_i * y_j - x_j * y_i;
            c_x += (x_i + x_j) * cross;
            c_y += (y_i + y_j) * cross;
        }

        c_x /= 6.0 * self.signed_area;
        c_y /= 6.0 * self.signed_area;

        Point(c_x, c_y)
    }

    fn area(&self) -> f64 {
        self.signed_area.abs()
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl Transformable for SPolygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let SPolygon {
            vertices,
            signed_area,
            bbox,
        } = self;

        vertices.iter_mut().for_each(|p| {
            p.transform(t);
        });

        //scaling changes the area, rotations and translations do not
        *signed_area = SPolygon::calculate_signed_area(vertices);
        *bbox = SPolygon::generate_bounding_box(vertices);

        self
    }
}

impl TransformableFrom for SPolygon {
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self {
        let SPolygon {
            vertices,
            signed_area,
            bbox,
        } = self;

        for (p, ref_p) in vertices.iter_mut().zip(&reference.vertices) {
            p.transform_from(ref_p, t);
        }

        *signed_area = SPolygon::calculate_signed_area(vertices);
        *bbox = SPolygon::generate_bounding_box(vertices);

        self
    }
}

impl CollidesWith<Point> for SPolygon {
    fn collides_with(&self, point: &Point) -> bool {
        //based on the ray casting algorithm: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        match self.bbox.collides_with(point) {
            false => false,
            true => {
                //horizontal ray shot to the right, count the edges it crosses
                let Point(p_x, p_y) = *point;
                let n_intersections = self
                    .edge_iter()
                    .filter(|e| (e.start.1 > p_y) != (e.end.1 > p_y))
                    .filter(|e| {
                        let x_cross = e.start.0
                            + (p_y - e.start.1) * (e.end.0 - e.start.0) / (e.end.1 - e.start.1);
                        p_x < x_cross
                    })
                    .count();

                n_intersections % 2 == 1
            }
        }
    }
}

impl From<Rect> for SPolygon {
    fn from(r: Rect) -> Self {
        let vertices = r.corners().to_vec();
        SPolygon {
            signed_area: r.width() * r.height(),
            bbox: r,
            vertices,
        }
    }
}
