use anyhow::Result;
use anyhow::ensure;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Transformable, TransformableFrom};
use crate::geometry::primitives::Point;

/// Line segment between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn try_new(start: Point, end: Point) -> Result<Self> {
        ensure!(start != end, "degenerate edge, {start:?} == {end:?}");
        Ok(Edge { start, end })
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Midpoint of the edge
    pub fn centroid(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    /// Unit vector pointing from `start` to `end`
    pub fn direction(&self) -> (f64, f64) {
        let l = self.length();
        ((self.end.0 - self.start.0) / l, (self.end.1 - self.start.1) / l)
    }

    /// Angle of the edge with respect to the positive x-axis, in radians, counterclockwise
    pub fn angle(&self) -> f64 {
        f64::atan2(self.end.1 - self.start.1, self.end.0 - self.start.0)
    }

    /// Compass bearing of the edge in degrees: clockwise from the positive y-axis (north), in [0, 360)
    pub fn bearing(&self) -> f64 {
        let (dx, dy) = (self.end.0 - self.start.0, self.end.1 - self.start.1);
        f64::atan2(dx, dy).to_degrees().rem_euclid(360.0)
    }

    /// Unit normal on the left-hand side of the edge (interior side for counterclockwise polygons)
    pub fn left_normal(&self) -> (f64, f64) {
        let (dx, dy) = self.direction();
        (-dy, dx)
    }

    /// Returns a copy of the edge translated by `(dx, dy)`
    pub fn shifted(self, (dx, dy): (f64, f64)) -> Self {
        Edge {
            start: Point(self.start.0 + dx, self.start.1 + dy),
            end: Point(self.end.0 + dx, self.end.1 + dy),
        }
    }

    /// Intersection of the infinite lines through `self` and `other`.
    /// Returns `None` if the determinant of the system is smaller than `tolerance` (parallel lines).
    pub fn line_intersection(&self, other: &Edge, tolerance: f64) -> Option<Point> {
        //based on: https://en.wikipedia.org/wiki/Line%E2%80%93line_intersection
        let Point(x1, y1) = self.start;
        let (d1x, d1y) = (self.end.0 - x1, self.end.1 - y1);
        let Point(x3, y3) = other.start;
        let (d2x, d2y) = (other.end.0 - x3, other.end.1 - y3);

        let det = d1x * d2y - d1y * d2x;
        if det.abs() < tolerance {
            return None;
        }
        let t = ((x3 - x1) * d2y - (y3 - y1) * d2x) / det;
        Some(Point(x1 + t * d1x, y1 + t * d1y))
    }

    /// Returns the closest point which lies on the edge to the given point
    pub fn closest_point_on_edge(&self, point: &Point) -> Point {
        //from https://stackoverflow.com/a/6853926
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;
        let Point(x, y) = point;

        let a = x - x1;
        let b = y - y1;
        let c = x2 - x1;
        let d = y2 - y1;

        let dot = a * c + b * d;
        let len_sq = c * c + d * d;
        let mut param = -1.0;
        if len_sq != 0.0 {
            param = dot / len_sq;
        }
        let (xx, yy) = match param {
            p if p < 0.0 => (x1, y1),              //start is the closest point
            p if p > 1.0 => (x2, y2),              //end is the closest point
            _ => (x1 + param * c, y1 + param * d), //closest point is on the edge
        };

        Point(xx, yy)
    }

    pub fn x_min(&self) -> f64 {
        f64::min(self.start.0, self.end.0)
    }

    pub fn y_min(&self) -> f64 {
        f64::min(self.start.1, self.end.1)
    }

    pub fn x_max(&self) -> f64 {
        f64::max(self.start.0, self.end.0)
    }

    pub fn y_max(&self) -> f64 {
        f64::max(self.start.1, self.end.1)
    }
}

impl Transformable for Edge {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Edge { start, end } = self;
        start.transform(t);
        end.transform(t);

        self
    }
}

impl TransformableFrom for Edge {
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self {
        let Edge { start, end } = self;
        start.transform_from(&reference.start, t);
        end.transform_from(&reference.end, t);

        self
    }
}

impl DistanceTo<Point> for Edge {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f64 {
        f64::sqrt(self.sq_distance_to(point))
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f64 {
        self.closest_point_on_edge(point).sq_distance_to(point)
    }
}

impl CollidesWith<Edge> for Edge {
    #[inline(always)]
    fn collides_with(&self, other: &Edge) -> bool {
        if f64::max(self.x_min(), other.x_min()) > f64::min(self.x_max(), other.x_max())
            || f64::max(self.y_min(), other.y_min()) > f64::min(self.y_max(), other.y_max())
        {
            //bounding boxes do not overlap
            return false;
        }

        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;
        let Point(x3, y3) = other.start;
        let Point(x4, y4) = other.end;

        let t_nom = (x2 - x4) * (y4 - y3) - (y2 - y4) * (x4 - x3);
        let u_nom = (x2 - x4) * (y2 - y1) - (y2 - y4) * (x2 - x1);
        let denom = (x2 - x1) * (y4 - y3) - (y2 - y1) * (x4 - x3);

        if denom == 0.0 {
            //parallel edges
            false
        } else {
            let t = t_nom / denom;
            let u = u_nom / denom;
            (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
        }
    }
}
