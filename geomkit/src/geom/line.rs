use std::fmt;

use crate::geom::lines;
use crate::geom::point::Point;
use crate::geom::rectangle::Rectangle;
use crate::geom::shape::Shape;
use crate::geom::transform::AffineTransform;
use crate::geom::vector::Vector;
use crate::geom::xy::{fmt_coords, XY};

/// Read-only access to a line segment.
///
/// Each endpoint is reachable two ways. `p1()`/`p2()` borrow the point
/// stored in the line, so they always reflect its current state. `get_p1()`
/// and `get_p2()` return an owned copy that later changes to the line do not
/// touch.
pub trait LineSegment: Shape {
    /// View of the starting point.
    fn p1(&self) -> &Point;

    /// View of the ending point.
    fn p2(&self) -> &Point;

    fn x1(&self) -> f64 {
        self.p1().x
    }

    fn y1(&self) -> f64 {
        self.p1().y
    }

    fn x2(&self) -> f64 {
        self.p2().x
    }

    fn y2(&self) -> f64 {
        self.p2().y
    }

    /// Copy of the starting point.
    fn get_p1(&self) -> Point {
        *self.p1()
    }

    /// Copy of the ending point.
    fn get_p2(&self) -> Point {
        *self.p2()
    }

    /// A mutable copy of this line.
    fn to_line(&self) -> Line {
        Line::new(self.get_p1(), self.get_p2())
    }

    fn length(&self) -> f64 {
        self.p1().distance(self.p2())
    }

    /// The vector from `p1` to `p2`; zero for a degenerate line.
    fn direction(&self) -> Vector {
        self.p2().subtract(self.p1())
    }

    fn is_degenerate(&self) -> bool {
        self.p1() == self.p2()
    }

    fn point_line_dist_sq<P: XY>(&self, point: &P) -> f64 {
        lines::point_line_dist_sq(point.x(), point.y(), self.x1(), self.y1(), self.x2(), self.y2())
    }

    fn point_line_dist<P: XY>(&self, point: &P) -> f64 {
        lines::point_line_dist(point.x(), point.y(), self.x1(), self.y1(), self.x2(), self.y2())
    }

    fn point_seg_dist_sq<P: XY>(&self, point: &P) -> f64 {
        lines::point_seg_dist_sq(point.x(), point.y(), self.x1(), self.y1(), self.x2(), self.y2())
    }

    fn point_seg_dist<P: XY>(&self, point: &P) -> f64 {
        lines::point_seg_dist(point.x(), point.y(), self.x1(), self.y1(), self.x2(), self.y2())
    }

    fn relative_ccw<P: XY>(&self, point: &P) -> i32 {
        lines::relative_ccw(point.x(), point.y(), self.x1(), self.y1(), self.x2(), self.y2())
    }

    fn intersects_line<L: LineSegment>(&self, other: &L) -> bool {
        lines::lines_intersect(
            self.x1(),
            self.y1(),
            self.x2(),
            self.y2(),
            other.x1(),
            other.y1(),
            other.x2(),
            other.y2(),
        )
    }
}

/// A mutable line segment. Degenerate lines (`p1 == p2`) are allowed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    p1: Point,
    p2: Point,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        Line { p1, p2 }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Line::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn set_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.p1.set(x1, y1);
        self.p2.set(x2, y2);
        self
    }

    pub fn set_p1<P: XY>(&mut self, point: &P) -> &mut Self {
        self.p1.set_from(point);
        self
    }

    pub fn set_p2<P: XY>(&mut self, point: &P) -> &mut Self {
        self.p2.set_from(point);
        self
    }

    /// Mutable view of the starting point; writes land in this line.
    pub fn p1_mut(&mut self) -> &mut Point {
        &mut self.p1
    }

    /// Mutable view of the ending point; writes land in this line.
    pub fn p2_mut(&mut self) -> &mut Point {
        &mut self.p2
    }

    pub fn transform(&self, matrix: &AffineTransform) -> Line {
        Line::new(matrix.transform_point(&self.p1), matrix.transform_point(&self.p2))
    }

    pub fn to_svg(&self) -> String {
        format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" />\n",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}

impl LineSegment for Line {
    fn p1(&self) -> &Point {
        &self.p1
    }

    fn p2(&self) -> &Point {
        &self.p2
    }
}

impl Shape for Line {
    /// A line has no interior, but it is still something to draw.
    fn is_empty(&self) -> bool {
        false
    }

    fn contains(&self, _x: f64, _y: f64) -> bool {
        false
    }

    fn contains_rect(&self, _x: f64, _y: f64, _width: f64, _height: f64) -> bool {
        false
    }

    fn intersects(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        lines::line_intersects_rect(self.x1(), self.y1(), self.x2(), self.y2(), x, y, width, height)
    }

    fn bounds_into<'a>(&self, target: &'a mut Rectangle) -> &'a mut Rectangle {
        target.set_from_diagonal(self.x1(), self.y1(), self.x2(), self.y2())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line")?;
        fmt_coords(f, &[self.p1.x, self.p1.y, self.p2.x, self.p2.y])
    }
}
