use std::fmt;

use crate::geom::point::Point;
use crate::geom::shape::Shape;
use crate::geom::xy::{fmt_coords, XY};

/// Axis-aligned rectangle anchored at its lower-left corner.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rectangle {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle spanned by two opposite corners, in either order.
    pub fn from_diagonal<P: XY, Q: XY>(p1: &P, p2: &Q) -> Self {
        let mut rect = Rectangle::default();
        rect.set_from_diagonal(p1.x(), p1.y(), p2.x(), p2.y());
        rect
    }

    pub fn set_bounds(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn set_from_diagonal(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        let (lx, ux) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
        let (ly, uy) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
        self.set_bounds(lx, ly, ux - lx, uy - ly)
    }

    /// Grows the rectangle just enough to take in the point.
    pub fn add_point<P: XY>(&mut self, point: &P) -> &mut Self {
        let lx = self.lx().min(point.x());
        let ly = self.ly().min(point.y());
        let ux = self.ux().max(point.x());
        let uy = self.uy().max(point.y());
        self.set_bounds(lx, ly, ux - lx, uy - ly)
    }

    pub fn lower_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn x(&self) -> f64 {
        self.x
    }
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
    pub fn lx(&self) -> f64 {
        self.x
    }
    pub fn ly(&self) -> f64 {
        self.y
    }
    pub fn ux(&self) -> f64 {
        self.x + self.width
    }
    pub fn uy(&self) -> f64 {
        self.y + self.height
    }
}

impl Shape for Rectangle {
    fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        x >= self.lx() && y >= self.ly() && x < self.ux() && y < self.uy()
    }

    fn contains_rect(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        x >= self.lx() && y >= self.ly() && x + width <= self.ux() && y + height <= self.uy()
    }

    fn intersects(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        x + width > self.lx() && y + height > self.ly() && x < self.ux() && y < self.uy()
    }

    fn bounds_into<'a>(&self, target: &'a mut Rectangle) -> &'a mut Rectangle {
        target.set_bounds(self.x, self.y, self.width, self.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle")?;
        fmt_coords(f, &[self.x, self.y, self.width, self.height])
    }
}

#[cfg(test)]
mod tests {
    use super::Rectangle;
    use crate::geom::point::Point;
    use crate::geom::shape::Shape;

    #[test]
    fn test_contains_half_open() {
        let rect = Rectangle::new(0.0, 0.0, 2.0, 1.0);
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(1.9, 0.5));
        assert!(!rect.contains(2.0, 0.5));
        assert!(!rect.contains_point(&Point::new(-0.1, 0.5)));
    }

    #[test]
    fn test_empty() {
        let flat = Rectangle::new(0.0, 0.0, 5.0, 0.0);
        assert!(flat.is_empty());
        assert!(!flat.contains(1.0, 0.0));
        assert!(!flat.intersects(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_contains_and_intersects_rect() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_rect(1.0, 1.0, 9.0, 9.0));
        assert!(!rect.contains_rect(1.0, 1.0, 10.0, 1.0));
        assert!(rect.intersects_rect(&Rectangle::new(9.0, 9.0, 5.0, 5.0)));
        assert!(!rect.intersects_rect(&Rectangle::new(10.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_diagonal_and_growth() {
        let mut rect = Rectangle::from_diagonal(&Point::new(4.0, 1.0), &Point::new(1.0, 3.0));
        assert_eq!(rect, Rectangle::new(1.0, 1.0, 3.0, 2.0));
        rect.add_point(&Point::new(-1.0, 5.0));
        assert_eq!(rect, Rectangle::new(-1.0, 1.0, 5.0, 4.0));
        assert_eq!(rect.center(), Point::new(1.5, 3.0));
        assert_eq!(rect.bounds(), rect);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Rectangle::new(1.0, 2.0, 3.0, 4.0).to_string(),
            "Rectangle[1.000, 2.000, 3.000, 4.000]"
        );
    }
}
