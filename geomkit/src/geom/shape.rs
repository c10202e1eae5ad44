use crate::geom::rectangle::Rectangle;
use crate::geom::xy::XY;

/// Read-only queries shared by every shape.
pub trait Shape {
    /// True when the shape encloses no area.
    fn is_empty(&self) -> bool;

    fn contains(&self, x: f64, y: f64) -> bool;

    fn contains_point<P: XY>(&self, point: &P) -> bool {
        self.contains(point.x(), point.y())
    }

    /// True when the whole rectangle lies inside the shape.
    fn contains_rect(&self, x: f64, y: f64, width: f64, height: f64) -> bool;

    fn contains_rectangle(&self, rect: &Rectangle) -> bool {
        self.contains_rect(rect.x(), rect.y(), rect.width(), rect.height())
    }

    fn intersects(&self, x: f64, y: f64, width: f64, height: f64) -> bool;

    fn intersects_rect(&self, rect: &Rectangle) -> bool {
        self.intersects(rect.x(), rect.y(), rect.width(), rect.height())
    }

    /// Smallest axis-aligned rectangle enclosing the shape.
    fn bounds(&self) -> Rectangle {
        let mut target = Rectangle::default();
        self.bounds_into(&mut target);
        target
    }

    fn bounds_into<'a>(&self, target: &'a mut Rectangle) -> &'a mut Rectangle;
}
