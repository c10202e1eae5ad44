use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geom::transform::AffineTransform;
use crate::geom::vector::Vector;
use crate::geom::xy::{coord_hash, fmt_coords, XY};

/// A position in the plane. Shares every derived operation with [`Vector`]
/// through [`XY`]; equality and hashing are bitwise like `Vector`'s.
#[derive(Default, Debug, Clone, Copy)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn set_from<P: XY>(&mut self, other: &P) -> &mut Self {
        self.set(other.x(), other.y())
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.set(self.x + dx, self.y + dy)
    }

    pub fn transform(&self, matrix: &AffineTransform) -> Point {
        matrix.transform_point(self)
    }
}

impl XY for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(coord_hash(self.x) ^ coord_hash(self.y));
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_coords(f, &[self.x, self.y])
    }
}

impl From<Vector> for Point {
    fn from(v: Vector) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
