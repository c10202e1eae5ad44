use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geom::point::Point;
use crate::geom::xy::{coord_hash, fmt_coords, XY};

/// A mutable 2D vector.
///
/// Equality is bitwise on both coordinates: `NaN` equals a `NaN` with the
/// same bits, and `0.0` differs from `-0.0`. This keeps `Eq` and `Hash`
/// consistent.
#[derive(Debug, Default, Clone, Copy)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };
    pub const UNIT_X: Vector = Vector { x: 1.0, y: 0.0 };
    pub const UNIT_Y: Vector = Vector { x: 0.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A vector of the given length pointing `angle` radians from the x axis.
    pub fn from_polar(length: f64, angle: f64) -> Self {
        let (sina, cosa) = angle.sin_cos();
        Self::new(length * cosa, length * sina)
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn set_from<V: XY>(&mut self, other: &V) -> &mut Self {
        self.set(other.x(), other.y())
    }

    /// Keeps the direction, replaces the length. A zero vector turns NaN.
    pub fn set_length(&mut self, length: f64) -> &mut Self {
        self.normalize_local().mult_local(length)
    }

    /// Keeps the length, replaces the direction.
    pub fn set_angle(&mut self, angle: f64) -> &mut Self {
        let length = self.length();
        let (sina, cosa) = angle.sin_cos();
        self.set(length * cosa, length * sina)
    }

    pub fn negate_local(&mut self) -> &mut Self {
        self.set(-self.x, -self.y)
    }

    pub fn normalize_local(&mut self) -> &mut Self {
        let normalized = self.normalize();
        self.set_from(&normalized)
    }

    pub fn mult_local(&mut self, v: f64) -> &mut Self {
        self.set(self.x * v, self.y * v)
    }

    pub fn add_local<V: XY>(&mut self, other: &V) -> &mut Self {
        self.set(self.x + other.x(), self.y + other.y())
    }

    pub fn subtract_local<V: XY>(&mut self, other: &V) -> &mut Self {
        self.set(self.x - other.x(), self.y - other.y())
    }

    pub fn add_scaled_local<V: XY>(&mut self, other: &V, v: f64) -> &mut Self {
        self.set(self.x + other.x() * v, self.y + other.y() * v)
    }

    pub fn rotate_local(&mut self, angle: f64) -> &mut Self {
        let rotated = self.rotate(angle);
        self.set_from(&rotated)
    }

    pub fn lerp_local<V: XY>(&mut self, other: &V, t: f64) -> &mut Self {
        let lerped = self.lerp(other, t);
        self.set_from(&lerped)
    }
}

impl XY for Vector {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(coord_hash(self.x) ^ coord_hash(self.y));
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_coords(f, &[self.x, self.y])
    }
}

impl From<Point> for Vector {
    fn from(p: Point) -> Self {
        Vector::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.add_local(&rhs);
    }
}

impl std::ops::Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(&rhs)
    }
}

impl std::ops::SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.subtract_local(&rhs);
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.mult(rhs)
    }
}

impl std::ops::MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.mult_local(rhs);
    }
}

impl std::ops::Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}
