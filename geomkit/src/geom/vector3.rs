use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geom::xy::{coord_hash, fmt_coords};

/// A mutable 3D vector. Same conventions as the 2D [`Vector`](crate::geom::Vector):
/// no guards on zero lengths, bitwise equality.
#[derive(Debug, Default, Clone, Copy)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const UNIT_X: Vector3 = Vector3 {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const UNIT_Y: Vector3 = Vector3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const UNIT_Z: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(&self) -> f64 {
        self.length_sq().sqrt()
    }

    pub fn length_sq(&self) -> f64 {
        self.dot(self)
    }

    pub fn distance(&self, other: &Vector3) -> f64 {
        self.distance_sq(other).sqrt()
    }

    pub fn distance_sq(&self, other: &Vector3) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        dx * dx + dy * dy + dz * dz
    }

    /// Same clamp as the 2D angle: only a cosine at or above 1 is caught.
    pub fn angle(&self, other: &Vector3) -> f64 {
        let cos = self.dot(other) / (self.length() * other.length());
        if cos >= 1.0 {
            0.0
        } else {
            cos.acos()
        }
    }

    pub fn negate(&self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }

    pub fn normalize(&self) -> Vector3 {
        self.mult(1.0 / self.length())
    }

    pub fn mult(&self, v: f64) -> Vector3 {
        Vector3::new(self.x * v, self.y * v, self.z * v)
    }

    pub fn add(&self, other: &Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn subtract(&self, other: &Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn add_scaled(&self, other: &Vector3, v: f64) -> Vector3 {
        Vector3::new(
            self.x + other.x * v,
            self.y + other.y * v,
            self.z + other.z * v,
        )
    }

    pub fn lerp(&self, other: &Vector3, t: f64) -> Vector3 {
        if t == 0.0 {
            return *self;
        }
        if t == 1.0 {
            return *other;
        }
        let s = 1.0 - t;
        Vector3::new(
            s * self.x + t * other.x,
            s * self.y + t * other.y,
            s * self.z + t * other.z,
        )
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.z.to_bits() == other.z.to_bits()
    }
}

impl Eq for Vector3 {}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(coord_hash(self.x) ^ coord_hash(self.y) ^ coord_hash(self.z));
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_coords(f, &[self.x, self.y, self.z])
    }
}

impl std::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        self.subtract(&rhs)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        self.mult(rhs)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::Vector3;

    #[test]
    fn test_cross_follows_right_hand_rule() {
        assert_eq!(Vector3::UNIT_X.cross(&Vector3::UNIT_Y), Vector3::UNIT_Z);
        assert_eq!(Vector3::UNIT_Y.cross(&Vector3::UNIT_X), Vector3::new(0.0, 0.0, -1.0));
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.cross(&v), Vector3::ZERO);
    }

    #[test]
    fn test_length_and_distance() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_eq!(v.length(), 7.0);
        assert_eq!(v.distance(&Vector3::ZERO), 7.0);
        assert_eq!(v.dot(&Vector3::new(1.0, 1.0, 1.0)), 11.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vector3::new(0.0, 3.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);
        let zero = Vector3::ZERO.normalize();
        assert!(zero.x.is_nan() && zero.y.is_nan() && zero.z.is_nan());
    }

    #[test]
    fn test_angle() {
        assert!((Vector3::UNIT_X.angle(&Vector3::UNIT_Z) - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(Vector3::UNIT_Y.angle(&Vector3::UNIT_Y), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a.add_scaled(&b, -1.0), Vector3::new(-3.0, -3.0, -3.0));
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_lerp_endpoints_keep_signed_zero() {
        let a = Vector3::new(-0.0, 1.0, 2.0);
        let b = Vector3::new(3.0, -0.0, -0.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Vector3::new(1.5, 0.5, 1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, 0.0, -1.0).to_string(), "[1.000, 0.000, -1.000]");
    }
}
