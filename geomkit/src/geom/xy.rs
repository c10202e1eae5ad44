use std::fmt;

use log::debug;

use crate::error::{GeomError, Result};
use crate::geom::vector::Vector;

/// Read-only access to a coordinate pair.
///
/// Implementors only provide `x()` and `y()`; every derived vector operation
/// comes for free. Operations that produce a vector exist in two shapes: one
/// allocating a fresh [`Vector`], and an `_into` form that overwrites the
/// supplied `result` and hands it back for chaining.
pub trait XY {
    fn x(&self) -> f64;

    fn y(&self) -> f64;

    fn dot<V: XY>(&self, other: &V) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    fn length(&self) -> f64 {
        self.length_sq().sqrt()
    }

    fn length_sq(&self) -> f64 {
        let (x, y) = (self.x(), self.y());
        x * x + y * y
    }

    fn distance<V: XY>(&self, other: &V) -> f64 {
        self.distance_sq(other).sqrt()
    }

    fn distance_sq<V: XY>(&self, other: &V) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }

    /// Angle in radians between the two vectors.
    ///
    /// A cosine at or above 1 reports 0. There is no lower clamp, so rounding
    /// that pushes the cosine below -1 yields NaN, as does a zero-length
    /// operand. See [`XY::try_angle`] for the checked form.
    fn angle<V: XY>(&self, other: &V) -> f64 {
        let cos = self.dot(other) / (self.length() * other.length());
        if cos >= 1.0 {
            0.0
        } else {
            cos.acos()
        }
    }

    /// Checked [`XY::angle`]: clamps the cosine to `[-1, 1]` and rejects zero
    /// or non-finite operands. Finite operands whose products overflow are
    /// measured on rescaled copies.
    fn try_angle<V: XY>(&self, other: &V) -> Result<f64> {
        check_finite("angle", self)?;
        check_finite("angle", other)?;
        if is_zero(self) || is_zero(other) {
            debug!(
                "angle with zero length operand [{}, {}] [{}, {}]",
                self.x(),
                self.y(),
                other.x(),
                other.y()
            );
            return Err(GeomError::ZeroLength(
                "angle needs two non-zero vectors".to_string(),
            ));
        }
        let mut dot = self.dot(other);
        let mut lengths = self.length() * other.length();
        if !is_usable(lengths) || !dot.is_finite() {
            let (a, b) = (rescaled(self), rescaled(other));
            dot = a.dot(&b);
            lengths = a.length() * b.length();
        }
        Ok((dot / lengths).clamp(-1.0, 1.0).acos())
    }

    /// Direction in radians from this point toward `other`.
    fn direction<V: XY>(&self, other: &V) -> f64 {
        (other.y() - self.y()).atan2(other.x() - self.x())
    }

    fn negate(&self) -> Vector {
        *self.negate_into(&mut Vector::default())
    }

    fn negate_into<'a>(&self, result: &'a mut Vector) -> &'a mut Vector {
        result.set(-self.x(), -self.y())
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector is not guarded against: `1 / 0` is infinite and
    /// `0 * inf` is NaN, so both components come back NaN.
    fn normalize(&self) -> Vector {
        *self.normalize_into(&mut Vector::default())
    }

    fn normalize_into<'a>(&self, result: &'a mut Vector) -> &'a mut Vector {
        self.mult_into(1.0 / self.length(), result)
    }

    fn try_normalize(&self) -> Result<Vector> {
        check_finite("normalize", self)?;
        if is_zero(self) {
            debug!("normalize of zero length vector");
            return Err(GeomError::ZeroLength(
                "cannot normalize a zero vector".to_string(),
            ));
        }
        let length = self.length();
        if is_usable(length) {
            return Ok(self.mult(1.0 / length));
        }
        let scaled = rescaled(self);
        Ok(scaled.mult(1.0 / scaled.length()))
    }

    fn mult(&self, v: f64) -> Vector {
        *self.mult_into(v, &mut Vector::default())
    }

    fn mult_into<'a>(&self, v: f64, result: &'a mut Vector) -> &'a mut Vector {
        result.set(self.x() * v, self.y() * v)
    }

    /// Component-wise product.
    fn mult_vec<V: XY>(&self, other: &V) -> Vector {
        *self.mult_vec_into(other, &mut Vector::default())
    }

    fn mult_vec_into<'a, V: XY>(&self, other: &V, result: &'a mut Vector) -> &'a mut Vector {
        result.set(self.x() * other.x(), self.y() * other.y())
    }

    fn add<V: XY>(&self, other: &V) -> Vector {
        *self.add_into(other, &mut Vector::default())
    }

    fn add_into<'a, V: XY>(&self, other: &V, result: &'a mut Vector) -> &'a mut Vector {
        self.add_xy_into(other.x(), other.y(), result)
    }

    fn add_xy(&self, x: f64, y: f64) -> Vector {
        *self.add_xy_into(x, y, &mut Vector::default())
    }

    fn add_xy_into<'a>(&self, x: f64, y: f64, result: &'a mut Vector) -> &'a mut Vector {
        result.set(self.x() + x, self.y() + y)
    }

    fn subtract<V: XY>(&self, other: &V) -> Vector {
        *self.subtract_into(other, &mut Vector::default())
    }

    fn subtract_into<'a, V: XY>(&self, other: &V, result: &'a mut Vector) -> &'a mut Vector {
        self.add_xy_into(-other.x(), -other.y(), result)
    }

    /// `self + other * v`
    fn add_scaled<V: XY>(&self, other: &V, v: f64) -> Vector {
        *self.add_scaled_into(other, v, &mut Vector::default())
    }

    fn add_scaled_into<'a, V: XY>(
        &self,
        other: &V,
        v: f64,
        result: &'a mut Vector,
    ) -> &'a mut Vector {
        result.set(self.x() + other.x() * v, self.y() + other.y() * v)
    }

    /// Rotates counter-clockwise about the origin by `angle` radians.
    fn rotate(&self, angle: f64) -> Vector {
        *self.rotate_into(angle, &mut Vector::default())
    }

    fn rotate_into<'a>(&self, angle: f64, result: &'a mut Vector) -> &'a mut Vector {
        let (x, y) = (self.x(), self.y());
        let (sina, cosa) = angle.sin_cos();
        result.set(x * cosa - y * sina, x * sina + y * cosa)
    }

    fn rotate_and_add<V: XY>(&self, angle: f64, add: &V) -> Vector {
        *self.rotate_and_add_into(angle, add, &mut Vector::default())
    }

    fn rotate_and_add_into<'a, V: XY>(
        &self,
        angle: f64,
        add: &V,
        result: &'a mut Vector,
    ) -> &'a mut Vector {
        let (x, y) = (self.x(), self.y());
        let (sina, cosa) = angle.sin_cos();
        result.set(x * cosa - y * sina + add.x(), x * sina + y * cosa + add.y())
    }

    fn rotate_scale_and_add<V: XY>(&self, angle: f64, scale: f64, add: &V) -> Vector {
        *self.rotate_scale_and_add_into(angle, scale, add, &mut Vector::default())
    }

    fn rotate_scale_and_add_into<'a, V: XY>(
        &self,
        angle: f64,
        scale: f64,
        add: &V,
        result: &'a mut Vector,
    ) -> &'a mut Vector {
        let (x, y) = (self.x(), self.y());
        let (sina, cosa) = angle.sin_cos();
        result.set(
            (x * cosa - y * sina) * scale + add.x(),
            (x * sina + y * cosa) * scale + add.y(),
        )
    }

    /// Linear interpolation toward `other`; `t` is not clamped, so values
    /// outside `[0, 1]` extrapolate. `t == 0` and `t == 1` return the endpoint
    /// itself, signed zeros included; other values evaluate
    /// `(1 - t) * self + t * other`.
    fn lerp<V: XY>(&self, other: &V, t: f64) -> Vector {
        *self.lerp_into(other, t, &mut Vector::default())
    }

    fn lerp_into<'a, V: XY>(&self, other: &V, t: f64, result: &'a mut Vector) -> &'a mut Vector {
        if t == 0.0 {
            return result.set(self.x(), self.y());
        }
        if t == 1.0 {
            return result.set(other.x(), other.y());
        }
        let s = 1.0 - t;
        result.set(s * self.x() + t * other.x(), s * self.y() + t * other.y())
    }

    fn epsilon_equals<V: XY>(&self, other: &V, epsilon: f64) -> bool {
        (self.x() - other.x()).abs() <= epsilon && (self.y() - other.y()).abs() <= epsilon
    }

    fn is_epsilon_zero(&self, epsilon: f64) -> bool {
        self.x().abs() <= epsilon && self.y().abs() <= epsilon
    }

    /// A new mutable vector holding these coordinates.
    fn to_vector(&self) -> Vector {
        Vector::new(self.x(), self.y())
    }
}

fn check_finite<V: XY + ?Sized>(op: &str, v: &V) -> Result<()> {
    if v.x().is_finite() && v.y().is_finite() {
        return Ok(());
    }
    debug!("{} of non finite vector [{}, {}]", op, v.x(), v.y());
    Err(GeomError::NonFinite(format!("{} of [{}, {}]", op, v.x(), v.y())))
}

fn is_zero<V: XY + ?Sized>(v: &V) -> bool {
    v.x() == 0.0 && v.y() == 0.0
}

// squared lengths over- or underflow outside this range
fn is_usable(length: f64) -> bool {
    length.is_finite() && length >= f64::MIN_POSITIVE
}

/// Same direction, largest component magnitude 1. Input must be finite and non-zero.
fn rescaled<V: XY + ?Sized>(v: &V) -> Vector {
    let scale = v.x().abs().max(v.y().abs());
    Vector::new(v.x() / scale, v.y() / scale)
}

impl<T: XY> XY for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl XY for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

/// Folds the bit pattern of a coordinate into 32 bits.
pub(crate) fn coord_hash(value: f64) -> i32 {
    let bits = value.to_bits();
    (bits ^ (bits >> 32)) as i32
}

/// Writes `[a, b, ...]`, three decimals unless the formatter asks otherwise.
pub(crate) fn fmt_coords(f: &mut fmt::Formatter<'_>, coords: &[f64]) -> fmt::Result {
    let precision = f.precision().unwrap_or(3);
    write!(f, "[")?;
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{:.*}", precision, c)?;
    }
    write!(f, "]")
}
