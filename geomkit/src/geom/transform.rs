use log::debug;

use crate::error::{GeomError, Result};
use crate::geom::point::Point;
use crate::geom::vector::Vector;
use crate::geom::xy::XY;

/// 2D affine transform in row-vector form:
///
/// ```text
/// [x' y' 1] = [x y 1] * | a b 0 |
///                       | c d 0 |
///                       | e f 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        AffineTransform { a, b, c, d, e, f }
    }

    pub fn translation(e: f64, f: f64) -> Self {
        AffineTransform::new(1.0, 0.0, 0.0, 1.0, e, f)
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotation(angle: f64) -> Self {
        let (sina, cosa) = angle.sin_cos();
        AffineTransform::new(cosa, sina, -sina, cosa, 0.0, 0.0)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        AffineTransform::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Applies `self` first, then `right`.
    pub fn concatenate(&self, right: &AffineTransform) -> AffineTransform {
        let a = self.a * right.a + self.b * right.c;
        let b = self.a * right.b + self.b * right.d;
        let c = self.c * right.a + self.d * right.c;
        let d = self.c * right.b + self.d * right.d;
        let e = self.e * right.a + self.f * right.c + right.e;
        let f = self.e * right.b + self.f * right.d + right.f;
        AffineTransform { a, b, c, d, e, f }
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn inverse(&self) -> Result<AffineTransform> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            debug!("transform {:?} has no inverse", self);
            return Err(GeomError::NonInvertible(det));
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        let e = -(self.e * a + self.f * c);
        let f = -(self.e * b + self.f * d);
        Ok(AffineTransform { a, b, c, d, e, f })
    }

    pub fn transform_point<P: XY>(&self, point: &P) -> Point {
        let mut result = Point::default();
        self.transform_into(point, &mut result);
        result
    }

    pub fn transform_into<'a, P: XY>(&self, point: &P, result: &'a mut Point) -> &'a mut Point {
        let (x, y) = (point.x(), point.y());
        result.set(
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Maps a direction: the linear part only, translation is ignored.
    pub fn transform_vector<V: XY>(&self, vector: &V) -> Vector {
        let (x, y) = (vector.x(), vector.y());
        Vector::new(self.a * x + self.c * y, self.b * x + self.d * y)
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        AffineTransform::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::AffineTransform;
    use crate::error::GeomError;
    use crate::geom::point::Point;
    use crate::geom::vector::Vector;
    use crate::geom::xy::XY;

    #[test]
    fn test_translation() {
        let old = AffineTransform::new(13.9183, 0.0, 0.0, 13.9183, 36.7398, 608.9446);
        let tl = AffineTransform::translation(3.1968, 0.0);
        let new = tl.concatenate(&old);
        assert_eq!(new.e, 81.23382144000001);
    }

    #[test]
    fn test_concatenate_order() {
        let rotate = AffineTransform::rotation(FRAC_PI_2);
        let shift = AffineTransform::translation(10.0, 0.0);
        let p = Point::new(1.0, 0.0);

        let rotate_then_shift = rotate.concatenate(&shift).transform_point(&p);
        assert!(rotate_then_shift.epsilon_equals(&Point::new(10.0, 1.0), 1e-12));

        let shift_then_rotate = shift.concatenate(&rotate).transform_point(&p);
        assert!(shift_then_rotate.epsilon_equals(&Point::new(0.0, 11.0), 1e-12));
    }

    #[test]
    fn test_inverse() {
        let t = AffineTransform::new(2.0, 1.0, 1.0, 3.0, 5.0, -7.0);
        let inv = t.inverse().unwrap();
        let p = Point::new(4.0, -2.0);
        let back = inv.transform_point(&t.transform_point(&p));
        assert!(back.epsilon_equals(&p, 1e-12));
        assert!(t.concatenate(&inv).transform_point(&p).distance(&p) < 1e-12);
    }

    #[test]
    fn test_singular() {
        let err = AffineTransform::scale(0.0, 1.0).inverse().unwrap_err();
        assert!(matches!(err, GeomError::NonInvertible(_)));
    }

    #[test]
    fn test_vector_ignores_translation() {
        let t = AffineTransform::translation(5.0, 5.0).concatenate(&AffineTransform::scale(2.0, 2.0));
        assert_eq!(t.transform_vector(&Vector::new(1.0, 1.0)), Vector::new(2.0, 2.0));
        assert_eq!(t.transform_point(&Point::new(1.0, 1.0)), Point::new(12.0, 12.0));
    }

    #[test]
    fn test_default_is_identity() {
        let p = Point::new(3.5, -1.25);
        assert_eq!(AffineTransform::default().transform_point(&p), p);
    }
}
