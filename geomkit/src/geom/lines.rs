//! Line and segment predicates on raw coordinates.

/// True when segment `(x1, y1)-(x2, y2)` touches segment `(x3, y3)-(x4, y4)`.
#[allow(clippy::too_many_arguments)]
pub fn lines_intersect(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> bool {
    // everything relative to (x1, y1): a = p2, b = p3, c = p4
    let (ax, ay) = (x2 - x1, y2 - y1);
    let (bx, by) = (x3 - x1, y3 - y1);
    let (cx, cy) = (x4 - x1, y4 - y1);
    let a_cross_b = ax * by - bx * ay;
    let a_cross_c = ax * cy - cx * ay;

    // collinear
    if a_cross_b == 0.0 && a_cross_c == 0.0 {
        if ax != 0.0 {
            return overlaps_on_axis(ax, bx, cx);
        }
        if ay != 0.0 {
            return overlaps_on_axis(ay, by, cy);
        }
        // first segment is a single point
        return false;
    }

    let b_cross_c = bx * cy - cx * by;
    a_cross_b * a_cross_c <= 0.0 && b_cross_c * (a_cross_b + b_cross_c - a_cross_c) <= 0.0
}

// Projections onto one axis of collinear segments [0, a] and [b, c].
fn overlaps_on_axis(a: f64, b: f64, c: f64) -> bool {
    if b * c <= 0.0 {
        return true;
    }
    if b * a < 0.0 {
        return false;
    }
    if a > 0.0 {
        b <= a || c <= a
    } else {
        b >= a || c >= a
    }
}

/// True when the segment has an endpoint inside the rectangle or crosses
/// either of its diagonals.
#[allow(clippy::too_many_arguments)]
pub fn line_intersects_rect(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    rx: f64,
    ry: f64,
    rw: f64,
    rh: f64,
) -> bool {
    let (ux, uy) = (rx + rw, ry + rh);
    let inside = |x: f64, y: f64| rx <= x && x <= ux && ry <= y && y <= uy;
    inside(x1, y1)
        || inside(x2, y2)
        || lines_intersect(rx, ry, ux, uy, x1, y1, x2, y2)
        || lines_intersect(ux, ry, rx, uy, x1, y1, x2, y2)
}

/// Squared distance from the point to the infinite line through the two
/// endpoints. A degenerate line divides zero by zero and yields NaN.
pub fn point_line_dist_sq(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let (ax, ay) = (x2 - x1, y2 - y1);
    let (qx, qy) = (px - x1, py - y1);
    let s = qx * ay - qy * ax;
    s * s / (ax * ax + ay * ay)
}

pub fn point_line_dist(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    point_line_dist_sq(px, py, x1, y1, x2, y2).sqrt()
}

/// Squared distance from the point to the closest point of the segment.
pub fn point_seg_dist_sq(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let (ax, ay) = (x2 - x1, y2 - y1);
    let (qx, qy) = (px - x1, py - y1);
    let dist = if qx * ax + qy * ay <= 0.0 {
        // before the start
        qx * qx + qy * qy
    } else {
        let (rx, ry) = (ax - qx, ay - qy);
        if rx * ax + ry * ay <= 0.0 {
            // past the end
            rx * rx + ry * ry
        } else {
            let s = rx * ay - ry * ax;
            s * s / (ax * ax + ay * ay)
        }
    };
    dist.max(0.0)
}

pub fn point_seg_dist(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    point_seg_dist_sq(px, py, x1, y1, x2, y2).sqrt()
}

/// Which side of the directed segment the point falls on.
///
/// Returns 1 or -1 for the two sides and 0 when the point lies on the
/// segment itself. A collinear point beyond either end reports -1 before the
/// start and 1 past the end.
pub fn relative_ccw(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> i32 {
    let (ax, ay) = (x2 - x1, y2 - y1);
    let (mut qx, mut qy) = (px - x1, py - y1);
    let mut t = qx * ay - qy * ax;
    if t == 0.0 {
        t = qx * ax + qy * ay;
        if t > 0.0 {
            qx -= ax;
            qy -= ay;
            t = (qx * ax + qy * ay).max(0.0);
        }
    }
    if t < 0.0 {
        -1
    } else if t > 0.0 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_segments() {
        assert!(lines_intersect(0.0, 0.0, 2.0, 2.0, 0.0, 2.0, 2.0, 0.0));
        assert!(!lines_intersect(0.0, 0.0, 1.0, 1.0, 3.0, 0.0, 0.0, 3.0));
        // touching at an endpoint
        assert!(lines_intersect(0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 5.0));
    }

    #[test]
    fn test_collinear_segments() {
        assert!(lines_intersect(0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 3.0, 0.0));
        assert!(!lines_intersect(0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 3.0, 0.0));
        assert!(lines_intersect(0.0, 0.0, 0.0, 2.0, 0.0, 3.0, 0.0, 1.0));
        assert!(!lines_intersect(0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 2.0));
    }

    #[test]
    fn test_line_intersects_rect() {
        // passes straight through without an endpoint inside
        assert!(line_intersects_rect(-1.0, 0.5, 3.0, 0.5, 0.0, 0.0, 2.0, 1.0));
        assert!(line_intersects_rect(0.5, 0.5, 10.0, 10.0, 0.0, 0.0, 1.0, 1.0));
        assert!(!line_intersects_rect(-1.0, 5.0, 3.0, 5.0, 0.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn test_point_distances() {
        assert_eq!(point_line_dist(0.0, 3.0, -1.0, 0.0, 1.0, 0.0), 3.0);
        assert_eq!(point_line_dist(5.0, 3.0, -1.0, 0.0, 1.0, 0.0), 3.0);
        // past the end the segment distance measures to the endpoint
        assert_eq!(point_seg_dist(5.0, 3.0, -1.0, 0.0, 1.0, 0.0), 5.0);
        assert_eq!(point_seg_dist(-4.0, 4.0, -1.0, 0.0, 1.0, 0.0), 5.0);
        assert_eq!(point_seg_dist_sq(0.0, -2.0, -1.0, 0.0, 1.0, 0.0), 4.0);
    }

    #[test]
    fn test_degenerate_line_distance_is_nan() {
        assert!(point_line_dist_sq(1.0, 1.0, 0.0, 0.0, 0.0, 0.0).is_nan());
        assert_eq!(point_seg_dist_sq(3.0, 4.0, 0.0, 0.0, 0.0, 0.0), 25.0);
    }

    #[test]
    fn test_relative_ccw() {
        assert_eq!(relative_ccw(0.5, 1.0, 0.0, 0.0, 1.0, 0.0), -1);
        assert_eq!(relative_ccw(0.5, -1.0, 0.0, 0.0, 1.0, 0.0), 1);
        assert_eq!(relative_ccw(0.5, 0.0, 0.0, 0.0, 1.0, 0.0), 0);
        assert_eq!(relative_ccw(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0), -1);
        assert_eq!(relative_ccw(2.0, 0.0, 0.0, 0.0, 1.0, 0.0), 1);
    }
}
