use geomkit::geom::{AffineTransform, Line, LineSegment, Point, Rectangle, Shape, Vector, XY};

#[test]
fn test_view_reflects_mutation_copy_does_not() {
    let mut line = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    let p1_copy = line.get_p1();
    let p2_copy = line.get_p2();

    line.p1_mut().set(1.0, 1.0);
    line.p2_mut().translate(1.0, 0.0);

    assert_eq!(*line.p1(), Point::new(1.0, 1.0));
    assert_eq!((line.x1(), line.y1()), (1.0, 1.0));
    assert_eq!((line.x2(), line.y2()), (4.0, 4.0));
    assert_eq!(p1_copy, Point::new(0.0, 0.0));
    assert_eq!(p2_copy, Point::new(3.0, 4.0));
}

#[test]
fn test_length_composes_point_distance() {
    let line = Line::from_coords(0.0, 0.0, 3.0, 4.0);
    assert_eq!(line.length(), 5.0);
    assert_eq!(line.length(), line.p1().distance(line.p2()));
    assert!(line.direction().normalize().epsilon_equals(&Vector::new(0.6, 0.8), 1e-12));
}

#[test]
fn test_generic_over_line_segment() {
    fn midpoint<L: LineSegment>(line: &L) -> Vector {
        line.p1().lerp(line.p2(), 0.5)
    }

    let line = Line::from_coords(-2.0, 0.0, 2.0, 6.0);
    assert_eq!(midpoint(&line), Vector::new(0.0, 3.0));
    assert!(!line.contains_point(&Point::new(0.0, 3.0)));
}

#[test]
fn test_bounds_follow_mutation() {
    let mut line = Line::from_coords(0.0, 0.0, 1.0, 1.0);
    let mut bounds = Rectangle::default();
    line.bounds_into(&mut bounds);
    assert_eq!(bounds, Rectangle::new(0.0, 0.0, 1.0, 1.0));

    line.set_p2(&Point::new(-2.0, 3.0));
    line.bounds_into(&mut bounds);
    assert_eq!(bounds, Rectangle::new(-2.0, 0.0, 2.0, 3.0));
}

#[test]
fn test_transform_round_trip() {
    let t = AffineTransform::rotation(0.3)
        .concatenate(&AffineTransform::scale(2.0, 0.5))
        .concatenate(&AffineTransform::translation(4.0, -1.0));
    let line = Line::from_coords(1.0, 2.0, -3.0, 5.0);
    let back = line.transform(&t).transform(&t.inverse().unwrap());
    assert!(back.p1().epsilon_equals(line.p1(), 1e-9));
    assert!(back.p2().epsilon_equals(line.p2(), 1e-9));
}
