use std::f64::consts::FRAC_PI_4;

use geomkit::geom::{AffineTransform, Line, LineSegment, Point, Rectangle, Shape, Vector, Vector3, XY};
use log::info;

fn main() {
    env_logger::init();

    let v = Vector::new(3.0, 4.0);
    info!("vector {} length {}", v, v.length());
    println!("normalized: {}", v.normalize());
    println!("rotated 45 degrees: {:.4}", v.rotate(FRAC_PI_4));
    println!("zero normalized: {}", Vector::ZERO.normalize());
    if let Err(e) = Vector::ZERO.try_normalize() {
        println!("checked normalize: {}", e);
    }

    let mut line = Line::from_coords(0.0, 0.0, 3.0, 4.0);
    let start = line.get_p1();
    line.p1_mut().translate(-1.0, -1.0);
    println!("{} length {:.3}, start copy still {}", line, line.length(), start);

    let rect = Rectangle::new(-2.0, -2.0, 1.5, 1.5);
    println!("{} bounds {} crosses {}: {}", line, line.bounds(), rect, line.intersects_rect(&rect));

    let t = AffineTransform::rotation(FRAC_PI_4).concatenate(&AffineTransform::translation(10.0, 0.0));
    println!("transformed: {}", line.transform(&t));
    println!("{}", line.to_svg().trim_end());
    println!("origin seen from the line: {}", line.relative_ccw(&Point::new(0.0, 0.0)));

    let normal = Vector3::UNIT_X.cross(&Vector3::new(0.0, 2.0, 0.0));
    println!("3d normal: {}", normal);
}
