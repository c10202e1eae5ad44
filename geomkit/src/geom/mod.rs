pub mod line;
pub mod lines;
pub mod point;
pub mod rectangle;
pub mod shape;
pub mod transform;
pub mod vector;
pub mod vector3;
pub mod xy;

pub use line::{Line, LineSegment};
pub use point::Point;
pub use rectangle::Rectangle;
pub use shape::Shape;
pub use transform::AffineTransform;
pub use vector::Vector;
pub use vector3::Vector3;
pub use xy::XY;

/// Default tolerance for the epsilon comparisons.
pub const EPSILON: f64 = 1e-5;
