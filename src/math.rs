pub mod approx_eq;
pub mod color;
pub mod point;

pub use color::Color;
pub use point::Point;
