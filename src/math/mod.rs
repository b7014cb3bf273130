pub mod arc_2d;
pub mod catmull_rom;
pub mod circumradius;
pub mod polygon_2d;

/// 2D point type. Units are millimeters.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
