pub mod control_points;
pub mod outline;
pub mod params;

pub use control_points::ControlPointSet;
pub use outline::SkiOutline;
pub use params::{Mode, ParameterField, SkiParameters};
