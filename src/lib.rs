//! Parametric ski outline generation.
//!
//! Control points derived from [`SkiParameters`] are joined by a Catmull-Rom
//! sidecut, capped with nose and tail arcs, and mirrored into a closed
//! silhouette. The sidecut radius is the circumradius of three control points.

pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeometryError, Result, SkiformError, ValidationError};
pub use geometry::{ControlPointSet, Mode, ParameterField, SkiOutline, SkiParameters};
pub use math::Point2;
pub use operations::{build_outline, BuildOutline, OutlineResolution, ParameterSession};
