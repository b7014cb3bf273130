mod build_outline;
mod session;
mod validate;

pub use build_outline::{build_outline, BuildOutline, OutlineResolution, TAIL_ARC_START_ANGLE};
pub use session::{EditingValues, ParameterSession};
pub use validate::{
    clamp_to_constraints, constraint_for, FieldConstraint, ValidateParameters, CONSTRAINTS,
};
