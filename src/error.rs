use thiserror::Error;

/// Top-level error type for the skiform crate.
#[derive(Debug, Error)]
pub enum SkiformError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Three points that do not span a triangle (collinear or coincident).
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Parameters whose derived x-extents overlap or run backwards.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Errors raised while validating or parsing ski parameters.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A field outside its entry in the constraint table.
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A NaN or infinite field.
    #[error("parameter {parameter} is not a finite number")]
    NotFinite { parameter: &'static str },

    /// Editing text that does not parse as a number.
    #[error("parameter {parameter}: cannot parse {raw:?} as a number")]
    InvalidNumber { parameter: &'static str, raw: String },
}

/// Convenience type alias for results using [`SkiformError`].
pub type Result<T> = std::result::Result<T, SkiformError>;
