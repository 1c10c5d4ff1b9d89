/// Errors produced by the geometry core
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A direction was requested for a vector with (almost) no length.
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid hex color {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("unknown shape {0:?}, expected `tetrahedron` or `cube`")]
    UnknownShape(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
