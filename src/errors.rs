//! Error types for geometry operations
//!
//! Only aggregation and validated construction can fail. Leaf transforms are total.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors reported by the geometry kernel
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("cannot compute a bounding box over empty geometry")]
    #[diagnostic(
        code(blockgeom::bounds::empty_geometry),
        help("add at least one point, line or text item before asking for an extent")
    )]
    EmptyGeometry,

    #[error("invalid numeric value: {value}")]
    #[diagnostic(code(blockgeom::numeric::invalid))]
    InvalidNumeric { value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_geometry_message() {
        assert_eq!(
            GeometryError::EmptyGeometry.to_string(),
            "cannot compute a bounding box over empty geometry"
        );
    }

    #[test]
    fn diagnostic_codes() {
        let code = GeometryError::EmptyGeometry.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("blockgeom::bounds::empty_geometry"));

        let err = GeometryError::InvalidNumeric { value: f64::INFINITY };
        assert_eq!(err.to_string(), "invalid numeric value: inf");
    }
}
