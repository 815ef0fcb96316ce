//! Error types for boundary loading, grid generation and cell export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// Failed to read the boundary shapefile
    BoundaryLoad {
        /// Path to the boundary file
        path: PathBuf,
        /// Underlying shapefile error
        source: shapefile::Error,
    },

    /// Boundary file holds a record that is not a polygon
    UnsupportedShape {
        /// Path to the boundary file
        path: PathBuf,
        /// Shape type found in the file
        shape_type: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to write a cell shapefile
    ShapefileWrite {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying shapefile error
        source: shapefile::Error,
    },

    /// Failed to build the attribute table of a cell shapefile
    AttributeTable {
        /// Name of the offending field
        field: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundaryLoad { path, source } => {
                write!(f, "Failed to load boundary '{}': {source}", path.display())
            }
            Self::UnsupportedShape { path, shape_type } => {
                write!(
                    f,
                    "Boundary '{}' contains unsupported shape type {shape_type} (expected polygons)",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ShapefileWrite { path, source } => {
                write!(
                    f,
                    "Failed to write cell shapefile '{}': {source}",
                    path.display()
                )
            }
            Self::AttributeTable { field, reason } => {
                write!(f, "Invalid attribute field '{field}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BoundaryLoad { source, .. } | Self::ShapefileWrite { source, .. } => {
                Some(source)
            }
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> TilingError {
    let path = path.into();
    move |source| TilingError::FileSystem {
        path,
        operation,
        source,
    }
}
