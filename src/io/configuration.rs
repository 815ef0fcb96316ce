//! Tiling constants and the run configuration record

use std::path::PathBuf;

use crate::grid::CellSize;

// Default values for configurable parameters
/// Physical cell edge length in kilometres
pub const DEFAULT_CELL_SIZE_KM: f64 = 4.0;

// Flat approximation, only reasonable for coarse tiling
/// Kilometres spanned by one degree
pub const DEFAULT_KM_PER_DEGREE: f64 = 111.0;

// Output settings
/// Prefix of every emitted cell file, followed by the cell index
pub const CELL_FILE_PREFIX: &str = "grid_";
/// Extension of the sidecar file holding the coordinate reference system
pub const PROJECTION_EXTENSION: &str = "prj";
/// Name of the single attribute column written for each cell
pub const ID_FIELD_NAME: &str = "FID";
/// Width of the attribute column in characters
pub const ID_FIELD_LENGTH: u8 = 10;

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Everything a tiling run needs, injected rather than hard-coded
#[derive(Debug, Clone, PartialEq)]
pub struct TilingConfig {
    /// Boundary shapefile to tile
    pub input: PathBuf,
    /// Directory receiving one shapefile per retained cell
    pub output: PathBuf,
    /// Cell edge length in boundary units
    pub cell_size: CellSize,
}

impl TilingConfig {
    /// Create a configuration from its parts
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, cell_size: CellSize) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            cell_size,
        }
    }
}
