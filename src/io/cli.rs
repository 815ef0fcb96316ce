//! Command-line interface and the load, tile and emit pipeline

use crate::grid::{CellSize, GridTiler};
use crate::io::boundary::Boundary;
use crate::io::configuration::{DEFAULT_CELL_SIZE_KM, DEFAULT_KM_PER_DEGREE, TilingConfig};
use crate::io::emit::emit;
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "polygrid")]
#[command(
    author,
    version,
    about = "Split a boundary shapefile into one shapefile per intersecting grid cell"
)]
/// Command-line arguments for the grid tiling tool
pub struct Cli {
    /// Boundary shapefile to tile
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory receiving the grid cell shapefiles
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Cell edge length in kilometres
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE_KM)]
    pub cell_size_km: f64,

    /// Kilometres per degree used to convert the cell size to map units
    #[arg(short, long, default_value_t = DEFAULT_KM_PER_DEGREE)]
    pub km_per_degree: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the run configuration from the parsed arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the cell size or conversion factor is not a finite
    /// positive number
    pub fn to_config(&self) -> Result<TilingConfig> {
        let cell_size = CellSize::from_km(self.cell_size_km, self.km_per_degree)?;
        Ok(TilingConfig::new(
            self.input.clone(),
            self.output.clone(),
            cell_size,
        ))
    }
}

/// Outcome of a completed tiling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Lattice positions considered before filtering
    pub candidates: usize,
    /// Files written, in cell index order
    pub written: Vec<PathBuf>,
    /// Directory the files were written to
    pub output: PathBuf,
}

/// Runs one boundary through lattice generation and export
pub struct TileRunner {
    config: TilingConfig,
    progress_manager: Option<ProgressManager>,
}

impl TileRunner {
    /// Create a runner for the given configuration
    pub const fn new(config: TilingConfig, show_progress: bool) -> Self {
        let progress_manager = if show_progress {
            Some(ProgressManager::new())
        } else {
            None
        };

        Self {
            config,
            progress_manager,
        }
    }

    /// Create a runner from CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments do not form a valid configuration
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self::new(cli.to_config()?, cli.should_show_progress()))
    }

    /// Configuration this runner was built with
    pub const fn config(&self) -> &TilingConfig {
        &self.config
    }

    /// Load the boundary, generate the intersecting cells and write them out
    ///
    /// Zero intersecting cells is not an error; the output directory is still
    /// created.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary cannot be loaded or any output cannot
    /// be written
    pub fn run(&mut self) -> Result<RunSummary> {
        let boundary = Boundary::from_shapefile(&self.config.input)?;
        let tiler = GridTiler::new(self.config.cell_size);

        let candidates = boundary
            .bounds()
            .map_or(0, |bounds| tiler.candidate_count(&bounds));
        let cells = tiler.generate_cells(&boundary.geometry);
        info!(
            cell_size = self.config.cell_size.get(),
            candidates,
            retained = cells.len(),
            "generated grid"
        );

        let written = emit(
            &cells,
            boundary.crs.as_deref(),
            &self.config.output,
            self.progress_manager.as_mut(),
        )?;

        Ok(RunSummary {
            candidates,
            written,
            output: self.config.output.clone(),
        })
    }
}
