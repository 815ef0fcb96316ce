//! Lattice generation over a boundary's bounding box with intersection filtering
//!
//! Cell origins are laid out from the lower-left corner of the bounding box in
//! steps of one cell edge. The x axis is the outer loop and y the inner, so
//! cells come out column by column. Each origin is computed as
//! `min + step * edge` rather than by repeated addition, which keeps the
//! lattice free of accumulated rounding drift on large boundaries.

use geo::{Coord, Rect};
use tracing::debug;

use crate::grid::cell::{Cell, CellSize};
use crate::grid::footprint::Footprint;

/// Produces the cells of a fixed-size square lattice that touch a boundary
#[derive(Debug, Clone, Copy)]
pub struct GridTiler {
    cell_size: CellSize,
}

impl GridTiler {
    /// Create a tiler for the given cell size
    pub const fn new(cell_size: CellSize) -> Self {
        Self { cell_size }
    }

    /// Generate every lattice cell that intersects `boundary`
    ///
    /// Cells touching the boundary only along an edge or corner are kept. An
    /// empty boundary, or one whose bounding box has zero width or height,
    /// yields no cells.
    pub fn generate_cells<F>(&self, boundary: &F) -> Vec<Cell>
    where
        F: Footprint + ?Sized,
    {
        let Some(bounds) = boundary.bounds() else {
            debug!("boundary is empty, no lattice to generate");
            return Vec::new();
        };

        let cells: Vec<Cell> = self
            .lattice(&bounds)
            .filter(|cell| boundary.intersects_cell(&cell.rect()))
            .collect();

        debug!(
            candidates = self.candidate_count(&bounds),
            retained = cells.len(),
            "filtered lattice against boundary"
        );
        cells
    }

    /// All candidate cells covering `bounds`, before filtering
    pub fn lattice(&self, bounds: &Rect<f64>) -> impl Iterator<Item = Cell> + use<> {
        let size = self.cell_size;
        let edge = size.get();
        let (min, max) = (bounds.min(), bounds.max());
        let columns = axis_steps(min.x, max.x, edge);
        let rows = axis_steps(min.y, max.y, edge);

        (0..columns).flat_map(move |column| {
            let x = step_origin(min.x, column, edge);
            (0..rows).map(move |row| {
                let y = step_origin(min.y, row, edge);
                Cell::new(Coord { x, y }, size)
            })
        })
    }

    /// Number of lattice positions covering `bounds`
    ///
    /// Equals `ceil(width / size) * ceil(height / size)` and bounds the length
    /// of any result from [`Self::generate_cells`].
    pub fn candidate_count(&self, bounds: &Rect<f64>) -> usize {
        let edge = self.cell_size.get();
        let (min, max) = (bounds.min(), bounds.max());
        axis_steps(min.x, max.x, edge).saturating_mul(axis_steps(min.y, max.y, edge))
    }
}

fn step_origin(min: f64, step: usize, edge: f64) -> f64 {
    (step as f64).mul_add(edge, min)
}

// Counts origins `min + i * edge` that fall strictly below `max`
fn axis_steps(min: f64, max: f64, edge: f64) -> usize {
    if max <= min {
        return 0;
    }
    let estimate = ((max - min) / edge).ceil() as usize;
    let mut steps = estimate.saturating_sub(1);
    while steps > 0 && step_origin(min, steps - 1, edge) >= max {
        steps -= 1;
    }
    while step_origin(min, steps, edge) < max {
        steps += 1;
    }
    steps
}
