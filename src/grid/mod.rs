//! Square lattice generation and intersection filtering
//!
//! This module contains the geometric core of the tool:
//! - Cell and cell size types
//! - The geometry seam a boundary must provide
//! - Lattice generation filtered against a boundary

/// Grid cells and cell size conversion
pub mod cell;
/// Bounding box and intersection capabilities required from a boundary
pub mod footprint;
/// Lattice generation and filtering
pub mod tiler;

pub use cell::{Cell, CellSize};
pub use footprint::Footprint;
pub use tiler::GridTiler;
