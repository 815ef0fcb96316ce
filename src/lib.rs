//! Square grid tiling of polygon boundaries
//!
//! A boundary's bounding box is covered by a lattice of fixed-size square
//! cells, cells that do not intersect the boundary are dropped, and each
//! survivor is written out as its own shapefile.

#![forbid(unsafe_code)]

/// Cell lattice generation and intersection filtering
pub mod grid;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{Result, TilingError};
