//! Input/output around the tiling core
//!
//! Boundary loading, per-cell export, command-line handling, progress
//! display and the shared error type.

/// Boundary shapefile loading
pub mod boundary;
/// Command-line interface and run orchestration
pub mod cli;
/// Constants and the run configuration record
pub mod configuration;
/// Per-cell shapefile export
pub mod emit;
/// Error types for all tiling operations
pub mod error;
/// Progress display for cell export
pub mod progress;
