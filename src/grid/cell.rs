//! Square grid cells and the edge length they share

use geo::{Coord, Polygon, Rect, coord};

use crate::io::error::{Result, invalid_parameter};

/// Edge length of a grid cell in boundary coordinate units
///
/// Always strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize(f64);

impl CellSize {
    /// Create a cell size from an edge length already in boundary units
    ///
    /// # Errors
    ///
    /// Returns an error if `units` is not a finite, strictly positive number
    pub fn new(units: f64) -> Result<Self> {
        if units.is_finite() && units > 0.0 {
            Ok(Self(units))
        } else {
            Err(invalid_parameter(
                "cell_size",
                &units,
                &"must be a finite number greater than zero",
            ))
        }
    }

    /// Convert a physical edge length to degrees with a flat conversion factor
    ///
    /// This ignores latitude entirely; east-west cells shrink on the ground
    /// the further the boundary is from the equator.
    ///
    /// # Errors
    ///
    /// Returns an error if either argument is not finite and strictly positive
    pub fn from_km(km: f64, km_per_degree: f64) -> Result<Self> {
        if !(km_per_degree.is_finite() && km_per_degree > 0.0) {
            return Err(invalid_parameter(
                "km_per_degree",
                &km_per_degree,
                &"must be a finite number greater than zero",
            ));
        }
        if !(km.is_finite() && km > 0.0) {
            return Err(invalid_parameter(
                "cell_size_km",
                &km,
                &"must be a finite number greater than zero",
            ));
        }
        Self::new(km / km_per_degree)
    }

    /// Edge length in boundary units
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// One axis-aligned square of the lattice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    origin: Coord<f64>,
    size: CellSize,
}

impl Cell {
    /// Create a cell with its lower-left corner at `origin`
    pub const fn new(origin: Coord<f64>, size: CellSize) -> Self {
        Self { origin, size }
    }

    /// Lower-left corner
    pub const fn origin(&self) -> Coord<f64> {
        self.origin
    }

    /// Edge length
    pub const fn size(&self) -> CellSize {
        self.size
    }

    /// Cell extent `[x, x + size] × [y, y + size]`
    pub fn rect(&self) -> Rect<f64> {
        let edge = self.size.get();
        Rect::new(
            self.origin,
            coord! { x: self.origin.x + edge, y: self.origin.y + edge },
        )
    }

    /// Cell as a closed polygon
    pub fn polygon(&self) -> Polygon<f64> {
        self.rect().to_polygon()
    }
}
