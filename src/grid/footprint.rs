//! Geometry capabilities the tiler needs from a boundary
//!
//! The tiler never inspects boundary geometry directly. It only asks for a
//! bounding box and whether a candidate cell intersects the boundary, so any
//! `geo` geometry that can answer both questions can be tiled.

use geo::{BoundingRect, Intersects, Rect};

/// A geometry that can be covered by a cell lattice
pub trait Footprint {
    /// Axis-aligned bounding box, or `None` for an empty geometry
    fn bounds(&self) -> Option<Rect<f64>>;

    /// Whether `cell` shares at least one point with the geometry
    ///
    /// Touching counts: a cell meeting the geometry only along an edge or at
    /// a corner intersects it.
    fn intersects_cell(&self, cell: &Rect<f64>) -> bool;
}

impl<G> Footprint for G
where
    G: BoundingRect<f64> + Intersects<Rect<f64>>,
    G::Output: Into<Option<Rect<f64>>>,
{
    fn bounds(&self) -> Option<Rect<f64>> {
        self.bounding_rect().into()
    }

    fn intersects_cell(&self, cell: &Rect<f64>) -> bool {
        self.intersects(cell)
    }
}
