//! Boundary loading from ESRI shapefiles
//!
//! Every polygon record in the file is merged into one multi-polygon, so a
//! district split across several records is tiled as a whole. The coordinate
//! reference system travels as the raw WKT text of the `.prj` sidecar.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use geo::{Contains, Coord, LineString, MultiPolygon, Polygon, Rect, coord};
use shapefile::{PolygonRing, Shape};
use tracing::info;

use crate::grid::Footprint;
use crate::io::configuration::PROJECTION_EXTENSION;
use crate::io::error::{Result, TilingError, file_system};

/// Region of interest to be tiled
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    /// All polygon records merged
    pub geometry: MultiPolygon<f64>,
    /// Well-known text of the coordinate reference system, if one was provided
    pub crs: Option<String>,
}

impl Boundary {
    /// Create a boundary from an existing geometry
    pub const fn new(geometry: MultiPolygon<f64>, crs: Option<String>) -> Self {
        Self { geometry, crs }
    }

    /// Load a boundary shapefile and its optional `.prj` sidecar
    ///
    /// Polygon, `PolygonM` and `PolygonZ` records are accepted with measures and
    /// elevations dropped. Null records are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The shapefile is missing or cannot be parsed
    /// - A record is neither a polygon nor null
    /// - The `.prj` sidecar exists but cannot be read
    pub fn from_shapefile(path: &Path) -> Result<Self> {
        let shapes = shapefile::read_shapes(path).map_err(|source| TilingError::BoundaryLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let record_count = shapes.len();

        let mut polygons = Vec::new();
        for shape in shapes {
            match shape {
                Shape::NullShape => {}
                Shape::Polygon(polygon) => {
                    polygons.extend(rings_to_polygons(polygon.rings(), |p| {
                        coord! { x: p.x, y: p.y }
                    }));
                }
                Shape::PolygonM(polygon) => {
                    polygons.extend(rings_to_polygons(polygon.rings(), |p| {
                        coord! { x: p.x, y: p.y }
                    }));
                }
                Shape::PolygonZ(polygon) => {
                    polygons.extend(rings_to_polygons(polygon.rings(), |p| {
                        coord! { x: p.x, y: p.y }
                    }));
                }
                other => {
                    return Err(TilingError::UnsupportedShape {
                        path: path.to_path_buf(),
                        shape_type: format!("{:?}", other.shapetype()),
                    });
                }
            }
        }

        let crs = read_projection(&projection_path(path))?;
        let boundary = Self::new(MultiPolygon::new(polygons), crs);

        info!(
            path = %path.display(),
            records = record_count,
            polygons = boundary.geometry.0.len(),
            has_crs = boundary.crs.is_some(),
            "loaded boundary"
        );
        Ok(boundary)
    }

    /// Bounding box over every polygon, `None` when the boundary is empty
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.geometry.bounds()
    }
}

/// Sidecar path holding the coordinate reference system of `path`
pub fn projection_path(path: &Path) -> PathBuf {
    path.with_extension(PROJECTION_EXTENSION)
}

fn read_projection(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(wkt) => Ok(Some(wkt)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(file_system(path, "read projection")(e)),
    }
}

// Ring order within a record is arbitrary: each hole joins the first shell that
// contains it, and a hole no shell contains joins the last shell
fn rings_to_polygons<P>(
    rings: &[PolygonRing<P>],
    to_coord: impl Fn(&P) -> Coord<f64>,
) -> Vec<Polygon<f64>> {
    let to_line = |ring: &PolygonRing<P>| -> LineString<f64> {
        ring.points().iter().map(&to_coord).collect()
    };

    let mut polygons: Vec<Polygon<f64>> = rings
        .iter()
        .filter(|ring| matches!(ring, PolygonRing::Outer(_)))
        .map(|ring| Polygon::new(to_line(ring), Vec::new()))
        .collect();

    for ring in rings {
        if !matches!(ring, PolygonRing::Inner(_)) {
            continue;
        }
        let hole = to_line(ring);
        let shell = polygons
            .iter()
            .position(|polygon| {
                Polygon::new(polygon.exterior().clone(), Vec::new()).contains(&hole)
            })
            .or_else(|| polygons.len().checked_sub(1));
        match shell.and_then(|index| polygons.get_mut(index)) {
            Some(polygon) => polygon.interiors_push(hole),
            None => polygons.push(Polygon::new(hole, Vec::new())),
        }
    }
    polygons
}
