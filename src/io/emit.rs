//! Per-cell shapefile export
//!
//! Each retained cell becomes its own `grid_<index>` shapefile set holding a
//! single polygon record, plus a `.prj` copy of the boundary's coordinate
//! reference system when the boundary had one.

use std::path::{Path, PathBuf};

use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};
use shapefile::{Point, PolygonRing};
use tracing::debug;

use crate::grid::Cell;
use crate::io::configuration::{
    CELL_FILE_PREFIX, ID_FIELD_LENGTH, ID_FIELD_NAME, PROJECTION_EXTENSION,
};
use crate::io::error::{Result, TilingError, file_system};
use crate::io::progress::ProgressManager;

/// Path of the `.shp` file written for the cell at `index`
pub fn cell_path(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(format!("{CELL_FILE_PREFIX}{index}.shp"))
}

/// Write every cell to `output_dir`, creating the directory if needed
///
/// Files are named by each cell's position in `cells`. The first failed write
/// aborts the remaining ones.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or any cell fails to
/// write
pub fn emit(
    cells: &[Cell],
    crs: Option<&str>,
    output_dir: &Path,
    mut progress: Option<&mut ProgressManager>,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir).map_err(file_system(output_dir, "create directory"))?;

    if let Some(pm) = progress.as_deref_mut() {
        pm.initialize(cells.len());
    }

    let mut written = Vec::with_capacity(cells.len());
    for (index, cell) in cells.iter().enumerate() {
        let path = write_cell_with_field(index, cell, crs, output_dir, id_field()?)?;
        if let Some(pm) = progress.as_deref_mut() {
            pm.advance(&path);
        }
        written.push(path);
    }

    if let Some(pm) = progress {
        pm.finish();
    }

    Ok(written)
}

/// Write a single cell as `grid_<index>` inside `output_dir`
///
/// # Errors
///
/// Returns an error if the shapefile set or its `.prj` sidecar cannot be written
pub fn write_cell(
    index: usize,
    cell: &Cell,
    crs: Option<&str>,
    output_dir: &Path,
) -> Result<PathBuf> {
    write_cell_with_field(index, cell, crs, output_dir, id_field()?)
}

fn id_field() -> Result<FieldName> {
    FieldName::try_from(ID_FIELD_NAME).map_err(|e| TilingError::AttributeTable {
        field: ID_FIELD_NAME,
        reason: e.to_string(),
    })
}

fn write_cell_with_field(
    index: usize,
    cell: &Cell,
    crs: Option<&str>,
    output_dir: &Path,
    field: FieldName,
) -> Result<PathBuf> {
    let path = cell_path(output_dir, index);
    let table = TableWriterBuilder::new().add_numeric_field(field, ID_FIELD_LENGTH, 0);

    let mut record = Record::default();
    record.insert(ID_FIELD_NAME.to_string(), FieldValue::Numeric(Some(0.0)));

    {
        let mut writer =
            shapefile::Writer::from_path(&path, table).map_err(|source| {
                TilingError::ShapefileWrite {
                    path: path.clone(),
                    source,
                }
            })?;
        writer
            .write_shape_and_record(&cell_shape(cell), &record)
            .map_err(|source| TilingError::ShapefileWrite {
                path: path.clone(),
                source,
            })?;
    }

    if let Some(wkt) = crs {
        let prj = path.with_extension(PROJECTION_EXTENSION);
        std::fs::write(&prj, wkt).map_err(file_system(prj, "write projection"))?;
    }

    debug!(index, path = %path.display(), "wrote cell");
    Ok(path)
}

// Outer rings run clockwise in the ESRI layout
fn cell_shape(cell: &Cell) -> shapefile::Polygon {
    let rect = cell.rect();
    let (min, max) = (rect.min(), rect.max());
    shapefile::Polygon::new(PolygonRing::Outer(vec![
        Point::new(min.x, min.y),
        Point::new(min.x, max.y),
        Point::new(max.x, max.y),
        Point::new(max.x, min.y),
        Point::new(min.x, min.y),
    ]))
}
