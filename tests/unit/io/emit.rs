//! Tests for per-cell shapefile export

#[cfg(test)]
mod tests {
    use geo::coord;
    use polygrid::TilingError;
    use polygrid::grid::{Cell, CellSize};
    use polygrid::io::boundary::Boundary;
    use polygrid::io::emit::{cell_path, emit, write_cell};
    use polygrid::io::progress::ProgressManager;
    use std::fs;
    use tempfile::TempDir;

    const CRS: &str = "GEOGCS[\"WGS 84\"]";

    fn cells(n: usize) -> Vec<Cell> {
        let size = CellSize::new(0.5).unwrap();
        (0..n)
            .map(|i| Cell::new(coord! { x: i as f64 * 0.5, y: 0.0 }, size))
            .collect()
    }

    // Tests cell files are named by zero-based index
    // Verified by starting the index at one
    #[test]
    fn test_cell_path_naming() {
        let dir = TempDir::new().unwrap();
        assert_eq!(cell_path(dir.path(), 0), dir.path().join("grid_0.shp"));
        assert_eq!(cell_path(dir.path(), 12), dir.path().join("grid_12.shp"));
    }

    // Tests one complete shapefile set per cell is written in order
    // Verified by skipping the last cell
    #[test]
    fn test_emit_writes_one_set_per_cell() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("grids");

        let written = emit(&cells(3), None, &out, None).unwrap();

        assert_eq!(written.len(), 3);
        for (i, path) in written.iter().enumerate() {
            assert_eq!(path, &cell_path(&out, i));
            assert!(path.exists());
            assert!(path.with_extension("shx").exists());
            assert!(path.with_extension("dbf").exists());
            assert!(!path.with_extension("prj").exists());
        }
    }

    // Tests each written file reads back as exactly the cell polygon
    // Verified by writing the cell origin twice in the ring
    #[test]
    fn test_written_cell_reads_back() {
        let dir = TempDir::new().unwrap();
        let cell = Cell::new(coord! { x: 1.0, y: 2.0 }, CellSize::new(0.25).unwrap());

        let path = write_cell(7, &cell, None, dir.path()).unwrap();
        let boundary = Boundary::from_shapefile(&path).unwrap();

        assert_eq!(boundary.geometry.0.len(), 1);
        let bounds = boundary.bounds().unwrap();
        assert_eq!(bounds.min(), coord! { x: 1.0, y: 2.0 });
        assert_eq!(bounds.max(), coord! { x: 1.25, y: 2.25 });
    }

    // Tests the boundary projection is copied next to each cell
    // Verified by writing the projection only for the first cell
    #[test]
    fn test_emit_copies_projection() {
        let dir = TempDir::new().unwrap();

        let written = emit(&cells(2), Some(CRS), dir.path(), None).unwrap();

        for path in &written {
            let prj = fs::read_to_string(path.with_extension("prj")).unwrap();
            assert_eq!(prj, CRS);
        }
    }

    // Tests an empty cell list still creates the directory and writes nothing
    // Verified by returning early before directory creation
    #[test]
    fn test_emit_empty_creates_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested").join("grids");

        let written = emit(&[], None, &out, None).unwrap();

        assert!(written.is_empty());
        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    // Tests directory creation failure is fatal
    // Verified by ignoring the create_dir_all result
    #[test]
    fn test_emit_fails_when_output_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "not a directory").unwrap();

        let result = emit(&cells(1), None, &blocker, None);

        assert!(matches!(result, Err(TilingError::FileSystem { .. })));
    }

    // Tests a failed cell write stops the remaining writes
    // Verified by skipping failed cells and continuing the loop
    #[test]
    fn test_emit_aborts_after_failed_write() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(cell_path(dir.path(), 1)).unwrap();

        let result = emit(&cells(3), None, dir.path(), None);

        assert!(matches!(result, Err(TilingError::ShapefileWrite { .. })));
        assert!(cell_path(dir.path(), 0).exists());
        assert!(!cell_path(dir.path(), 2).exists());
    }

    // Tests progress is advanced once per written cell
    // Verified by advancing before the write loop
    #[test]
    fn test_emit_reports_progress() {
        let dir = TempDir::new().unwrap();
        let mut pm = ProgressManager::new();

        emit(&cells(4), None, dir.path(), Some(&mut pm)).unwrap();

        assert_eq!(pm.written(), 4);
    }
}
