//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use polygrid::TilingError;
    use polygrid::io::error::invalid_parameter;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = TilingError::FileSystem {
            path: "/restricted/grids".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("/restricted/grids"));
        assert!(message.contains("create directory"));
        assert!(message.contains("denied"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("cell_size", &-1.0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("cell_size"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
        assert!(error.source().is_none());
    }

    // Tests unsupported shape errors name the file and shape type
    // Verified by omitting the shape type from the message
    #[test]
    fn test_unsupported_shape_error() {
        let error = TilingError::UnsupportedShape {
            path: PathBuf::from("roads.shp"),
            shape_type: "Polyline".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("roads.shp"));
        assert!(message.contains("Polyline"));
    }
}
