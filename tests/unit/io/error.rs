//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use maskcount::QuantifyError;
    use maskcount::io::error::{file_system_error, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = QuantifyError::FileSystem {
            path: "/tmp/grid6".into(),
            operation: "read directory",
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    // Tests cluster file message names directory and count
    // Verified by omitting count from message
    #[test]
    fn test_missing_cluster_file_message() {
        let error = QuantifyError::MissingOrAmbiguousClusterFile {
            dir: PathBuf::from("/data/Grid7_Pos2"),
            found: 2,
        };

        let message = error.to_string();
        assert!(message.contains("/data/Grid7_Pos2"));
        assert!(message.contains("found 2"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("px_size_clusters", &-1.0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("px_size_clusters"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
    }

    // Tests UnreadableMask keeps its decoding source
    // Verified by excluding source error from message
    #[test]
    fn test_unreadable_mask_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "bad header",
        ));
        let error = QuantifyError::UnreadableMask {
            path: PathBuf::from("masks/nucleus.tif"),
            source: image_error,
        };

        assert!(error.to_string().contains("masks/nucleus.tif"));
        assert!(error.to_string().contains("bad header"));
        assert!(error.source().is_some());
    }

    // Tests which errors stay local to a mask
    // Verified by marking cluster errors as mask-local
    #[test]
    fn test_mask_local_errors() {
        let empty = QuantifyError::EmptyImage {
            path: PathBuf::from("m.png"),
        };
        let cluster = QuantifyError::ClusterLoad {
            path: PathBuf::from("c.hdf5"),
            reason: "corrupt".to_string(),
        };

        assert!(empty.is_mask_local());
        assert!(!cluster.is_mask_local());
    }

    // Tests file system errors name the path and the operation
    // Verified by reporting a placeholder path
    #[test]
    fn test_file_system_error_names_path() {
        let error = file_system_error("/data/Grid6_Pos1", "read directory")(
            std::io::Error::other("boom"),
        );

        let message = error.to_string();
        assert!(message.contains("/data/Grid6_Pos1"));
        assert!(message.contains("read directory"));
        assert!(message.contains("boom"));
    }

    // Tests batch summary error wording
    // Verified by swapping failed and total
    #[test]
    fn test_batch_incomplete_message() {
        let error = QuantifyError::BatchIncomplete {
            failed: 1,
            total: 4,
        };
        assert_eq!(
            error.to_string(),
            "1 of 4 directories could not be processed"
        );
    }
}
