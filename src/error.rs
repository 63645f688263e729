use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Cannot read {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File already exists: {}", path.display())]
    OutputAlreadyExists { path: PathBuf },

    #[error("Cannot create {}: {source}", path.display())]
    OutputCreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing to {}: {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("{count} input files given; pass --accumulate to combine them into one list")]
    MultipleInputs { count: usize },

    #[error("No files match \"{pattern}\"")]
    NoInputs { pattern: String },

    #[error("Invalid file pattern \"{pattern}\": {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn source_unavailable_names_path() {
        let e = AppError::SourceUnavailable {
            path: PathBuf::from("drinks.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(e.to_string(), "Cannot read drinks.txt: not found");
    }

    #[test]
    fn output_already_exists_display() {
        let e = AppError::OutputAlreadyExists {
            path: PathBuf::from("2026-01-01-20-15-strecklista.txt"),
        };
        assert_eq!(
            e.to_string(),
            "File already exists: 2026-01-01-20-15-strecklista.txt"
        );
    }

    #[test]
    fn output_write_failed_display() {
        let e = AppError::OutputWriteFailed {
            path: PathBuf::from("out.txt"),
            source: io::Error::other("disk full"),
        };
        assert_eq!(e.to_string(), "Error writing to out.txt: disk full");
    }

    #[test]
    fn multiple_inputs_display() {
        let e = AppError::MultipleInputs { count: 3 };
        assert_eq!(
            e.to_string(),
            "3 input files given; pass --accumulate to combine them into one list"
        );
    }

    #[test]
    fn invalid_timezone_display() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn source_error_is_exposed() {
        use std::error::Error as _;
        let e = AppError::SourceUnavailable {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.source().is_some());
    }
}
