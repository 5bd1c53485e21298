//! Application error types using thiserror
//!
//! Error hierarchy:
//! - RewriteError: Failures while reading or writing a single source file
//! - IoError: Directory lookup failures
//! - AppError: Top-level wrapper returned by the orchestrator

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Source file related errors
    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    /// Directory related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Failed to emit progress output
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors related to rewriting a single source file
#[derive(Error, Debug)]
pub enum RewriteError {
    /// Failed to read source file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file is not valid UTF-8
    #[error("{path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    /// Failed to write source file
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to directory operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
}

impl RewriteError {
    /// Creates a ReadError, mapping invalid-data reads to InvalidUtf8
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            RewriteError::InvalidUtf8 { path }
        } else {
            RewriteError::ReadError { path, source }
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RewriteError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl IoError {
    /// Creates a new DirectoryNotFound error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        IoError::DirectoryNotFound { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_read_error() {
        let err = RewriteError::read_error(
            "src/App.tsx",
            std::io::Error::new(ErrorKind::NotFound, "no such file"),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read"));
        assert!(msg.contains("App.tsx"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_read_error_invalid_data_becomes_invalid_utf8() {
        let err = RewriteError::read_error(
            "src/logo.ts",
            std::io::Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        assert!(matches!(err, RewriteError::InvalidUtf8 { .. }));
        assert!(format!("{}", err).contains("not valid UTF-8"));
    }

    #[test]
    fn test_write_error() {
        let err = RewriteError::write_error(
            "src/App.tsx",
            std::io::Error::new(ErrorKind::PermissionDenied, "read-only file system"),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("failed to write"));
        assert!(msg.contains("read-only file system"));
    }

    #[test]
    fn test_io_error_directory_not_found() {
        let err = IoError::directory_not_found("/path/to/src");
        let msg = format!("{}", err);
        assert!(msg.contains("directory not found"));
        assert!(msg.contains("/path/to/src"));
    }

    #[test]
    fn test_app_error_from_rewrite_error() {
        let rewrite_err = RewriteError::InvalidUtf8 {
            path: PathBuf::from("src/a.ts"),
        };
        let app_err: AppError = rewrite_err.into();
        assert!(format!("{}", app_err).contains("not valid UTF-8"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let app_err: AppError = IoError::directory_not_found("/missing").into();
        assert!(format!("{}", app_err).contains("directory not found"));
    }

    #[test]
    fn test_app_error_from_std_io_error() {
        let app_err: AppError = std::io::Error::new(ErrorKind::BrokenPipe, "pipe closed").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("failed to write output"));
        assert!(msg.contains("pipe closed"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = IoError::directory_not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("DirectoryNotFound"));
    }
}
