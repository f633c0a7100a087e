//! Error types for Recce operations.
//!
//! This module defines [`RecceError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Check failures are NOT errors: they are [`CheckOutcome`] values, so a
//!   malformed dataset or missing manifest produces a curated report line
//!   and a nonzero exit code, not an error return.
//! - `RecceError` covers the conditions outside the check contract: an
//!   invalid project root, unreadable files, and unexpected failures.
//!
//! [`CheckOutcome`]: crate::checks::CheckOutcome

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Recce operations.
#[derive(Debug, Error)]
pub enum RecceError {
    /// The injected project root does not exist or is not a directory.
    #[error("Project root not found: {path}")]
    InvalidProjectRoot { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Recce operations.
pub type Result<T> = std::result::Result<T, RecceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_project_root_displays_path() {
        let err = RecceError::InvalidProjectRoot {
            path: PathBuf::from("/no/such/project"),
        };
        assert!(err.to_string().contains("/no/such/project"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RecceError = io_err.into();
        assert!(matches!(err, RecceError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_transparently() {
        let err: RecceError = anyhow::anyhow!("unexpected failure").into();
        assert_eq!(err.to_string(), "unexpected failure");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(RecceError::InvalidProjectRoot {
                path: PathBuf::from("/tmp/missing"),
            })
        }
        assert!(returns_error().is_err());
    }
}
