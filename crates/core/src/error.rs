//! Error types for texprose operations.
//!
//! This module defines the main error type [`TexproseError`] which represents
//! all possible errors that can occur while loading and stripping a document.
//!
//! # Example
//!
//! ```rust
//! use texprose_core::{Result, TexproseError};
//!
//! fn load(path: &str) -> Result<String> {
//!     if path.is_empty() {
//!         return Err(TexproseError::FileNotFound(path.into()));
//!     }
//!     // ... loading logic
//!     # Ok(String::new())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for LaTeX stripping operations.
///
/// File access failures are fatal and propagated; a document without body
/// markers is *not* an error (see [`crate::extract_body`]), only malformed
/// configuration and I/O are.
#[derive(Error, Debug)]
pub enum TexproseError {
    /// Input file not found.
    ///
    /// Returned when attempting to read a `.tex` file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read errors.
    ///
    /// Wraps standard I/O errors for file operations.
    #[error("Failed to read input file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Invalid stopword pattern.
    ///
    /// Stopword entries are compiled as regular expressions; a malformed
    /// entry in the configuration surfaces here.
    #[error("Invalid strip pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Output serialization errors.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for TexproseError.
///
/// This is a convenience alias for `std::result::Result<T, TexproseError>`.
pub type Result<T> = std::result::Result<T, TexproseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = TexproseError::FileNotFound(PathBuf::from("/missing/paper.tex"));
        assert!(err.to_string().contains("paper.tex"));
    }

    #[test]
    fn test_invalid_pattern_display() {
        let err = TexproseError::from(regex::Regex::new("(").unwrap_err());
        assert!(err.to_string().contains("Invalid strip pattern"));
    }

    #[test]
    fn test_read_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = TexproseError::from(io);
        assert!(matches!(err, TexproseError::ReadError(_)));
    }
}
