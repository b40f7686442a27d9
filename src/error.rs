// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Sift
//!
//! The history filter itself never fails; these errors come from the
//! surrounding plumbing (settings, session listings, CLI input).

use thiserror::Error;

/// Main error type for Sift operations
#[derive(Error, Debug)]
pub enum SiftError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The session listing could not be read
    #[error("Session listing error: {0}")]
    Listing(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No session with the requested id
    #[error("Session #{0} not found")]
    NotFound(i64),
}

/// Result type alias for Sift operations
pub type Result<T> = std::result::Result<T, SiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sift_error_config() {
        let err = SiftError::Config("bad config".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_sift_error_listing() {
        let err = SiftError::Listing("missing file".to_string());
        assert_eq!(err.to_string(), "Session listing error: missing file");
    }

    #[test]
    fn test_sift_error_not_found() {
        let err = SiftError::NotFound(42);
        assert_eq!(err.to_string(), "Session #42 not found");
    }

    #[test]
    fn test_sift_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let sift_err: SiftError = io_err.into();
        assert!(sift_err.to_string().contains("IO error"));
    }

    #[test]
    fn test_sift_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let sift_err: SiftError = json_err.into();
        assert!(matches!(sift_err, SiftError::Json(_)));
    }

    #[test]
    fn test_sift_error_debug() {
        let err = SiftError::InvalidInput("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidInput"));
    }

    #[test]
    fn test_result_error() {
        fn test_fn() -> Result<i32> {
            Err(SiftError::InvalidInput("test".to_string()))
        }

        assert!(test_fn().is_err());
    }
}
