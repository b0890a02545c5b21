//! Core error types for exhale-core.
//!
//! This module defines the error hierarchy using thiserror. Derivation
//! functions in [`crate::progress`] are total and never appear here;
//! errors only arise from profile/journal mutation and storage.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for exhale-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Profile validation errors
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Journal errors
    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Data directory could not be resolved or created
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),
}

/// Profile validation errors.
///
/// Raised at profile construction/update time; once a profile exists it is
/// valid by construction and every derivation over it is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// A configuration invariant was violated (positive integers/amounts).
    #[error("Invalid profile: {field} must be positive (got {value})")]
    InvalidProfile { field: &'static str, value: String },
}

/// Journal errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    /// Craving rating outside the allowed 1..=5 range.
    #[error("Craving rating must be between 1 and 5 (got {0})")]
    CravingOutOfRange(u8),

    /// Entry not found for deletion.
    #[error("Journal entry not found: {0}")]
    EntryNotFound(uuid::Uuid),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
