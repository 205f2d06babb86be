//! Error types for declaration loading and building.
//!
//! Provides a unified error type covering I/O, serialization, declaration
//! validation and container construction failures.

use optgroup_core::ContainerError;
use thiserror::Error;

use crate::DeclValidationError;

/// Errors that can occur while loading or building a declaration.
#[derive(Debug, Error)]
pub enum DeclError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The declaration is structurally invalid.
    #[error("invalid declaration: {0}")]
    Invalid(#[from] DeclValidationError),

    /// Building or sealing a container failed (e.g. a name clash).
    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    /// The file extension does not name a known format.
    #[error("unsupported declaration format: {0}")]
    UnsupportedFormat(String),
}

/// Convenience alias for results with [`DeclError`].
pub type Result<T> = std::result::Result<T, DeclError>;
