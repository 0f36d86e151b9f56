//! Error types for the submission store
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which persisted half of a submission was absent on load
///
/// A submission is complete only when both its payload file and its
/// metadata entry exist. Either can be missing independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPart {
    /// The `<id>.txt` payload file does not exist
    PayloadFile,
    /// The metadata document has no entry for the id
    MetadataEntry,
}

impl fmt::Display for MissingPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingPart::PayloadFile => write!(f, "payload file"),
            MissingPart::MetadataEntry => write!(f, "metadata entry"),
        }
    }
}

/// Error types for the submission store
#[derive(Debug, Error)]
pub enum Error {
    /// Submission not found
    #[error("Submission '{id}' not found: no {missing}")]
    NotFound {
        /// Submission id that was requested
        id: String,
        /// Which persisted half was absent
        missing: MissingPart,
    },

    /// Submission id cannot be used as a filename stem
    #[error("Invalid submission id: {0}")]
    InvalidId(String),

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build a NotFound error for a missing payload file
    pub fn payload_not_found(id: impl Into<String>) -> Self {
        Error::NotFound {
            id: id.into(),
            missing: MissingPart::PayloadFile,
        }
    }

    /// Build a NotFound error for a missing metadata entry
    pub fn metadata_not_found(id: impl Into<String>) -> Self {
        Error::NotFound {
            id: id.into(),
            missing: MissingPart::MetadataEntry,
        }
    }

    /// True when the error signals a missing submission rather than a failed operation
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
