//! Core types and traits for Subvault
//!
//! This crate defines the foundational vocabulary used throughout the system:
//! - Error: error type hierarchy for store operations
//! - Result: result alias over that error type
//! - MissingPart: which persisted half of a submission was absent on load
//! - Logger: diagnostic collaborator trait, with a tracing-backed production
//!   implementation and an in-memory recording implementation for tests

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod logger;

pub use error::{Error, MissingPart, Result};
pub use logger::{LogLevel, Logger, RecordingLogger, TracingLogger};
