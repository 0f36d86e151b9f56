//! Submission storage for Subvault
//!
//! This crate implements the on-disk submission store:
//! - SubmissionStore: store/load/cleanup over a base directory
//! - StorePaths: directory layout (shared metadata.json, one payload file
//!   per submission)
//! - StoreConfig / EvictionMode: retention window and sweep trigger
//! - Metadata document types with atomic full-document rewrites
//! - Retention decision logic (whole-day age comparison)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod metadata;
pub mod paths;
pub mod retention;
pub mod store;

pub use config::{EvictionMode, StoreConfig, DEFAULT_RETENTION_DAYS};
pub use metadata::{MetadataEntries, SubmissionMeta};
pub use paths::{StorePaths, METADATA_FILE};
pub use retention::{sweep_decision, SweepDecision};
pub use store::{LoadedSubmission, SubmissionStore};
