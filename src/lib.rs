//! Subvault - On-disk submission store with retention-based eviction
//!
//! Subvault persists line-oriented submission payloads as plain text files,
//! one per submission, alongside a shared JSON metadata document that tracks
//! when each submission was indexed. Submissions older than the retention
//! window are evicted automatically on every store and load.
//!
//! # Quick Start
//!
//! ```ignore
//! use subvault::SubmissionStore;
//!
//! // Open (or create) a store directory
//! let store = SubmissionStore::open("/var/lib/subvault")?;
//!
//! // Persist a payload
//! store.store("sub1", &["first line", "second line"])?;
//!
//! // Read it back
//! let loaded = store.load("sub1")?;
//! assert_eq!(loaded.payload, vec!["first line", "second line"]);
//! ```
//!
//! # Architecture
//!
//! All operations go through [`SubmissionStore`], which owns the directory
//! layout, the metadata document, and the retention sweeps. Error and
//! logging vocabulary lives in `subvault-core`; everything is re-exported
//! here so callers depend on a single crate.

// Re-export the public API from the member crates
pub use subvault_core::*;
pub use subvault_store::*;
