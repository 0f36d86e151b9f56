//! Store directory structure
//!
//! A store is a flat directory containing the shared metadata document
//! and one payload file per submission:
//!
//! ```text
//! store/
//! ├── metadata.json    # submission_id → {date_indexed}
//! ├── sub1.txt         # payload lines for "sub1"
//! └── sub2.txt
//! ```

use std::path::{Path, PathBuf};
use subvault_core::{Error, Result};

/// Name of the shared metadata document inside the store directory
pub const METADATA_FILE: &str = "metadata.json";

/// Extension of payload files
const PAYLOAD_EXT: &str = "txt";

/// Store directory paths
///
/// Provides access to all paths within a store directory.
#[derive(Debug, Clone)]
pub struct StorePaths {
    /// Base store directory
    base: PathBuf,
}

impl StorePaths {
    /// Create paths from the base directory
    pub fn from_base(base: impl AsRef<Path>) -> Self {
        StorePaths {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// Get the base store directory
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Get the metadata document path
    pub fn metadata_file(&self) -> PathBuf {
        self.base.join(METADATA_FILE)
    }

    /// Get the payload file path for a submission id
    ///
    /// The id is used verbatim as the filename stem; run
    /// [`validate_submission_id`] on caller input first.
    pub fn submission_file(&self, submission_id: &str) -> PathBuf {
        self.base.join(format!("{}.{}", submission_id, PAYLOAD_EXT))
    }

    /// Check if a store exists at this path
    ///
    /// A store exists once the metadata document is present.
    pub fn exists(&self) -> bool {
        self.metadata_file().exists()
    }

    /// Create the base directory (idempotent)
    pub fn create_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.base)
    }
}

/// Reject submission ids that cannot serve as a filename stem
///
/// Ids become `<id>.txt` inside the base directory, so empty strings,
/// path separators, NUL bytes, and dot traversals are refused up front.
pub fn validate_submission_id(submission_id: &str) -> Result<()> {
    if submission_id.is_empty() {
        return Err(Error::InvalidId("(empty)".to_string()));
    }
    if submission_id == "." || submission_id == ".." {
        return Err(Error::InvalidId(submission_id.to_string()));
    }
    if submission_id
        .chars()
        .any(|c| c == '/' || c == '\\' || c == '\0')
    {
        return Err(Error::InvalidId(submission_id.to_string()));
    }
    Ok(())
}
