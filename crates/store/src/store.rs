//! SubmissionStore: store, load, and expire submissions
//!
//! This module provides the main SubmissionStore struct that orchestrates:
//! - Payload file writes (one `<id>.txt` per submission, full overwrite)
//! - Metadata document updates (shared `metadata.json`, full rewrite)
//! - Retention sweeps, by default on every store and load
//!
//! The payload write and the metadata update are two separate operations
//! with no cross-operation atomicity. A crash between them leaves an
//! orphaned payload file without a metadata entry, which surfaces as a
//! NotFound on the next load rather than as corruption.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::debug;

use subvault_core::{Error, Logger, Result, TracingLogger};

use crate::config::{EvictionMode, StoreConfig};
use crate::metadata::{self, MetadataEntries, SubmissionMeta};
use crate::paths::{validate_submission_id, StorePaths};
use crate::retention::{sweep_decision, SweepDecision};

/// A submission returned by [`SubmissionStore::load`]
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSubmission {
    /// Payload lines in stored order
    pub payload: Vec<String>,
    /// Metadata entry recorded for the submission
    pub metadata: SubmissionMeta,
}

/// On-disk submission store
///
/// Persists line-oriented payloads under a base directory, one file per
/// submission, with indexing timestamps tracked in a shared metadata
/// document. Entries older than the configured retention window are
/// evicted; by default every store and load triggers a sweep.
///
/// The metadata load-mutate-save sequence is guarded by an in-process
/// mutex, so a shared store is safe to use from multiple threads of one
/// process. Concurrent processes mutating the same directory are not
/// supported.
///
/// # Example
///
/// ```ignore
/// use subvault_store::SubmissionStore;
///
/// let store = SubmissionStore::open("/var/lib/subvault")?;
/// store.store("sub1", &["line one", "line two"])?;
/// let loaded = store.load("sub1")?;
/// assert_eq!(loaded.payload, vec!["line one", "line two"]);
/// ```
pub struct SubmissionStore {
    paths: StorePaths,
    config: StoreConfig,
    logger: Arc<dyn Logger>,
    /// Serializes metadata load-mutate-save sequences
    meta_lock: Mutex<()>,
}

impl SubmissionStore {
    /// Open a store at `base_path` with the default configuration
    ///
    /// Creates the base directory and an empty metadata document when
    /// absent; an existing store is left untouched. Diagnostics go to
    /// [`TracingLogger`].
    pub fn open(base_path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(base_path, StoreConfig::default())
    }

    /// Open a store with an explicit configuration
    pub fn open_with_config(base_path: impl AsRef<Path>, config: StoreConfig) -> Result<Self> {
        Self::open_with_logger(base_path, config, Arc::new(TracingLogger))
    }

    /// Open a store with an explicit configuration and logger
    pub fn open_with_logger(
        base_path: impl AsRef<Path>,
        config: StoreConfig,
        logger: Arc<dyn Logger>,
    ) -> Result<Self> {
        let paths = StorePaths::from_base(base_path);
        paths.create_directories()?;

        let store = SubmissionStore {
            paths,
            config,
            logger,
            meta_lock: Mutex::new(()),
        };

        if !store.paths.exists() {
            metadata::save_document(&store.paths.metadata_file(), &MetadataEntries::new())?;
            debug!(
                target: "subvault::store",
                base = %store.paths.base().display(),
                "Created empty metadata document"
            );
        }

        Ok(store)
    }

    /// Base directory this store operates on
    pub fn base_path(&self) -> &Path {
        self.paths.base()
    }

    /// Configuration this store was opened with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Persist a submission payload and stamp its metadata entry
    ///
    /// The payload file is fully overwritten, one line per element with a
    /// trailing newline. The metadata entry for the id is replaced
    /// wholesale with a fresh UTC `date_indexed`. In the default eviction
    /// mode this also sweeps the store before returning.
    pub fn store<S: AsRef<str>>(&self, submission_id: &str, payload: &[S]) -> Result<()> {
        validate_submission_id(submission_id)?;

        let payload_file = self.paths.submission_file(submission_id);
        let mut body = String::new();
        for line in payload {
            body.push_str(line.as_ref());
            body.push('\n');
        }
        fs::write(&payload_file, body)?;

        {
            let _guard = self.meta_lock.lock();
            let mut entries = self.load_entries()?;
            entries.insert(submission_id.to_string(), SubmissionMeta::stamped_now());
            self.save_entries(&entries)?;
        }

        self.sweep_if_configured()?;

        self.logger.info(&format!(
            "Stored submission '{}' in '{}'.",
            submission_id,
            payload_file.display()
        ));
        Ok(())
    }

    /// Load a submission's payload and metadata entry
    ///
    /// Fails with [`Error::NotFound`] when the payload file or the
    /// metadata entry is absent. The payload file alone is not enough: a
    /// submission without a metadata entry is treated as missing. Both
    /// failures are reported through the logger before being returned.
    pub fn load(&self, submission_id: &str) -> Result<LoadedSubmission> {
        validate_submission_id(submission_id)?;

        let payload_file = self.paths.submission_file(submission_id);
        if !payload_file.exists() {
            self.logger
                .error(&format!("Submission file '{}.txt' not found.", submission_id));
            return Err(Error::payload_not_found(submission_id));
        }

        let raw = fs::read_to_string(&payload_file)?;
        let payload: Vec<String> = raw.split_terminator('\n').map(str::to_string).collect();

        let meta = self.load_entries()?.remove(submission_id);
        let meta = match meta {
            Some(meta) => meta,
            None => {
                self.logger.error(&format!(
                    "No metadata for submission '{}' in metadata.json.",
                    submission_id
                ));
                return Err(Error::metadata_not_found(submission_id));
            }
        };

        self.logger
            .info(&format!("Loaded submission '{}'.", submission_id));

        self.sweep_if_configured()?;

        Ok(LoadedSubmission {
            payload,
            metadata: meta,
        })
    }

    /// Load only a submission's payload lines
    ///
    /// Convenience wrapper over [`load`](Self::load) with the same
    /// failure modes.
    pub fn load_payload(&self, submission_id: &str) -> Result<Vec<String>> {
        self.load(submission_id).map(|loaded| loaded.payload)
    }

    /// Evict submissions older than the configured retention window
    ///
    /// Returns the number of submissions deleted.
    pub fn cleanup(&self) -> Result<usize> {
        self.cleanup_older_than(self.config.retention_days)
    }

    /// Evict submissions older than an explicit threshold in days
    ///
    /// Age compares at whole-day granularity, so a submission stored
    /// earlier the same day survives a zero-day threshold. Entries with a
    /// missing or unparseable `date_indexed` are retained and reported as
    /// warnings. Payload files already gone are tolerated. The metadata
    /// document is rewritten even when nothing was evicted.
    pub fn cleanup_older_than(&self, older_than_days: u32) -> Result<usize> {
        self.logger.info(&format!(
            "Cleaning up submissions older than {} days...",
            older_than_days
        ));

        let now = Utc::now();
        let _guard = self.meta_lock.lock();
        let mut entries = self.load_entries()?;

        let mut to_delete: Vec<String> = Vec::new();
        for (submission_id, meta) in &entries {
            match sweep_decision(meta, now, older_than_days) {
                SweepDecision::Keep => {}
                SweepDecision::Evict => to_delete.push(submission_id.clone()),
                SweepDecision::MissingTimestamp => {
                    self.logger.warning(&format!(
                        "No 'date_indexed' for submission '{}', skipping.",
                        submission_id
                    ));
                }
                SweepDecision::UnparseableTimestamp { reason } => {
                    self.logger.warning(&format!(
                        "Cannot parse date for '{}' (value: {}). Error: {}",
                        submission_id,
                        meta.date_indexed.as_deref().unwrap_or(""),
                        reason
                    ));
                }
            }
        }

        for submission_id in &to_delete {
            let payload_file = self.paths.submission_file(submission_id);
            match fs::remove_file(&payload_file) {
                Ok(()) => {
                    self.logger.info(&format!(
                        "Deleted file '{}' for old submission '{}'.",
                        payload_file.display(),
                        submission_id
                    ));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!(
                        target: "subvault::store",
                        path = %payload_file.display(),
                        "Payload file already absent"
                    );
                }
                Err(e) => return Err(e.into()),
            }
            entries.remove(submission_id);
        }

        self.save_entries(&entries)?;

        if to_delete.is_empty() {
            self.logger.info("No old submissions found to delete.");
        } else {
            self.logger.info(&format!(
                "Deleted {} submissions older than {} days.",
                to_delete.len(),
                older_than_days
            ));
        }

        Ok(to_delete.len())
    }

    fn load_entries(&self) -> Result<MetadataEntries> {
        metadata::load_document(&self.paths.metadata_file(), self.logger.as_ref())
    }

    fn save_entries(&self, entries: &MetadataEntries) -> Result<()> {
        metadata::save_document(&self.paths.metadata_file(), entries)
    }

    fn sweep_if_configured(&self) -> Result<()> {
        match self.config.eviction {
            EvictionMode::OnEveryAccess => self.cleanup().map(|_| ()),
            EvictionMode::Manual => Ok(()),
        }
    }
}
