//! Metadata document types and persistence
//!
//! The metadata document is one JSON object shared by every submission in
//! the store, mapping submission id to its entry:
//!
//! ```json
//! {
//!   "sub1": { "date_indexed": "2024-06-01T12:00:00+00:00" }
//! }
//! ```
//!
//! Loading tolerates a missing or malformed document: it degrades to an
//! empty one, reported through the store's logger as a warning. Saving
//! rewrites the whole document atomically (temp file + rename) so no
//! partial document is ever observable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

use subvault_core::{Logger, Result};

/// Entries of the metadata document, keyed by submission id
///
/// BTreeMap keeps the serialized document deterministically ordered.
pub type MetadataEntries = BTreeMap<String, SubmissionMeta>;

/// Per-submission metadata entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionMeta {
    /// UTC timestamp recorded when the submission was stored
    ///
    /// Kept as a string so one malformed value degrades per entry during
    /// eviction instead of making the whole document unreadable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_indexed: Option<String>,

    /// Fields this version does not interpret, preserved across rewrites
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SubmissionMeta {
    /// Entry stamped with the current UTC time
    pub fn stamped_now() -> Self {
        SubmissionMeta {
            date_indexed: Some(Utc::now().to_rfc3339()),
            extra: BTreeMap::new(),
        }
    }

    /// Parse `date_indexed` as a UTC timestamp
    ///
    /// Returns None when the field is absent or is not a valid RFC 3339
    /// timestamp. Offset-less strings fail the parse; retention treats
    /// them conservatively rather than guessing a timezone.
    pub fn date_indexed_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.date_indexed.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Read the metadata document at `path`
///
/// A missing file or unparseable content degrades to an empty document,
/// reported through `logger` as a warning. Callers cannot distinguish
/// "no metadata yet" from "metadata lost". Any other I/O failure
/// propagates.
pub fn load_document(path: &Path, logger: &dyn Logger) -> Result<MetadataEntries> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logger.warning(&format!(
                "Cannot load metadata.json properly, returning empty metadata. Error: {}",
                e
            ));
            return Ok(MetadataEntries::new());
        }
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => Ok(entries),
        Err(e) => {
            debug!(
                target: "subvault::store",
                path = %path.display(),
                error = %e,
                "Metadata document failed to parse"
            );
            logger.warning(&format!(
                "Cannot load metadata.json properly, returning empty metadata. Error: {}",
                e
            ));
            Ok(MetadataEntries::new())
        }
    }
}

/// Atomically rewrite the metadata document at `path`
///
/// Writes pretty-printed JSON to a temp file in the same directory, syncs
/// it, then renames over the target. A stale temp file from a previous
/// failed attempt is removed first; on failure the temp file is cleaned
/// up and no partial document replaces the old one.
pub fn save_document(path: &Path, entries: &MetadataEntries) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    if temp_path.exists() {
        warn!(target: "subvault::store", path = %temp_path.display(), "Removing stale temp file");
        let _ = std::fs::remove_file(&temp_path);
    }

    let body = serde_json::to_string_pretty(entries)?;

    let written = (|| -> Result<()> {
        let mut file = File::create(&temp_path)?;
        file.write_all(body.as_bytes())?;
        file.sync_all()?;
        Ok(())
    })();

    match written {
        Ok(()) => match std::fs::rename(&temp_path, path) {
            Ok(()) => {
                debug!(target: "subvault::store", path = %path.display(), "Metadata document rewritten");
                Ok(())
            }
            Err(e) => {
                warn!(
                    target: "subvault::store",
                    temp_path = %temp_path.display(),
                    error = %e,
                    "Rename failed, cleaning up temp file"
                );
                let _ = std::fs::remove_file(&temp_path);
                Err(e.into())
            }
        },
        Err(e) => {
            warn!(
                target: "subvault::store",
                temp_path = %temp_path.display(),
                error = %e,
                "Write failed, cleaning up temp file"
            );
            let _ = std::fs::remove_file(&temp_path);
            Err(e)
        }
    }
}
