//! Store configuration
//!
//! Controls the retention window and when eviction sweeps run.

/// Default retention window, in days
pub const DEFAULT_RETENTION_DAYS: u32 = 28;

/// When eviction sweeps run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionMode {
    /// Sweep on every store and load, plus explicit cleanup calls (default)
    ///
    /// Every access pays a full O(submission count) sweep. Acceptable at
    /// the small store sizes this component targets.
    #[default]
    OnEveryAccess,

    /// Sweep only on explicit cleanup calls
    Manual,
}

/// Store configuration
///
/// Controls how the store ages out submissions.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Retention window in days; entries aged beyond it are evicted
    pub retention_days: u32,
    /// When eviction sweeps run
    pub eviction: EvictionMode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            retention_days: DEFAULT_RETENTION_DAYS,
            eviction: EvictionMode::OnEveryAccess,
        }
    }
}

impl StoreConfig {
    /// Set the retention window
    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    /// Set the eviction mode
    pub fn with_eviction(mut self, mode: EvictionMode) -> Self {
        self.eviction = mode;
        self
    }

    /// Create config for testing
    ///
    /// Sweeps only on explicit cleanup calls so tests control eviction
    /// timing.
    pub fn for_testing() -> Self {
        StoreConfig::default().with_eviction(EvictionMode::Manual)
    }
}
