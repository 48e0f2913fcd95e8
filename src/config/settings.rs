//! Policy constants for a single check.

use std::path::PathBuf;
use std::time::Duration;

/// Fixed relative path of the fact log.
pub const DEFAULT_LOG_PATH: &str = "envcheck.log";

/// Maximum number of facts kept in the log.
pub const LOG_CAPACITY: usize = 10;

/// Maximum length of a single fact, in characters.
pub const FACT_MAX_CHARS: usize = 240;

/// How long the single run attempt is waited on.
pub const RUN_TIMEOUT: Duration = Duration::from_secs(3);

/// How long a runtime's version query may take.
pub const VERSION_TIMEOUT: Duration = Duration::from_secs(2);

/// Settings that apply to one check.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where the fact log is written (overwritten on every run)
    pub log_path: PathBuf,

    /// Maximum facts kept; later facts are dropped
    pub log_capacity: usize,

    /// Maximum characters per fact
    pub fact_max_chars: usize,

    /// Wait ceiling for the run attempt
    pub run_timeout: Duration,

    /// Wait ceiling for version and import probes
    pub version_timeout: Duration,

    /// Maximum package names parsed from requirements.txt
    pub max_probed_packages: usize,

    /// Maximum missing package names echoed into the log
    pub max_reported_missing: usize,

    /// Maximum command tokens echoed into the log
    pub max_echoed_tokens: usize,

    /// Maximum characters kept from a version line
    pub version_max_chars: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_capacity: LOG_CAPACITY,
            fact_max_chars: FACT_MAX_CHARS,
            run_timeout: RUN_TIMEOUT,
            version_timeout: VERSION_TIMEOUT,
            max_probed_packages: 12,
            max_reported_missing: 6,
            max_echoed_tokens: 6,
            version_max_chars: 120,
        }
    }
}

impl Settings {
    /// Same settings with a different run timeout.
    pub fn with_run_timeout(mut self, timeout: Duration) -> Self {
        self.run_timeout = timeout;
        self
    }

    /// Same settings with a different log location.
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }
}
