//! envcheck - Single-shot environment and readiness checker.
//!
//! Given one argument (a file, a directory, or a shell command line),
//! envcheck works out what kind of runnable thing it is, checks that the
//! runtime it needs is installed, records facts about the project, makes
//! exactly one attempt to run it, and reports `SUCCESS` or `FAIL`.
//!
//! # Modules
//!
//! - [`check`] - The pipeline from raw argument to verdict
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Policy constants (timeouts, log bounds)
//! - [`detection`] - Input classification and target resolution
//! - [`error`] - Error types and result aliases
//! - [`facts`] - The bounded fact log
//! - [`requirements`] - Runtime lookup, version and project facts
//! - [`runner`] - Command building and the single run attempt
//! - [`shell`] - Bounded process execution helpers
//! - [`verdict`] - Verdict and output contract
//!
//! # Example
//!
//! ```
//! use envcheck::check::EnvChecker;
//! use envcheck::config::Settings;
//! use envcheck::verdict::Verdict;
//!
//! let report = EnvChecker::new(Settings::default()).check("/no/such/target.py");
//! assert_eq!(report.verdict, Verdict::Failure);
//! assert!(report.log.contains("input: not_found"));
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod facts;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod verdict;

pub use error::{EnvcheckError, Result};
