//! The verdict and its output contract.
//!
//! One line on stdout (`SUCCESS` or `FAIL`), exit code 0 or 1, and the fact
//! log written just before.

use std::fmt;
use std::process::ExitCode;

use crate::config::Settings;
use crate::facts::FactLog;

/// Terminal outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure,
}

impl Verdict {
    pub fn from_success(ok: bool) -> Self {
        if ok {
            Verdict::Success
        } else {
            Verdict::Failure
        }
    }

    /// The word printed on stdout.
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Success => "SUCCESS",
            Verdict::Failure => "FAIL",
        }
    }

    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Success => 0,
            Verdict::Failure => 1,
        }
    }

    /// Persist the log, print the verdict word and return the exit code.
    ///
    /// A log write failure is traced and otherwise ignored; it never
    /// changes the verdict.
    pub fn emit(self, log: &FactLog, settings: &Settings) -> ExitCode {
        if let Err(e) = log.write_to(&settings.log_path) {
            tracing::warn!("could not write {}: {}", settings.log_path.display(), e);
        }
        println!("{}", self.as_str());
        ExitCode::from(self.exit_code())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
