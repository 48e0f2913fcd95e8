//! The check pipeline.
//!
//! raw argument → target → environment → (library short-circuit) → run
//! attempt → verdict. Every stage records facts into one [`FactLog`]; every
//! failure funnels into [`EnvChecker::check`], which produces exactly one
//! [`Verdict`].

use std::path::PathBuf;

use crate::config::Settings;
use crate::detection::{resolve_target, Target};
use crate::error::{EnvcheckError, Result};
use crate::facts::FactLog;
use crate::requirements::{parse_system_path, verify_environment};
use crate::runner::run_target;
use crate::verdict::Verdict;

/// What one check produced.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub verdict: Verdict,
    pub log: FactLog,
    /// The resolved target, if resolution was reached.
    pub target: Option<Target>,
}

/// Runs checks with fixed settings and a fixed runtime search path.
#[derive(Debug, Clone)]
pub struct EnvChecker {
    settings: Settings,
    search_path: Vec<PathBuf>,
}

impl EnvChecker {
    /// A checker that looks for runtimes on the process `PATH`.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            search_path: parse_system_path(),
        }
    }

    /// Replace the directories searched for runtime executables.
    pub fn with_search_path(mut self, entries: Vec<PathBuf>) -> Self {
        self.search_path = entries;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Check the raw positional arguments; anything but exactly one is a Failure.
    pub fn check_args(&self, args: &[String]) -> CheckReport {
        match args {
            [raw] => self.check(raw),
            _ => {
                let mut log = FactLog::from_settings(&self.settings);
                let err = EnvcheckError::ArgumentCount { count: args.len() };
                tracing::debug!("{}", err);
                log.add(err.fact());
                CheckReport {
                    verdict: Verdict::Failure,
                    log,
                    target: None,
                }
            }
        }
    }

    /// Check one raw argument.
    pub fn check(&self, raw: &str) -> CheckReport {
        let mut log = FactLog::from_settings(&self.settings);
        log.add(platform_fact());

        let target = resolve_target(raw, &self.settings, &mut log);
        tracing::debug!(
            "resolved {} target: runtime={} project_type={}",
            target.kind,
            target.runtime,
            target.project_type
        );

        let verdict = match self.evaluate(&target, &mut log) {
            Ok(verdict) => verdict,
            Err(e) => {
                tracing::debug!("check failed: {}", e);
                log.add(e.fact());
                Verdict::Failure
            }
        };

        CheckReport {
            verdict,
            log,
            target: Some(target),
        }
    }

    fn evaluate(&self, target: &Target, log: &mut FactLog) -> Result<Verdict> {
        let runtime = verify_environment(target, &self.search_path, &self.settings, log)?;

        if target.is_library() {
            tracing::debug!("library target; not running");
            return Ok(Verdict::Success);
        }

        run_target(target, &runtime, &self.settings, log)
    }
}

/// `platform: <os>_<arch>`.
pub fn platform_fact() -> String {
    format!(
        "platform: {}_{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
