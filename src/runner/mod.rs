//! Run orchestration: one attempt, one verdict.
//!
//! - [`plan`] builds the command line for a target
//! - [`attempt`] spawns it and applies the timeout policy

pub mod attempt;
pub mod plan;

use crate::config::Settings;
use crate::detection::Target;
use crate::error::Result;
use crate::facts::FactLog;
use crate::requirements::RuntimeProbe;
use crate::verdict::Verdict;

pub use attempt::{run_attempt, RunOutcome};
pub use plan::{build_plan, CommandPlan};

/// Build, spawn and judge the single run attempt for `target`.
///
/// Errors mean no process was spawned; the caller turns them into Failure.
pub fn run_target(
    target: &Target,
    runtime: &RuntimeProbe,
    settings: &Settings,
    log: &mut FactLog,
) -> Result<Verdict> {
    let plan = build_plan(target, &runtime.executable)?;
    let outcome = run_attempt(&plan, settings.run_timeout);
    log.add(outcome.fact());
    Ok(Verdict::from_success(outcome.is_success()))
}
