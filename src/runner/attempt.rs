//! The single run attempt.
//!
//! Resolved → CommandBuilt → Spawned → Success | Failure. There is no
//! retry. A process still running when the wait expires counts as started
//! and therefore as Success; it is then asked to terminate.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

use super::plan::CommandPlan;
use crate::shell::terminate;

/// How the run attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Exited within the timeout with this code.
    Exited(i32),
    /// Exited within the timeout because of a signal.
    Signalled,
    /// Still running when the timeout expired.
    StillRunning,
    /// Could not be spawned.
    SpawnFailed(io::ErrorKind),
    /// Waiting on the child failed.
    WaitFailed,
}

impl RunOutcome {
    /// Whether this outcome counts as Success.
    ///
    /// A process that outlives the timeout is treated as a correctly
    /// started long-running program. A hung process and a slow-starting
    /// service look the same here.
    pub fn is_success(self) -> bool {
        matches!(self, RunOutcome::Exited(0) | RunOutcome::StillRunning)
    }

    /// The fact recorded for this outcome.
    pub fn fact(self) -> String {
        match self {
            RunOutcome::Exited(code) => format!("run: exit_code={}", code),
            RunOutcome::Signalled => "run: killed_by_signal".to_string(),
            RunOutcome::StillRunning => "run: timeout_running".to_string(),
            RunOutcome::SpawnFailed(io::ErrorKind::NotFound) => "run: not_found".to_string(),
            RunOutcome::SpawnFailed(_) => "run: spawn_error".to_string(),
            RunOutcome::WaitFailed => "run: wait_error".to_string(),
        }
    }

    fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => RunOutcome::Exited(code),
            None => RunOutcome::Signalled,
        }
    }
}

/// Spawn `plan` with all stdio discarded and wait at most `timeout`.
pub fn run_attempt(plan: &CommandPlan, timeout: Duration) -> RunOutcome {
    let mut cmd = Command::new(plan.program());
    cmd.args(plan.args())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    if let Some(cwd) = &plan.cwd {
        cmd.current_dir(cwd);
    }

    tracing::debug!("spawning: {}", plan.display());
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!("spawn failed: {}", e);
            return RunOutcome::SpawnFailed(e.kind());
        }
    };

    match child.wait_timeout(timeout) {
        Ok(Some(status)) => RunOutcome::from_status(status),
        Ok(None) => {
            tracing::debug!("still running after {:?}; terminating", timeout);
            terminate(&mut child);
            RunOutcome::StillRunning
        }
        Err(e) => {
            tracing::debug!("wait failed: {}", e);
            terminate(&mut child);
            RunOutcome::WaitFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::time::Instant;

    fn plan(argv: &[&str]) -> CommandPlan {
        CommandPlan {
            argv: argv.iter().map(OsString::from).collect(),
            cwd: None,
        }
    }

    #[test]
    fn outcome_verdicts() {
        assert!(RunOutcome::Exited(0).is_success());
        assert!(RunOutcome::StillRunning.is_success());
        assert!(!RunOutcome::Exited(1).is_success());
        assert!(!RunOutcome::Signalled.is_success());
        assert!(!RunOutcome::SpawnFailed(io::ErrorKind::NotFound).is_success());
        assert!(!RunOutcome::WaitFailed.is_success());
    }

    #[test]
    fn outcome_facts() {
        assert_eq!(RunOutcome::Exited(3).fact(), "run: exit_code=3");
        assert_eq!(RunOutcome::StillRunning.fact(), "run: timeout_running");
        assert_eq!(
            RunOutcome::SpawnFailed(io::ErrorKind::NotFound).fact(),
            "run: not_found"
        );
        assert_eq!(
            RunOutcome::SpawnFailed(io::ErrorKind::PermissionDenied).fact(),
            "run: spawn_error"
        );
    }

    #[test]
    fn nonexistent_program_fails_to_spawn() {
        let outcome = run_attempt(&plan(&["envcheck-no-such-program-12345"]), Duration::from_secs(1));
        assert_eq!(outcome, RunOutcome::SpawnFailed(io::ErrorKind::NotFound));
    }

    #[cfg(unix)]
    #[test]
    fn quick_exit_codes_are_reported() {
        let ok = run_attempt(&plan(&["sh", "-c", "exit 0"]), Duration::from_secs(5));
        assert_eq!(ok, RunOutcome::Exited(0));

        let bad = run_attempt(&plan(&["sh", "-c", "exit 1"]), Duration::from_secs(5));
        assert_eq!(bad, RunOutcome::Exited(1));
    }

    #[cfg(unix)]
    #[test]
    fn long_running_process_counts_as_started() {
        let start = Instant::now();
        let outcome = run_attempt(&plan(&["sleep", "10"]), Duration::from_millis(300));
        assert_eq!(outcome, RunOutcome::StillRunning);
        assert!(outcome.is_success());
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_requested_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker"), "").unwrap();
        let mut p = plan(&["sh", "-c", "test -f marker"]);
        p.cwd = Some(temp.path().to_path_buf());

        assert_eq!(run_attempt(&p, Duration::from_secs(5)), RunOutcome::Exited(0));
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_file_fails_to_spawn() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("tool");
        std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o644)).unwrap();

        let outcome = run_attempt(
            &plan(&[script.to_str().unwrap()]),
            Duration::from_secs(5),
        );
        assert_eq!(outcome, RunOutcome::SpawnFailed(io::ErrorKind::PermissionDenied));
        assert_eq!(outcome.fact(), "run: spawn_error");
    }
}
