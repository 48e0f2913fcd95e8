//! Building the concrete command line for a target.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::detection::{Runtime, Target, TargetKind};
use crate::error::{EnvcheckError, Result};

/// A command ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPlan {
    /// Program followed by its arguments; never empty.
    pub argv: Vec<OsString>,
    /// Working directory, or `None` for the caller's.
    pub cwd: Option<PathBuf>,
}

impl CommandPlan {
    pub fn program(&self) -> &OsString {
        &self.argv[0]
    }

    pub fn args(&self) -> &[OsString] {
        &self.argv[1..]
    }

    /// Space-joined rendering for diagnostics.
    pub fn display(&self) -> String {
        self.argv
            .iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Build the command line for `target`.
///
/// Command targets run their own tokens. File and directory targets run
/// their entry point through `runtime_exe` (`go run` for go), and the entry
/// point must be an existing regular file.
pub fn build_plan(target: &Target, runtime_exe: &Path) -> Result<CommandPlan> {
    if target.kind == TargetKind::Command {
        let tokens = target
            .command
            .as_ref()
            .filter(|tokens| !tokens.is_empty())
            .ok_or(EnvcheckError::CommandMissing)?;
        return Ok(CommandPlan {
            argv: tokens.iter().map(OsString::from).collect(),
            cwd: None,
        });
    }

    let entrypoint = checked_entrypoint(target)?;
    let exe = runtime_exe.as_os_str().to_os_string();
    let ep = entrypoint.into_os_string();

    let argv = match target.runtime {
        Runtime::Python | Runtime::Node | Runtime::Bash => vec![exe, ep],
        Runtime::Go => vec![exe, OsString::from("run"), ep],
        Runtime::Unknown => return Err(EnvcheckError::UnknownRuntime),
    };

    Ok(CommandPlan {
        argv,
        cwd: target.working_dir().map(Path::to_path_buf),
    })
}

/// The entry point as an absolute path, after checking it is a regular file.
///
/// Directory targets run inside the directory, so a path relative to the
/// caller would no longer resolve.
fn checked_entrypoint(target: &Target) -> Result<PathBuf> {
    let ep = target
        .entrypoint
        .as_deref()
        .ok_or(EnvcheckError::EntrypointMissing)?;

    if !ep.try_exists().unwrap_or(false) {
        return Err(EnvcheckError::EntrypointNotFound {
            path: ep.to_path_buf(),
        });
    }
    if !ep.is_file() {
        return Err(EnvcheckError::EntrypointNotFile {
            path: ep.to_path_buf(),
        });
    }

    Ok(std::path::absolute(ep).unwrap_or_else(|_| ep.to_path_buf()))
}
