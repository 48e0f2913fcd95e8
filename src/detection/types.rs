//! Target and classification types.

use std::fmt;
use std::path::{Path, PathBuf};

/// What kind of thing the argument describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
    Command,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetKind::File => "file",
            TargetKind::Directory => "dir",
            TargetKind::Command => "command",
        };
        f.write_str(name)
    }
}

/// Interpreter or toolchain needed to run a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    Python,
    Node,
    Bash,
    Go,
    Unknown,
}

impl Runtime {
    /// Executable names to look for, in search order.
    pub fn executables(self) -> &'static [&'static str] {
        match self {
            Runtime::Python => &["python3", "python"],
            Runtime::Node => &["node"],
            Runtime::Bash => &["bash", "sh"],
            Runtime::Go => &["go"],
            Runtime::Unknown => &[],
        }
    }

    /// Arguments that make the runtime print its version.
    pub fn version_args(self) -> &'static [&'static str] {
        match self {
            Runtime::Go => &["version"],
            _ => &["--version"],
        }
    }

    pub fn is_known(self) -> bool {
        self != Runtime::Unknown
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Runtime::Python => "python",
            Runtime::Node => "node",
            Runtime::Bash => "bash",
            Runtime::Go => "go",
            Runtime::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Whether a target is meant to be executed or only validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    App,
    Library,
    Unknown,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProjectType::App => "app",
            ProjectType::Library => "library",
            ProjectType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Resolved description of what will be checked and possibly run.
///
/// Construct through the named constructors, which keep `command` and
/// `entrypoint` consistent with `kind`: only command targets carry tokens,
/// and they never carry an entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub kind: TargetKind,
    pub path: Option<PathBuf>,
    pub command: Option<Vec<String>>,
    pub entrypoint: Option<PathBuf>,
    pub runtime: Runtime,
    pub project_type: ProjectType,
}

impl Target {
    /// A tokenized command line.
    pub fn command(tokens: Vec<String>, runtime: Runtime) -> Self {
        Self {
            kind: TargetKind::Command,
            path: None,
            command: Some(tokens),
            entrypoint: None,
            runtime,
            project_type: ProjectType::App,
        }
    }

    /// A command that could not be tokenized, or had no tokens.
    pub fn malformed_command() -> Self {
        Self {
            kind: TargetKind::Command,
            path: None,
            command: None,
            entrypoint: None,
            runtime: Runtime::Unknown,
            project_type: ProjectType::Unknown,
        }
    }

    /// A regular file that is its own entry point.
    pub fn file(path: PathBuf, runtime: Runtime) -> Self {
        Self {
            kind: TargetKind::File,
            entrypoint: Some(path.clone()),
            path: Some(path),
            command: None,
            runtime,
            project_type: ProjectType::App,
        }
    }

    /// A directory with an optional discovered entry point.
    pub fn directory(
        path: PathBuf,
        entrypoint: Option<PathBuf>,
        runtime: Runtime,
        project_type: ProjectType,
    ) -> Self {
        Self {
            kind: TargetKind::Directory,
            path: Some(path),
            command: None,
            entrypoint,
            runtime,
            project_type,
        }
    }

    /// A path that does not exist.
    pub fn not_found(path: PathBuf) -> Self {
        Self {
            kind: TargetKind::File,
            path: Some(path),
            command: None,
            entrypoint: None,
            runtime: Runtime::Unknown,
            project_type: ProjectType::Unknown,
        }
    }

    pub fn is_library(&self) -> bool {
        self.project_type == ProjectType::Library
    }

    /// Whether this is a command target with tokens to run.
    pub fn is_runnable_command(&self) -> bool {
        self.kind == TargetKind::Command && self.command.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Directory whose project files describe this target.
    ///
    /// The directory itself for directory targets, otherwise the entry
    /// point's parent. Command targets have none.
    pub fn base_dir(&self) -> Option<&Path> {
        match self.kind {
            TargetKind::Directory => self.path.as_deref(),
            _ => self.entrypoint.as_deref().map(|ep| match ep.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            }),
        }
    }

    /// Working directory for the run attempt; `None` means the caller's.
    pub fn working_dir(&self) -> Option<&Path> {
        match self.kind {
            TargetKind::Directory => self.path.as_deref(),
            _ => None,
        }
    }
}
