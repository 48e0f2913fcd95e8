//! Runtime lookup and version probing.
//!
//! Runtimes are resolved by walking PATH entries directly rather than by
//! shelling out to `which`, so lookups behave the same on every system and
//! can be pointed at an arbitrary list of directories.
//!
//! # Example
//!
//! ```no_run
//! use envcheck::detection::Runtime;
//! use envcheck::requirements::probe::{locate_runtime, parse_system_path};
//!
//! if let Some(exe) = locate_runtime(Runtime::Python, &parse_system_path()) {
//!     println!("python at {}", exe.display());
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::detection::Runtime;
use crate::shell::execute_captured;

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for name in candidate_names(tool) {
            let candidate = dir.join(&name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(windows)]
fn candidate_names(tool: &str) -> Vec<String> {
    vec![format!("{}.exe", tool), tool.to_string()]
}

#[cfg(not(windows))]
fn candidate_names(tool: &str) -> Vec<String> {
    vec![tool.to_string()]
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Find the installed executable for a runtime, trying its names in order.
///
/// Every name is tried across the whole search path before the next name,
/// so `python3` anywhere beats `python` earlier on PATH.
pub fn locate_runtime(runtime: Runtime, path_entries: &[PathBuf]) -> Option<PathBuf> {
    runtime
        .executables()
        .iter()
        .find_map(|name| resolve_tool_path(name, path_entries))
}

/// What a runtime reported when asked for its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionReport {
    /// First line of output, truncated.
    Line(String),
    /// The runtime ran but printed nothing.
    Unknown,
    /// The runtime could not be run or did not answer in time.
    Error,
}

impl VersionReport {
    /// The fact recorded for this report.
    pub fn fact(&self) -> String {
        match self {
            VersionReport::Line(line) => format!("runtime_version: {}", line),
            VersionReport::Unknown => "runtime_version: unknown".to_string(),
            VersionReport::Error => "runtime_version: error".to_string(),
        }
    }
}

/// Ask `exe` for its version, waiting at most `timeout`.
///
/// The first line of stdout is used, or of stderr when stdout is empty.
/// A nonzero exit does not matter as long as something was printed.
pub fn probe_version(
    exe: &Path,
    runtime: Runtime,
    timeout: Duration,
    max_chars: usize,
) -> VersionReport {
    match execute_captured(exe.as_os_str(), runtime.version_args(), timeout) {
        Ok(result) => match result.first_line() {
            Some(line) => VersionReport::Line(line.chars().take(max_chars).collect()),
            None => VersionReport::Unknown,
        },
        Err(e) => {
            tracing::debug!("version probe failed: {:#}", e);
            VersionReport::Error
        }
    }
}
