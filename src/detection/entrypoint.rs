//! Entry point discovery and project classification for directories.

use std::path::{Path, PathBuf};

use super::file_detection::{file_exists, files_with_extension, has_files_with_extension};
use super::runtime::infer_file_runtime;
use super::types::{ProjectType, Runtime};
use crate::facts::FactLog;

/// Entry point names, highest priority first.
pub const ENTRYPOINT_CANDIDATES: &[&str] = &[
    "main.py", "run.py", "app.py", "index.js", "main.js", "run.sh", "main.sh", "main.go",
];

/// Extensions searched when no candidate name exists. The first extension
/// with any match wins, and within it the lexicographically first file.
pub const FALLBACK_EXTENSIONS: &[&str] = &["sh", "js", "go"];

/// Find the file to execute for a directory target.
pub fn find_entrypoint(dir: &Path, log: &mut FactLog) -> Option<PathBuf> {
    let found = ENTRYPOINT_CANDIDATES
        .iter()
        .find(|name| file_exists(dir, name))
        .map(|name| dir.join(name))
        .or_else(|| {
            FALLBACK_EXTENSIONS
                .iter()
                .find_map(|ext| files_with_extension(dir, ext).into_iter().next())
        });

    match &found {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            log.add(format!("entrypoint: {}", name));
        }
        None => {
            log.add("entrypoint: none");
        }
    }

    found
}

/// Decide runtime and project type for a directory.
///
/// With an entry point the directory is an app run by the entry point's
/// runtime. Without one, manifests decide: `package.json` makes a node
/// library, `pyproject.toml` or loose `.py` files a python library, and
/// `go.mod` a go library.
pub fn classify_directory(
    dir: &Path,
    entrypoint: Option<&Path>,
    log: &mut FactLog,
) -> (Runtime, ProjectType) {
    if let Some(ep) = entrypoint {
        return (infer_file_runtime(ep, log), ProjectType::App);
    }

    if file_exists(dir, "package.json") {
        return (Runtime::Node, ProjectType::Library);
    }

    let has_py_files = has_files_with_extension(dir, "py");
    if file_exists(dir, "pyproject.toml") || has_py_files {
        if has_py_files {
            log.add("python_dir: py_files_present");
        }
        return (Runtime::Python, ProjectType::Library);
    }

    if file_exists(dir, "go.mod") {
        return (Runtime::Go, ProjectType::Library);
    }

    (Runtime::Unknown, ProjectType::Unknown)
}
