//! Filesystem queries used during detection.
//!
//! Every query treats an access error as a negative answer; none of them
//! propagate errors.

use std::fs;
use std::path::{Path, PathBuf};

/// Check if `name` is a regular file inside `dir`.
pub fn file_exists(dir: &Path, name: &str) -> bool {
    dir.join(name).is_file()
}

/// Check if `name` is a directory inside `dir`.
pub fn dir_exists(dir: &Path, name: &str) -> bool {
    dir.join(name).is_dir()
}

/// Check if `name` exists inside `dir`, whatever its type.
pub fn entry_exists(dir: &Path, name: &str) -> bool {
    dir.join(name).exists()
}

/// Return the first of `files` that exists inside `dir`.
pub fn any_file_exists(dir: &Path, files: &[&str]) -> Option<String> {
    files
        .iter()
        .find(|f| entry_exists(dir, f))
        .map(|f| f.to_string())
}

/// Return the first of `dirs` that is a directory inside `dir`.
pub fn any_dir_exists(dir: &Path, dirs: &[&str]) -> Option<String> {
    dirs.iter()
        .find(|d| dir_exists(dir, d))
        .map(|d| d.to_string())
}

/// Regular files directly inside `dir` whose name ends with `.{ext}`,
/// sorted by name. Hidden files are included.
pub fn files_with_extension(dir: &Path, ext: &str) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let suffix = format!(".{}", ext);

    let mut names: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(&suffix)
        })
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name())
        .collect();
    names.sort();

    names.into_iter().map(|n| dir.join(n)).collect()
}

/// Check if `dir` directly contains any regular file ending in `.{ext}`.
pub fn has_files_with_extension(dir: &Path, ext: &str) -> bool {
    !files_with_extension(dir, ext).is_empty()
}
