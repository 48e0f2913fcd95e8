//! Runtime inference from file extensions, shebangs and command names.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::types::Runtime;
use crate::facts::FactLog;
use crate::requirements::probe::is_executable;

/// File extension (lowercase, no dot) to runtime.
const EXTENSION_RUNTIMES: &[(&str, Runtime)] = &[
    ("py", Runtime::Python),
    ("js", Runtime::Node),
    ("sh", Runtime::Bash),
    ("go", Runtime::Go),
];

/// Command basename (lowercase) to runtime.
const COMMAND_RUNTIMES: &[(&str, Runtime)] = &[
    ("python", Runtime::Python),
    ("python3", Runtime::Python),
    ("py", Runtime::Python),
    ("node", Runtime::Node),
    ("bash", Runtime::Bash),
    ("sh", Runtime::Bash),
    ("go", Runtime::Go),
];

/// Shebang substring to runtime, checked in order.
const SHEBANG_RUNTIMES: &[(&str, Runtime)] = &[
    ("python", Runtime::Python),
    ("node", Runtime::Node),
    ("bash", Runtime::Bash),
    ("/sh", Runtime::Bash),
];

/// Longest first line read when looking for a shebang.
const SHEBANG_READ_LIMIT: u64 = 4096;

/// Runtime implied by a file's extension, if recognised.
pub fn runtime_for_extension(path: &Path) -> Option<Runtime> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    EXTENSION_RUNTIMES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, rt)| *rt)
}

/// Runtime implied by the head token of a command line.
///
/// Only the basename counts, case-insensitively, so `/usr/bin/Python3`
/// maps to python.
pub fn runtime_for_command(head: &str) -> Runtime {
    let name = Path::new(head)
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    COMMAND_RUNTIMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, rt)| *rt)
        .unwrap_or(Runtime::Unknown)
}

/// Runtime named by a shebang line, if it is one.
pub fn runtime_for_shebang(line: &str) -> Option<Runtime> {
    let line = line.trim();
    if !line.starts_with("#!") {
        return None;
    }
    SHEBANG_RUNTIMES
        .iter()
        .find(|(needle, _)| line.contains(needle))
        .map(|(_, rt)| *rt)
}

/// First line of a file, or an empty string if it cannot be read.
pub fn read_first_line(path: &Path) -> String {
    let Ok(file) = File::open(path) else {
        return String::new();
    };
    let mut reader = BufReader::new(file.take(SHEBANG_READ_LIMIT));
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).trim().to_string()
}

/// Infer the runtime needed to execute `path`.
///
/// The extension decides when recognised; otherwise the shebang does.
/// Shell scripts also record whether they carry the executable bit.
pub fn infer_file_runtime(path: &Path, log: &mut FactLog) -> Runtime {
    if let Some(runtime) = runtime_for_extension(path) {
        if runtime == Runtime::Bash {
            log.add(format!("executable: {}", executable_state(path)));
        }
        return runtime;
    }

    if let Some(runtime) = runtime_for_shebang(&read_first_line(path)) {
        return runtime;
    }

    log.add("runtime: unknown");
    Runtime::Unknown
}

fn executable_state(path: &Path) -> &'static str {
    match path.metadata() {
        Ok(_) if is_executable(path) => "yes",
        Ok(_) => "no",
        Err(_) => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn extension_table() {
        assert_eq!(runtime_for_extension(Path::new("a.py")), Some(Runtime::Python));
        assert_eq!(runtime_for_extension(Path::new("a.JS")), Some(Runtime::Node));
        assert_eq!(runtime_for_extension(Path::new("x/run.sh")), Some(Runtime::Bash));
        assert_eq!(runtime_for_extension(Path::new("main.go")), Some(Runtime::Go));
        assert_eq!(runtime_for_extension(Path::new("tool.rb")), None);
        assert_eq!(runtime_for_extension(Path::new("Makefile")), None);
    }

    #[test]
    fn command_table_uses_basename_case_insensitively() {
        assert_eq!(runtime_for_command("python3"), Runtime::Python);
        assert_eq!(runtime_for_command("/usr/bin/Python"), Runtime::Python);
        assert_eq!(runtime_for_command("py"), Runtime::Python);
        assert_eq!(runtime_for_command("node"), Runtime::Node);
        assert_eq!(runtime_for_command("/bin/sh"), Runtime::Bash);
        assert_eq!(runtime_for_command("go"), Runtime::Go);
        assert_eq!(runtime_for_command("ruby"), Runtime::Unknown);
        assert_eq!(runtime_for_command(""), Runtime::Unknown);
    }

    #[test]
    fn shebang_detection() {
        assert_eq!(
            runtime_for_shebang("#!/usr/bin/env python3"),
            Some(Runtime::Python)
        );
        assert_eq!(runtime_for_shebang("#!/usr/bin/env node"), Some(Runtime::Node));
        assert_eq!(runtime_for_shebang("#!/bin/bash"), Some(Runtime::Bash));
        assert_eq!(runtime_for_shebang("#!/bin/sh"), Some(Runtime::Bash));
        assert_eq!(runtime_for_shebang("#!/usr/bin/perl"), None);
        assert_eq!(runtime_for_shebang("python"), None);
    }

    #[test]
    fn infer_from_shebang_when_extension_unknown() {
        let temp = TempDir::new().unwrap();
        let script = temp.path().join("tool");
        fs::write(&script, "#!/usr/bin/env node\nconsole.log(1)\n").unwrap();

        let mut log = FactLog::new(10, 240);
        assert_eq!(infer_file_runtime(&script, &mut log), Runtime::Node);
        assert!(log.is_empty());
    }

    #[test]
    fn infer_unknown_records_fact() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.txt");
        fs::write(&file, "hello\n").unwrap();

        let mut log = FactLog::new(10, 240);
        assert_eq!(infer_file_runtime(&file, &mut log), Runtime::Unknown);
        assert!(log.contains("runtime: unknown"));
    }

    #[cfg(unix)]
    #[test]
    fn shell_scripts_record_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("run.sh");
        fs::write(&script, "echo hi\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();

        let mut log = FactLog::new(10, 240);
        assert_eq!(infer_file_runtime(&script, &mut log), Runtime::Bash);
        assert!(log.contains("executable: no"));

        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        let mut log = FactLog::new(10, 240);
        infer_file_runtime(&script, &mut log);
        assert!(log.contains("executable: yes"));
    }

    #[test]
    fn unreadable_file_has_empty_first_line() {
        assert_eq!(read_first_line(&PathBuf::from("/nonexistent/envcheck/x")), "");
    }
}
