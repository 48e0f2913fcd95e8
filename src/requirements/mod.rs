//! Environment verification.
//!
//! Confirms that the runtime a target needs is installed and gathers facts
//! about the project around it. Only a missing runtime is fatal; project
//! facts and the dependency probe are informational.
//!
//! # Modules
//!
//! - [`probe`] - Runtime lookup on the search path and version probing
//! - [`project`] - Manifest, lockfile and environment presence facts
//! - [`deps`] - Best-effort importability probe for python requirements

pub mod deps;
pub mod probe;
pub mod project;

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::detection::{Runtime, Target};
use crate::error::{EnvcheckError, Result};
use crate::facts::FactLog;

pub use probe::{locate_runtime, parse_system_path, probe_version, VersionReport};

/// A runtime found on the search path.
#[derive(Debug, Clone)]
pub struct RuntimeProbe {
    pub executable: PathBuf,
}

/// Resolve and describe the runtime for `target`.
///
/// Fails if the runtime is unknown or not installed. Version and project
/// facts are recorded along the way and never fail the call.
pub fn verify_environment(
    target: &Target,
    path_entries: &[PathBuf],
    settings: &Settings,
    log: &mut FactLog,
) -> Result<RuntimeProbe> {
    if !target.runtime.is_known() {
        return Err(EnvcheckError::UnknownRuntime);
    }

    let executable = locate_runtime(target.runtime, path_entries).ok_or(
        EnvcheckError::RuntimeMissing {
            runtime: target.runtime,
        },
    )?;
    tracing::debug!("{} runtime at {}", target.runtime, executable.display());

    let version = probe_version(
        &executable,
        target.runtime,
        settings.version_timeout,
        settings.version_max_chars,
    );
    log.add(version.fact());

    project::record_project_facts(target, log);
    probe_dependencies(target, &executable, settings, log);

    Ok(RuntimeProbe { executable })
}

fn probe_dependencies(target: &Target, executable: &Path, settings: &Settings, log: &mut FactLog) {
    if target.runtime == Runtime::Python {
        deps::probe_requirements(target, executable, settings, log);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::ProjectType;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn unknown_runtime_fails() {
        let target = Target::not_found(PathBuf::from("/nonexistent/envcheck"));
        let mut log = FactLog::new(10, 240);
        let err = verify_environment(&target, &parse_system_path(), &Settings::default(), &mut log)
            .unwrap_err();
        assert!(matches!(err, EnvcheckError::UnknownRuntime));
    }

    #[test]
    fn missing_runtime_fails_without_facts() {
        let temp = TempDir::new().unwrap();
        let target = Target::command(vec!["go".into(), "run".into()], Runtime::Go);
        let mut log = FactLog::new(10, 240);

        let err = verify_environment(
            &target,
            &[temp.path().to_path_buf()],
            &Settings::default(),
            &mut log,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EnvcheckError::RuntimeMissing {
                runtime: Runtime::Go
            }
        ));
        assert!(log.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn found_runtime_records_version_and_project_facts() {
        use std::os::unix::fs::PermissionsExt;

        let bin = TempDir::new().unwrap();
        let node = bin.path().join("node");
        fs::write(&node, "#!/bin/sh\necho v99.0.0\n").unwrap();
        fs::set_permissions(&node, fs::Permissions::from_mode(0o755)).unwrap();

        let project = TempDir::new().unwrap();
        fs::write(project.path().join("package.json"), "{}").unwrap();
        let target = Target::directory(
            project.path().to_path_buf(),
            None,
            Runtime::Node,
            ProjectType::Library,
        );

        let mut log = FactLog::new(10, 240);
        let probe = verify_environment(
            &target,
            &[bin.path().to_path_buf()],
            &Settings::default(),
            &mut log,
        )
        .unwrap();

        assert_eq!(probe.executable, node);
        assert_eq!(
            log.facts(),
            &[
                "runtime_version: v99.0.0",
                "project_type: library",
                "package_json: present",
                "lockfile: absent",
                "node_modules: absent",
            ]
        );
    }
}
