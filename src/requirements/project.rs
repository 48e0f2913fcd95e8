//! Project facts: manifests, lockfiles and environments next to the target.

use std::path::Path;

use crate::detection::file_detection::{any_dir_exists, any_file_exists, entry_exists};
use crate::detection::{ProjectType, Runtime, Target};
use crate::facts::FactLog;

const VENV_DIRS: &[&str] = &[".venv", "venv", "env"];
const NODE_LOCKFILES: &[&str] = &["package-lock.json", "yarn.lock", "pnpm-lock.yaml"];

fn presence(found: bool) -> &'static str {
    if found {
        "present"
    } else {
        "absent"
    }
}

/// Record project facts for the target's runtime.
///
/// Nothing is recorded for targets without a base directory (commands and
/// paths that do not exist).
pub fn record_project_facts(target: &Target, log: &mut FactLog) {
    let Some(base) = target.base_dir() else {
        return;
    };

    if target.project_type != ProjectType::Unknown {
        log.add(format!("project_type: {}", target.project_type));
    }

    match target.runtime {
        Runtime::Python => python_facts(base, log),
        Runtime::Node => node_facts(base, log),
        Runtime::Go => {
            log.add(format!("go_mod: {}", presence(entry_exists(base, "go.mod"))));
        }
        Runtime::Bash | Runtime::Unknown => {}
    }
}

fn python_facts(base: &Path, log: &mut FactLog) {
    log.add(format!(
        "pyproject: {}",
        presence(entry_exists(base, "pyproject.toml"))
    ));
    log.add(format!(
        "requirements_txt: {}",
        presence(entry_exists(base, "requirements.txt"))
    ));
    log.add(format!(
        "venv: {}",
        presence(any_dir_exists(base, VENV_DIRS).is_some())
    ));
}

fn node_facts(base: &Path, log: &mut FactLog) {
    log.add(format!(
        "package_json: {}",
        presence(entry_exists(base, "package.json"))
    ));
    log.add(format!(
        "lockfile: {}",
        presence(any_file_exists(base, NODE_LOCKFILES).is_some())
    ));
    log.add(format!(
        "node_modules: {}",
        presence(entry_exists(base, "node_modules"))
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn python_facts_for_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "requests\n").unwrap();
        fs::create_dir(temp.path().join(".venv")).unwrap();
        let target = Target::directory(
            temp.path().to_path_buf(),
            Some(temp.path().join("main.py")),
            Runtime::Python,
            ProjectType::App,
        );

        let mut log = FactLog::new(10, 240);
        record_project_facts(&target, &mut log);
        assert_eq!(
            log.facts(),
            &[
                "project_type: app",
                "pyproject: absent",
                "requirements_txt: present",
                "venv: present",
            ]
        );
    }

    #[test]
    fn node_facts_use_entrypoint_parent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::write(temp.path().join("pnpm-lock.yaml"), "").unwrap();
        let script = temp.path().join("index.js");
        fs::write(&script, "").unwrap();
        let target = Target::file(script, Runtime::Node);

        let mut log = FactLog::new(10, 240);
        record_project_facts(&target, &mut log);
        assert!(log.contains("package_json: present"));
        assert!(log.contains("lockfile: present"));
        assert!(log.contains("node_modules: absent"));
    }

    #[test]
    fn go_facts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("go.mod"), "module x\n").unwrap();
        let target = Target::directory(
            temp.path().to_path_buf(),
            None,
            Runtime::Go,
            ProjectType::Library,
        );

        let mut log = FactLog::new(10, 240);
        record_project_facts(&target, &mut log);
        assert_eq!(log.facts(), &["project_type: library", "go_mod: present"]);
    }

    #[test]
    fn commands_have_no_project_facts() {
        let target = Target::command(vec!["node".into()], Runtime::Node);
        let mut log = FactLog::new(10, 240);
        record_project_facts(&target, &mut log);
        assert!(log.is_empty());
    }

    #[test]
    fn missing_paths_have_no_project_facts() {
        let target = Target::not_found(PathBuf::from("/nonexistent/envcheck"));
        let mut log = FactLog::new(10, 240);
        record_project_facts(&target, &mut log);
        assert!(log.is_empty());
    }
}
