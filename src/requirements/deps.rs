//! Best-effort dependency probe for python targets.
//!
//! Package names are read from `requirements.txt` and checked for
//! importability inside the resolved python runtime. The result is a signal
//! only: a package's import name can differ from its distribution name, so
//! both false positives and false negatives happen, and the verdict never
//! depends on this probe.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{bail, Context};
use regex::Regex;

use crate::config::Settings;
use crate::detection::{Runtime, Target};
use crate::facts::FactLog;
use crate::shell::execute_captured;

/// Version specifier operators; a name ends at the first one.
static SPECIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"==|>=|<=|~=|!=|>|<").expect("specifier pattern is valid"));

/// Prints the index of every argument whose module cannot be found.
const IMPORT_CHECK: &str = "\
import importlib.util, sys
for i, name in enumerate(sys.argv[1:]):
    try:
        found = importlib.util.find_spec(name) is not None
    except Exception:
        found = False
    if not found:
        print(i)
";

/// Extract at most `max` package names from requirements.txt contents.
///
/// Comments, blank lines, option lines (`-r`, `--index-url`) and VCS/URL
/// requirements are skipped. Environment markers, extras and version
/// specifiers are stripped.
pub fn parse_requirements(text: &str, max: usize) -> Vec<String> {
    let mut names = Vec::new();

    for line in text.lines() {
        if names.len() >= max {
            break;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('-') || line.contains("://") || line.starts_with("git+") {
            continue;
        }

        let without_marker = line.split(';').next().unwrap_or_default().trim();
        let Some(word) = without_marker.split_whitespace().next() else {
            continue;
        };
        let without_extras = word.split('[').next().unwrap_or_default();
        let name = SPECIFIER
            .split(without_extras)
            .next()
            .unwrap_or_default()
            .trim();

        if !name.is_empty() {
            names.push(name.to_string());
        }
    }

    names
}

/// Module name most likely provided by a distribution name.
pub fn module_guess(package: &str) -> String {
    package.replace('-', "_")
}

/// Run the dependency probe for a python target with a requirements.txt.
///
/// Records `deps_probe: ...` facts and, when something is missing, up to
/// `max_reported_missing` names in a `deps_missing: ...` fact. Never fails.
pub fn probe_requirements(target: &Target, python: &Path, settings: &Settings, log: &mut FactLog) {
    if target.runtime != Runtime::Python {
        return;
    }
    let Some(base) = target.base_dir() else {
        return;
    };
    let requirements = base.join("requirements.txt");
    if !requirements.is_file() {
        return;
    }

    let text = match fs::read(&requirements) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::debug!("could not read {}: {}", requirements.display(), e);
            log.add("deps_probe: requirements_read_error");
            return;
        }
    };

    let packages = parse_requirements(&text, settings.max_probed_packages);
    if packages.is_empty() {
        log.add("deps_probe: no_packages_parsed");
        return;
    }

    let missing = match missing_packages(python, &packages, settings) {
        Ok(missing) => missing,
        Err(e) => {
            tracing::debug!("import check failed: {:#}", e);
            log.add("deps_probe: error");
            return;
        }
    };

    log.add(format!(
        "deps_probe: checked={} missing={}",
        packages.len(),
        missing.len()
    ));
    if !missing.is_empty() {
        let shown = missing
            .iter()
            .take(settings.max_reported_missing)
            .cloned()
            .collect::<Vec<_>>()
            .join(",");
        let more = if missing.len() > settings.max_reported_missing {
            " ..."
        } else {
            ""
        };
        log.add(format!("deps_missing: {}{}", shown, more));
    }
}

/// Packages whose guessed module the interpreter cannot find.
fn missing_packages(
    python: &Path,
    packages: &[String],
    settings: &Settings,
) -> anyhow::Result<Vec<String>> {
    let mut args = vec!["-c".to_string(), IMPORT_CHECK.to_string()];
    args.extend(packages.iter().map(|p| module_guess(p)));

    let result = execute_captured(python.as_os_str(), &args, settings.version_timeout)
        .context("run import check")?;
    if !result.success {
        bail!("import check exited with {:?}", result.exit_code);
    }

    let mut missing = Vec::new();
    for line in result.stdout.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let index: usize = line
            .parse()
            .with_context(|| format!("unexpected import check output: {}", line))?;
        let package = packages
            .get(index)
            .with_context(|| format!("import check index out of range: {}", index))?;
        missing.push(package.clone());
    }
    Ok(missing)
}
