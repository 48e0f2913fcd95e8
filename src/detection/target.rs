//! Turning the raw argument into a [`Target`].

use std::path::PathBuf;

use super::entrypoint::{classify_directory, find_entrypoint};
use super::input::{classify_input, InputClass};
use super::runtime::{infer_file_runtime, runtime_for_command};
use super::types::Target;
use crate::config::Settings;
use crate::facts::FactLog;

/// Resolve the raw argument into a target, recording what was found.
pub fn resolve_target(raw: &str, settings: &Settings, log: &mut FactLog) -> Target {
    match classify_input(raw) {
        InputClass::Command(line) => resolve_command(&line, settings, log),
        InputClass::Path(path) => resolve_path(PathBuf::from(path), log),
    }
}

/// Tokenize a command line with shell word-splitting rules.
pub fn resolve_command(line: &str, settings: &Settings, log: &mut FactLog) -> Target {
    let tokens = match shell_words::split(line) {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::debug!("command tokenization failed: {}", e);
            log.add("command: parse_error");
            return Target::malformed_command();
        }
    };

    let Some(head) = tokens.first() else {
        log.add("command: empty");
        return Target::malformed_command();
    };

    let shown = tokens
        .iter()
        .take(settings.max_echoed_tokens)
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    let more = if tokens.len() > settings.max_echoed_tokens {
        " ..."
    } else {
        ""
    };
    log.add(format!("input: command={}{}", shown, more));

    let runtime = runtime_for_command(head);
    Target::command(tokens, runtime)
}

/// Resolve a filesystem path into a file, directory or not-found target.
pub fn resolve_path(path: PathBuf, log: &mut FactLog) -> Target {
    if path.is_file() {
        log.add(format!("input: file={}", path.display()));
        let runtime = infer_file_runtime(&path, log);
        return Target::file(path, runtime);
    }

    if path.is_dir() {
        log.add(format!("input: dir={}", path.display()));
        let entrypoint = find_entrypoint(&path, log);
        let (runtime, project_type) = classify_directory(&path, entrypoint.as_deref(), log);
        return Target::directory(path, entrypoint, runtime, project_type);
    }

    log.add("input: not_found");
    Target::not_found(path)
}
