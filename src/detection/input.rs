//! Deciding whether the raw argument is a command line or a path.
//!
//! Both questions are ambiguous for strings with spaces, so existence on
//! disk breaks the tie. The existence check is injected so the rules can be
//! exercised without touching the filesystem.

use std::io;
use std::path::Path;

/// How the raw argument should be treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputClass {
    /// A filesystem path (surrounding whitespace and quotes removed).
    Path(String),
    /// A shell-style command line to tokenize, quotes included.
    Command(String),
}

impl InputClass {
    pub fn is_command(&self) -> bool {
        matches!(self, InputClass::Command(_))
    }
}

/// Content between one matching pair of `'` or `"` wrapping the whole
/// (trimmed) string.
pub fn unquote_if_wrapped(raw: &str) -> Option<&str> {
    let s = raw.trim();
    let first = s.chars().next()?;
    if s.len() >= 2 && (first == '\'' || first == '"') && s.ends_with(first) {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}

/// Classify using the real filesystem.
pub fn classify_input(raw: &str) -> InputClass {
    classify_input_with(raw, |p: &Path| p.try_exists())
}

/// Classify with a custom existence check.
///
/// 1. Quoted: a path if the unquoted content exists, else a command that
///    keeps its quotes. An existence error counts as "does not exist".
/// 2. Contains whitespace: a path only if the whole string exists. An
///    existence error counts as a command.
/// 3. Otherwise: a path.
pub fn classify_input_with<F>(raw: &str, exists: F) -> InputClass
where
    F: Fn(&Path) -> io::Result<bool>,
{
    let s = raw.trim();

    if let Some(inner) = unquote_if_wrapped(s) {
        return match exists(Path::new(inner)) {
            Ok(true) => InputClass::Path(inner.to_string()),
            _ => InputClass::Command(s.to_string()),
        };
    }

    if s.chars().any(char::is_whitespace) {
        return match exists(Path::new(s)) {
            Ok(true) => InputClass::Path(s.to_string()),
            _ => InputClass::Command(s.to_string()),
        };
    }

    InputClass::Path(s.to_string())
}
