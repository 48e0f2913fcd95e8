//! The fact log.
//!
//! A check records short factual lines (`runtime: missing`,
//! `run: exit_code=1`) as it goes. The log is bounded: once it holds
//! `capacity` facts, further facts are dropped and earlier ones are never
//! evicted. It is written to disk once, right before the verdict is printed.

use std::fs;
use std::path::Path;

use crate::config::Settings;
use crate::error::Result;

/// Append-only, capacity-bounded list of sanitized facts.
#[derive(Debug, Clone)]
pub struct FactLog {
    facts: Vec<String>,
    capacity: usize,
    max_chars: usize,
}

impl FactLog {
    /// Create an empty log with explicit bounds.
    pub fn new(capacity: usize, max_chars: usize) -> Self {
        Self {
            facts: Vec::with_capacity(capacity),
            capacity,
            max_chars,
        }
    }

    /// Create an empty log bounded by the given settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.log_capacity, settings.fact_max_chars)
    }

    /// Record a fact. Returns `false` if the log is full and the fact was dropped.
    pub fn add(&mut self, fact: impl AsRef<str>) -> bool {
        if self.is_full() {
            tracing::debug!("fact dropped (log full): {}", fact.as_ref());
            return false;
        }
        self.facts.push(sanitize(fact.as_ref(), self.max_chars));
        true
    }

    /// Facts recorded so far, in insertion order.
    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    /// Whether any recorded fact equals `fact`.
    pub fn contains(&self, fact: &str) -> bool {
        self.facts.iter().any(|f| f == fact)
    }

    /// Whether any recorded fact starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.facts.iter().any(|f| f.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.facts.len() >= self.capacity
    }

    /// Render the log file contents: one fact per line, trailing newline when non-empty.
    pub fn render(&self) -> String {
        if self.facts.is_empty() {
            return String::new();
        }
        let mut out = self.facts.join("\n");
        out.push('\n');
        out
    }

    /// Overwrite `path` with the rendered log.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

/// Make a fact safe for a single log line.
///
/// Control characters (newlines included) become spaces, surrounding
/// whitespace is trimmed, and the result is cut to `max_chars` characters.
pub fn sanitize(raw: &str, max_chars: usize) -> String {
    let flattened: String = raw
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    flattened.trim().chars().take(max_chars).collect()
}
