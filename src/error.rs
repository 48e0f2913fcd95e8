//! Error types for envcheck operations.
//!
//! This module defines [`EnvcheckError`], the error type for every cause that
//! ends a check in Failure, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Stages return `EnvcheckError` for conditions that decide the verdict
//! - Best-effort probes use `anyhow::Error` internally and degrade to a fact
//! - Every variant maps to one short fact tag via [`EnvcheckError::fact`]

use std::path::PathBuf;
use thiserror::Error;

use crate::detection::Runtime;

/// Core error type for envcheck operations.
#[derive(Debug, Error)]
pub enum EnvcheckError {
    /// The binary was not given exactly one positional argument.
    #[error("Expected exactly one argument, got {count}")]
    ArgumentCount { count: usize },

    /// The target's runtime could not be inferred.
    #[error("Could not infer a runtime for the target")]
    UnknownRuntime,

    /// No executable for the runtime was found on the search path.
    #[error("Runtime '{runtime}' not found on the search path")]
    RuntimeMissing { runtime: Runtime },

    /// A file or directory target has no entry point to execute.
    #[error("Target has no entry point")]
    EntrypointMissing,

    /// The entry point does not exist.
    #[error("Entry point not found: {path}")]
    EntrypointNotFound { path: PathBuf },

    /// The entry point exists but is not a regular file.
    #[error("Entry point is not a regular file: {path}")]
    EntrypointNotFile { path: PathBuf },

    /// A command target carries no tokens to execute.
    #[error("Command target has no tokens to execute")]
    CommandMissing,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnvcheckError {
    /// The fact recorded in the log when this error ends a check.
    pub fn fact(&self) -> &'static str {
        match self {
            EnvcheckError::ArgumentCount { .. } => "arg: missing_or_extra",
            EnvcheckError::UnknownRuntime => "runtime: unknown",
            EnvcheckError::RuntimeMissing { .. } => "runtime: missing",
            EnvcheckError::EntrypointMissing => "entrypoint: missing",
            EnvcheckError::EntrypointNotFound { .. } => "entrypoint: not_found",
            EnvcheckError::EntrypointNotFile { .. } => "entrypoint: not_file",
            EnvcheckError::CommandMissing => "run: command_missing",
            EnvcheckError::Io(_) => "io: error",
        }
    }
}

/// Result type alias for envcheck operations.
pub type Result<T> = std::result::Result<T, EnvcheckError>;
