//! Input classification and target resolution.
//!
//! - [`input`] decides command line versus filesystem path
//! - [`target`] builds the [`Target`] for either case
//! - [`runtime`] and [`entrypoint`] hold the fixed inference tables

pub mod entrypoint;
pub mod file_detection;
pub mod input;
pub mod runtime;
pub mod target;
pub mod types;

pub use entrypoint::{classify_directory, find_entrypoint, ENTRYPOINT_CANDIDATES};
pub use input::{classify_input, classify_input_with, unquote_if_wrapped, InputClass};
pub use runtime::{infer_file_runtime, runtime_for_command, runtime_for_extension};
pub use target::resolve_target;
pub use types::{ProjectType, Runtime, Target, TargetKind};
