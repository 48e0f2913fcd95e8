//! Process execution helpers.

pub mod command;

pub use command::{execute_captured, terminate, CommandResult};
