//! CLI argument definitions.
//!
//! The surface is a single positional argument. Flags are not recognised;
//! anything that looks like one is taken as a positional value so that the
//! argument count alone decides validity.

use clap::Parser;

/// envcheck - Single-shot environment and readiness checker.
#[derive(Debug, Parser)]
#[command(name = "envcheck")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// File path, directory path, or shell command line to check
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,
}
