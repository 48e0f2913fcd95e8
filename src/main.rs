//! envcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use envcheck::check::EnvChecker;
use envcheck::cli::Cli;
use envcheck::config::Settings;
use envcheck::facts::FactLog;
use envcheck::verdict::Verdict;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for diagnostics on stderr.
///
/// Log level is controlled by:
/// 1. `ENVCHECK_DEBUG` (any value) sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing() {
    let filter = if std::env::var_os("ENVCHECK_DEBUG").is_some() {
        EnvFilter::new("envcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let settings = Settings::default();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            tracing::debug!("argument parsing failed: {}", e);
            let mut log = FactLog::from_settings(&settings);
            log.add("arg: missing_or_extra");
            return Verdict::Failure.emit(&log, &settings);
        }
    };

    tracing::debug!("envcheck starting with args: {:?}", cli.args);

    let checker = EnvChecker::new(settings);
    let report = checker.check_args(&cli.args);
    report.verdict.emit(&report.log, checker.settings())
}
