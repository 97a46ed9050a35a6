//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber; `greeter-core` and
//! `greeter-adapters` just emit events. Everything goes to stderr because
//! stdout carries the greeting and nothing else.
//!
//! `-q` logs errors only, no flag logs warnings, and each `-v` opens one more
//! level up to trace. `RUST_LOG` replaces the computed filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter,
    filter::{Directive, LevelFilter},
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown; dependencies stay silent.
const WORKSPACE_CRATES: [&str; 3] = ["greeter_cli", "greeter_core", "greeter_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => workspace_filter(level_for(args.verbose, args.quiet))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install the log subscriber: {e}"))
}

fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// `level` for every workspace crate, everything else off.
fn workspace_filter(level: LevelFilter) -> anyhow::Result<EnvFilter> {
    WORKSPACE_CRATES
        .iter()
        .try_fold(EnvFilter::new("off"), |filter, krate| -> anyhow::Result<_> {
            let directive: Directive = format!("{krate}={level}").parse()?;
            Ok(filter.add_directive(directive))
        })
}
