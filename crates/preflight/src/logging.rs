use std::io;

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::{fmt, prelude::*};

const VERBOSE_FILTER: &str =
    "warn,preflight=debug,preflight_core=debug,preflight_platform=debug,preflight_verify=debug";

/// Install the global subscriber. Logs go to stderr; stdout carries the report.
///
/// `RUST_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(VERBOSE_FILTER)
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}
