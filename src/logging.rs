//! Tracing setup
//!
//! Logs always go to stderr: stdout carries the console shells' prompts and,
//! under `serve`, the MCP stdio transport.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Filter directive for the given verbosity
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose { "toolbelt=debug,info" } else { DEFAULT_FILTER }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
