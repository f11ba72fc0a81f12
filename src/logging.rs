//! Tracing setup for the binaries.
//!
//! Logs go to stderr only; stdout carries nothing but the JSON line. The
//! default filter covers this crate alone, so dependency chatter (html5ever
//! arrives through the `log` bridge) stays off unless `RUST_LOG` asks for it.

use std::io::IsTerminal;

use tracing_subscriber::{fmt as tfmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "readable_extract=debug"
    } else {
        "readable_extract=warn"
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .try_init();
}
