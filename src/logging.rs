//! Tracing initialization
//!
//! `--debug` turns on `debug` events for mkenv, which echo every external
//! command and its captured output. Otherwise `RUST_LOG` applies, falling back
//! to warnings only.

use tracing_subscriber::{EnvFilter, prelude::*};

fn filter_directive(debug: bool) -> &'static str {
    if debug { "mkenv=debug" } else { "warn" }
}

/// Install the global subscriber. Call once at process startup.
pub fn init(debug: bool) {
    let directive = filter_directive(debug);
    let filter = if debug {
        EnvFilter::new(directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
