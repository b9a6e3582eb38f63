//! Tracing subscriber setup for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the stderr subscriber.
///
/// Call once at startup; later calls are no-ops. Does nothing unless
/// `RUST_LOG` is set or `verbose` is true (which defaults the filter to
/// `debug`). Enable per-token decisions with `RUST_LOG=detype_strip=trace`.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let from_env = std::env::var("RUST_LOG").is_ok();
        if !from_env && !verbose {
            return;
        }
        let filter = if from_env {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new("debug")
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
