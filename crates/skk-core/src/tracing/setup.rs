//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the SKK tracing/logging system.
///
/// Reads `SKK_LOG` environment variable for per-crate log levels.
/// Format: `SKK_LOG=skk_analysis=debug,skk_storage=warn`
///
/// Falls back to `skk=info` if `SKK_LOG` is not set or is invalid.
/// Output goes to stderr so stdout stays free for reports.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("SKK_LOG").unwrap_or_else(|_| EnvFilter::new("skk=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
