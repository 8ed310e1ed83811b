//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing at `default_level`, honoring `RUST_LOG` overrides.
/// Logs go to stderr so stdout stays clean for results. Safe to call
/// multiple times.
pub fn init(default_level: tracing::Level) {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(default_level.into());
        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
        {
            eprintln!("Failed to initialize tracing: {e}");
        }
    });
}
