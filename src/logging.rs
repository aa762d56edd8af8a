//! Diagnostics for the loader process.
//!
//! tmux shows anything a plugin writes to stderr, so the default filter only
//! lets warnings through. Configure via `RUST_LOG`:
//! - `RUST_LOG=easyjump=debug` - one line per binding
//! - `RUST_LOG=easyjump=trace` - every tmux command line

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber. `verbose` raises the default level to
/// `debug` when `RUST_LOG` is not set.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("easyjump=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time();

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
