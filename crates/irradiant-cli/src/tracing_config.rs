//! Tracing configuration.
//!
//! The subscriber is only installed when `IRRADIANT_LOG` (or `RUST_LOG`)
//! is set, so normal runs pay nothing. All output goes to stderr so it
//! never mixes with the emitted Lua on stdout.
//!
//! ```bash
//! IRRADIANT_LOG=debug irradiant unit.json
//! IRRADIANT_LOG=irradiant_emitter=trace irradiant unit.json
//! ```

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `IRRADIANT_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("IRRADIANT_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber, if logging was requested.
pub fn init_tracing() {
    let requested =
        std::env::var("IRRADIANT_LOG").is_ok() || std::env::var("RUST_LOG").is_ok();
    if !requested {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
