//! Diagnostic tracing for the calculator binary.
//!
//! The arithmetic core never logs; only the CLI and the `io`/`demo` layers
//! emit events. Command output goes to stdout, diagnostics to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_FILTER: &str = "calculator=warn";

/// Build the filter from a `RUST_LOG`-style directive string.
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the tracing subscriber.
///
/// Output: stderr, compact, no timestamps or targets so diagnostics stay
/// short next to the single-line command output.
///
/// # Example
/// ```bash
/// RUST_LOG=calculator=debug calculator eval divide 7 2
/// ```
pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();

    tracing_subscriber::registry()
        .with(filter_from(directives.as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
