use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber: compact format, stdout writer,
/// `RUST_LOG` respected with an info-level fallback for the HTTP stack.
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}
