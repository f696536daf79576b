//! Stdout logging for the desktop binary.
//!
//! `RUST_LOG` wins when set. Otherwise everything logs at INFO, and
//! `DEBUG_LOGGING=1` raises the workspace crates to DEBUG.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "info,app=debug,ui=debug,services=debug,storage=debug,passport_core=debug";

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok_and(|value| value != "0");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if debug_logging { DEBUG_DIRECTIVE } else { "info" })
    });

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(stdout_layer)
        .with(filter)
        .try_init();

    tracing::info!(debug_logging, "logging initialized");
}
