//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the binary
//! - Read the filter from `RUST_LOG`, with a crate-level default
//! - Write to stderr so the credential prompts on stdout stay readable
//!
//! The library never installs a subscriber itself; handlers log through the
//! span they were constructed with.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "feed_relay=debug,tower_http=debug";

/// Install the process-wide subscriber. Fails if one is already set.
pub fn init_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
