//! Feed relay (v1)
//!
//! ```text
//!   terminal ──(username, password)──┐
//!                                    ▼
//!   GET /feed ──▶ axum router ──▶ FeedFetcher ──(GET + Basic auth)──▶ getpocket.com
//!       ◀──── 200 application/rss+xml ◀──── body bytes ◀─────────────────┘
//!   GET /      ──▶ fixed marker text
//!   GET /ping  ──▶ {"message":"pong"}
//! ```

use clap::Parser;

use feed_relay::config::Cli;
use feed_relay::credentials::TerminalCredentials;
use feed_relay::lifecycle::{startup, StartupError};
use feed_relay::observability::logging;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    logging::init_logging()?;

    let cli = Cli::parse();

    tracing::info!("feed-relay v{} starting", env!("CARGO_PKG_VERSION"));

    startup::run(cli, TerminalCredentials::stdio()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
