//! Startup orchestration.
//!
//! # Responsibilities
//! - Obtain credentials from the configured source
//! - Build and validate the immutable configuration
//! - Bind the listener and serve until a shutdown signal
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last (traffic only when ready)

use tokio::net::TcpListener;

use crate::config::{Cli, ConfigError, RelayConfig};
use crate::credentials::{CredentialError, CredentialSource};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;

/// Fatal errors that abort the process before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("unable to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("unable to read credentials: {0}")]
    Credentials(#[from] CredentialError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("credential prompt did not complete: {0}")]
    Prompt(#[from] tokio::task::JoinError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read credentials, build the configuration, and serve until Ctrl+C/SIGTERM.
pub async fn run<S>(cli: Cli, mut source: S) -> Result<(), StartupError>
where
    S: CredentialSource + Send + 'static,
{
    // the prompt blocks on the terminal
    let credentials = tokio::task::spawn_blocking(move || source.read_credentials()).await??;

    let config = RelayConfig::for_pocket(cli.listen, credentials)?;
    tracing::info!(listen = %config.listen_address, "Configuration loaded");

    let shutdown = Shutdown::on_signal();
    serve(config, shutdown.subscribe()).await
}

/// Bind the configured listen address and run the server.
pub async fn serve(
    config: RelayConfig,
    shutdown: tokio::sync::broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    let listener = TcpListener::bind(&config.listen_address).await?;
    HttpServer::new(config).run(listener, shutdown).await?;
    Ok(())
}
