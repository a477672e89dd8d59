//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags (cli.rs) + credentials (credentials module)
//!     → schema.rs (RelayConfig, target URL derivation)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc to all handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built; there is no reload
//! - Credentials live only in memory and are redacted from Debug output

pub mod cli;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use schema::{ConfigError, RelayConfig, DEFAULT_LISTEN_ADDRESS, POCKET_BASE_URL};
pub use validation::ValidationError;
