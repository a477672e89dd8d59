//! Feed Relay Library
//!
//! Serves a local HTTP endpoint that fetches the user's unread Pocket feed
//! with HTTP Basic credentials and relays the body verbatim.

pub mod config;
pub mod credentials;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::schema::RelayConfig;
pub use credentials::{CredentialSource, Credentials};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::{FeedFetcher, FetchError};
