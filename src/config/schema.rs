//! Configuration schema definitions.
//!
//! `RelayConfig` is built once at startup from the CLI flags and the
//! credentials read from the terminal. It is never mutated afterwards and
//! is shared read-only with every handler.

use std::fmt;

use url::Url;

use crate::config::validation::{validate_config, ValidationError};
use crate::credentials::Credentials;

/// Default bind address for the inbound HTTP server.
pub const DEFAULT_LISTEN_ADDRESS: &str = "localhost:9092";

/// Base URL of the remote feed service.
pub const POCKET_BASE_URL: &str = "https://getpocket.com";

/// Error type for configuration construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The target URL could not be derived or parsed.
    #[error("invalid target url: {0}")]
    Url(#[from] url::ParseError),

    /// One or more semantic checks failed.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Root configuration for the relay.
#[derive(Clone)]
pub struct RelayConfig {
    /// Bind address for the inbound server (e.g. "localhost:9092").
    pub listen_address: String,

    /// The single remote URL every fetch is issued against.
    pub target_url: String,

    /// HTTP Basic credentials sent with every fetch.
    pub credentials: Credentials,
}

impl RelayConfig {
    /// Build and validate a configuration for an explicit target URL.
    pub fn new(
        listen_address: impl Into<String>,
        target_url: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            listen_address: listen_address.into(),
            target_url: target_url.into(),
            credentials,
        };
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Build a configuration targeting the unread feed of the credential's user.
    pub fn for_pocket(
        listen_address: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self, ConfigError> {
        let base = Url::parse(POCKET_BASE_URL)?;
        let target = unread_feed_url(&base, &credentials.username)?;
        Self::new(listen_address, target, credentials)
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    pub fn password(&self) -> &str {
        &self.credentials.password
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("listen_address", &self.listen_address)
            .field("target_url", &self.target_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Derive `<base>/users/<username>/feed/unread`.
///
/// The username is pushed as a single path segment so that characters such
/// as `/` or `?` are percent-encoded rather than changing the path.
pub fn unread_feed_url(base: &Url, username: &str) -> Result<Url, url::ParseError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(["users", username, "feed", "unread"]);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(user: &str, pass: &str) -> Credentials {
        Credentials::new(user, pass)
    }

    #[test]
    fn test_pocket_url_for_user() {
        let config = RelayConfig::for_pocket(DEFAULT_LISTEN_ADDRESS, creds("alice", "pw")).unwrap();
        assert_eq!(
            config.target_url,
            "https://getpocket.com/users/alice/feed/unread"
        );
        assert_eq!(config.listen_address, "localhost:9092");
    }

    #[test]
    fn test_username_is_single_segment() {
        let base = Url::parse("https://example.test/").unwrap();
        let url = unread_feed_url(&base, "a/b?c").unwrap();
        assert_eq!(url.as_str(), "https://example.test/users/a%2Fb%3Fc/feed/unread");
    }

    #[test]
    fn test_explicit_target_is_kept_verbatim() {
        let config =
            RelayConfig::new("127.0.0.1:0", "https://example.test/feed", creds("u", "p")).unwrap();
        assert_eq!(config.target_url, "https://example.test/feed");
        assert_eq!(config.username(), "u");
        assert_eq!(config.password(), "p");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = RelayConfig::new("", "not a url", creds("", "")).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let config =
            RelayConfig::new("127.0.0.1:0", "https://example.test/feed", creds("u", "hunter2"))
                .unwrap();
        let rendered = format!("{config:?}");
        assert!(rendered.contains("example.test"));
        assert!(!rendered.contains("hunter2"));
    }
}
