//! Credential sourcing.
//!
//! Startup asks a [`CredentialSource`] for the username/password pair used
//! for HTTP Basic auth against the remote feed. The production source reads
//! from the controlling terminal; tests hand in fixed values.

pub mod terminal;

use std::fmt;

pub use terminal::TerminalCredentials;

/// Errors that can occur while obtaining credentials.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Reading from the terminal failed.
    #[error("failed to read {field}: {source}")]
    Io {
        field: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Input ended before a value was entered.
    #[error("no {0} entered")]
    Missing(&'static str),
}

/// A username/password pair. `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Create credentials, trimming surrounding whitespace from both values.
    pub fn new(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        Self {
            username: username.as_ref().trim().to_string(),
            password: password.as_ref().trim().to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Something that can supply credentials once at startup.
pub trait CredentialSource {
    fn read_credentials(&mut self) -> Result<Credentials, CredentialError>;
}

/// Fixed credentials, for tests and non-interactive embedding.
#[derive(Debug, Clone)]
pub struct StaticCredentials(pub Credentials);

impl StaticCredentials {
    pub fn new(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        Self(Credentials::new(username, password))
    }
}

impl CredentialSource for StaticCredentials {
    fn read_credentials(&mut self) -> Result<Credentials, CredentialError> {
        Ok(self.0.clone())
    }
}
