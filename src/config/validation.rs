//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic checks on a constructed `RelayConfig`
//! - Reject empty credentials and listen address
//! - Require an absolute http(s) target URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::RelayConfig;

/// A single violated configuration rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listen address must not be empty")]
    EmptyListenAddress,

    #[error("username must not be empty")]
    EmptyUsername,

    #[error("password must not be empty")]
    EmptyPassword,

    #[error("target url {0:?} is not a valid absolute url")]
    InvalidTargetUrl(String),

    #[error("target url scheme {0:?} is not http or https")]
    UnsupportedScheme(String),
}

pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listen_address.trim().is_empty() {
        errors.push(ValidationError::EmptyListenAddress);
    }
    if config.credentials.username.is_empty() {
        errors.push(ValidationError::EmptyUsername);
    }
    if config.credentials.password.is_empty() {
        errors.push(ValidationError::EmptyPassword);
    }

    match Url::parse(&config.target_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string())),
        Err(_) => errors.push(ValidationError::InvalidTargetUrl(config.target_url.clone())),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
