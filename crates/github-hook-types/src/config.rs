//! Receiver configuration.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. An optional YAML or TOML file (format taken from the extension)
//! 2. Environment variables prefixed `GITHUB_WEBHOOK` with a `__` separator,
//!    e.g. `GITHUB_WEBHOOK__SECRET` and `GITHUB_WEBHOOK__MAX_BODY_BYTES`
//!
//! Every field has a default, so an entirely unconfigured environment loads
//! successfully with an empty secret (verification disabled).

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::webhook::signature::WebhookSecret;

/// Prefix of environment variables read by [`WebhookConfig::load`].
pub const ENV_PREFIX: &str = "GITHUB_WEBHOOK";

/// Configuration for a [`DeliveryHandler`](crate::webhook::receiver::DeliveryHandler).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Shared webhook secret. Empty disables signature verification.
    pub secret: WebhookSecret,

    /// Largest accepted request body in bytes; unlimited when unset.
    pub max_body_bytes: Option<usize>,
}

impl WebhookConfig {
    /// Create a configuration with the given secret and no body limit.
    pub fn new(secret: impl Into<WebhookSecret>) -> Self {
        Self {
            secret: secret.into(),
            max_body_bytes: None,
        }
    }

    /// Load configuration from an optional file and the environment.
    ///
    /// A file passed explicitly must exist; environment variables override
    /// its values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if the file is missing or malformed or a
    /// value cannot be converted, and [`ConfigError::Invalid`] if validation
    /// fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            info!(path = %path.display(), "Loading webhook configuration file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let webhook_config: Self = config.try_deserialize()?;
        webhook_config.validate()?;

        debug!(
            verification_enabled = !webhook_config.secret.is_empty(),
            max_body_bytes = ?webhook_config.max_body_bytes,
            "Webhook configuration loaded"
        );

        Ok(webhook_config)
    }

    /// Load configuration from the environment only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Check that values are in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_bytes == Some(0) {
            return Err(ConfigError::Invalid {
                field: "max_body_bytes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
