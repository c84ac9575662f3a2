//! Error types for webhook verification, dispatch and delivery handling.
//!
//! Each error maps onto a transport status code so that HTTP adapters can
//! respond without inspecting individual variants. None of these errors are
//! retryable: verifying or decoding the same bytes again gives the same
//! outcome.

use thiserror::Error;

use crate::webhook::signature::SignatureAlgorithm;

/// Boxed error returned by application-provided webhook handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Broad classification of a failure, used as a structured log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request itself was malformed.
    Client,
    /// The request could not be proven to come from the platform.
    Authentication,
    /// The application handler failed.
    Server,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Client => "client",
            Self::Authentication => "authentication",
            Self::Server => "server",
        };
        write!(f, "{}", s)
    }
}

/// Signature verification failures.
///
/// The messages never include digest bytes or the secret.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// Neither the SHA-256 nor the legacy SHA-1 signature header was present.
    #[error("Missing signature headers")]
    MissingSignature,

    /// The signature header did not have the `{algorithm}=<hex>` shape.
    #[error("Malformed {algorithm} signature: {reason}")]
    MalformedSignature {
        algorithm: SignatureAlgorithm,
        reason: String,
    },

    /// The supplied digest does not match the digest of the body.
    #[error("{algorithm} signature does not match payload")]
    SignatureMismatch { algorithm: SignatureAlgorithm },
}

impl VerificationError {
    /// HTTP status code for this failure.
    ///
    /// A malformed header is a bad request; a missing or wrong signature is
    /// an authentication failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingSignature => 401,
            Self::MalformedSignature { .. } => 400,
            Self::SignatureMismatch { .. } => 401,
        }
    }

    /// Error category for monitoring.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedSignature { .. } => ErrorCategory::Client,
            Self::MissingSignature | Self::SignatureMismatch { .. } => {
                ErrorCategory::Authentication
            }
        }
    }
}

/// Failures while turning a raw body into a typed event.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The event-type header was absent when dispatching straight from headers.
    #[error("Missing event type header")]
    MissingEventType,

    /// The body was not valid JSON or did not fit the selected schema.
    #[error("Failed to decode {event_type} payload: {source}")]
    PayloadDecode {
        event_type: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DispatchError {
    /// HTTP status code for this failure.
    pub fn status_code(&self) -> u16 {
        400
    }

    /// Error category for monitoring.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Client
    }
}

/// Terminal failure of a single webhook delivery.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The request body could not be read from the transport.
    #[error("Failed to read request body: {message}")]
    BodyRead { message: String },

    /// Signature verification failed.
    #[error("Signature verification failed: {0}")]
    Verification(#[from] VerificationError),

    /// A required delivery header was absent.
    #[error("Missing {header} header")]
    MissingHeader { header: &'static str },

    /// The payload could not be dispatched to a typed event.
    #[error("Dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),

    /// The application handler reported a failure.
    #[error("Handler failed: {0}")]
    Handler(#[source] HandlerError),
}

impl DeliveryError {
    /// HTTP status code for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BodyRead { .. } => 400,
            Self::Verification(e) => e.status_code(),
            Self::MissingHeader { .. } => 400,
            Self::Dispatch(e) => e.status_code(),
            Self::Handler(_) => 500,
        }
    }

    /// Error category for monitoring.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BodyRead { .. } => ErrorCategory::Client,
            Self::Verification(e) => e.category(),
            Self::MissingHeader { .. } => ErrorCategory::Client,
            Self::Dispatch(e) => e.category(),
            Self::Handler(_) => ErrorCategory::Server,
        }
    }

    /// Message that is safe to return to an untrusted caller.
    ///
    /// Decode diagnostics and handler errors stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::BodyRead { .. } => "Failed to read request body".to_string(),
            Self::Verification(VerificationError::MissingSignature) => {
                "Missing signature".to_string()
            }
            Self::Verification(VerificationError::MalformedSignature { .. }) => {
                "Malformed signature".to_string()
            }
            Self::Verification(VerificationError::SignatureMismatch { .. }) => {
                "Invalid signature".to_string()
            }
            Self::MissingHeader { header } => format!("Missing {} header", header),
            Self::Dispatch(DispatchError::MissingEventType) => {
                "Missing event type header".to_string()
            }
            Self::Dispatch(DispatchError::PayloadDecode { .. }) => {
                "Invalid webhook payload".to_string()
            }
            Self::Handler(_) => "Webhook handler failed".to_string(),
        }
    }
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source could not be read or deserialized.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A configuration value is out of range.
    #[error("Invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
