//! Webhook signature verification.
//!
//! Deliveries are signed with HMAC over the exact request bytes. The
//! platform sends an HMAC-SHA256 digest in `X-Hub-Signature-256` and, for
//! older hooks, an HMAC-SHA1 digest in `X-Hub-Signature`. SHA-256 is always
//! preferred; SHA-1 is accepted only when the SHA-256 header is absent and
//! produces a warning because the platform is phasing it out.
//!
//! # Security
//!
//! - Digests are compared in constant time
//! - Secrets and digest values are never logged
//! - An empty secret disables verification entirely; this is an explicit
//!   opt-out and is warned about when a [`SignatureVerifier`] is built
//!
//! # Examples
//!
//! ```rust
//! use github_hook_types::webhook::signature::{sign, SignatureAlgorithm, SignatureVerifier};
//! use http::{HeaderMap, HeaderValue};
//!
//! let body = br#"{"zen":"Design for failure.","hook_id":1}"#;
//! let verifier = SignatureVerifier::new("It's a Secret to Everybody");
//!
//! let mut headers = HeaderMap::new();
//! let signature = sign(body, b"It's a Secret to Everybody", SignatureAlgorithm::Sha256);
//! headers.insert("x-hub-signature-256", HeaderValue::from_str(&signature).unwrap());
//!
//! assert!(verifier.verify(body, &headers).is_ok());
//! ```

use hmac::{Hmac, Mac};
use http::HeaderMap;
use serde::Deserialize;
use sha1::Sha1;
use sha2::Sha256;
use std::fmt;
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::VerificationError;
use crate::webhook::headers::{SIGNATURE_256_HEADER, SIGNATURE_HEADER};

// ============================================================================
// Signature Algorithm
// ============================================================================

/// Hash algorithm used for a delivery signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    /// HMAC-SHA256 from `X-Hub-Signature-256`.
    Sha256,
    /// HMAC-SHA1 from `X-Hub-Signature`. Deprecated by the platform.
    Sha1,
}

impl SignatureAlgorithm {
    /// Literal prefix of the header value, e.g. `sha256=`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256=",
            Self::Sha1 => "sha1=",
        }
    }

    /// Header that carries signatures for this algorithm.
    pub fn header(&self) -> &'static str {
        match self {
            Self::Sha256 => SIGNATURE_256_HEADER,
            Self::Sha1 => SIGNATURE_HEADER,
        }
    }

    /// Whether the platform has deprecated this algorithm.
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Sha1)
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sha256 => "sha256",
            Self::Sha1 => "sha1",
        };
        write!(f, "{}", s)
    }
}

// ============================================================================
// Webhook Secret
// ============================================================================

/// Shared secret configured on the webhook.
///
/// The bytes are wiped when the value is dropped and never appear in
/// `Debug` output. An empty secret means verification is disabled.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop, Deserialize)]
#[serde(from = "String")]
pub struct WebhookSecret {
    bytes: Vec<u8>,
}

impl WebhookSecret {
    /// Create a secret from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Get the secret bytes (only for immediate use).
    pub fn expose_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Check if the secret is empty, i.e. verification is disabled.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Secret length without exposing content.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl From<String> for WebhookSecret {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl From<&str> for WebhookSecret {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl From<&[u8]> for WebhookSecret {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for WebhookSecret {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for WebhookSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookSecret")
            .field("length", &self.len())
            .field("value", &"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Signature Verifier
// ============================================================================

/// Verifies delivery signatures against a configured secret.
///
/// The verifier holds no mutable state and can be shared freely between
/// concurrent requests.
#[derive(Clone)]
pub struct SignatureVerifier {
    secret: WebhookSecret,
}

impl SignatureVerifier {
    /// Create a verifier for the given secret.
    ///
    /// An empty secret disables verification; a warning is logged so the
    /// opt-out is visible to operators.
    pub fn new(secret: impl Into<WebhookSecret>) -> Self {
        let secret = secret.into();
        if secret.is_empty() {
            warn!("Webhook secret is empty; signature verification is disabled");
        }
        Self { secret }
    }

    /// Whether signatures are actually checked.
    pub fn is_enabled(&self) -> bool {
        !self.secret.is_empty()
    }

    /// Verify the delivery signature for `payload`.
    ///
    /// `payload` must be the exact bytes received; re-serialized JSON will
    /// not match what the platform signed.
    ///
    /// # Errors
    ///
    /// - [`VerificationError::MissingSignature`] if neither signature header is present
    /// - [`VerificationError::MalformedSignature`] if the header lacks its prefix or is not hex
    /// - [`VerificationError::SignatureMismatch`] if the digest does not match
    pub fn verify(&self, payload: &[u8], headers: &HeaderMap) -> Result<(), VerificationError> {
        verify_signature(payload, headers, self.secret.expose_bytes())
    }
}

// Security: Don't expose secrets in debug output
impl fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureVerifier")
            .field("secret", &"<REDACTED>")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Verify a delivery signature with an explicit secret.
///
/// Succeeds without looking at the headers when `secret` is empty.
/// Otherwise the SHA-256 header is used if present, falling back to the
/// legacy SHA-1 header.
pub fn verify_signature(
    payload: &[u8],
    headers: &HeaderMap,
    secret: &[u8],
) -> Result<(), VerificationError> {
    if secret.is_empty() {
        return Ok(());
    }

    let (algorithm, signature) = select_signature(headers)?;

    if algorithm.is_deprecated() {
        warn!(
            header = algorithm.header(),
            "Using deprecated SHA-1 signature validation; configure the webhook to use SHA-256"
        );
    }

    let expected = parse_signature(algorithm, signature)?;
    let computed = compute_hmac(algorithm, secret, payload);

    if constant_time_compare(&expected, &computed) {
        debug!(algorithm = %algorithm, "Webhook signature verified");
        Ok(())
    } else {
        Err(VerificationError::SignatureMismatch { algorithm })
    }
}

/// Sign a payload the way the platform does, returning a header value.
///
/// Useful for relaying deliveries and for building test fixtures.
pub fn sign(payload: &[u8], secret: &[u8], algorithm: SignatureAlgorithm) -> String {
    format!(
        "{}{}",
        algorithm.prefix(),
        hex::encode(compute_hmac(algorithm, secret, payload))
    )
}

/// Pick the strongest signature header present.
///
/// Only an absent header falls through to the next algorithm. A header that
/// is present but unreadable is malformed, never skipped.
fn select_signature(headers: &HeaderMap) -> Result<(SignatureAlgorithm, &str), VerificationError> {
    for algorithm in [SignatureAlgorithm::Sha256, SignatureAlgorithm::Sha1] {
        let Some(value) = headers.get(algorithm.header()) else {
            continue;
        };

        let value = value
            .to_str()
            .map_err(|_| VerificationError::MalformedSignature {
                algorithm,
                reason: "header value is not visible ASCII".to_string(),
            })?;

        return Ok((algorithm, value));
    }

    Err(VerificationError::MissingSignature)
}

/// Decode the hex digest from a `{algorithm}=<hex>` header value.
fn parse_signature(
    algorithm: SignatureAlgorithm,
    signature: &str,
) -> Result<Vec<u8>, VerificationError> {
    let hex_signature = signature.strip_prefix(algorithm.prefix()).ok_or_else(|| {
        VerificationError::MalformedSignature {
            algorithm,
            reason: format!("signature must start with '{}'", algorithm.prefix()),
        }
    })?;

    hex::decode(hex_signature).map_err(|e| VerificationError::MalformedSignature {
        algorithm,
        reason: format!("invalid hex encoding: {}", e),
    })
}

fn compute_hmac(algorithm: SignatureAlgorithm, secret: &[u8], payload: &[u8]) -> Vec<u8> {
    match algorithm {
        SignatureAlgorithm::Sha256 => {
            let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(secret)
                .expect("HMAC can take key of any size");
            mac.update(payload);
            mac.finalize().into_bytes().to_vec()
        }
        SignatureAlgorithm::Sha1 => {
            let mut mac = <Hmac<Sha1> as Mac>::new_from_slice(secret)
                .expect("HMAC can take key of any size");
            mac.update(payload);
            mac.finalize().into_bytes().to_vec()
        }
    }
}

/// Constant-time comparison of digests.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;

    // Digest length is public, so this check may short-circuit.
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;
