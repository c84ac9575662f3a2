//! Tests for webhook signature verification.

use super::*;
use http::HeaderValue;
use proptest::prelude::*;
use std::io;
use std::sync::{Arc, Mutex};

const SECRET: &[u8] = b"It's a Secret to Everybody";
const PING_PAYLOAD: &[u8] = br#"{"zen":"Design for failure.","hook_id":1}"#;

// ============================================================================
// Helpers
// ============================================================================

fn headers_with(entries: &[(&'static str, &str)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in entries {
        headers.insert(*name, HeaderValue::from_str(value).unwrap());
    }
    headers
}

fn sha256_headers(payload: &[u8], secret: &[u8]) -> HeaderMap {
    let signature = sign(payload, secret, SignatureAlgorithm::Sha256);
    headers_with(&[("x-hub-signature-256", signature.as_str())])
}

/// Collects formatted log output written by a test subscriber.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return its result and log output.
fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture.contents())
}

// ============================================================================
// Test: Disabled Verification
// ============================================================================

/// Verify that an empty secret accepts any request, including unsigned ones.
#[test]
fn test_empty_secret_skips_verification() {
    let verifier = SignatureVerifier::new("");

    assert!(!verifier.is_enabled());
    assert!(verifier.verify(PING_PAYLOAD, &HeaderMap::new()).is_ok());
    assert!(verifier
        .verify(
            PING_PAYLOAD,
            &headers_with(&[("x-hub-signature-256", "sha256=deadbeef")])
        )
        .is_ok());
    assert!(verifier
        .verify(PING_PAYLOAD, &headers_with(&[("x-hub-signature", "garbage")]))
        .is_ok());
}

// ============================================================================
// Test: SHA-256 Signatures
// ============================================================================

#[test]
fn test_valid_sha256_signature() {
    let verifier = SignatureVerifier::new(SECRET);

    let result = verifier.verify(PING_PAYLOAD, &sha256_headers(PING_PAYLOAD, SECRET));

    assert!(result.is_ok(), "Valid signature should pass: {:?}", result);
}

/// Verify the signature helper against an independently computed HMAC.
#[test]
fn test_sign_matches_manual_hmac() {
    type HmacSha256 = Hmac<Sha256>;

    let mut mac = HmacSha256::new_from_slice(SECRET).unwrap();
    mac.update(PING_PAYLOAD);
    let expected = format!("sha256={}", hex::encode(mac.finalize().into_bytes()));

    assert_eq!(
        sign(PING_PAYLOAD, SECRET, SignatureAlgorithm::Sha256),
        expected
    );
}

#[test]
fn test_tampered_payload_fails_with_mismatch() {
    let verifier = SignatureVerifier::new(SECRET);
    let headers = sha256_headers(br#"{"action":"opened","number":1}"#, SECRET);

    let result = verifier.verify(br#"{"action":"closed","number":1}"#, &headers);

    assert!(matches!(
        result,
        Err(VerificationError::SignatureMismatch {
            algorithm: SignatureAlgorithm::Sha256
        })
    ));
}

/// Verify that flipping any single bit of the body breaks the signature.
#[test]
fn test_single_bit_flip_in_payload_fails() {
    let verifier = SignatureVerifier::new(SECRET);
    let headers = sha256_headers(PING_PAYLOAD, SECRET);

    for byte in 0..PING_PAYLOAD.len() {
        for bit in 0..8 {
            let mut tampered = PING_PAYLOAD.to_vec();
            tampered[byte] ^= 1 << bit;

            assert!(
                matches!(
                    verifier.verify(&tampered, &headers),
                    Err(VerificationError::SignatureMismatch { .. })
                ),
                "bit {} of byte {} was not detected",
                bit,
                byte
            );
        }
    }
}

#[test]
fn test_single_bit_flip_in_secret_fails() {
    let headers = sha256_headers(PING_PAYLOAD, SECRET);

    for byte in 0..SECRET.len() {
        let mut secret = SECRET.to_vec();
        secret[byte] ^= 0x01;
        let verifier = SignatureVerifier::new(secret);

        assert!(matches!(
            verifier.verify(PING_PAYLOAD, &headers),
            Err(VerificationError::SignatureMismatch { .. })
        ));
    }
}

#[test]
fn test_truncated_digest_fails_with_mismatch() {
    let verifier = SignatureVerifier::new(SECRET);
    let signature = sign(PING_PAYLOAD, SECRET, SignatureAlgorithm::Sha256);
    let truncated = &signature[..signature.len() - 2];

    let result = verifier.verify(
        PING_PAYLOAD,
        &headers_with(&[("x-hub-signature-256", truncated)]),
    );

    assert!(matches!(
        result,
        Err(VerificationError::SignatureMismatch { .. })
    ));
}

#[test]
fn test_empty_payload_can_be_signed() {
    let verifier = SignatureVerifier::new(SECRET);

    assert!(verifier.verify(b"", &sha256_headers(b"", SECRET)).is_ok());
}

// ============================================================================
// Test: Malformed Signatures
// ============================================================================

/// Verify that a digest without its algorithm prefix is reported as malformed.
#[test]
fn test_missing_prefix_is_malformed() {
    let verifier = SignatureVerifier::new(SECRET);
    let signature = sign(PING_PAYLOAD, SECRET, SignatureAlgorithm::Sha256);
    let bare_hex = signature.trim_start_matches("sha256=");

    let result = verifier.verify(
        PING_PAYLOAD,
        &headers_with(&[("x-hub-signature-256", bare_hex)]),
    );

    assert!(matches!(
        result,
        Err(VerificationError::MalformedSignature {
            algorithm: SignatureAlgorithm::Sha256,
            ..
        })
    ));
}

#[test]
fn test_wrong_prefix_for_header_is_malformed() {
    let verifier = SignatureVerifier::new(SECRET);
    let sha1_value = sign(PING_PAYLOAD, SECRET, SignatureAlgorithm::Sha1);

    let result = verifier.verify(
        PING_PAYLOAD,
        &headers_with(&[("x-hub-signature-256", sha1_value.as_str())]),
    );

    assert!(matches!(
        result,
        Err(VerificationError::MalformedSignature { .. })
    ));
}

#[test]
fn test_invalid_hex_is_malformed() {
    let verifier = SignatureVerifier::new(SECRET);

    let result = verifier.verify(
        PING_PAYLOAD,
        &headers_with(&[("x-hub-signature-256", "sha256=not-hex-at-all")]),
    );

    assert!(matches!(
        result,
        Err(VerificationError::MalformedSignature { .. })
    ));
}

#[test]
fn test_missing_headers_fail_with_missing_signature() {
    let verifier = SignatureVerifier::new(SECRET);

    let result = verifier.verify(PING_PAYLOAD, &HeaderMap::new());

    assert!(matches!(result, Err(VerificationError::MissingSignature)));
}

// ============================================================================
// Test: Algorithm Selection
// ============================================================================

#[test]
fn test_sha1_fallback_when_sha256_absent() {
    let verifier = SignatureVerifier::new(SECRET);
    let signature = sign(PING_PAYLOAD, SECRET, SignatureAlgorithm::Sha1);

    let result = verifier.verify(
        PING_PAYLOAD,
        &headers_with(&[("x-hub-signature", signature.as_str())]),
    );

    assert!(result.is_ok());
}

#[test]
fn test_sha1_mismatch_names_sha1() {
    let verifier = SignatureVerifier::new(SECRET);
    let signature = sign(b"other payload", SECRET, SignatureAlgorithm::Sha1);

    let result = verifier.verify(
        PING_PAYLOAD,
        &headers_with(&[("x-hub-signature", signature.as_str())]),
    );

    assert!(matches!(
        result,
        Err(VerificationError::SignatureMismatch {
            algorithm: SignatureAlgorithm::Sha1
        })
    ));
}

/// Verify that a correct SHA-256 header wins over an incorrect SHA-1 header.
#[test]
fn test_sha256_takes_precedence_over_sha1() {
    let verifier = SignatureVerifier::new(SECRET);
    let good = sign(PING_PAYLOAD, SECRET, SignatureAlgorithm::Sha256);

    let result = verifier.verify(
        PING_PAYLOAD,
        &headers_with(&[
            ("x-hub-signature-256", good.as_str()),
            ("x-hub-signature", "sha1=0000000000000000000000000000000000000000"),
        ]),
    );

    assert!(result.is_ok());
}

/// Verify that a correct SHA-1 header cannot rescue an incorrect SHA-256 header.
#[test]
fn test_bad_sha256_is_not_rescued_by_good_sha1() {
    let verifier = SignatureVerifier::new(SECRET);
    let good_sha1 = sign(PING_PAYLOAD, SECRET, SignatureAlgorithm::Sha1);
    let bad_sha256 = sign(b"something else", SECRET, SignatureAlgorithm::Sha256);

    let result = verifier.verify(
        PING_PAYLOAD,
        &headers_with(&[
            ("x-hub-signature-256", bad_sha256.as_str()),
            ("x-hub-signature", good_sha1.as_str()),
        ]),
    );

    assert!(matches!(
        result,
        Err(VerificationError::SignatureMismatch {
            algorithm: SignatureAlgorithm::Sha256
        })
    ));
}

#[test]
fn test_free_function_matches_verifier() {
    let headers = sha256_headers(PING_PAYLOAD, SECRET);

    assert!(verify_signature(PING_PAYLOAD, &headers, SECRET).is_ok());
    assert!(verify_signature(PING_PAYLOAD, &HeaderMap::new(), b"").is_ok());
    assert!(matches!(
        verify_signature(PING_PAYLOAD, &HeaderMap::new(), SECRET),
        Err(VerificationError::MissingSignature)
    ));
}

/// Verify that an unreadable SHA-256 header does not fall back to SHA-1.
#[test]
fn test_non_ascii_sha256_header_is_malformed_despite_valid_sha1() {
    let verifier = SignatureVerifier::new(SECRET);
    let good_sha1 = sign(PING_PAYLOAD, SECRET, SignatureAlgorithm::Sha1);

    let mut headers = HeaderMap::new();
    headers.insert(
        "x-hub-signature-256",
        HeaderValue::from_bytes(b"sha256=\xffdeadbeef").unwrap(),
    );
    headers.insert("x-hub-signature", HeaderValue::from_str(&good_sha1).unwrap());

    let result = verifier.verify(PING_PAYLOAD, &headers);

    assert!(matches!(
        result,
        Err(VerificationError::MalformedSignature {
            algorithm: SignatureAlgorithm::Sha256,
            ..
        })
    ));
}

#[test]
fn test_non_ascii_sha256_header_alone_is_malformed() {
    let verifier = SignatureVerifier::new(SECRET);

    let mut headers = HeaderMap::new();
    headers.insert(
        "x-hub-signature-256",
        HeaderValue::from_bytes(b"sha256=\xffdeadbeef").unwrap(),
    );

    let result = verifier.verify(PING_PAYLOAD, &headers);

    assert!(matches!(
        result,
        Err(VerificationError::MalformedSignature { .. })
    ));
    assert_eq!(result.unwrap_err().status_code(), 400);
}

#[test]
fn test_empty_sha256_header_is_malformed_not_skipped() {
    let verifier = SignatureVerifier::new(SECRET);
    let good_sha1 = sign(PING_PAYLOAD, SECRET, SignatureAlgorithm::Sha1);

    let mut headers = HeaderMap::new();
    headers.insert("x-hub-signature-256", HeaderValue::from_static(""));
    headers.insert("x-hub-signature", HeaderValue::from_str(&good_sha1).unwrap());

    let result = verifier.verify(PING_PAYLOAD, &headers);

    assert!(matches!(
        result,
        Err(VerificationError::MalformedSignature {
            algorithm: SignatureAlgorithm::Sha256,
            ..
        })
    ));
}

// ============================================================================
// Test: Operator Warnings
// ============================================================================

#[test]
fn test_empty_secret_warns_at_construction() {
    let (verifier, logs) = capture_logs(|| SignatureVerifier::new(""));

    assert!(!verifier.is_enabled());
    assert!(logs.contains("WARN"), "logs: {}", logs);
    assert!(logs.contains("signature verification is disabled"));
}

#[test]
fn test_configured_secret_does_not_warn_at_construction() {
    let (_, logs) = capture_logs(|| SignatureVerifier::new(SECRET));

    assert!(!logs.contains("signature verification is disabled"));
}

#[test]
fn test_sha1_path_warns_about_deprecation() {
    let verifier = SignatureVerifier::new(SECRET);
    let signature = sign(PING_PAYLOAD, SECRET, SignatureAlgorithm::Sha1);
    let headers = headers_with(&[("x-hub-signature", signature.as_str())]);

    let (result, logs) = capture_logs(|| verifier.verify(PING_PAYLOAD, &headers));

    assert!(result.is_ok());
    assert!(logs.contains("WARN"), "logs: {}", logs);
    assert!(logs.contains("deprecated SHA-1"));
    assert!(!logs.contains(signature.trim_start_matches("sha1=")));
}

#[test]
fn test_sha256_path_does_not_warn_about_deprecation() {
    let verifier = SignatureVerifier::new(SECRET);
    let headers = sha256_headers(PING_PAYLOAD, SECRET);

    let (result, logs) = capture_logs(|| verifier.verify(PING_PAYLOAD, &headers));

    assert!(result.is_ok());
    assert!(!logs.contains("deprecated SHA-1"), "logs: {}", logs);
    assert!(logs.contains("Webhook signature verified"));
}

// ============================================================================
// Test: Secret Handling
// ============================================================================

#[test]
fn test_debug_output_redacts_secret() {
    let verifier = SignatureVerifier::new("super-secret-value");
    let secret = WebhookSecret::from("super-secret-value");

    let verifier_debug = format!("{:?}", verifier);
    let secret_debug = format!("{:?}", secret);

    assert!(!verifier_debug.contains("super-secret-value"));
    assert!(verifier_debug.contains("REDACTED"));
    assert!(!secret_debug.contains("super-secret-value"));
    assert!(secret_debug.contains("length: 18"));
}

#[test]
fn test_algorithm_metadata() {
    assert_eq!(SignatureAlgorithm::Sha256.prefix(), "sha256=");
    assert_eq!(SignatureAlgorithm::Sha1.prefix(), "sha1=");
    assert_eq!(SignatureAlgorithm::Sha256.header(), "X-Hub-Signature-256");
    assert_eq!(SignatureAlgorithm::Sha1.header(), "X-Hub-Signature");
    assert!(SignatureAlgorithm::Sha1.is_deprecated());
    assert!(!SignatureAlgorithm::Sha256.is_deprecated());
}

// ============================================================================
// Property Tests
// ============================================================================

/// Secrets without NUL bytes, so distinct values are distinct HMAC keys.
fn secret_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,64}"
}

proptest! {
    /// Signing and verifying with the same secret always succeeds.
    #[test]
    fn prop_sign_verify_roundtrip(payload: Vec<u8>, secret in secret_strategy()) {
        let headers = sha256_headers(&payload, secret.as_bytes());

        prop_assert!(verify_signature(&payload, &headers, secret.as_bytes()).is_ok());
    }

    /// A signature made with one secret never verifies under another.
    #[test]
    fn prop_wrong_secret_fails(
        payload: Vec<u8>,
        signing_secret in secret_strategy(),
        verifying_secret in secret_strategy(),
    ) {
        prop_assume!(signing_secret != verifying_secret);

        let headers = sha256_headers(&payload, signing_secret.as_bytes());
        let result = verify_signature(&payload, &headers, verifying_secret.as_bytes());

        prop_assert!(
            matches!(result, Err(VerificationError::SignatureMismatch { .. })),
            "unexpected result: {:?}",
            result
        );
    }

    /// Flipping any single bit of the payload breaks the signature.
    #[test]
    fn prop_modified_payload_fails(
        payload in proptest::collection::vec(any::<u8>(), 1..512),
        index: proptest::sample::Index,
        bit in 0u8..8,
        secret in secret_strategy(),
    ) {
        let headers = sha256_headers(&payload, secret.as_bytes());

        let mut tampered = payload.clone();
        tampered[index.index(payload.len())] ^= 1 << bit;
        let result = verify_signature(&tampered, &headers, secret.as_bytes());

        prop_assert!(
            matches!(result, Err(VerificationError::SignatureMismatch { .. })),
            "unexpected result: {:?}",
            result
        );
    }

    /// With an empty secret, any payload and any signature header verify.
    #[test]
    fn prop_empty_secret_always_verifies(
        payload: Vec<u8>,
        signature in proptest::option::of("[ -~]{0,80}"),
        legacy in any::<bool>(),
    ) {
        let mut headers = HeaderMap::new();
        if let Some(signature) = &signature {
            let name = if legacy { "x-hub-signature" } else { "x-hub-signature-256" };
            headers.insert(name, HeaderValue::from_str(signature).unwrap());
        }

        prop_assert!(verify_signature(&payload, &headers, b"").is_ok());
    }
}
