//! # GitHub Hook Types
//!
//! Typed GitHub webhook deliveries: signature verification, event-type
//! dispatch, and strongly-typed payloads for every platform event.
//!
//! This crate provides:
//! - HMAC-SHA256 signature verification with legacy HMAC-SHA1 fallback
//! - A closed catalog of event types, each mapped to a typed payload
//! - A generic payload for event types the catalog does not know yet
//! - A delivery handler that takes an `http::Request` through verification,
//!   dispatch, and an application callback, and maps failures to status codes
//!
//! It does not call the platform API, manage webhook subscriptions, or
//! persist events.
//!
//! # Examples
//!
//! ## Verify and Dispatch
//!
//! ```rust
//! use github_hook_types::events::WebhookPayload;
//! use github_hook_types::webhook::{dispatch, sign, SignatureAlgorithm, SignatureVerifier};
//! use http::{HeaderMap, HeaderValue};
//!
//! let secret = b"It's a Secret to Everybody";
//! let body = br#"{"zen":"Design for failure.","hook_id":1}"#;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(
//!     "x-hub-signature-256",
//!     HeaderValue::from_str(&sign(body, secret, SignatureAlgorithm::Sha256)).unwrap(),
//! );
//!
//! SignatureVerifier::new(&secret[..]).verify(body, &headers).unwrap();
//!
//! let event = dispatch("ping", "72d3162e-cc78-11e3-81ab-4c9367dc0958", body).unwrap();
//! assert!(matches!(event.payload, WebhookPayload::Ping(_)));
//! ```
//!
//! ## Full Delivery Handling
//!
//! ```rust,no_run
//! use bytes::Bytes;
//! use github_hook_types::{handler_fn, DeliveryHandler, WebhookConfig};
//! use http_body_util::Full;
//!
//! # async fn example(request: http::Request<Full<Bytes>>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = WebhookConfig::from_env()?;
//! let delivery = DeliveryHandler::from_config(
//!     &config,
//!     handler_fn(|event| {
//!         println!("received {} ({})", event.event_type, event.delivery_id);
//!         Ok(())
//!     }),
//! );
//!
//! let response = delivery.handle(request).await.into_http();
//! println!("status: {}", response.status());
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod events;
pub mod webhook;

// Re-export commonly used types at crate root for convenience
pub use config::WebhookConfig;
pub use error::{
    ConfigError, DeliveryError, DispatchError, ErrorCategory, HandlerError, VerificationError,
};
pub use events::{DeliveryId, EventKind, EventType, WebhookEvent, WebhookPayload};
pub use webhook::{
    dispatch, handler_fn, parse_webhook, verify_signature, DeliveryHandler, EventDispatcher,
    SignatureAlgorithm, SignatureVerifier, WebhookHandler, WebhookResponse, WebhookSecret,
};
