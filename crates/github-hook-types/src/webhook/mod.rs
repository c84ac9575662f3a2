//! Webhook delivery pipeline.
//!
//! # Core Components
//!
//! - [`SignatureVerifier`] - HMAC signature verification over the raw body
//! - [`dispatch`]/[`EventDispatcher`] - Event-type lookup and payload decoding
//! - [`DeliveryHandler`] - Per-request state machine from `http::Request` to [`WebhookResponse`]
//! - [`WebhookHandler`] - Trait for application-provided event handling
//!
//! # Security
//!
//! Signatures are checked in constant time, against the exact bytes
//! received, before the body is parsed. Unsigned or incorrectly signed
//! requests never reach the JSON decoder or the application handler.
//!
//! # Status Codes
//!
//! | Failure                                    | Status |
//! |--------------------------------------------|--------|
//! | Body unreadable or over the size limit     | 400    |
//! | Signature header missing                   | 401    |
//! | Signature header malformed                 | 400    |
//! | Signature does not match                   | 401    |
//! | Event-type or delivery-ID header missing   | 400    |
//! | Body is not valid JSON for the event type  | 400    |
//! | Application handler returned an error      | 500    |

pub mod dispatch;
pub mod headers;
pub mod receiver;
pub mod signature;

pub use dispatch::{dispatch, parse_webhook, EventDispatcher};
pub use headers::{
    DELIVERY_ID_HEADER, EVENT_TYPE_HEADER, SIGNATURE_256_HEADER, SIGNATURE_HEADER,
};
pub use receiver::{handler_fn, DeliveryHandler, HandlerFn, WebhookHandler, WebhookResponse};
pub use signature::{sign, verify_signature, SignatureAlgorithm, SignatureVerifier, WebhookSecret};
