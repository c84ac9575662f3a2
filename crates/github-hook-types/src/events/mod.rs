//! Webhook event data model.
//!
//! A verified delivery is decoded into a [`WebhookEvent`]: the event type and
//! delivery ID taken from the request headers, plus a [`WebhookPayload`]
//! typed according to the [`catalog`].
//!
//! # Examples
//!
//! ```rust
//! use github_hook_types::events::{EventKind, EventType, WebhookPayload};
//!
//! let event_type = EventType::from("push");
//! assert_eq!(event_type.kind(), Some(EventKind::Push));
//!
//! let payload = WebhookPayload::decode(
//!     event_type.kind(),
//!     br#"{"ref":"refs/heads/main","commits":[]}"#,
//! )
//! .unwrap();
//!
//! match payload {
//!     WebhookPayload::Push(push) => assert_eq!(push.git_ref, "refs/heads/main"),
//!     _ => unreachable!(),
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod catalog;
pub mod payloads;

pub use catalog::{EventKind, UnknownEventKind, WebhookPayload};
pub use payloads::{Envelope, GenericPayload, Timestamp};

// ============================================================================
// Event Type
// ============================================================================

/// Event type as sent in the `X-GitHub-Event` header.
///
/// Any string is accepted; [`EventType::kind`] tells whether the catalog
/// knows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(String);

impl EventType {
    /// Create an event type from its wire name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the event type as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve against the catalog. `None` for unknown or empty names.
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_name(&self.0)
    }

    /// Check if this is the empty event type.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for EventType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<EventKind> for EventType {
    fn from(value: EventKind) -> Self {
        Self(value.as_str().to_string())
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Delivery ID
// ============================================================================

/// Unique identifier of a delivery, from the `X-GitHub-Delivery` header.
///
/// Treated as an opaque string. The platform currently uses UUIDs, which
/// [`DeliveryId::as_uuid`] exposes for callers that want them.
///
/// # Examples
///
/// ```rust
/// use github_hook_types::events::DeliveryId;
///
/// let id = DeliveryId::from("72d3162e-cc78-11e3-81ab-4c9367dc0958");
/// assert!(id.as_uuid().is_some());
///
/// let id = DeliveryId::from("not-a-uuid");
/// assert_eq!(id.as_str(), "not-a-uuid");
/// assert!(id.as_uuid().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryId(String);

impl DeliveryId {
    /// Create a delivery ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a fresh random delivery ID (UUID v4), for relayed or
    /// synthesized deliveries.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the delivery ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the ID as a UUID, if it is one.
    pub fn as_uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.0).ok()
    }

    /// Check if no delivery ID was supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for DeliveryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DeliveryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Webhook Event
// ============================================================================

/// A decoded webhook delivery.
///
/// Produced only after the delivery has been authenticated and its body
/// decoded successfully. Owned by whoever receives it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookEvent {
    /// Event type from the request headers.
    pub event_type: EventType,

    /// Delivery ID from the request headers; empty if none was sent.
    pub delivery_id: DeliveryId,

    /// Decoded payload.
    pub payload: WebhookPayload,
}

impl WebhookEvent {
    /// Create an event from its parts.
    pub fn new(event_type: EventType, delivery_id: DeliveryId, payload: WebhookPayload) -> Self {
        Self {
            event_type,
            delivery_id,
            payload,
        }
    }

    /// Catalogued kind of the payload; `None` for generic payloads.
    pub fn kind(&self) -> Option<EventKind> {
        self.payload.kind()
    }

    /// Action of the event, if the payload has one.
    pub fn action(&self) -> Option<&str> {
        self.payload.envelope().action.as_deref()
    }

    /// Full name (`owner/name`) of the repository the event concerns, if any.
    pub fn repository_name(&self) -> Option<&str> {
        self.payload
            .envelope()
            .repository
            .as_ref()
            .map(|r| r.full_name.as_str())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
