//! Type-directed dispatch of delivery bodies.
//!
//! The event type selects a payload shape from the catalog; unknown event
//! types decode into the generic payload instead of failing, so new platform
//! events never break a receiver. Fields the body has but the shape does not
//! are ignored, and fields the shape has but the body lacks take defaults.
//!
//! Dispatch does not authenticate anything. Call it only on bodies that have
//! already passed [`SignatureVerifier::verify`](super::signature::SignatureVerifier::verify),
//! or use [`DeliveryHandler`](super::receiver::DeliveryHandler), which does both.

use http::HeaderMap;
use tracing::{debug, debug_span};

use crate::error::DispatchError;
use crate::events::{DeliveryId, EventType, WebhookEvent, WebhookPayload};
use crate::webhook::headers;

/// Decode `body` into a [`WebhookEvent`] according to `event_type`.
///
/// An empty or unknown event type yields the generic payload.
///
/// # Errors
///
/// Returns [`DispatchError::PayloadDecode`] if the body is not valid JSON or
/// a field has an incompatible type.
///
/// # Examples
///
/// ```rust
/// use github_hook_types::events::WebhookPayload;
/// use github_hook_types::webhook::dispatch::dispatch;
///
/// let event = dispatch("ping", "d-1", br#"{"zen":"x","hook_id":1}"#).unwrap();
///
/// match event.payload {
///     WebhookPayload::Ping(ping) => assert_eq!(ping.hook_id, 1),
///     _ => unreachable!(),
/// }
/// ```
pub fn dispatch(
    event_type: impl Into<EventType>,
    delivery_id: impl Into<DeliveryId>,
    body: &[u8],
) -> Result<WebhookEvent, DispatchError> {
    let event_type = event_type.into();
    let delivery_id = delivery_id.into();

    let kind = event_type.kind();
    if kind.is_none() {
        debug!(
            event_type = %event_type,
            "Event type not in catalog; decoding as generic payload"
        );
    }

    let payload =
        WebhookPayload::decode(kind, body).map_err(|source| DispatchError::PayloadDecode {
            event_type: event_type.to_string(),
            source,
        })?;

    Ok(WebhookEvent::new(event_type, delivery_id, payload))
}

/// Dispatch using the event type and delivery ID from request headers.
///
/// The event-type header is required. The delivery ID is optional here and
/// defaults to empty.
///
/// # Errors
///
/// - [`DispatchError::MissingEventType`] if `X-GitHub-Event` is absent or empty
/// - [`DispatchError::PayloadDecode`] if the body does not decode
pub fn parse_webhook(headers: &HeaderMap, body: &[u8]) -> Result<WebhookEvent, DispatchError> {
    let event_type = headers::event_type(headers).ok_or(DispatchError::MissingEventType)?;
    let delivery_id = headers::delivery_id(headers).unwrap_or_default();

    dispatch(event_type, delivery_id, body)
}

// ============================================================================
// Event Dispatcher
// ============================================================================

/// Dispatcher that records each dispatch in a tracing span.
///
/// Stateless; a single value can serve any number of concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventDispatcher;

impl EventDispatcher {
    /// Create a dispatcher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use github_hook_types::events::{DeliveryId, EventType, WebhookPayload};
    /// use github_hook_types::webhook::dispatch::EventDispatcher;
    ///
    /// let dispatcher = EventDispatcher::new();
    /// let event = dispatcher
    ///     .dispatch(&EventType::from("star"), &DeliveryId::from("d-1"), br#"{"action":"created"}"#)
    ///     .unwrap();
    ///
    /// assert!(matches!(event.payload, WebhookPayload::Star(_)));
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Same as [`dispatch`], inside a `dispatch` span carrying the event
    /// type and delivery ID.
    pub fn dispatch(
        &self,
        event_type: &EventType,
        delivery_id: &DeliveryId,
        body: &[u8],
    ) -> Result<WebhookEvent, DispatchError> {
        let span = debug_span!(
            "dispatch",
            event_type = %event_type,
            delivery_id = %delivery_id,
            body_len = body.len()
        );
        let _guard = span.enter();

        let result = dispatch(event_type.clone(), delivery_id.clone(), body);
        match &result {
            Ok(event) => debug!(
                kind = event.kind().map(|k| k.as_str()).unwrap_or("generic"),
                "Delivery dispatched"
            ),
            Err(e) => debug!(error = %e, "Delivery failed to decode"),
        }
        result
    }

    /// Same as [`parse_webhook`], inside a `dispatch` span.
    pub fn parse(&self, headers: &HeaderMap, body: &[u8]) -> Result<WebhookEvent, DispatchError> {
        let event_type = headers::event_type(headers).ok_or(DispatchError::MissingEventType)?;
        let delivery_id = headers::delivery_id(headers).unwrap_or_default();

        self.dispatch(&event_type, &delivery_id, body)
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
