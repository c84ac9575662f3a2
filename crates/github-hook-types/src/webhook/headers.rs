//! Delivery header names and lookups.

use http::HeaderMap;

use crate::events::{DeliveryId, EventType};

/// Header carrying the event type, e.g. `push`.
pub const EVENT_TYPE_HEADER: &str = "X-GitHub-Event";

/// Header carrying the unique delivery identifier.
pub const DELIVERY_ID_HEADER: &str = "X-GitHub-Delivery";

/// Header carrying the HMAC-SHA256 digest, `sha256=<hex>`.
pub const SIGNATURE_256_HEADER: &str = "X-Hub-Signature-256";

/// Header carrying the HMAC-SHA1 digest, `sha1=<hex>`.
///
/// Deprecated by the platform; only consulted when the SHA-256 header is absent.
pub const SIGNATURE_HEADER: &str = "X-Hub-Signature";

/// Get a header value as a string.
///
/// Lookup is case-insensitive. Empty values and values that are not visible
/// ASCII are treated as absent.
pub fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Get the event type from the `X-GitHub-Event` header.
pub fn event_type(headers: &HeaderMap) -> Option<EventType> {
    header_value(headers, EVENT_TYPE_HEADER).map(EventType::from)
}

/// Get the delivery ID from the `X-GitHub-Delivery` header.
pub fn delivery_id(headers: &HeaderMap) -> Option<DeliveryId> {
    header_value(headers, DELIVERY_ID_HEADER).map(DeliveryId::from)
}

#[cfg(test)]
#[path = "headers_tests.rs"]
mod tests;
