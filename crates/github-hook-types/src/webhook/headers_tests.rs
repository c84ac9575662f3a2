//! Tests for delivery header lookups.

use super::*;
use http::{HeaderName, HeaderValue};

#[test]
fn test_lookup_is_case_insensitive() {
    let mut headers = HeaderMap::new();
    headers.insert("x-github-event", HeaderValue::from_static("push"));
    headers.insert(
        HeaderName::from_bytes(b"X-GITHUB-DELIVERY").unwrap(),
        HeaderValue::from_static("abc-123"),
    );

    assert_eq!(event_type(&headers).unwrap().as_str(), "push");
    assert_eq!(delivery_id(&headers).unwrap().as_str(), "abc-123");
}

#[test]
fn test_missing_headers_are_none() {
    let headers = HeaderMap::new();

    assert!(event_type(&headers).is_none());
    assert!(delivery_id(&headers).is_none());
}

#[test]
fn test_empty_header_value_is_treated_as_absent() {
    let mut headers = HeaderMap::new();
    headers.insert("x-github-event", HeaderValue::from_static(""));

    assert!(event_type(&headers).is_none());
}

#[test]
fn test_non_ascii_event_type_is_treated_as_absent() {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-github-event",
        HeaderValue::from_bytes(b"push\xff\xfe").unwrap(),
    );

    assert!(header_value(&headers, EVENT_TYPE_HEADER).is_none());
    assert!(event_type(&headers).is_none());
}
