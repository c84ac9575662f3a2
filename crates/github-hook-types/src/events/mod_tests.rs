//! Tests for the event data model.

use super::*;

#[test]
fn test_event_type_resolves_known_kind() {
    assert_eq!(EventType::from("issues").kind(), Some(EventKind::Issues));
    assert_eq!(EventType::from(EventKind::Fork).as_str(), "fork");
}

#[test]
fn test_event_type_unknown_or_empty_has_no_kind() {
    assert_eq!(EventType::from("merge_group").kind(), None);

    let empty = EventType::default();
    assert!(empty.is_empty());
    assert_eq!(empty.kind(), None);
}

#[test]
fn test_delivery_id_uuid_parsing() {
    let id = DeliveryId::from("72d3162e-cc78-11e3-81ab-4c9367dc0958");
    assert_eq!(
        id.as_uuid().map(|u| u.to_string()),
        Some("72d3162e-cc78-11e3-81ab-4c9367dc0958".to_string())
    );

    assert!(DeliveryId::from("delivery-1").as_uuid().is_none());
    assert!(DeliveryId::default().is_empty());
}

#[test]
fn test_generated_delivery_ids_are_unique_uuids() {
    let a = DeliveryId::generate();
    let b = DeliveryId::generate();

    assert_ne!(a, b);
    assert!(a.as_uuid().is_some());
}

#[test]
fn test_ids_serialize_as_plain_strings() {
    let value = serde_json::to_value(DeliveryId::from("abc")).unwrap();
    assert_eq!(value, serde_json::json!("abc"));

    let value = serde_json::to_value(EventType::from("push")).unwrap();
    assert_eq!(value, serde_json::json!("push"));
}

#[test]
fn test_webhook_event_accessors() {
    let payload = WebhookPayload::decode(
        Some(EventKind::Issues),
        br#"{"action":"opened","repository":{"full_name":"octo/repo"},"issue":{"number":1}}"#,
    )
    .unwrap();
    let event = WebhookEvent::new(EventType::from("issues"), DeliveryId::from("d-1"), payload);

    assert_eq!(event.kind(), Some(EventKind::Issues));
    assert_eq!(event.action(), Some("opened"));
    assert_eq!(event.repository_name(), Some("octo/repo"));
}

#[test]
fn test_webhook_event_serializes_payload_inline() {
    let payload = WebhookPayload::decode(None, br#"{"action":"ran"}"#).unwrap();
    let event = WebhookEvent::new(EventType::from("custom"), DeliveryId::from("d-2"), payload);

    let value = serde_json::to_value(&event).unwrap();

    assert_eq!(value["event_type"], "custom");
    assert_eq!(value["delivery_id"], "d-2");
    assert_eq!(value["payload"]["action"], "ran");
}
