//! End-to-end tests: raw webhook JSON in, notification message out.

use rollbar_notify::{
    palette, NotificationMessage, PayloadError, Reference, RollbarConfig, RollbarIntegration,
};
use serde_json::json;

fn config() -> RollbarConfig {
    RollbarConfig {
        account: "acme".to_string(),
        project: "web".to_string(),
    }
}

fn process(payload: serde_json::Value) -> Option<NotificationMessage> {
    RollbarIntegration::slack()
        .process_value(payload, &config())
        .unwrap()
}

#[test]
fn new_item_end_to_end() {
    let message = process(json!({
        "event_name": "new_item",
        "data": {
            "item": { "id": 42, "title": "Null pointer\ncrash", "counter": 7 }
        }
    }))
    .unwrap();

    assert_eq!(message.references, vec![Reference::Id(42)]);
    assert_eq!(message.subject.as_deref(), Some("Null pointer\ncrash"));
    let attachment = message.attachment.unwrap();
    assert_eq!(
        attachment.text,
        "New item: Null pointer crash\n<https://rollbar.com/acme/web/items/7>"
    );
    assert_eq!(attachment.color, palette().info());
}

#[test]
fn occurrence_end_to_end_with_fields() {
    let message = process(json!({
        "event_name": "occurrence",
        "data": {
            "item": {
                "id": 42,
                "title": "Null pointer crash",
                "counter": 7,
                "last_occurrence_id": 99
            },
            "occurrence": {
                "level": "warning",
                "version": "1.2.3",
                "person": { "id": 311 }
            }
        }
    }))
    .unwrap();

    assert_eq!(message.color, Some(palette().color_for("warning")));
    let attachment = message.attachment.unwrap();
    assert_eq!(
        attachment.text,
        "Null pointer crash (Warning)\n\
         <https://rollbar.com/acme/web/items/7> \
         (<https://rollbar.com/acme/web/items/7/occurrences/99|Occurrence>)"
    );
    assert_eq!(attachment.fields.len(), 2);
    assert_eq!(attachment.fields[0].title, "User");
    assert_eq!(attachment.fields[0].value, "311");
    assert_eq!(attachment.fields[1].title, "Version");
    assert_eq!(attachment.fields[1].value, "1.2.3");
}

#[test]
fn occurrence_unknown_level_uses_error_color() {
    let message = process(json!({
        "event_name": "occurrence",
        "data": {
            "item": { "id": 1, "title": "boom", "counter": 3 },
            "occurrence": { "level": "weird" }
        }
    }))
    .unwrap();

    assert_eq!(message.color, Some(palette().error()));
    let attachment = message.attachment.unwrap();
    assert!(attachment.fields.is_empty());
    // No last_occurrence_id in the payload, so only the item link.
    assert_eq!(
        attachment.text,
        "boom (Weird)\n<https://rollbar.com/acme/web/items/3>"
    );
}

#[test]
fn resolved_item_is_green_regardless_of_payload_extras() {
    let message = process(json!({
        "event_name": "resolved_item",
        "data": {
            "item": {
                "id": 5,
                "title": "fixed now",
                "counter": 11,
                "level": "critical"
            }
        }
    }))
    .unwrap();

    assert_eq!(message.color, Some(palette().resolved));
    assert_eq!(message.attachment.unwrap().color, palette().resolved);
}

#[test]
fn reactivated_and_reopened_prefixes() {
    for (kind, prefix) in [("reactivated_item", "Reactivated"), ("reopened_item", "Reopened")] {
        let message = process(json!({
            "event_name": kind,
            "data": { "item": { "id": 2, "title": "flaky", "counter": 4 } }
        }))
        .unwrap();
        let text = message.attachment.unwrap().text;
        assert!(
            text.starts_with(&format!("{}: flaky\n", prefix)),
            "unexpected text for {}: {}",
            kind,
            text
        );
    }
}

#[test]
fn item_velocity_end_to_end() {
    let message = process(json!({
        "event_name": "item_velocity",
        "data": {
            "item": { "id": 8, "title": "spike", "counter": 12 },
            "trigger": { "threshold": 10, "window_size_description": "5 minutes" }
        }
    }))
    .unwrap();

    assert_eq!(
        message.attachment.unwrap().text,
        "10 occurrences in 5 minutes: spike\n<https://rollbar.com/acme/web/items/12>"
    );
}

#[test]
fn exp_repeat_item_end_to_end() {
    let message = process(json!({
        "event_name": "exp_repeat_item",
        "data": {
            "item": { "id": 8, "title": "again", "counter": 12 },
            "occurrences": 10000
        }
    }))
    .unwrap();

    assert_eq!(
        message.attachment.unwrap().text,
        "10000th occurrence: again\n<https://rollbar.com/acme/web/items/12>"
    );
}

#[test]
fn test_event_produces_reference_only_message() {
    let message = process(json!({ "event_name": "test" })).unwrap();
    assert_eq!(message.references, vec![Reference::Tag("test".to_string())]);
    assert_eq!(message.notification, None);
    assert_eq!(message.attachment, None);
}

#[test]
fn deploy_and_unknown_kinds_produce_nothing() {
    assert_eq!(
        process(json!({ "event_name": "deploy", "data": { "deploy": {} } })),
        None
    );
    assert_eq!(
        process(json!({ "event_name": "unknown_kind", "data": {} })),
        None
    );
}

#[test]
fn malformed_known_kind_is_a_reported_error() {
    let result = RollbarIntegration::slack().process_value(
        json!({
            "event_name": "new_item",
            "data": { "item": { "id": 1 } }
        }),
        &config(),
    );
    assert!(matches!(result, Err(PayloadError::Data { .. })));
}

#[test]
fn identical_payloads_produce_identical_messages() {
    let payload = json!({
        "event_name": "occurrence",
        "data": {
            "item": { "id": 42, "title": "boom", "counter": 7, "last_occurrence_id": 99 },
            "occurrence": { "level": "info", "version": "2.0" }
        }
    });
    let first = process(payload.clone()).unwrap();
    let second = process(payload).unwrap();
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn escaped_and_raw_text_differ_only_in_escaping() {
    let message = process(json!({
        "event_name": "new_item",
        "data": { "item": { "id": 1, "title": "a < b & c", "counter": 2 } }
    }))
    .unwrap();

    let notification = message.notification.unwrap();
    let raw = message.attachment.unwrap().text;
    assert_eq!(
        notification,
        raw.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    );
}
