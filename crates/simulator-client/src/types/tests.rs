//! Unit tests for types module.

use super::*;
use chrono::TimeZone;
use serde_json::json;

// ============================================================================
// Device Tests
// ============================================================================

#[test]
fn test_device_new_generates_unique_ids() {
    let a = Device::new("Pixel 8", Size::new(412.0, 915.0));
    let b = Device::new("Pixel 8", Size::new(412.0, 915.0));

    assert!(!a.id().is_empty());
    assert_ne!(a.id(), b.id());
    assert!(Uuid::parse_str(a.id()).is_ok());
}

#[test]
fn test_device_deserialization_keeps_server_id() {
    let device: Device = serde_json::from_value(json!({
        "id": "dev-1",
        "name": "iPhone 15",
        "screenSize": {"width": 393.0, "height": 852.0}
    }))
    .unwrap();

    assert_eq!(device.id(), "dev-1");
    assert_eq!(device.name, "iPhone 15");
    assert_eq!(device.screen_size, Size::new(393.0, 852.0));
}

#[test]
fn test_device_missing_id_is_deterministic() {
    let payload = json!({
        "name": "iPhone 15",
        "screenSize": {"width": 393, "height": 852}
    });

    let first: Device = serde_json::from_value(payload.clone()).unwrap();
    let second: Device = serde_json::from_value(payload).unwrap();

    assert_eq!(first.id(), second.id());
    assert!(Uuid::parse_str(first.id()).is_ok());
}

#[test]
fn test_device_missing_id_differs_by_content() {
    let a: Device =
        serde_json::from_str(r#"{"name":"A","screenSize":{"width":1,"height":2}}"#).unwrap();
    let b: Device =
        serde_json::from_str(r#"{"name":"B","screenSize":{"width":1,"height":2}}"#).unwrap();

    assert_ne!(a.id(), b.id());
}

#[test]
fn test_device_empty_id_treated_as_missing() {
    let with_empty: Device =
        serde_json::from_str(r#"{"id":"","name":"A","screenSize":{"width":1,"height":2}}"#)
            .unwrap();
    let without: Device =
        serde_json::from_str(r#"{"name":"A","screenSize":{"width":1,"height":2}}"#).unwrap();

    assert_eq!(with_empty.id(), without.id());
}

#[test]
fn test_device_serialization_uses_camel_case() {
    let device = Device::with_id("dev-1", "Tablet", Size::new(800.0, 1280.0));

    let value = serde_json::to_value(&device).unwrap();
    assert_eq!(value["id"], "dev-1");
    assert_eq!(value["name"], "Tablet");
    assert_eq!(value["screenSize"]["width"], 800.0);
    assert_eq!(value["screenSize"]["height"], 1280.0);
    assert!(value.get("screen_size").is_none());
}

#[test]
fn test_device_missing_name_rejected() {
    let result: Result<Device, _> =
        serde_json::from_str(r#"{"id":"dev-1","screenSize":{"width":1,"height":2}}"#);
    assert!(result.is_err());
}

#[test]
fn test_device_list_deserialization() {
    let devices: Vec<Device> = serde_json::from_str(
        r#"[
            {"id":"a","name":"Phone","screenSize":{"width":390,"height":844}},
            {"id":"b","name":"Tablet","screenSize":{"width":820,"height":1180}}
        ]"#,
    )
    .unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].id(), "a");
    assert_eq!(devices[1].name, "Tablet");
}

// ============================================================================
// Screen Tests
// ============================================================================

#[test]
fn test_screen_deserialization() {
    let screen: Screen = serde_json::from_value(json!({
        "id": "scr-1",
        "deviceId": "dev-1",
        "name": "Home",
        "layout": [{"type": "button", "label": "OK"}, {"type": "text"}]
    }))
    .unwrap();

    assert_eq!(screen.id(), "scr-1");
    assert_eq!(screen.device_id, "dev-1");
    assert_eq!(screen.name, "Home");
    assert_eq!(screen.layout.len(), 2);
    assert_eq!(screen.layout[0]["label"], "OK");
}

#[test]
fn test_screen_layout_passed_through_unchanged() {
    let layout = vec![json!({"type": "stack", "children": [{"type": "image"}]}), json!("raw")];
    let screen = Screen::with_id("scr-1", "dev-1", "Home", layout.clone());

    let encoded = serde_json::to_string(&screen).unwrap();
    let decoded: Screen = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded.layout, layout);
    assert_eq!(decoded, screen);
}

#[test]
fn test_screen_layout_defaults_to_empty() {
    let screen: Screen =
        serde_json::from_str(r#"{"id":"scr-1","deviceId":"dev-1","name":"Blank"}"#).unwrap();
    assert!(screen.layout.is_empty());
}

#[test]
fn test_screen_missing_id_is_deterministic() {
    let raw = r#"{"deviceId":"dev-1","name":"Home","layout":[]}"#;
    let first: Screen = serde_json::from_str(raw).unwrap();
    let second: Screen = serde_json::from_str(raw).unwrap();

    assert_eq!(first.id(), second.id());

    let other: Screen =
        serde_json::from_str(r#"{"deviceId":"dev-2","name":"Home","layout":[]}"#).unwrap();
    assert_ne!(first.id(), other.id());
}

#[test]
fn test_screen_new_generates_id() {
    let screen = Screen::new("dev-1", "Settings", Vec::new());
    assert!(Uuid::parse_str(screen.id()).is_ok());
    assert_eq!(screen.device_id, "dev-1");
}

#[test]
fn test_screen_serialization_uses_camel_case() {
    let screen = Screen::with_id("scr-1", "dev-1", "Home", Vec::new());
    let value = serde_json::to_value(&screen).unwrap();

    assert_eq!(value["deviceId"], "dev-1");
    assert!(value.get("device_id").is_none());
    assert_eq!(value["layout"], json!([]));
}

// ============================================================================
// Interaction Tests
// ============================================================================

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap()
}

#[test]
fn test_interaction_serialization() {
    let interaction = Interaction::at("scr-1", fixed_time(), actions::TAP, Point::new(10.0, 20.0));

    let value = serde_json::to_value(&interaction).unwrap();
    assert_eq!(value["screenId"], "scr-1");
    assert_eq!(value["timestamp"], "2024-03-15T12:30:00Z");
    assert_eq!(value["action"], "tap");
    assert_eq!(value["coordinates"]["x"].as_f64(), Some(10.0));
    assert_eq!(value["coordinates"]["y"].as_f64(), Some(20.0));
}

#[test]
fn test_interaction_round_trip() {
    let interaction = Interaction::at(
        "scr-9",
        fixed_time(),
        actions::SWIPE,
        Point::new(120.5, 48.25),
    );

    let encoded = serde_json::to_string(&interaction).unwrap();
    let decoded: Interaction = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded.screen_id, interaction.screen_id);
    assert_eq!(decoded.timestamp, interaction.timestamp);
    assert_eq!(decoded.action, interaction.action);
    assert_eq!(decoded.coordinates, interaction.coordinates);
}

#[test]
fn test_interaction_accepts_offset_timestamp() {
    let interaction: Interaction = serde_json::from_str(
        r#"{"screenId":"scr-1","timestamp":"2024-03-15T14:30:00+02:00","action":"tap","coordinates":{"x":1,"y":2}}"#,
    )
    .unwrap();

    assert_eq!(interaction.timestamp, fixed_time());
}

#[test]
fn test_interaction_new_stamps_now() {
    let before = Utc::now();
    let interaction = Interaction::new("scr-1", "custom-gesture", Point::default());
    let after = Utc::now();

    assert!(interaction.timestamp >= before && interaction.timestamp <= after);
    assert_eq!(interaction.action, "custom-gesture");
}

#[test]
fn test_interaction_rejects_numeric_timestamp() {
    let result: Result<Interaction, _> = serde_json::from_str(
        r#"{"screenId":"scr-1","timestamp":1710505800,"action":"tap","coordinates":{"x":1,"y":2}}"#,
    );
    assert!(result.is_err());
}

// ============================================================================
// Geometry Tests
// ============================================================================

#[test]
fn test_size_display() {
    assert_eq!(Size::new(390.0, 844.0).to_string(), "390x844");
    assert_eq!(Size::new(390.5, 844.0).to_string(), "390.5x844");
}

#[test]
fn test_point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}
