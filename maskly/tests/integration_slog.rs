//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `to_masked_json()` produces correctly masked JSON values
//! - The `slog::Value` implementation works with slog's serialization API
//! - Conversion failures fall back to a placeholder string

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::BTreeMap, collections::HashMap, fmt::Arguments};

use maskly::{
    slog::{masked_json, ToMaskedJson, SERIALIZE_FAILURE_PLACEHOLDER},
    MaskOptions, Masker,
};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Other,
    // For nested serde values, we capture the JSON representation
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.into()));
        Ok(())
    }

    fn emit_unit(&mut self, key: slog::Key) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Other);
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        // Serialize the value to JSON to capture it
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

/// Helper function to serialize a slog::Value into any Serializer.
fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

#[derive(Serialize)]
struct Login {
    username: String,
    password: String,
}

#[test]
fn test_to_masked_json_simple_struct() {
    let login = Login {
        username: "alice".into(),
        password: "super_secret_password".into(),
    };

    let masked = login.to_masked_json(&Masker::default());

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&masked, "login", &mut serializer);

    if let Some(CapturedValue::Serde(json)) = serializer.get("login") {
        assert_eq!(json["username"], "alice");
        assert_eq!(json["password"], "su*****************rd");
    } else {
        panic!("Expected Serde value for 'login' key");
    }
}

#[test]
fn test_to_masked_json_uses_masker_configuration() {
    let login = Login {
        username: "alice".into(),
        password: "hunter22".into(),
    };

    let masker = Masker::new(["username"], MaskOptions::new(1, 0, '#'));
    let masked = login.to_masked_json(&masker);
    assert_eq!(
        masked.as_json(),
        &json!({ "username": "a####", "password": "hunter22" })
    );
}

#[test]
fn test_masked_json_for_existing_value() {
    let payload = json!({ "events": [{ "token": "tok_live_1234" }], "count": 1 });
    let masked = masked_json(&Masker::default(), &payload);

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&masked, "payload", &mut serializer);

    assert_eq!(
        serializer.get("payload"),
        Some(CapturedValue::Serde(json!({
            "events": [{ "token": "to*********34" }],
            "count": 1
        })))
    );
}

#[test]
fn test_unrepresentable_value_logs_placeholder() {
    let mut map = BTreeMap::new();
    map.insert((1_u8, 2_u8), "secret");

    let masked = map.to_masked_json(&Masker::default());

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&masked, "map", &mut serializer);

    assert_eq!(
        serializer.get("map"),
        Some(CapturedValue::Serde(JsonValue::String(
            SERIALIZE_FAILURE_PLACEHOLDER.to_string()
        )))
    );
}

#[test]
fn test_original_value_is_not_logged() {
    let login = Login {
        username: "bob".into(),
        password: "plaintext-password".into(),
    };

    let masked = login.to_masked_json(&Masker::default());

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&masked, "login", &mut serializer);

    let captured = format!("{:?}", serializer.get("login"));
    assert!(!captured.contains("plaintext-password"));
}
