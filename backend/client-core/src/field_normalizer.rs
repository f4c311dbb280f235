//! Response-shape normalization for `/recommend` payloads.
//!
//! The service aggregates scraped catalog data, and item fields arrive in
//! slightly inconsistent shapes depending on which catalog revision a row
//! came from: aliased keys (`test_types`, `duration_minutes`), a bare
//! string where a list of labels is expected, or a duration encoded as a
//! numeric string. Normalizing here keeps the typed models strict while
//! staying tolerant on the wire.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::collections::HashMap;

static KEY_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("test_types", "test_type"),
        ("testType", "test_type"),
        ("assessment_name", "name"),
        ("assessment_url", "url"),
        ("duration_minutes", "duration"),
    ])
});

/// Map an aliased field name to its canonical form.
///
/// Unknown keys pass through unchanged.
pub fn normalize_key(key: &str) -> &str {
    KEY_ALIASES.get(key).copied().unwrap_or(key)
}

/// Recursively normalize a response value.
///
/// Applies key aliasing at every object level, wraps a bare `test_type`
/// string into a one-element list, and coerces numeric-string durations.
/// A duration that cannot be read as minutes is dropped rather than
/// failing the whole decode.
pub fn normalize_json(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut normalized = Map::with_capacity(map.len());
            for (key, field) in map {
                let key = normalize_key(&key).to_string();
                match key.as_str() {
                    "test_type" => {
                        normalized.insert(key, coerce_test_type(field));
                    }
                    "duration" => {
                        if let Some(minutes) = coerce_duration(field) {
                            normalized.insert(key, minutes);
                        }
                    }
                    _ => {
                        normalized.insert(key, normalize_json(field));
                    }
                }
            }
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_json).collect()),
        other => other,
    }
}

fn coerce_test_type(value: Value) -> Value {
    match value {
        Value::String(label) if !label.is_empty() => Value::Array(vec![Value::String(label)]),
        Value::String(_) => Value::Array(Vec::new()),
        other => other,
    }
}

fn coerce_duration(value: Value) -> Option<Value> {
    match value {
        Value::String(raw) => raw.trim().parse::<u64>().ok().map(Value::from),
        Value::Null => None,
        other => Some(other),
    }
}
