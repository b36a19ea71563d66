//! Conversion between attribute values and Resource Manager JSON bodies

use std::collections::HashMap;

use azurerm_core::resource::Value;
use serde_json::{Map, Value as JsonValue, json};

/// Normalize a location the way Resource Manager reports it (e.g. "West Europe" -> "westeurope")
pub fn normalize_location(s: &str) -> String {
    s.replace(' ', "").to_lowercase()
}

/// Look up a dotted path (e.g. "properties.userMetadata") in a JSON body
pub fn get_path<'a>(body: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    path.split('.')
        .try_fold(body, |current, key| current.get(key))
        .filter(|v| !v.is_null())
}

/// Set a dotted path in a JSON object, creating intermediate objects
///
/// Existing non-object values along the path are replaced.
pub fn set_path(body: &mut Map<String, JsonValue>, path: &str, value: JsonValue) {
    match path.split_once('.') {
        None => {
            body.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let child = body
                .entry(head.to_string())
                .or_insert_with(|| JsonValue::Object(Map::new()));
            if !child.is_object() {
                *child = JsonValue::Object(Map::new());
            }
            if let JsonValue::Object(child) = child {
                set_path(child, rest, value);
            }
        }
    }
}

/// Convert JSON value to attribute Value
pub fn json_to_value(value: &JsonValue) -> Option<Value> {
    match value {
        JsonValue::String(s) => Some(Value::String(s.clone())),
        JsonValue::Bool(b) => Some(Value::Bool(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Value::Int(i))
            } else {
                n.as_f64().map(|f| Value::Int(f as i64))
            }
        }
        JsonValue::Array(arr) => {
            let items: Vec<Value> = arr.iter().filter_map(json_to_value).collect();
            Some(Value::List(items))
        }
        JsonValue::Object(obj) => {
            let map: HashMap<String, Value> = obj
                .iter()
                .filter_map(|(k, v)| json_to_value(v).map(|v| (k.clone(), v)))
                .collect();
            Some(Value::Map(map))
        }
        JsonValue::Null => None,
    }
}

/// Convert attribute Value to JSON value
pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::String(s) => json!(s),
        Value::Bool(b) => json!(b),
        Value::Int(i) => json!(i),
        Value::List(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
        Value::Map(map) => {
            let mut obj = Map::new();
            for (k, v) in map {
                obj.insert(k.clone(), value_to_json(v));
            }
            JsonValue::Object(obj)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_location() {
        assert_eq!(normalize_location("West Europe"), "westeurope");
        assert_eq!(normalize_location("eastus2"), "eastus2");
    }

    #[test]
    fn test_get_path() {
        let body = json!({"properties": {"userMetadata": "m", "empty": null}, "name": "cg"});
        assert_eq!(get_path(&body, "name"), Some(&json!("cg")));
        assert_eq!(get_path(&body, "properties.userMetadata"), Some(&json!("m")));
        assert_eq!(get_path(&body, "properties.empty"), None);
        assert_eq!(get_path(&body, "properties.missing"), None);
        assert_eq!(get_path(&body, "name.inner"), None);
    }

    #[test]
    fn test_set_path_creates_objects() {
        let mut body = Map::new();
        set_path(&mut body, "sku.name", json!("S0"));
        set_path(&mut body, "properties.a", json!(1));
        set_path(&mut body, "properties.b", json!(true));
        set_path(&mut body, "kind", json!("AIServices"));
        assert_eq!(
            JsonValue::Object(body),
            json!({"sku": {"name": "S0"}, "properties": {"a": 1, "b": true}, "kind": "AIServices"})
        );
    }

    #[test]
    fn test_value_json_conversion() {
        let mut tags = HashMap::new();
        tags.insert("env".to_string(), Value::String("prod".to_string()));
        let value = Value::Map(tags);

        let json = value_to_json(&value);
        assert_eq!(json, json!({"env": "prod"}));
        assert_eq!(json_to_value(&json), Some(value));

        assert_eq!(json_to_value(&json!(null)), None);
        assert_eq!(json_to_value(&json!(2.9)), Some(Value::Int(2)));
        assert_eq!(
            json_to_value(&json!(["a", null])),
            Some(Value::List(vec![Value::String("a".to_string())]))
        );
    }
}
