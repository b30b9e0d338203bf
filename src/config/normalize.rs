use ahash::AHashMap;
use serde_json::{Map, Value};

use crate::schema::{FieldKind, FieldSchema};

/// Repairs a configuration tree so every schema-declared container has the
/// right runtime shape.
///
/// Defaults and partial path edits can drift from the schema: a nested object
/// may be missing, or an array slot may hold a scalar. This pass walks the
/// schema and replaces any mismatched container with an empty one of the
/// declared shape, recursing into `object` fields. Scalars are never coerced
/// into single-element arrays. Keys the schema does not declare pass through
/// untouched, so unknown fields survive round-trips. Idempotent.
pub fn normalize(values: &Value, properties: &AHashMap<String, FieldSchema>) -> Value {
    let mut result = match values {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    for (name, field) in properties.iter() {
        match &field.kind {
            FieldKind::Object { properties } => {
                let nested = result.get(name).cloned().unwrap_or(Value::Null);
                result.insert(name.clone(), normalize(&nested, properties));
            }
            FieldKind::Array => {
                if !result.get(name).is_some_and(Value::is_array) {
                    result.insert(name.clone(), Value::Array(Vec::new()));
                }
            }
            FieldKind::KeyValue => {
                if !result.get(name).is_some_and(Value::is_object) {
                    result.insert(name.clone(), Value::Object(Map::new()));
                }
            }
            _ => {}
        }
    }
    Value::Object(result)
}
