use ahash::AHashMap;
use serde_json::{Map, Value};

use crate::schema::{FieldKind, FieldSchema};

/// Produces a fully populated configuration tree for an object schema root.
///
/// Total: every declared field receives a value, recursively. There are no
/// error paths.
pub fn synthesize_defaults(properties: &AHashMap<String, FieldSchema>) -> Value {
    let mut values = Map::new();
    for (name, field) in properties.iter() {
        values.insert(name.clone(), field_default(field));
    }
    Value::Object(values)
}

/// The default value for a single field.
///
/// `object` fields always recurse into their nested schema. `array` and
/// `key_value` honor a declared default before falling back to an empty
/// container. Scalar kinds use the declared default verbatim, otherwise a
/// zero value for their kind.
pub fn field_default(field: &FieldSchema) -> Value {
    match &field.kind {
        FieldKind::Object { properties } => synthesize_defaults(properties),
        FieldKind::Array => field
            .default
            .clone()
            .unwrap_or_else(|| Value::Array(Vec::new())),
        FieldKind::KeyValue => field
            .default
            .clone()
            .unwrap_or_else(|| Value::Object(Map::new())),
        kind => {
            if let Some(default) = &field.default {
                return default.clone();
            }
            match kind {
                FieldKind::Bool => Value::Bool(false),
                FieldKind::Number => Value::from(0),
                FieldKind::Select { options } => options
                    .first()
                    .map(|option| Value::from(option.as_str()))
                    .unwrap_or_else(|| Value::from("")),
                _ => Value::from(""),
            }
        }
    }
}
