use serde_json::{Map, Value};

/// Sets `value` at a dotted `path`, returning a new tree.
///
/// The caller's tree is left untouched: editor state replaces configuration
/// trees wholesale so downstream change detection can compare them. Missing
/// intermediate containers become empty mappings; a segment only enters a
/// sequence when it is a numeric index into an existing one, because array
/// versus object shape is the normalizer's call, driven by the schema.
///
/// An empty `path` is a caller contract violation: debug builds assert,
/// release builds return the tree unchanged.
pub fn set_path(tree: &Value, path: &str, value: Value) -> Value {
    debug_assert!(!path.is_empty(), "set_path requires a non-empty path");
    let mut next = tree.clone();
    if !path.is_empty() {
        let segments: Vec<&str> = path.split('.').collect();
        set_segments(&mut next, &segments, value);
    }
    next
}

fn set_segments(slot: &mut Value, segments: &[&str], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };
    if rest.is_empty() {
        assign(slot, head, value);
        return;
    }
    if let Value::Array(items) = slot {
        if let Ok(index) = head.parse::<usize>() {
            if let Some(item) = items.get_mut(index) {
                set_segments(item, rest, value);
                return;
            }
        }
    }
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    if let Value::Object(map) = slot {
        let child = map.entry((*head).to_string()).or_insert(Value::Null);
        set_segments(child, rest, value);
    }
}

fn assign(slot: &mut Value, key: &str, value: Value) {
    if let Value::Array(items) = slot {
        if let Ok(index) = key.parse::<usize>() {
            if index < items.len() {
                items[index] = value;
            } else if index == items.len() {
                items.push(value);
            }
            // Indices further past the end are dropped rather than padded.
            return;
        }
    }
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    if let Value::Object(map) = slot {
        map.insert(key.to_string(), value);
    }
}
