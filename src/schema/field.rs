use ahash::AHashMap;
use serde::Deserialize;
use serde_json::Value;

/// The closed set of shapes a configurable field can take.
///
/// The `kind` tag drives every schema-directed walk in the crate; exhaustive
/// matching on this enum replaces the string-dispatch chains the schema data
/// was originally consumed with. Only `object` nests further schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Number,
    Bool,
    /// Opaque code block, stored as a string.
    Code,
    /// Enumerated choice; defaults to the first option.
    Select {
        #[serde(default)]
        options: Vec<String>,
    },
    /// Ordered sequence of free-form values.
    Array,
    /// Mapping with user-supplied keys.
    KeyValue,
    /// Nested mapping with a fixed set of declared fields.
    Object {
        #[serde(default)]
        properties: AHashMap<String, FieldSchema>,
    },
}

/// Description of one configurable field of a component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldSchema {
    #[serde(flatten)]
    pub kind: FieldKind,

    /// Explicit default, used verbatim by the defaults synthesizer.
    #[serde(default)]
    pub default: Option<Value>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,
}
