use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::FieldSchema;
use crate::error::TopologyError;

/// Backend component category. The graph-side processor role draws its
/// components from the `pipeline` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Input,
    Pipeline,
    Output,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Input => "input",
            Section::Pipeline => "pipeline",
            Section::Output => "output",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One catalog entry: an object-kind schema root plus the `flat` marker.
///
/// A `flat` component stores its configuration directly on the wire instead
/// of nesting it one level under the component name. That is a serialization
/// quirk handled at the wire boundary, not a structural schema difference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentSpec {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub flat: bool,

    #[serde(default)]
    pub properties: AHashMap<String, FieldSchema>,
}

/// The process-wide component catalog, keyed by section then component name.
///
/// Loaded once at startup and treated as read-only; every editor session
/// shares the same instance by reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentCatalog {
    #[serde(default)]
    input: AHashMap<String, ComponentSpec>,
    #[serde(default)]
    pipeline: AHashMap<String, ComponentSpec>,
    #[serde(default)]
    output: AHashMap<String, ComponentSpec>,
}

impl ComponentCatalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    fn section(&self, section: Section) -> &AHashMap<String, ComponentSpec> {
        match section {
            Section::Input => &self.input,
            Section::Pipeline => &self.pipeline,
            Section::Output => &self.output,
        }
    }

    /// Looks up a component, failing with `SchemaMismatch` for names the
    /// catalog does not know.
    pub fn component(
        &self,
        section: Section,
        name: &str,
    ) -> Result<&ComponentSpec, TopologyError> {
        self.section(section)
            .get(name)
            .ok_or_else(|| TopologyError::SchemaMismatch {
                section,
                component: name.to_string(),
            })
    }

    /// Component names available in a section, sorted for stable display.
    pub fn names(&self, section: Section) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .section(section)
            .keys()
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }
}
