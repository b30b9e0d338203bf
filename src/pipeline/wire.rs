use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::{PipelineRecord, StageRecord};
use crate::error::TopologyError;
use crate::schema::{ComponentCatalog, Section};

/// Flat-keyed processor stage as the backend API carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireStage {
    pub label: String,
    pub component: String,
    #[serde(default)]
    pub config: Value,
}

/// The backend's flat-keyed pipeline payload.
///
/// `*_config` values are backend-native JSON: nested one level under the
/// component name, except for `flat` components whose configuration object
/// travels directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireRecord {
    pub name: String,
    pub status: String,
    pub input_label: String,
    pub input_component: String,
    #[serde(default)]
    pub input_config: Value,
    #[serde(default)]
    pub processors: Vec<WireStage>,
    pub output_label: String,
    pub output_component: String,
    #[serde(default)]
    pub output_config: Value,
}

impl PipelineRecord {
    /// Restructures a backend payload into the canonical record, unwrapping
    /// the component-name nesting of non-flat components.
    pub fn from_wire(wire: WireRecord, catalog: &ComponentCatalog) -> Result<Self, TopologyError> {
        Ok(Self {
            name: wire.name,
            status: wire.status,
            input: StageRecord {
                config: unwrap_config(
                    Section::Input,
                    &wire.input_component,
                    wire.input_config,
                    catalog,
                )?,
                label: wire.input_label,
                component: wire.input_component,
            },
            processors: wire
                .processors
                .into_iter()
                .map(|stage| {
                    Ok(StageRecord {
                        config: unwrap_config(
                            Section::Pipeline,
                            &stage.component,
                            stage.config,
                            catalog,
                        )?,
                        label: stage.label,
                        component: stage.component,
                    })
                })
                .collect::<Result<_, TopologyError>>()?,
            output: StageRecord {
                config: unwrap_config(
                    Section::Output,
                    &wire.output_component,
                    wire.output_config,
                    catalog,
                )?,
                label: wire.output_label,
                component: wire.output_component,
            },
        })
    }

    /// Serializes the record back to the backend shape, re-applying the flat
    /// component quirk.
    pub fn to_wire(&self, catalog: &ComponentCatalog) -> Result<WireRecord, TopologyError> {
        Ok(WireRecord {
            name: self.name.clone(),
            status: self.status.clone(),
            input_label: self.input.label.clone(),
            input_component: self.input.component.clone(),
            input_config: wrap_config(
                Section::Input,
                &self.input.component,
                &self.input.config,
                catalog,
            )?,
            processors: self
                .processors
                .iter()
                .map(|stage| {
                    Ok(WireStage {
                        label: stage.label.clone(),
                        component: stage.component.clone(),
                        config: wrap_config(
                            Section::Pipeline,
                            &stage.component,
                            &stage.config,
                            catalog,
                        )?,
                    })
                })
                .collect::<Result<_, TopologyError>>()?,
            output_label: self.output.label.clone(),
            output_component: self.output.component.clone(),
            output_config: wrap_config(
                Section::Output,
                &self.output.component,
                &self.output.config,
                catalog,
            )?,
        })
    }
}

fn unwrap_config(
    section: Section,
    component: &str,
    config: Value,
    catalog: &ComponentCatalog,
) -> Result<Value, TopologyError> {
    let spec = catalog.component(section, component)?;
    if spec.flat {
        return Ok(ensure_object(config));
    }
    match config {
        Value::Object(mut map) => Ok(ensure_object(
            map.remove(component).unwrap_or(Value::Null),
        )),
        other => Ok(ensure_object(other)),
    }
}

fn wrap_config(
    section: Section,
    component: &str,
    config: &Value,
    catalog: &ComponentCatalog,
) -> Result<Value, TopologyError> {
    let spec = catalog.component(section, component)?;
    if spec.flat {
        Ok(config.clone())
    } else {
        let mut wrapped = Map::new();
        wrapped.insert(component.to_string(), config.clone());
        Ok(Value::Object(wrapped))
    }
}

fn ensure_object(value: Value) -> Value {
    match value {
        Value::Object(_) => value,
        _ => Value::Object(Map::new()),
    }
}
