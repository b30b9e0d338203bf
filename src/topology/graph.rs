use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::layout;
use crate::config::{normalize, set_path, synthesize_defaults};
use crate::error::TopologyError;
use crate::schema::{ComponentCatalog, Section};

/// Role of a stage node within the visual topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Input,
    Processor,
    Output,
}

impl NodeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeRole::Input => "input",
            NodeRole::Processor => "processor",
            NodeRole::Output => "output",
        }
    }

    /// The catalog section this role draws its components from.
    pub fn section(&self) -> Section {
        match self {
            NodeRole::Input => Section::Input,
            NodeRole::Processor => Section::Pipeline,
            NodeRole::Output => Section::Output,
        }
    }

    pub fn parse(value: &str) -> Option<NodeRole> {
        match value {
            "input" => Some(NodeRole::Input),
            "processor" => Some(NodeRole::Processor),
            "output" => Some(NodeRole::Output),
            _ => None,
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 2-D canvas position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A stage on the canvas. Owned exclusively by its graph; `component` is a
/// lookup key into the immutable catalog, not a reference.
#[derive(Debug, Clone, PartialEq)]
pub struct StageNode {
    pub id: String,
    pub role: NodeRole,
    pub label: String,
    pub component: Option<String>,
    pub config: Value,
    pub position: Position,
}

/// A directed connection between two stages, by node id.
#[derive(Debug, Clone, PartialEq)]
pub struct StageEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The user-editable directed graph of pipeline stages.
///
/// Nodes and edges live in flat arenas addressed by generated string ids, so
/// edges never hold references into the node set and the whole graph can be
/// discarded wholesale when the user navigates away without saving. Ids come
/// from a per-graph counter; the backend never interprets them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopologyGraph {
    pub nodes: Vec<StageNode>,
    pub edges: Vec<StageEdge>,
    next_id: u64,
}

/// Accepts labels of the shape `[a-z0-9_-]*`.
pub fn is_valid_label(label: &str) -> bool {
    label
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

impl TopologyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a graph from externally stored nodes and edges, keeping the
    /// id counter clear of the ids it adopts.
    pub fn from_parts(nodes: Vec<StageNode>, edges: Vec<StageEdge>) -> Self {
        let next_id = nodes
            .iter()
            .filter_map(|node| node.id.strip_prefix('n')?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            nodes,
            edges,
            next_id,
        }
    }

    fn fresh_id(&mut self) -> String {
        self.next_id += 1;
        format!("n{}", self.next_id)
    }

    pub fn node(&self, id: &str) -> Option<&StageNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut StageNode> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    /// Adds a node of `role` at the next free slot of its column and returns
    /// its id.
    pub fn add_node(&mut self, role: NodeRole) -> String {
        let stacked = self.nodes.iter().filter(|node| node.role == role).count();
        let id = self.fresh_id();
        self.nodes.push(StageNode {
            id: id.clone(),
            role,
            label: format!("new_{role}"),
            component: None,
            config: Value::Object(Map::new()),
            position: layout::position(role, stacked),
        });
        id
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, id: &str) {
        self.nodes.retain(|node| node.id != id);
        self.edges.retain(|edge| edge.source != id && edge.target != id);
    }

    /// Connects `source` to `target`, returning the new edge id. Self-loops,
    /// unknown endpoints and duplicate connections are ignored.
    pub fn connect(&mut self, source: &str, target: &str) -> Option<String> {
        if source == target || self.node(source).is_none() || self.node(target).is_none() {
            return None;
        }
        if self
            .edges
            .iter()
            .any(|edge| edge.source == source && edge.target == target)
        {
            return None;
        }
        let id = format!("e-{source}-{target}");
        self.edges.push(StageEdge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
        });
        Some(id)
    }

    pub fn disconnect(&mut self, edge_id: &str) {
        self.edges.retain(|edge| edge.id != edge_id);
    }

    /// Renames a node, rejecting labels outside `[a-z0-9_-]*`.
    pub fn rename(&mut self, id: &str, label: &str) -> bool {
        if !is_valid_label(label) {
            return false;
        }
        match self.node_mut(id) {
            Some(node) => {
                node.label = label.to_string();
                true
            }
            None => false,
        }
    }

    /// Assigns a catalog component to a node and resets its configuration to
    /// the component's synthesized defaults. A no-op for unknown node ids.
    pub fn assign_component(
        &mut self,
        id: &str,
        name: &str,
        catalog: &ComponentCatalog,
    ) -> Result<(), TopologyError> {
        let Some(role) = self.node(id).map(|node| node.role) else {
            return Ok(());
        };
        let spec = catalog.component(role.section(), name)?;
        let config = normalize(&synthesize_defaults(&spec.properties), &spec.properties);
        if let Some(node) = self.node_mut(id) {
            node.component = Some(name.to_string());
            node.config = config;
        }
        Ok(())
    }

    /// Applies one `path = value` edit to a node's configuration, then
    /// repairs container shapes against the assigned component's schema.
    pub fn set_config_value(
        &mut self,
        id: &str,
        path: &str,
        value: Value,
        catalog: &ComponentCatalog,
    ) -> Result<(), TopologyError> {
        let Some(node) = self.node(id) else {
            return Ok(());
        };
        let mut updated = set_path(&node.config, path, value);
        if let Some(component) = node.component.clone() {
            let spec = catalog.component(node.role.section(), &component)?;
            updated = normalize(&updated, &spec.properties);
        }
        if let Some(node) = self.node_mut(id) {
            node.config = updated;
        }
        Ok(())
    }
}
