use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::record::{PipelineRecord, StageRecord};
use crate::topology::{NodeRole, Position, StageEdge, StageNode, TopologyGraph, layout};

/// Persisted canvas layout, stored alongside a pipeline record and returned
/// to the editor verbatim. Opaque to the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualLayout {
    #[serde(default)]
    pub nodes: Vec<LayoutNode>,
    #[serde(default)]
    pub edges: Vec<LayoutEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: String,
    pub position: Position,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Hydrates an editable graph from a pipeline record.
///
/// A saved layout wins: its nodes keep their persisted ids and positions and
/// the record's stages are paired back onto them by role, processors by label
/// with record order as the fallback. Without one, a simple left-to-right
/// path input -> processors -> output is synthesized, even though `compose`
/// tolerates more general shapes.
pub fn decompose(record: &PipelineRecord, saved_layout: Option<&VisualLayout>) -> TopologyGraph {
    match saved_layout {
        Some(saved) if !saved.nodes.is_empty() => from_layout(record, saved),
        _ => synthesize_path(record),
    }
}

/// Captures a graph's canvas state for persistence next to the record.
pub fn snapshot_layout(graph: &TopologyGraph) -> VisualLayout {
    VisualLayout {
        nodes: graph
            .nodes
            .iter()
            .map(|node| LayoutNode {
                id: node.id.clone(),
                position: node.position,
                data: json!({
                    "label": node.label,
                    "type": node.role,
                    "component": node.component,
                }),
            })
            .collect(),
        edges: graph
            .edges
            .iter()
            .map(|edge| LayoutEdge {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
            })
            .collect(),
    }
}

fn from_layout(record: &PipelineRecord, saved: &VisualLayout) -> TopologyGraph {
    let mut nodes = Vec::new();
    let mut processor_cursor = 0usize;
    for layout_node in &saved.nodes {
        let role = layout_node
            .data
            .get("type")
            .and_then(Value::as_str)
            .and_then(NodeRole::parse)
            .unwrap_or(NodeRole::Processor);
        let saved_label = layout_node.data.get("label").and_then(Value::as_str);
        let stage = match role {
            NodeRole::Input => Some(&record.input),
            NodeRole::Output => Some(&record.output),
            NodeRole::Processor => {
                let by_label = saved_label
                    .and_then(|label| record.processors.iter().find(|stage| stage.label == label));
                let stage = by_label.or_else(|| record.processors.get(processor_cursor));
                processor_cursor += 1;
                stage
            }
        };
        nodes.push(match stage {
            Some(stage) => StageNode {
                id: layout_node.id.clone(),
                role,
                label: stage.label.clone(),
                component: Some(stage.component.clone()),
                config: stage.config.clone(),
                position: layout_node.position,
            },
            // The layout refers to a stage the record no longer has; keep the
            // node so the canvas shape survives.
            None => StageNode {
                id: layout_node.id.clone(),
                role,
                label: saved_label.unwrap_or(role.as_str()).to_string(),
                component: None,
                config: Value::Object(Map::new()),
                position: layout_node.position,
            },
        });
    }
    let edges = saved
        .edges
        .iter()
        .map(|edge| StageEdge {
            id: edge.id.clone(),
            source: edge.source.clone(),
            target: edge.target.clone(),
        })
        .collect();
    TopologyGraph::from_parts(nodes, edges)
}

fn synthesize_path(record: &PipelineRecord) -> TopologyGraph {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut serial = 0u64;
    let mut next_id = move || {
        serial += 1;
        format!("n{serial}")
    };

    let input_id = next_id();
    nodes.push(stage_node(
        &record.input,
        input_id.clone(),
        NodeRole::Input,
        layout::position(NodeRole::Input, 0),
    ));

    let mut previous = input_id;
    for (index, stage) in record.processors.iter().enumerate() {
        let id = next_id();
        nodes.push(stage_node(
            stage,
            id.clone(),
            NodeRole::Processor,
            layout::position(NodeRole::Processor, index),
        ));
        edges.push(link(&previous, &id));
        previous = id;
    }

    let output_id = next_id();
    nodes.push(stage_node(
        &record.output,
        output_id.clone(),
        NodeRole::Output,
        layout::position(NodeRole::Output, 0),
    ));
    edges.push(link(&previous, &output_id));

    TopologyGraph::from_parts(nodes, edges)
}

fn stage_node(stage: &StageRecord, id: String, role: NodeRole, position: Position) -> StageNode {
    StageNode {
        id,
        role,
        label: stage.label.clone(),
        component: Some(stage.component.clone()),
        config: stage.config.clone(),
        position,
    }
}

fn link(source: &str, target: &str) -> StageEdge {
    StageEdge {
        id: format!("e-{source}-{target}"),
        source: source.to_string(),
        target: target.to_string(),
    }
}
