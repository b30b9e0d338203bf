use ahash::{AHashMap, AHashSet};

use super::record::{PipelineRecord, StageRecord};
use crate::config::normalize;
use crate::error::TopologyError;
use crate::schema::ComponentCatalog;
use crate::topology::{NodeRole, StageNode, TopologyGraph};

/// Reduces a topology graph to the canonical linear pipeline record.
///
/// The visual model tolerates shapes the backend cannot store, so this
/// boundary enforces the record's invariants: full connectivity, exactly one
/// input and one output, and a single unbranched chain visiting every
/// processor. Each stage's configuration is normalized against its component
/// schema on the way out.
pub fn compose(
    graph: &TopologyGraph,
    catalog: &ComponentCatalog,
    name: &str,
    status: &str,
) -> Result<PipelineRecord, TopologyError> {
    graph.check_connectivity()?;
    let input = single_node(graph, NodeRole::Input)?;
    let output = single_node(graph, NodeRole::Output)?;
    let processors = chain_order(graph, input, output)?;

    Ok(PipelineRecord {
        name: name.to_string(),
        status: status.to_string(),
        input: stage_record(input, catalog)?,
        processors: processors
            .iter()
            .map(|node| stage_record(node, catalog))
            .collect::<Result<_, _>>()?,
        output: stage_record(output, catalog)?,
    })
}

fn single_node(graph: &TopologyGraph, role: NodeRole) -> Result<&StageNode, TopologyError> {
    let matches: Vec<&StageNode> = graph.nodes.iter().filter(|node| node.role == role).collect();
    match (matches.as_slice(), role) {
        ([node], _) => Ok(*node),
        ([], NodeRole::Input) => Err(TopologyError::MissingInput),
        ([], _) => Err(TopologyError::MissingOutput),
        (many, NodeRole::Input) => Err(TopologyError::MultipleInputs { count: many.len() }),
        (many, _) => Err(TopologyError::MultipleOutputs { count: many.len() }),
    }
}

/// Orders processors by walking the edge chain from the input to the output.
/// Every node on the walk must have exactly one outgoing edge; a fork, a dead
/// end, a revisit (cycle) or a processor hanging off the chain all mean no
/// linear order exists.
fn chain_order<'a>(
    graph: &'a TopologyGraph,
    input: &'a StageNode,
    output: &'a StageNode,
) -> Result<Vec<&'a StageNode>, TopologyError> {
    let mut successors: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in &graph.edges {
        successors
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut visited: AHashSet<&str> = AHashSet::new();
    visited.insert(input.id.as_str());
    let mut ordered = Vec::new();
    let mut current = input;
    loop {
        let next = match successors.get(current.id.as_str()).map(Vec::as_slice) {
            Some([next_id]) => *next_id,
            _ => {
                return Err(TopologyError::AmbiguousOrdering {
                    label: current.label.clone(),
                });
            }
        };
        if !visited.insert(next) {
            return Err(TopologyError::AmbiguousOrdering {
                label: current.label.clone(),
            });
        }
        if next == output.id {
            break;
        }
        match graph.node(next) {
            Some(node) if node.role == NodeRole::Processor => {
                ordered.push(node);
                current = node;
            }
            _ => {
                return Err(TopologyError::AmbiguousOrdering {
                    label: current.label.clone(),
                });
            }
        }
    }

    let processor_total = graph
        .nodes
        .iter()
        .filter(|node| node.role == NodeRole::Processor)
        .count();
    if ordered.len() != processor_total {
        // Connected, but fed from outside the input-to-output chain.
        let missing = graph.nodes.iter().find(|node| {
            node.role == NodeRole::Processor && !ordered.iter().any(|seen| seen.id == node.id)
        });
        if let Some(node) = missing {
            return Err(TopologyError::AmbiguousOrdering {
                label: node.label.clone(),
            });
        }
    }
    Ok(ordered)
}

fn stage_record(
    node: &StageNode,
    catalog: &ComponentCatalog,
) -> Result<StageRecord, TopologyError> {
    let component = node
        .component
        .clone()
        .ok_or_else(|| TopologyError::ComponentUnassigned {
            label: node.label.clone(),
        })?;
    let spec = catalog.component(node.role.section(), &component)?;
    Ok(StageRecord {
        label: node.label.clone(),
        component,
        config: normalize(&node.config, &spec.properties),
    })
}
