use ahash::AHashSet;

use super::graph::{NodeRole, TopologyGraph};
use crate::error::TopologyError;

impl TopologyGraph {
    /// Ids of every node reachable from the input set, following edges
    /// source-to-target until the closure stops growing. Terminates because
    /// each sweep can only add nodes, never remove them.
    pub fn reachable_from_inputs(&self) -> AHashSet<&str> {
        let mut reachable: AHashSet<&str> = self
            .nodes
            .iter()
            .filter(|node| node.role == NodeRole::Input)
            .map(|node| node.id.as_str())
            .collect();
        let mut grew = true;
        while grew {
            grew = false;
            for edge in &self.edges {
                if reachable.contains(edge.source.as_str())
                    && !reachable.contains(edge.target.as_str())
                {
                    reachable.insert(edge.target.as_str());
                    grew = true;
                }
            }
        }
        reachable
    }

    /// Checks the graph forms a usable pipeline: at least one input, at least
    /// one output, and no node unreachable from the inputs.
    ///
    /// Deliberately permissive beyond that: branching, multiple inputs or
    /// outputs, and cycles all pass here. [`compose`](crate::pipeline::compose())
    /// applies the stricter linear-pipeline rules at the save boundary.
    pub fn check_connectivity(&self) -> Result<(), TopologyError> {
        if !self.nodes.iter().any(|node| node.role == NodeRole::Input) {
            return Err(TopologyError::MissingInput);
        }
        if !self.nodes.iter().any(|node| node.role == NodeRole::Output) {
            return Err(TopologyError::MissingOutput);
        }
        let reachable = self.reachable_from_inputs();
        let orphans: Vec<String> = self
            .nodes
            .iter()
            .filter(|node| !reachable.contains(node.id.as_str()))
            .map(|node| node.label.clone())
            .collect();
        if !orphans.is_empty() {
            return Err(TopologyError::Disconnected { orphans });
        }
        Ok(())
    }

    /// Boolean form of [`check_connectivity`](TopologyGraph::check_connectivity).
    pub fn is_connected(&self) -> bool {
        self.nodes.len() >= 2 && self.check_connectivity().is_ok()
    }
}
