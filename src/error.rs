use crate::schema::Section;
use itertools::Itertools;
use thiserror::Error;

/// Errors detected while reducing a topology graph to the canonical pipeline
/// record, or while resolving component names against the catalog.
///
/// All variants are recoverable: the user fixes the graph and retries the
/// save. None of them abort the editing session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyError {
    #[error("pipeline is disconnected; unreachable nodes: {}", .orphans.iter().join(", "))]
    Disconnected { orphans: Vec<String> },

    #[error("pipeline requires an input node")]
    MissingInput,

    #[error("pipeline requires an output node")]
    MissingOutput,

    #[error("pipeline must have exactly one input node, found {count}")]
    MultipleInputs { count: usize },

    #[error("pipeline must have exactly one output node, found {count}")]
    MultipleOutputs { count: usize },

    #[error("no single linear processor order exists at node '{label}'")]
    AmbiguousOrdering { label: String },

    #[error("component '{component}' is not registered in the {section} section of the catalog")]
    SchemaMismatch { section: Section, component: String },

    #[error("node '{label}' has no component assigned")]
    ComponentUnassigned { label: String },
}
