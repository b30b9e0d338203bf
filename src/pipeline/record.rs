use serde_json::Value;

/// One stage of the canonical pipeline: a labelled component with its
/// canonical (un-nested) configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub struct StageRecord {
    pub label: String,
    pub component: String,
    pub config: Value,
}

/// The canonical, backend-persisted linear pipeline.
///
/// Invariant: exactly one input, exactly one output, processors ordered and
/// possibly empty. This is the only persisted form of a pipeline; the visual
/// graph is derived from it on load and reduced back to it on save.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRecord {
    pub name: String,
    pub status: String,
    pub input: StageRecord,
    pub processors: Vec<StageRecord>,
    pub output: StageRecord,
}
