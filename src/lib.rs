//! # Fluss - Pipeline Topology Compilation and Configuration Engine
//!
//! **Fluss** is the core engine behind a visual data-pipeline builder.
//! Operators assemble a linear pipeline (one input, zero or more ordered
//! processors, one output) from a catalog of typed components on a free-form
//! canvas; the backend only understands the canonical linear record. Fluss
//! keeps the two models consistent under arbitrary edits with two tightly
//! coupled subsystems:
//!
//! 1. A **schema-driven configuration engine** that turns a recursive field
//!    schema into concrete default values, applies dotted-path edits to
//!    arbitrarily deep configuration trees, and repairs container shapes that
//!    drift from the schema.
//! 2. A **topology compiler** that converts bidirectionally between the
//!    free-form directed graph the user manipulates and the canonical
//!    pipeline record the backend persists, validating connectivity before
//!    anything is submitted.
//!
//! ## Core Workflow
//!
//! 1. **Load the catalog**: deserialize the [`schema::ComponentCatalog`] once
//!    at startup; it is immutable from then on.
//! 2. **Hydrate a graph**: open an existing pipeline with
//!    [`pipeline::decompose()`] (reusing a persisted [`pipeline::VisualLayout`]
//!    when one exists), or start from an empty [`topology::TopologyGraph`].
//! 3. **Apply edits**: every user action maps to a graph mutation -
//!    [`topology::TopologyGraph::add_node`], `connect`, `rename`,
//!    `assign_component`, `set_config_value`.
//! 4. **Save**: [`pipeline::compose()`] validates the topology, orders the
//!    processors and emits the canonical [`pipeline::PipelineRecord`];
//!    [`pipeline::PipelineRecord::to_wire`] restructures it into the
//!    backend's flat-keyed payload.
//!
//! ## Quick Start
//!
//! ```rust
//! use fluss::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! // 1. Load the component catalog (once, process-wide).
//! let catalog = ComponentCatalog::from_value(json!({
//!     "input": {
//!         "generate": { "properties": {
//!             "mapping": { "kind": "code" },
//!             "interval": { "kind": "string", "default": "1s" }
//!         }}
//!     },
//!     "output": {
//!         "stdout": { "properties": {} }
//!     }
//! }))?;
//!
//! // 2. Build a topology the way the canvas does.
//! let mut graph = TopologyGraph::new();
//! let input = graph.add_node(NodeRole::Input);
//! let output = graph.add_node(NodeRole::Output);
//! graph.assign_component(&input, "generate", &catalog)?;
//! graph.assign_component(&output, "stdout", &catalog)?;
//! graph.connect(&input, &output);
//!
//! // 3. Compose it into the canonical record the backend understands.
//! let record = compose(&graph, &catalog, "my_stream", "active")?;
//! assert_eq!(record.input.config["interval"], "1s");
//!
//! // 4. Round-trip through the backend's wire shape.
//! let wire = record.to_wire(&catalog)?;
//! assert_eq!(wire.input_config["generate"]["interval"], "1s");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod prelude;
pub mod schema;
pub mod topology;
