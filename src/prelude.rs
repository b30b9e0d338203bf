//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the fluss
//! crate. Import this module to get access to the core functionality without
//! having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use fluss::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog_json = std::fs::read_to_string("path/to/catalog.json").unwrap();
//! let catalog = ComponentCatalog::from_json(&catalog_json).unwrap();
//!
//! let mut graph = TopologyGraph::new();
//! let input = graph.add_node(NodeRole::Input);
//! let output = graph.add_node(NodeRole::Output);
//! graph.connect(&input, &output);
//!
//! let record = compose(&graph, &catalog, "my_pipeline", "active")?;
//! let wire = record.to_wire(&catalog)?;
//! # Ok(())
//! # }
//! ```

// Configuration engine
pub use crate::config::{field_default, normalize, set_path, synthesize_defaults};

// Schema model and catalog
pub use crate::schema::{ComponentCatalog, ComponentSpec, FieldKind, FieldSchema, Section};

// Topology graph and layout
pub use crate::topology::{
    NodeRole, Position, StageEdge, StageNode, TopologyGraph, is_valid_label, layout,
};

// Pipeline record, compiler and wire boundary
pub use crate::pipeline::{
    LayoutEdge, LayoutNode, PipelineRecord, StageRecord, VisualLayout, WireRecord, WireStage,
    compose, decompose, snapshot_layout,
};

// Error types
pub use crate::error::TopologyError;

/// Result type alias for fallible topology operations.
pub type Result<T> = std::result::Result<T, TopologyError>;
