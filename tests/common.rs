//! Shared test fixtures: a small component catalog plus graph and record
//! builders.
use fluss::prelude::*;
use serde_json::json;

/// A trimmed-down catalog covering every field kind, nesting, and one `flat`
/// component.
#[allow(dead_code)]
pub fn sample_catalog() -> ComponentCatalog {
    ComponentCatalog::from_value(json!({
        "input": {
            "generate": {
                "title": "Generate",
                "properties": {
                    "mapping": { "kind": "code", "required": true },
                    "interval": { "kind": "string", "default": "1s" },
                    "count": { "kind": "number", "default": 0 },
                    "auto_replay_nacks": { "kind": "bool", "default": true }
                }
            },
            "http_client": {
                "title": "HTTP Client",
                "properties": {
                    "url": { "kind": "string", "required": true },
                    "verb": { "kind": "select", "options": ["GET", "POST", "PUT", "DELETE"] },
                    "headers": { "kind": "key_value" },
                    "metadata": {
                        "kind": "object",
                        "properties": {
                            "include_prefixes": { "kind": "array" },
                            "include_patterns": { "kind": "array" }
                        }
                    },
                    "oauth": {
                        "kind": "object",
                        "properties": {
                            "enabled": { "kind": "bool", "default": false },
                            "consumer_key": { "kind": "string" }
                        }
                    }
                }
            }
        },
        "pipeline": {
            "mapping": {
                "title": "Mapping",
                "flat": true,
                "properties": {
                    "mapping": { "kind": "code", "required": true }
                }
            },
            "json_schema": {
                "title": "JSON Schema",
                "properties": {
                    "schema": { "kind": "code", "required": true }
                }
            }
        },
        "output": {
            "http_server": {
                "title": "HTTP Server",
                "properties": {
                    "address": { "kind": "string", "default": "0.0.0.0:4195" },
                    "path": { "kind": "string", "default": "/get" }
                }
            }
        }
    }))
    .expect("sample catalog must deserialize")
}

/// Builds `input -> proc_0 -> ... -> proc_{n-1} -> output`, fully connected,
/// every node assigned a component.
#[allow(dead_code)]
pub fn linear_graph(catalog: &ComponentCatalog, processors: usize) -> TopologyGraph {
    let mut graph = TopologyGraph::new();
    let input = graph.add_node(NodeRole::Input);
    graph.rename(&input, "in");
    graph.assign_component(&input, "generate", catalog).unwrap();

    let mut previous = input;
    for index in 0..processors {
        let id = graph.add_node(NodeRole::Processor);
        graph.rename(&id, &format!("proc_{index}"));
        graph.assign_component(&id, "mapping", catalog).unwrap();
        graph.connect(&previous, &id).unwrap();
        previous = id;
    }

    let output = graph.add_node(NodeRole::Output);
    graph.rename(&output, "out");
    graph
        .assign_component(&output, "http_server", catalog)
        .unwrap();
    graph.connect(&previous, &output).unwrap();
    graph
}

/// A canonical record with `processors` mapping stages, configs already in
/// their normalized shape.
#[allow(dead_code)]
pub fn sample_record(processors: usize) -> PipelineRecord {
    PipelineRecord {
        name: "orders".to_string(),
        status: "active".to_string(),
        input: StageRecord {
            label: "in".to_string(),
            component: "generate".to_string(),
            config: json!({
                "mapping": "root = {}",
                "interval": "1s",
                "count": 0,
                "auto_replay_nacks": true
            }),
        },
        processors: (0..processors)
            .map(|index| StageRecord {
                label: format!("proc_{index}"),
                component: "mapping".to_string(),
                config: json!({ "mapping": format!("root.step = {index}") }),
            })
            .collect(),
        output: StageRecord {
            label: "out".to_string(),
            component: "http_server".to_string(),
            config: json!({ "address": "0.0.0.0:4195", "path": "/get" }),
        },
    }
}
