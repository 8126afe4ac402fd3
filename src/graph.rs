//! Typed node-graph description and on-disk parameter metadata
//!
//! The editor format carrying shader graphs is parsed at the boundary into
//! these structures; the compiler never touches a dynamic configuration tree.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use serde_json;

use errors::*;

/// A node/edge description of one stage's data flow
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphDescription {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl GraphDescription {
    pub fn add_node(&mut self, node: GraphNode) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: GraphEdge) {
        self.edges.push(edge);
    }
}

/// One shading-function invocation, or a pass-through value node
#[derive(Debug, Clone, Deserialize)]
pub struct GraphNode {
    pub name: String,
    pub model: ModelRef,
    #[serde(default)]
    pub data: NodeData,
}

impl GraphNode {
    pub fn new(name: &str, model: &str) -> GraphNode {
        GraphNode {
            name: name.to_string(),
            model: ModelRef {
                name: model.to_string(),
            },
            data: NodeData::default(),
        }
    }
}

/// The function (or basic type) a node invokes
#[derive(Debug, Clone, Deserialize)]
pub struct ModelRef {
    pub name: String,
}

/// Per-node configuration: default values for unconnected inputs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
}

/// A data dependency between two node interfaces
#[derive(Debug, Clone, Deserialize)]
pub struct GraphEdge {
    pub name: String,
    pub from: Endpoint,
    pub to: Endpoint,
    pub data: EdgeData,
}

impl GraphEdge {
    pub fn new(name: &str, from: Endpoint, to: Endpoint, data_type: &str) -> GraphEdge {
        GraphEdge {
            name: name.to_string(),
            from,
            to,
            data: EdgeData {
                data_type: data_type.to_string(),
            },
        }
    }
}

/// A (node, interface) pair at either end of an edge
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    pub name: String,
    pub interface: String,
}

impl Endpoint {
    pub fn new(name: &str, interface: &str) -> Endpoint {
        Endpoint {
            name: name.to_string(),
            interface: interface.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeData {
    #[serde(rename = "dataType")]
    pub data_type: String,
}

/// Call-site description of one shading function
///
/// Sorted maps keep the synthesized placeholder and default declarations in a
/// reproducible parameter order.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionInfo {
    pub params: ParamSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParamSet {
    #[serde(rename = "in", default)]
    pub inputs: BTreeMap<String, ParamInfo>,
    #[serde(rename = "out", default)]
    pub outputs: BTreeMap<String, ParamInfo>,
}

/// A named parameter with its declared type and fixed call-site position
#[derive(Debug, Clone, Deserialize)]
pub struct ParamInfo {
    #[serde(rename = "type")]
    pub ty: String,
    pub index: i32,
}

impl FunctionInfo {
    /// Read a function's parameter metadata from
    /// `<resource_path>/graph_shader/<function>.json`
    pub fn load(resource_path: &Path, function: &str) -> Result<FunctionInfo> {
        let path = resource_path
            .join("graph_shader")
            .join(format!("{}.json", function));
        let file = File::open(&path)
            .chain_err(|| ErrorKind::UnresolvedFunctionDefinition(function.to_string()))?;
        serde_json::from_reader(file)
            .chain_err(|| ErrorKind::UnresolvedFunctionDefinition(function.to_string()))
    }
}
