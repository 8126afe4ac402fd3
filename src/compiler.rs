//! Compilation of node-graph descriptions into `main` bodies
//!
//! Nodes become function calls ordered by their data dependencies; edges
//! become the intermediate variables connecting the call sites.

use std::path::Path;

use fnv::{FnvHashMap, FnvHashSet};
use petgraph::algo::toposort;
use petgraph::graph::DiGraph;

use errors::*;
use graph::{FunctionInfo, GraphDescription, GraphEdge, GraphNode};
use ordered::LineQueue;
use types::{Declaration, Variable};

/// Type names whose nodes forward a value instead of emitting a call
const PASS_THROUGH: &[&str] = &["int", "float", "vec2", "vec3", "vec4", "sampler2D"];

/// Designated sink node receiving the final fragment color
const COLOR_SINK: &str = "outColor";

fn is_pass_through(model: &str) -> bool {
    model == COLOR_SINK || PASS_THROUGH.contains(&model)
}

/// The variable carrying one (node, interface) output, and whether a call
/// argument has claimed it yet
#[derive(Debug, Clone)]
struct OutputBinding {
    name: String,
    connected: bool,
}

/// Compiles a graph description into the text of a stage's `main` function
///
/// Parameter metadata is read from `<resource_path>/graph_shader/` once per
/// function name and cached for the lifetime of the compiler.
#[derive(Debug, Default)]
pub struct GraphCompiler {
    info_cache: FnvHashMap<String, FunctionInfo>,
}

impl GraphCompiler {
    pub fn compile(&mut self, graph: &GraphDescription, resource_path: &Path) -> Result<String> {
        let sorted = sort_nodes(graph)?;
        trace!(
            "call order: {:?}",
            sorted.iter().map(|node| &node.name).collect::<Vec<_>>()
        );

        let mut edges = graph.edges.clone();
        let mut vars = Vec::new();
        let mut appends = Vec::new();
        let mut outputs = resolve_variables(graph, &mut edges, &mut vars, &mut appends);

        let mut default_inputs = Vec::new();
        let mut calls = Vec::new();
        for node in sorted {
            let function = node.model.name.clone();
            let info = self.function_info(resource_path, &function)?;

            let mut incoming = LineQueue::default();
            let mut outgoing = LineQueue::default();
            let mut connected_in = FnvHashSet::default();
            let mut connected_out = FnvHashSet::default();
            for edge in &edges {
                if edge.to.name == node.name {
                    if let Some(param) = info.params.inputs.get(&edge.to.interface) {
                        // the queue emits by descending priority; negating the
                        // parameter index puts the lowest index first
                        incoming.push(edge.name.clone(), -param.index);
                        connected_in.insert(edge.to.interface.as_str());
                    }
                } else if edge.from.name == node.name {
                    let key = (edge.from.name.clone(), edge.from.interface.clone());
                    if let Some(binding) = outputs.get_mut(&key) {
                        if !binding.connected {
                            if let Some(param) = info.params.outputs.get(&edge.from.interface) {
                                outgoing.push(edge.name.clone(), -param.index);
                                connected_out.insert(edge.from.interface.as_str());
                                binding.connected = true;
                            }
                        }
                    }
                }
            }

            for (name, param) in &info.params.outputs {
                if !connected_out.contains(name.as_str()) {
                    let var = format!("unused_{}_{}", name, node.name);
                    outgoing.push(var.clone(), -param.index);
                    vars.push(Declaration::new(&param.ty, &var));
                }
            }
            for (name, param) in &info.params.inputs {
                if !connected_in.contains(name.as_str()) {
                    let var = format!("default_{}_{}", name, node.name);
                    let value = node
                        .data
                        .inputs
                        .get(name)
                        .cloned()
                        .unwrap_or_else(|| type_default(&param.ty).to_string());
                    incoming.push(var.clone(), -param.index);
                    default_inputs.push(Variable::new(&param.ty, &var, &value));
                }
            }

            let mut call = format!("  {}(", function);
            let mut first = true;
            for entry in incoming.into_sorted().into_iter().chain(outgoing.into_sorted()) {
                if !first {
                    call.push_str(", ");
                }
                first = false;
                call.push_str(&entry.line);
            }
            call.push_str(");\n");
            calls.push(call);
        }

        let mut code = String::from("void main() {\n");
        for var in &vars {
            code.push_str(&format!("  {};\n", var));
        }
        code.push('\n');
        for input in &default_inputs {
            code.push_str(&format!("  const {};\n", input));
        }
        code.push('\n');
        for call in &calls {
            code.push_str(call);
            code.push('\n');
        }
        for append in &appends {
            code.push_str(append);
        }
        code.push_str("}\n");
        Ok(code)
    }

    fn function_info(&mut self, resource_path: &Path, function: &str) -> Result<&FunctionInfo> {
        if !self.info_cache.contains_key(function) {
            let info = FunctionInfo::load(resource_path, function)?;
            self.info_cache.insert(function.to_string(), info);
        }
        Ok(&self.info_cache[function])
    }
}

/// Order the graph's function nodes so every call follows its producers
///
/// Edges naming unknown or pass-through nodes contribute no ordering
/// relation; isolated nodes still appear in the result.
fn sort_nodes(graph: &GraphDescription) -> Result<Vec<&GraphNode>> {
    let mut relations = DiGraph::<usize, ()>::new();
    let mut indices = FnvHashMap::default();
    for (position, node) in graph.nodes.iter().enumerate() {
        if !is_pass_through(&node.model.name) {
            let index = relations.add_node(position);
            indices.insert(node.name.as_str(), index);
        }
    }
    for edge in &graph.edges {
        if let (Some(&from), Some(&to)) = (
            indices.get(edge.from.name.as_str()),
            indices.get(edge.to.name.as_str()),
        ) {
            relations.add_edge(from, to, ());
        }
    }
    let sorted = match toposort(&relations, None) {
        Ok(sorted) => sorted,
        Err(_) => bail!(ErrorKind::CyclicGraphDependency),
    };
    Ok(sorted
        .into_iter()
        .map(|index| &graph.nodes[relations[index]])
        .collect())
}

/// Resolve the variable carried by every edge, declaring each produced value
/// exactly once
///
/// Digit-leading edge names get an `e` prefix to stay valid identifiers.
/// Edges leaving a pass-through node inherit that node's name instead of a
/// declaration, and edges sharing a producing (node, interface) pair share
/// one variable. Edges reaching the color sink or a pass-through destination
/// queue an assignment for the end of `main`.
fn resolve_variables(
    graph: &GraphDescription,
    edges: &mut [GraphEdge],
    vars: &mut Vec<Declaration>,
    appends: &mut Vec<String>,
) -> FnvHashMap<(String, String), OutputBinding> {
    let nodes: FnvHashMap<&str, &GraphNode> = graph
        .nodes
        .iter()
        .map(|node| (node.name.as_str(), node))
        .collect();

    let mut outputs: FnvHashMap<(String, String), OutputBinding> = FnvHashMap::default();
    for edge in edges.iter_mut() {
        if edge.name.starts_with(|c: char| c.is_ascii_digit()) {
            edge.name = format!("e{}", edge.name);
        }

        let source = nodes.get(edge.from.name.as_str());
        let key = (edge.from.name.clone(), edge.from.interface.clone());
        let mut declare = true;
        if source.map_or(false, |node| is_pass_through(&node.model.name)) {
            edge.name = edge.from.name.clone();
            declare = false;
        } else if let Some(binding) = outputs.get(&key) {
            edge.name = binding.name.clone();
            declare = false;
        }

        if let Some(target) = nodes.get(edge.to.name.as_str()) {
            if target.model.name == COLOR_SINK {
                appends.push(format!("  gl_FragColor = {};\n", edge.name));
            } else if is_pass_through(&target.model.name) {
                appends.push(format!("  {} = {};\n", edge.to.name, edge.name));
            }
        }

        if declare {
            vars.push(Declaration::new(&edge.data.data_type, &edge.name));
            outputs.insert(
                key,
                OutputBinding {
                    name: edge.name.clone(),
                    connected: false,
                },
            );
        }
    }
    outputs
}

/// Zero value used when an unconnected input has no node-level default
fn type_default(ty: &str) -> &'static str {
    match ty {
        "int" => "0",
        "float" => "0.0",
        "vec2" => "vec2(0.0)",
        "vec3" => "vec3(0.0)",
        "vec4" => "vec4(0.0)",
        _ => "0",
    }
}
