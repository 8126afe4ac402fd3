use std::path::Path;

use glslgen::prelude::*;

/// Root of the on-disk parameter metadata used by the graph tests
pub fn resource_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data"))
}

/// Three `passFloat` calls chained through two float edges, with the nodes
/// declared out of dependency order
pub fn chain_graph() -> GraphDescription {
    let mut graph = GraphDescription::default();
    graph.add_node(GraphNode::new("stepC", "passFloat"));
    graph.add_node(GraphNode::new("stepA", "passFloat"));
    graph.add_node(GraphNode::new("stepB", "passFloat"));
    graph.add_edge(GraphEdge::new(
        "e1",
        Endpoint::new("stepA", "result"),
        Endpoint::new("stepB", "value"),
        "float",
    ));
    graph.add_edge(GraphEdge::new(
        "e2",
        Endpoint::new("stepB", "result"),
        Endpoint::new("stepC", "value"),
        "float",
    ));
    graph
}

/// A texture lookup tinted by itself and written to the color sink; covers
/// pass-through sources, fan-out, digit-leading edge names and node-level
/// default inputs
pub fn material_graph() -> GraphDescription {
    let mut graph = GraphDescription::default();
    graph.add_node(GraphNode::new("tex", "sampler2D"));
    graph.add_node(GraphNode::new("uvCoords", "vec2"));
    graph.add_node(GraphNode::new("lookup", "texLookup"));
    let mut tint = GraphNode::new("tint", "mix4");
    tint.data
        .inputs
        .insert(String::from("ratio"), String::from("0.5"));
    graph.add_node(tint);
    graph.add_node(GraphNode::new("screen", "outColor"));
    graph.add_edge(GraphEdge::new(
        "tex0",
        Endpoint::new("tex", "value"),
        Endpoint::new("lookup", "sampler"),
        "sampler2D",
    ));
    graph.add_edge(GraphEdge::new(
        "uv0",
        Endpoint::new("uvCoords", "value"),
        Endpoint::new("lookup", "uv"),
        "vec2",
    ));
    graph.add_edge(GraphEdge::new(
        "42col",
        Endpoint::new("lookup", "color"),
        Endpoint::new("tint", "a"),
        "vec4",
    ));
    graph.add_edge(GraphEdge::new(
        "42colB",
        Endpoint::new("lookup", "color"),
        Endpoint::new("tint", "b"),
        "vec4",
    ));
    graph.add_edge(GraphEdge::new(
        "mixed",
        Endpoint::new("tint", "result"),
        Endpoint::new("screen", "in"),
        "vec4",
    ));
    graph
}

/// Two nodes feeding each other
pub fn cycle_graph() -> GraphDescription {
    let mut graph = GraphDescription::default();
    graph.add_node(GraphNode::new("loopA", "passFloat"));
    graph.add_node(GraphNode::new("loopB", "passFloat"));
    graph.add_edge(GraphEdge::new(
        "c1",
        Endpoint::new("loopA", "result"),
        Endpoint::new("loopB", "value"),
        "float",
    ));
    graph.add_edge(GraphEdge::new(
        "c2",
        Endpoint::new("loopB", "result"),
        Endpoint::new("loopA", "value"),
        "float",
    ));
    graph
}

/// One function node without any edge
pub fn solo_graph() -> GraphDescription {
    let mut graph = GraphDescription::default();
    graph.add_node(GraphNode::new("solo", "passFloat"));
    graph
}

/// A float pass-through node feeding a function input
pub fn pass_through_source_graph() -> GraphDescription {
    let mut graph = GraphDescription::default();
    graph.add_node(GraphNode::new("bias", "float"));
    graph.add_node(GraphNode::new("gate", "passFloat"));
    graph.add_edge(GraphEdge::new(
        "b0",
        Endpoint::new("bias", "value"),
        Endpoint::new("gate", "value"),
        "float",
    ));
    graph
}

/// A function output forwarded into a float pass-through alias
pub fn pass_through_alias_graph() -> GraphDescription {
    let mut graph = GraphDescription::default();
    graph.add_node(GraphNode::new("src", "passFloat"));
    graph.add_node(GraphNode::new("level", "float"));
    graph.add_edge(GraphEdge::new(
        "lv",
        Endpoint::new("src", "result"),
        Endpoint::new("level", "value"),
        "float",
    ));
    graph
}

/// An edge whose source node is missing from the node list
pub fn dangling_edge_graph() -> GraphDescription {
    let mut graph = GraphDescription::default();
    graph.add_node(GraphNode::new("gate", "passFloat"));
    graph.add_edge(GraphEdge::new(
        "gIn",
        Endpoint::new("ghost", "o"),
        Endpoint::new("gate", "value"),
        "float",
    ));
    graph
}
