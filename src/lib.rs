//! Assemble GLSL shader sources from loosely-coupled shader fragments
//!
//! Every feature of a material contributes a `ShaderFunc` describing the
//! declarations and statements it needs in one pipeline stage. A
//! `ShaderGenerator` merges the contributions registered per stage and
//! assembles the final source text, composing the `main` entry point from
//! the registered statements in priority order.
//!
//! ```
//! extern crate glslgen;
//!
//! use glslgen::prelude::*;
//!
//! fn main() {
//!     let mut func = ShaderFunc::default();
//!     func.set_min_version(120);
//!     func.add_uniform(Declaration::new("vec4", "lightPos"));
//!     func.add_varying(Declaration::new("vec3", "normalVarying"));
//!     func.add_main_var(MainVar::new("gl_FragColor", "vec4(normalVarying, 1.0)", 0));
//!
//!     let mut generator = ShaderGenerator::default();
//!     generator.add_shader_function(func, ShaderType::Fragment);
//!
//!     let source = generator.generate_source(ShaderType::Fragment, None);
//!     assert!(source.starts_with("#version 120"));
//!     assert!(source.contains("uniform vec4 lightPos;"));
//! }
//! ```
//!
//! A stage's `main` body can instead be compiled from a node-graph
//! description with `ShaderGenerator::load_graph_shader`, which orders the
//! graph's function calls topologically and resolves the edge variables
//! connecting the call sites.

#![warn(clippy::pedantic)]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate fnv;
extern crate petgraph;
extern crate serde;
extern crate serde_json;

mod ordered;

pub mod compiler;
pub mod errors;
pub mod factory;
pub mod func;
pub mod generator;
pub mod graph;
pub mod prelude;
pub mod types;
