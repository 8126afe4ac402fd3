//! Exports everything you probably want to have in scope to get started

pub use compiler::GraphCompiler;
pub use errors::{Error, ErrorKind};
pub use factory::{ShaderFactory, ShaderProvider};
pub use func::{FunctionCall, MainVar, ShaderFunc};
pub use generator::{Shader, ShaderGenerator, ShaderProgram};
pub use graph::*;
pub use types::*;
