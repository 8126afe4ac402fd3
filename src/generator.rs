//! Per-stage fragment registry and GLSL source assembly

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::Path;

use compiler::GraphCompiler;
use errors::Result;
use func::ShaderFunc;
use graph::GraphDescription;
use ordered::LineQueue;
use types::ShaderType;

/// One pipeline stage with its attached source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shader {
    pub stage: ShaderType,
    pub source: String,
}

impl Shader {
    pub fn new(stage: ShaderType, source: String) -> Shader {
        Shader { stage, source }
    }
}

/// A program object holding the source of every attached stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderProgram {
    shaders: Vec<Shader>,
}

impl ShaderProgram {
    pub fn attach(&mut self, shader: Shader) {
        self.shaders.push(shader);
    }

    pub fn shaders(&self) -> &[Shader] {
        &self.shaders
    }

    pub fn shader(&self, stage: ShaderType) -> Option<&Shader> {
        self.shaders.iter().find(|shader| shader.stage == stage)
    }
}

/// Collects the shader fragments registered per stage and assembles them
/// into complete stage sources
///
/// A stage's `main` body is composed from the registered statements in
/// priority order, unless a graph shader was loaded for that stage, in which
/// case the compiled graph body always wins.
#[derive(Debug, Clone, Default)]
pub struct ShaderGenerator {
    functions: BTreeMap<ShaderType, ShaderFunc>,
    graph_sources: BTreeMap<ShaderType, String>,
}

impl ShaderGenerator {
    /// Register a fragment for a stage, merging it into any earlier registration
    pub fn add_shader_function(&mut self, func: ShaderFunc, stage: ShaderType) {
        match self.functions.entry(stage) {
            Entry::Occupied(mut entry) => {
                trace!("merging shader function into {:?} stage", stage);
                entry.get_mut().merge(func);
            }
            Entry::Vacant(entry) => {
                entry.insert(func);
            }
        }
    }

    /// Emit the complete source for a stage, or an empty string if nothing
    /// was registered for it
    ///
    /// A non-empty `main_source` replaces the composed `main` body verbatim.
    pub fn generate_source(&self, stage: ShaderType, main_source: Option<&str>) -> String {
        let func = match self.functions.get(&stage) {
            Some(func) => func,
            None => return String::new(),
        };

        let mut code = String::new();
        if func.min_version != 0 {
            code.push_str(&format!("#version {}\n", func.min_version));
        }
        for extension in &func.enabled_extensions {
            code.push_str(&format!("#extension {} : enable\n", extension));
        }
        for extension in &func.disabled_extensions {
            code.push_str(&format!("#extension {} : disable\n", extension));
        }
        code.push('\n');

        for uniform in &func.uniforms {
            code.push_str(&format!("uniform {};\n", uniform));
        }
        for constant in &func.constants {
            code.push_str(&format!("const {};\n", constant));
        }
        match stage {
            ShaderType::Vertex => {
                for varying in &func.varyings {
                    code.push_str(&format!("varying {};\n", varying));
                }
                for attribute in &func.attributes {
                    code.push_str(&format!("attribute {};\n", attribute));
                }
            }
            ShaderType::Fragment => {
                for varying in &func.varyings {
                    code.push_str(&format!("varying {};\n", varying));
                }
            }
            ShaderType::Geometry => {}
        }
        code.push('\n');

        for &(_, ref dep) in &func.deps {
            code.push_str(dep);
        }
        code.push_str(&func.code);
        code.push('\n');

        match main_source {
            Some(main) if !main.is_empty() => code.push_str(main),
            _ => code.push_str(&self.generate_main_source(stage)),
        }
        code
    }

    /// Compose the `main` function for a stage
    ///
    /// Returns the graph-compiled body verbatim when one was loaded for the
    /// stage, and an empty string when the stage has no registration at all.
    pub fn generate_main_source(&self, stage: ShaderType) -> String {
        if let Some(source) = self.graph_sources.get(&stage) {
            return source.clone();
        }
        let func = match self.functions.get(&stage) {
            Some(func) => func,
            None => return String::new(),
        };

        let mut code = String::from("void main()\n{\n");
        for declaration in &func.main_var_decs {
            code.push_str(&format!("    {};\n", declaration));
        }

        let mut lines = LineQueue::default();
        for var in &func.main_vars {
            lines.push(var.to_string(), var.priority);
        }
        for call in &func.function_calls {
            lines.push(call.to_string(), call.priority);
        }
        for snippet in &func.snippets {
            lines.push(snippet.line.clone(), snippet.priority);
        }
        for line in lines.into_sorted() {
            code.push_str(&format!("    {}; //Priority: {}\n", line.line, line.priority));
        }

        for export in &func.exports {
            code.push_str(&format!("    {};\n", export));
        }
        for suffix in &func.suffixes {
            code.push_str(&format!("    {};\n", suffix));
        }
        code.push_str("}\n");
        code
    }

    /// Build a program with one shader attached per registered stage
    pub fn generate(&self) -> ShaderProgram {
        let mut program = ShaderProgram::default();
        for &stage in self.functions.keys() {
            program.attach(Shader::new(stage, self.generate_source(stage, None)));
        }
        program
    }

    /// Compile a node-graph description into the `main` body for a stage
    ///
    /// The compiled body replaces the statement-driven composer for that
    /// stage on every later `generate_main_source` call. Nothing is cached
    /// when compilation fails.
    pub fn load_graph_shader(
        &mut self,
        graph: &GraphDescription,
        resource_path: &Path,
        stage: ShaderType,
    ) -> Result<()> {
        let mut compiler = GraphCompiler::default();
        let code = compiler.compile(graph, resource_path)?;
        debug!("compiled graph shader for {:?} stage:\n{}", stage, code);
        self.graph_sources.insert(stage, code);
        Ok(())
    }
}
