//! Per-stage source providers behind one program-assembly surface

use std::collections::BTreeMap;

use generator::{Shader, ShaderGenerator, ShaderProgram};
use types::ShaderType;

/// A source of complete shader text for the stages it supports
pub trait ShaderProvider {
    fn generate_shader_source(&self, stage: ShaderType) -> String;
}

impl ShaderProvider for ShaderGenerator {
    fn generate_shader_source(&self, stage: ShaderType) -> String {
        self.generate_source(stage, None)
    }
}

/// Owns one provider per stage and assembles their sources into a program
#[derive(Default)]
pub struct ShaderFactory {
    providers: BTreeMap<ShaderType, Box<dyn ShaderProvider>>,
}

impl ShaderFactory {
    /// Register the provider responsible for a stage, replacing any earlier one
    pub fn set_shader_provider(&mut self, provider: Box<dyn ShaderProvider>, stage: ShaderType) {
        self.providers.insert(stage, provider);
    }

    /// Source text for a stage, or an empty string if no provider covers it
    pub fn generate_shader_source(&self, stage: ShaderType) -> String {
        match self.providers.get(&stage) {
            Some(provider) => provider.generate_shader_source(stage),
            None => String::new(),
        }
    }

    /// Build a program with one shader attached per registered provider
    pub fn generate_program(&self) -> ShaderProgram {
        let mut program = ShaderProgram::default();
        for (&stage, provider) in &self.providers {
            program.attach(Shader::new(stage, provider.generate_shader_source(stage)));
        }
        program
    }
}
