//! Aggregation of one stage's shader fragments

use std::cmp;
use std::collections::BTreeSet;
use std::fmt;

use ordered::PrioritizedLine;
use types::{Declaration, Export, Variable};

/// A prioritized assignment statement for the composed `main` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainVar {
    pub name: String,
    pub value: String,
    pub priority: i32,
}

impl MainVar {
    pub fn new(name: &str, value: &str, priority: i32) -> MainVar {
        MainVar {
            name: name.to_string(),
            value: value.to_string(),
            priority,
        }
    }
}

impl fmt::Display for MainVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// A prioritized call statement for the composed `main` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<String>,
    pub priority: i32,
}

impl FunctionCall {
    pub fn new(name: &str, args: &[&str], priority: i32) -> FunctionCall {
        FunctionCall {
            name: name.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            priority,
        }
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.name, self.args.join(", "))
    }
}

/// Everything one contributor adds to a single shader stage
///
/// Contributions for the same stage are merged into one instance before
/// generation; declaration collections have set semantics while statement
/// lists keep their registration order.
#[derive(Debug, Clone, Default)]
pub struct ShaderFunc {
    pub(crate) min_version: u32,
    pub(crate) enabled_extensions: BTreeSet<String>,
    pub(crate) disabled_extensions: BTreeSet<String>,
    pub(crate) uniforms: BTreeSet<Declaration>,
    pub(crate) constants: BTreeSet<Variable>,
    pub(crate) varyings: BTreeSet<Declaration>,
    pub(crate) attributes: BTreeSet<Declaration>,
    pub(crate) exports: Vec<Export>,
    pub(crate) suffixes: Vec<Declaration>,
    pub(crate) main_var_decs: BTreeSet<Declaration>,
    pub(crate) main_vars: Vec<MainVar>,
    pub(crate) function_calls: Vec<FunctionCall>,
    pub(crate) snippets: Vec<PrioritizedLine>,
    pub(crate) deps: Vec<(String, String)>,
    pub(crate) code: String,
}

impl ShaderFunc {
    /// Raise the minimum language version required by this fragment (0 = no requirement)
    pub fn set_min_version(&mut self, version: u32) {
        self.min_version = version;
    }

    pub fn enable_extension(&mut self, extension: &str) {
        self.enabled_extensions.insert(extension.to_string());
    }

    pub fn disable_extension(&mut self, extension: &str) {
        self.disabled_extensions.insert(extension.to_string());
    }

    pub fn add_uniform(&mut self, uniform: Declaration) {
        self.uniforms.insert(uniform);
    }

    pub fn add_constant(&mut self, constant: Variable) {
        self.constants.insert(constant);
    }

    pub fn add_varying(&mut self, varying: Declaration) {
        self.varyings.insert(varying);
    }

    pub fn add_attribute(&mut self, attribute: Declaration) {
        self.attributes.insert(attribute);
    }

    pub fn add_export(&mut self, export: Export) {
        if !self.exports.contains(&export) {
            self.exports.push(export);
        }
    }

    pub fn add_suffix(&mut self, suffix: Declaration) {
        if !self.suffixes.contains(&suffix) {
            self.suffixes.push(suffix);
        }
    }

    /// Declare a variable at the top of the composed `main` body
    pub fn add_main_var_declaration(&mut self, declaration: Declaration) {
        self.main_var_decs.insert(declaration);
    }

    pub fn add_main_var(&mut self, var: MainVar) {
        self.main_vars.push(var);
    }

    pub fn add_function_call(&mut self, call: FunctionCall) {
        self.function_calls.push(call);
    }

    /// Register a raw statement for the composed `main` body
    pub fn add_snippet(&mut self, line: &str, priority: i32) {
        let index = self.snippets.len();
        self.snippets.push(PrioritizedLine {
            line: line.to_string(),
            priority,
            index,
        });
    }

    /// Register a code snippet emitted before the function bodies, identified
    /// so contributors can reason about what they already pulled in
    pub fn add_dependency_code(&mut self, id: &str, code: &str) {
        self.deps.push((id.to_string(), code.to_string()));
    }

    /// Append to the function-body text emitted between declarations and `main`
    pub fn add_function_code(&mut self, code: &str) {
        self.code.push_str(code);
    }

    /// Fold another contribution for the same stage into this one
    ///
    /// Declaration and extension collections take the set union, statement
    /// lists are concatenated keeping their priorities and relative order,
    /// function-body text is concatenated, and the minimum version becomes
    /// the larger requirement.
    pub fn merge(&mut self, other: ShaderFunc) {
        self.min_version = cmp::max(self.min_version, other.min_version);
        self.enabled_extensions.extend(other.enabled_extensions);
        self.disabled_extensions.extend(other.disabled_extensions);
        self.uniforms.extend(other.uniforms);
        self.constants.extend(other.constants);
        self.varyings.extend(other.varyings);
        self.attributes.extend(other.attributes);
        for export in other.exports {
            self.add_export(export);
        }
        for suffix in other.suffixes {
            self.add_suffix(suffix);
        }
        self.main_var_decs.extend(other.main_var_decs);
        self.main_vars.extend(other.main_vars);
        self.function_calls.extend(other.function_calls);
        for snippet in other.snippets {
            self.add_snippet(&snippet.line, snippet.priority);
        }
        self.deps.extend(other.deps);
        self.code.push_str(&other.code);
    }
}
