//! Manifest types and parsing for lowgen.toml files.

mod components;
mod config;
mod file;
mod parse;
mod validate;

use indexmap::IndexMap;
use lowgen_ir::StyleMap;
use serde::Deserialize;

pub use components::{ComponentDecl, PropRuleDecl, RuleDecl, StyleRuleDecl, TransformDecl};
pub use config::CodeGenerationConfig;
pub use file::LowgenToml;
pub use validate::ParseContext;

/// Root manifest for lowgen.toml
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Project metadata and generation settings, including `[styles]`.
    pub project: CodeGenerationConfig,

    /// Custom component mappings keyed by logical component type.
    pub components: IndexMap<String, ComponentDecl>,
}

/// On-disk shape of lowgen.toml before `[styles]` is folded into the project.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    project: CodeGenerationConfig,

    /// Global style rules keyed by selector.
    #[serde(default)]
    styles: IndexMap<String, StyleMap>,

    #[serde(default)]
    components: IndexMap<String, ComponentDecl>,
}

impl From<RawManifest> for Manifest {
    fn from(raw: RawManifest) -> Self {
        let mut project = raw.project;
        project.global_styles = raw.styles;
        Self {
            project,
            components: raw.components,
        }
    }
}

impl Manifest {
    /// Check if a custom mapping is declared for a component type.
    pub fn has_component(&self, component_type: &str) -> bool {
        self.components.contains_key(component_type)
    }
}
