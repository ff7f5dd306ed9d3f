use std::path::PathBuf;

use indexmap::IndexMap;
use lowgen_core::{TargetPlatform, Version};
use lowgen_ir::StyleMap;
use serde::Deserialize;

/// Project metadata and generation settings (`[project]` in lowgen.toml).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeGenerationConfig {
    /// Project (and npm package) name
    #[serde(rename = "name")]
    pub project_name: String,

    /// Version
    #[serde(default = "default_version")]
    pub version: Version,

    /// Default target platform
    pub platform: TargetPlatform,

    /// Output directory, relative to lowgen.toml
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Author information
    pub author: Option<String>,

    /// Project description
    pub description: Option<String>,

    /// Mini program app id written to project.config.json
    pub app_id: Option<String>,

    /// Page files, relative to lowgen.toml
    #[serde(default)]
    pub pages: Vec<PathBuf>,

    /// Global style rules keyed by selector, from `[styles]`
    #[serde(skip)]
    pub global_styles: IndexMap<String, StyleMap>,
}

fn default_version() -> Version {
    Version::new(0, 1, 0)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl CodeGenerationConfig {
    /// Create a config with defaults for everything but name and platform.
    pub fn new(project_name: impl Into<String>, platform: TargetPlatform) -> Self {
        Self {
            project_name: project_name.into(),
            version: default_version(),
            platform,
            output_dir: default_output_dir(),
            author: None,
            description: None,
            app_id: None,
            pages: Vec::new(),
            global_styles: IndexMap::new(),
        }
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Add a global style rule.
    pub fn with_global_style(mut self, selector: impl Into<String>, styles: StyleMap) -> Self {
        self.global_styles.insert(selector.into(), styles);
        self
    }
}
