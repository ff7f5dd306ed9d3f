//! A loaded lowgen project.

use std::path::{Path, PathBuf};

use lowgen_codegen_taro::GenerationService;
use lowgen_core::TargetPlatform;
use lowgen_ir::PageModel;
use lowgen_manifest::{CodeGenerationConfig, LowgenToml, Result};

/// lowgen.toml together with every page it lists.
pub struct Project {
    toml: LowgenToml,
    pages: Vec<PageModel>,
}

impl Project {
    /// Open lowgen.toml and parse its pages.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let toml = LowgenToml::open(path)?;
        let pages = toml.load_pages()?;
        tracing::info!(
            manifest = %toml.path().display(),
            pages = pages.len(),
            "loaded project"
        );
        Ok(Self { toml, pages })
    }

    pub fn config(&self) -> &CodeGenerationConfig {
        &self.toml.manifest().project
    }

    pub fn pages(&self) -> &[PageModel] {
        &self.pages
    }

    pub fn path(&self) -> &Path {
        self.toml.path()
    }

    /// The requested platform, or the manifest default.
    pub fn platform(&self, requested: Option<TargetPlatform>) -> TargetPlatform {
        requested.unwrap_or(self.config().platform)
    }

    /// The requested output directory, or the manifest one resolved against lowgen.toml.
    pub fn output_dir(&self, requested: Option<&Path>) -> PathBuf {
        requested.map_or_else(|| self.toml.output_dir(), Path::to_path_buf)
    }

    /// A generation service with the project's custom components registered.
    pub fn service(&self) -> GenerationService {
        let mut service = GenerationService::new();
        service.registry_mut().register_manifest(self.toml.manifest());
        service
    }
}
