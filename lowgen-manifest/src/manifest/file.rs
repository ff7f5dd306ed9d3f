use std::path::{Path, PathBuf};

use lowgen_ir::PageModel;

use super::Manifest;
use crate::{Result, page::parse_page_file};

/// Represents a lowgen.toml file with both raw content and parsed manifest.
pub struct LowgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl LowgenToml {
    /// Open and parse a lowgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the lowgen.toml, which relative paths resolve against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    /// Output directory resolved against the manifest location.
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir().join(&self.manifest.project.output_dir)
    }

    /// Parse every page listed in `project.pages`, in declaration order.
    pub fn load_pages(&self) -> Result<Vec<PageModel>> {
        self.manifest
            .project
            .pages
            .iter()
            .map(|page| parse_page_file(self.base_dir().join(page)))
            .collect()
    }
}
