use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that render into one file of the generated project.
///
/// Paths are virtual: relative to the project root and always written with
/// `/` separators, so the same value can key an in-memory file map, an
/// archive entry or a location on disk.
pub trait GeneratedFile {
    /// Project-relative path of the file (e.g. `pages/index/index.tsx`)
    fn path(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Write the file below `base`
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let target = resolve(base, &self.path());
        write_with_rules(&target, &self.render(), &self.rules())
    }
}

/// Join a `/`-separated virtual path onto a base directory.
fn resolve(base: &Path, virtual_path: &str) -> PathBuf {
    virtual_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
}

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    match rules.overwrite {
        Overwrite::Always => {
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfMissing if path.exists() => Ok(WriteResult::Skipped),
        Overwrite::IfMissing => {
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A plain file with already rendered content
#[derive(Debug, Clone)]
pub struct File {
    path: String,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a file that is always overwritten.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Create a file that is only written when nothing exists at its path.
    pub fn if_missing(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            rules: FileRules {
                overwrite: Overwrite::IfMissing,
            },
            ..Self::new(path, content)
        }
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for File {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn render(&self) -> String {
        self.content.clone()
    }

    fn rules(&self) -> FileRules {
        self.rules.clone()
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (user-owned scaffolding)
    IfMissing,
}
