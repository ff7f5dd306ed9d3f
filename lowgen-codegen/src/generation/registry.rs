//! File registration for generated projects.
//!
//! Every file of a generated project is registered with a project-relative
//! path, its content and a category. The registry can then be previewed,
//! flattened into an in-memory map (for archives) or written to disk.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//!
//! registry.register(FileEntry::config("package.json", package_json.render()));
//! registry.register(FileEntry::page("pages/index/index.tsx", code));
//! registry.register(FileEntry::style("pages/index/index.scss", css));
//!
//! registry.write_all(&output_dir)?;
//! ```

use std::path::Path;

use eyre::Result;
use indexmap::IndexMap;
use lowgen_core::{FileRules, GeneratedFile, Overwrite, WriteResult};

/// Category of generated file, determining output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileCategory {
    /// Project configuration (package.json, tsconfig.json, project.config.json)
    Config,
    /// Application entry files (app.config.ts, app.scss)
    App,
    /// Page sources
    Page,
    /// Page stylesheets
    Style,
}

impl FileCategory {
    /// Get the default overwrite behavior for this category.
    pub fn default_overwrite(&self) -> Overwrite {
        Overwrite::Always
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Config => "config",
            FileCategory::App => "app",
            FileCategory::Page => "page",
            FileCategory::Style => "style",
        }
    }
}

/// A file to be generated.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    /// Project-relative path with `/` separators.
    pub path: String,
    /// File content.
    pub content: String,
    /// Category determining output order.
    pub category: FileCategory,
    /// Override default overwrite behavior.
    pub overwrite: Option<Overwrite>,
}

impl FileEntry {
    /// Create a new file entry with the given category.
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        category: FileCategory,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
            overwrite: None,
        }
    }

    pub fn config(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Config)
    }

    pub fn app(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::App)
    }

    pub fn page(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Page)
    }

    pub fn style(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Style)
    }

    /// Create from a GeneratedFile, respecting its path and rules.
    pub fn from_generated<F: GeneratedFile>(file: &F, category: FileCategory) -> Self {
        Self::new(file.path(), file.render(), category).with_overwrite(file.rules().overwrite)
    }

    /// Override the default overwrite behavior.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    /// Get the effective overwrite behavior.
    pub fn overwrite(&self) -> Overwrite {
        self.overwrite
            .unwrap_or_else(|| self.category.default_overwrite())
    }
}

impl GeneratedFile for FileEntry {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn render(&self) -> String {
        self.content.clone()
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite(),
        }
    }
}

/// Registry for collecting and managing generated files.
///
/// Entries come out in category order (Config, App, Page, Style) and in
/// registration order within a category.
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file entry. A later entry with the same path replaces the earlier one.
    pub fn register(&mut self, entry: FileEntry) {
        match self.entries.iter_mut().find(|e| e.path == entry.path) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Get all registered entries, sorted by category.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.category);
        sorted.into_iter()
    }

    /// Look up an entry by path.
    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preview all files.
    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
                category: e.category,
            })
            .collect()
    }

    /// Flatten into a path -> content map, in output order.
    pub fn to_map(&self) -> IndexMap<String, String> {
        self.entries()
            .map(|e| (e.path.clone(), e.content.clone()))
            .collect()
    }

    /// Write all files below the output directory.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            match entry.write(base)? {
                WriteResult::Written => {
                    stats.written += 1;
                    stats.written_paths.push(entry.path.clone());
                }
                WriteResult::Skipped => {
                    stats.skipped += 1;
                    stats.skipped_paths.push(entry.path.clone());
                }
            }
        }

        tracing::debug!(written = stats.written, skipped = stats.skipped, "wrote project files");
        Ok(stats)
    }

    /// Clear all registered entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// A preview entry for displaying what would be generated.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    /// Project-relative path.
    pub path: String,
    /// File content.
    pub content: String,
    /// File category.
    pub category: FileCategory,
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Number of files written.
    pub written: usize,
    /// Number of files skipped (already existed).
    pub skipped: usize,
    /// Paths of written files.
    pub written_paths: Vec<String>,
    /// Paths of skipped files.
    pub skipped_paths: Vec<String>,
}
