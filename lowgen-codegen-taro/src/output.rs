//! Generated project aggregate.

use indexmap::IndexMap;
use lowgen_codegen::{
    Diagnostic,
    generation::{DependencyCollector, FileCategory, FileEntry, FileRegistry, ImportCollector},
};
use lowgen_core::{FileRules, Overwrite};

/// Source of one generated page.
#[derive(Debug, Clone)]
pub struct PageSource {
    /// TSX source of the page component.
    pub code: String,
    pub imports: ImportCollector,
    pub dependencies: DependencyCollector,
    /// `index.config.ts` content, for pages with a title.
    pub config: Option<String>,
}

/// Everything generated for one project and platform.
///
/// Page keys are extension-less routes (`pages/home/index`); style and
/// config keys are full project-relative paths.
#[derive(Debug, Clone, Default)]
pub struct GeneratedCode {
    pub pages: IndexMap<String, PageSource>,
    /// Shared components, keyed like pages.
    pub components: IndexMap<String, String>,
    pub styles: IndexMap<String, String>,
    pub configs: IndexMap<String, String>,
    /// Non-fatal findings, located by page route.
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedCode {
    /// Flatten into a path -> content map.
    ///
    /// Page and component sources get the `.tsx` extension. Configs with
    /// empty content (a project manifest on a non mini-program target) are
    /// left out.
    pub fn files(&self) -> IndexMap<String, String> {
        self.to_registry().to_map()
    }

    /// Register every file for writing or previewing.
    pub fn to_registry(&self) -> FileRegistry {
        let mut registry = FileRegistry::new();

        for (name, content) in &self.configs {
            if content.is_empty() {
                continue;
            }
            let category = if name.starts_with("app.") {
                FileCategory::App
            } else {
                FileCategory::Config
            };
            let mut entry = FileEntry::new(name, content, category);
            if let Some(rules) = config_rules(name) {
                entry = entry.with_overwrite(rules.overwrite);
            }
            registry.register(entry);
        }
        for (route, page) in &self.pages {
            registry.register(FileEntry::page(format!("{route}.tsx"), &page.code));
            if let Some(config) = &page.config {
                let dir = route.rsplit_once('/').map_or("", |(dir, _)| dir);
                registry.register(FileEntry::page(
                    format!("{dir}/index.config.ts"),
                    config,
                ));
            }
        }
        for (route, code) in &self.components {
            registry.register(FileEntry::page(format!("{route}.tsx"), code));
        }
        for (path, css) in &self.styles {
            let category = if path.starts_with("app.") {
                FileCategory::App
            } else {
                FileCategory::Style
            };
            registry.register(FileEntry::new(path, css, category));
        }
        registry
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Packages imported by any page.
    pub fn dependencies(&self) -> DependencyCollector {
        let mut deps = DependencyCollector::new();
        for page in self.pages.values() {
            deps.merge(&page.dependencies);
        }
        deps
    }
}

fn config_rules(name: &str) -> Option<FileRules> {
    (name == "project.config.json").then_some(FileRules {
        overwrite: Overwrite::IfMissing,
    })
}
