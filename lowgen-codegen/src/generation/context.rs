//! Per-call generation state.

use lowgen_core::TargetPlatform;

use super::{DependencyCollector, ImportCollector};
use crate::{Diagnostic, style::StyleSheet};

/// State accumulated while generating one page.
///
/// A context is created by every top-level generation call and dropped with
/// its result; nothing in it outlives the call.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// The target platform.
    pub platform: TargetPlatform,
    /// Tags to import, per module path.
    pub imports: ImportCollector,
    /// Adapted style rules collected for the page.
    pub global_styles: StyleSheet,
    /// npm packages implied by import paths.
    pub dependencies: DependencyCollector,
    /// Non-fatal findings.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(platform: TargetPlatform) -> Self {
        Self {
            platform,
            imports: ImportCollector::new(),
            global_styles: StyleSheet::new(),
            dependencies: DependencyCollector::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Record that `tag` is used and must be imported from `import_path`.
    pub fn use_component(&mut self, import_path: &str, tag: &str) {
        self.imports.add(import_path, tag);
        self.dependencies.add_import_path(import_path);
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = GenerationContext::new(TargetPlatform::Weapp);
        assert_eq!(ctx.platform, TargetPlatform::Weapp);
        assert!(ctx.imports.is_empty());
        assert!(ctx.global_styles.is_empty());
        assert!(ctx.dependencies.is_empty());
        assert_eq!(ctx.warning_count(), 0);
    }

    #[test]
    fn test_use_component() {
        let mut ctx = GenerationContext::new(TargetPlatform::H5);
        ctx.use_component("@tarojs/components", "View");
        ctx.use_component("@tarojs/components", "View");
        ctx.use_component("@acme/ui/card", "Card");

        assert_eq!(ctx.imports.len(), 2);
        assert_eq!(ctx.imports.symbols("@tarojs/components").unwrap().len(), 1);
        assert_eq!(
            ctx.dependencies.names(),
            vec!["@acme/ui", "@tarojs/components"]
        );
    }

    #[test]
    fn test_warning_count_ignores_other_severities() {
        let mut ctx = GenerationContext::new(TargetPlatform::Rn);
        ctx.diagnostics.push(Diagnostic::warning("style", "dropped"));
        ctx.diagnostics.push(Diagnostic::error("ast", "broken"));

        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.warnings().next().unwrap().message, "dropped");
    }
}
