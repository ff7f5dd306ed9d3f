//! Advisory page validation.
//!
//! Validation never blocks generation by itself: it reports what generation
//! would trip over (or silently tolerate) so callers can decide.

mod lint;
pub mod lints;

use lowgen_core::TargetPlatform;
use lowgen_ir::PageModel;

pub use lint::{Lint, LintContext};
pub use lints::{
    ComponentIdentityLint, ComponentTreeLint, PageNameLint, UnsupportedComponentLint,
};

use crate::{Diagnostic, mapping::MappingRegistry};

/// Runs a configurable set of lints over a page.
pub struct PageValidator {
    lints: Vec<Box<dyn Lint>>,
}

impl PageValidator {
    /// Create a validator with the structural lints only.
    ///
    /// These report exactly the defects that make a page unusable: a blank
    /// name, a missing tree and nodes without id or type.
    pub fn structural() -> Self {
        Self {
            lints: vec![
                Box::new(PageNameLint),
                Box::new(ComponentTreeLint),
                Box::new(ComponentIdentityLint),
            ],
        }
    }

    /// Create a validator with every built-in lint.
    pub fn new() -> Self {
        Self::structural().with_lint(UnsupportedComponentLint)
    }

    /// Create a validator with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Run every lint and collect the findings in lint order.
    pub fn validate(
        &self,
        page: &PageModel,
        platform: TargetPlatform,
        registry: &MappingRegistry,
    ) -> Vec<Diagnostic> {
        let cx = LintContext::new(page, platform, registry);
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            let before = diagnostics.len();
            lint.check(&cx, &mut diagnostics);
            tracing::debug!(
                lint = lint.name(),
                checks = lint.description(),
                findings = diagnostics.len() - before,
                "ran page lint"
            );
        }
        diagnostics
    }
}

impl Default for PageValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use lowgen_ir::ComponentModel;

    use super::*;

    fn lint_names(validator: &PageValidator) -> Vec<&'static str> {
        validator.lints.iter().map(|l| l.name()).collect()
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            lint_names(&PageValidator::new()),
            vec![
                "page-name",
                "component-tree",
                "component-identity",
                "unsupported-component"
            ]
        );
        assert!(lint_names(&PageValidator::empty()).is_empty());
    }

    #[test]
    fn test_valid_page() {
        let page = PageModel::new(
            "Home",
            ComponentModel::new("root", "Container")
                .with_child(ComponentModel::new("t", "Text").with_prop("content", "Hi")),
        );
        let diagnostics =
            PageValidator::new().validate(&page, TargetPlatform::Weapp, &MappingRegistry::new());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_empty_page() {
        let diagnostics = PageValidator::structural().validate(
            &PageModel::default(),
            TargetPlatform::H5,
            &MappingRegistry::new(),
        );
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["page name cannot be empty", "page must contain a component tree"]
        );
    }

    #[test]
    fn test_custom_lint() {
        struct DeepTreeLint;
        impl Lint for DeepTreeLint {
            fn name(&self) -> &'static str {
                "deep-tree"
            }
            fn description(&self) -> &'static str {
                "Warn about large pages"
            }
            fn check(&self, cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
                let mut count = 0;
                cx.walk(|_, _| count += 1);
                if count > 2 {
                    diagnostics.push(Diagnostic::warning("validate", "large page"));
                }
            }
        }

        let page = PageModel::new(
            "Big",
            ComponentModel::new("a", "Container").with_children([
                ComponentModel::new("b", "Container"),
                ComponentModel::new("c", "Container"),
            ]),
        );
        let diagnostics = PageValidator::empty().with_lint(DeepTreeLint).validate(
            &page,
            TargetPlatform::Tt,
            &MappingRegistry::new(),
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "large page");
    }
}
