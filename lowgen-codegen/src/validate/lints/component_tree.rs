use super::super::{Lint, LintContext};
use crate::Diagnostic;

/// Lint that errors when a page has no component tree.
pub struct ComponentTreeLint;

impl Lint for ComponentTreeLint {
    fn name(&self) -> &'static str {
        "component-tree"
    }

    fn description(&self) -> &'static str {
        "Require a root component"
    }

    fn check(&self, cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        if cx.page.components.is_none() {
            diagnostics.push(
                Diagnostic::error("validate", "page must contain a component tree")
                    .at("components"),
            );
        }
    }
}
