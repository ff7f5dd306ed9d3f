use super::super::{Lint, LintContext};
use crate::Diagnostic;

/// Lint that errors on a blank page name.
pub struct PageNameLint;

impl Lint for PageNameLint {
    fn name(&self) -> &'static str {
        "page-name"
    }

    fn description(&self) -> &'static str {
        "Require a non-empty page name"
    }

    fn check(&self, cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        if cx.page.name.trim().is_empty() {
            diagnostics.push(Diagnostic::error("validate", "page name cannot be empty").at("name"));
        }
    }
}
