use super::super::{Lint, LintContext};
use crate::Diagnostic;

/// Lint that errors on nodes without an id or a type.
pub struct ComponentIdentityLint;

impl Lint for ComponentIdentityLint {
    fn name(&self) -> &'static str {
        "component-identity"
    }

    fn description(&self) -> &'static str {
        "Require an id and a type on every component"
    }

    fn check(&self, cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        cx.walk(|node, location| {
            if node.id.is_empty() {
                diagnostics.push(
                    Diagnostic::error("validate", "component id cannot be empty").at(location),
                );
            }
            if node.component_type.is_empty() {
                diagnostics.push(
                    Diagnostic::error("validate", "component type cannot be empty").at(location),
                );
            }
        });
    }
}
