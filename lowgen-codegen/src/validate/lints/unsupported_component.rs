use super::super::{Lint, LintContext};
use crate::Diagnostic;

/// Lint that warns about types the target platform has no rule for.
///
/// Generation fails on such a node, so this surfaces the problem before
/// anything is generated.
pub struct UnsupportedComponentLint;

impl Lint for UnsupportedComponentLint {
    fn name(&self) -> &'static str {
        "unsupported-component"
    }

    fn description(&self) -> &'static str {
        "Warn about component types without a mapping for the platform"
    }

    fn check(&self, cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        cx.walk(|node, location| {
            if node.component_type.is_empty()
                || cx.registry.is_supported(&node.component_type, cx.platform)
            {
                return;
            }
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "component type '{}' is not supported on {}",
                        node.component_type,
                        cx.platform.display_name()
                    ),
                )
                .at(location),
            );
        });
    }
}
