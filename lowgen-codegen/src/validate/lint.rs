//! Lint trait for page validation.

use lowgen_core::TargetPlatform;
use lowgen_ir::{ComponentModel, PageModel};

use crate::{Diagnostic, mapping::MappingRegistry};

/// What a lint gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    pub page: &'a PageModel,
    pub platform: TargetPlatform,
    pub registry: &'a MappingRegistry,
}

impl<'a> LintContext<'a> {
    pub fn new(
        page: &'a PageModel,
        platform: TargetPlatform,
        registry: &'a MappingRegistry,
    ) -> Self {
        Self {
            page,
            platform,
            registry,
        }
    }

    /// Visit every node of the page tree with its location, depth-first.
    ///
    /// The root is at `components`, its second child at
    /// `components.children[1]`, and so on.
    pub fn walk(&self, mut visit: impl FnMut(&'a ComponentModel, &str)) {
        if let Some(root) = &self.page.components {
            walk_node(root, "components", &mut visit);
        }
    }
}

fn walk_node<'a>(
    node: &'a ComponentModel,
    location: &str,
    visit: &mut impl FnMut(&'a ComponentModel, &str),
) {
    visit(node, location);
    for (index, child) in node.children.iter().enumerate() {
        walk_node(child, &format!("{}.children[{}]", location, index), visit);
    }
}

/// A check over one page for one target platform.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A short description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the page and add any diagnostics.
    fn check(&self, cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>);
}
