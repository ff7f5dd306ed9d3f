//! Page stylesheets.

use lowgen_core::{TargetPlatform, to_kebab_case};
use lowgen_ir::{ComponentModel, StyleMap};

use super::{StylePolicy, adapter::render_declarations};
use crate::Diagnostic;

/// Ordered list of CSS rule blocks.
///
/// Selectors may repeat: two nodes sharing a type and an id each keep
/// their own block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: Vec<(String, StyleMap)>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the stylesheet of a component tree.
    ///
    /// Every node with a non-empty style gets a `.{type}-{id}` rule, in
    /// depth-first order. Values are adapted to `platform` first; a node
    /// whose every property is dropped gets no rule.
    pub fn for_tree(
        root: &ComponentModel,
        platform: TargetPlatform,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self {
        let policy = StylePolicy::for_platform(platform);
        let mut sheet = Self::new();
        for node in root.descendants() {
            if node.style.is_empty() {
                continue;
            }
            let adapted = policy.adapt(&node.style, diagnostics);
            if !adapted.is_empty() {
                sheet.add_rule(class_selector(node), adapted);
            }
        }
        sheet
    }

    /// Append a rule block.
    pub fn add_rule(&mut self, selector: impl Into<String>, styles: StyleMap) {
        self.rules.push((selector.into(), styles));
    }

    /// Declarations of the first block with this selector.
    pub fn get(&self, selector: &str) -> Option<&StyleMap> {
        self.rules
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, styles)| styles)
    }

    pub fn rules(&self) -> impl Iterator<Item = (&str, &StyleMap)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Render as CSS with kebab-case property names.
    pub fn render(&self) -> String {
        self.rules
            .iter()
            .map(|(selector, styles)| {
                format!("{} {}", selector, render_declarations(styles, to_kebab_case))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Class selector of a component: `.{type lowercased}-{id}`.
pub fn class_selector(node: &ComponentModel) -> String {
    format!(".{}-{}", node.component_type.to_lowercase(), node.id)
}
