//! Platform-resolved intermediate tree.

use serde::Serialize;

use crate::{PropMap, StyleMap};

/// Kind of an AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AstKind {
    /// A component imported from a module.
    Component,
    /// Literal text content.
    Text,
    /// An intrinsic element that needs no import.
    Element,
}

/// A node of the intermediate tree produced by lowering.
///
/// Nodes have no identity beyond their position in the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstNode {
    pub kind: AstKind,
    /// Target tag name; empty for text nodes.
    pub tag_name: String,
    /// Target props after prop mapping.
    pub props: PropMap,
    /// Target styles after style adaptation.
    pub styles: StyleMap,
    /// Content of a text node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub children: Vec<AstNode>,
}

impl AstNode {
    fn new(kind: AstKind, tag_name: impl Into<String>) -> Self {
        Self {
            kind,
            tag_name: tag_name.into(),
            props: PropMap::new(),
            styles: StyleMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create a component node.
    pub fn component(tag_name: impl Into<String>) -> Self {
        Self::new(AstKind::Component, tag_name)
    }

    /// Create an intrinsic element node.
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self::new(AstKind::Element, tag_name)
    }

    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::new(AstKind::Text, "")
        }
    }

    pub fn with_props(mut self, props: PropMap) -> Self {
        self.props = props;
        self
    }

    pub fn with_styles(mut self, styles: StyleMap) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_children(mut self, children: Vec<AstNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_text(&self) -> bool {
        self.kind == AstKind::Text
    }

    /// Tag names of this node and all descendants in pre-order, skipping text.
    pub fn tag_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_tag_names(&mut names);
        names
    }

    fn collect_tag_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        if !self.is_text() {
            names.push(&self.tag_name);
        }
        for child in &self.children {
            child.collect_tag_names(names);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node() {
        let node = AstNode::text("Hello");
        assert!(node.is_text());
        assert_eq!(node.text.as_deref(), Some("Hello"));
        assert!(node.tag_name.is_empty());
    }

    #[test]
    fn test_tag_names_skip_text() {
        let tree = AstNode::component("View").with_children(vec![
            AstNode::component("Text").with_children(vec![AstNode::text("Hi")]),
            AstNode::element("div"),
        ]);
        assert_eq!(tree.tag_names(), vec!["View", "Text", "div"]);
    }

    #[test]
    fn test_serialize_kind() {
        let json = serde_json::to_value(AstNode::element("span")).unwrap();
        assert_eq!(json["kind"], "element");
        assert!(json.get("text").is_none());
    }
}
