//! Platform-agnostic component tree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{PropMap, PropValue, StyleMap};

/// One node of an authored component tree.
///
/// The tree is strict: children are owned by their parent and nothing is
/// shared. Generation treats the whole tree as read-only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentModel {
    /// Node identifier, intended to be unique within a tree (not enforced).
    #[serde(default)]
    pub id: String,
    /// Logical widget type (e.g. "Container", "Text", "Button").
    #[serde(rename = "type", default)]
    pub component_type: String,
    /// Display label from the editor; not used by generation.
    #[serde(default)]
    pub name: String,
    /// Logical props in authoring order.
    #[serde(default)]
    pub props: PropMap,
    /// Logical style attributes.
    #[serde(default)]
    pub style: StyleMap,
    /// Child nodes in render order.
    #[serde(default)]
    pub children: Vec<ComponentModel>,
}

impl ComponentModel {
    /// Create a node with an id and a type.
    pub fn new(id: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
            ..Default::default()
        }
    }

    /// Set a prop.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Set a style attribute.
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: ComponentModel) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child nodes.
    pub fn with_children(mut self, children: impl IntoIterator<Item = ComponentModel>) -> Self {
        self.children.extend(children);
        self
    }

    /// Iterate over this node and all descendants in depth-first pre-order.
    pub fn descendants(&self) -> impl Iterator<Item = &ComponentModel> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Total number of nodes in the subtree rooted here.
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }
}

/// A page authored in the editor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageModel {
    /// Page name, sanitized into a directory name on generation.
    #[serde(default)]
    pub name: String,
    /// Navigation bar title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Root of the page's component tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentModel>,
}

impl PageModel {
    /// Create a page with a root component.
    pub fn new(name: impl Into<String>, root: ComponentModel) -> Self {
        Self {
            name: name.into(),
            title: None,
            components: Some(root),
        }
    }

    /// Set the navigation bar title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_tree() -> ComponentModel {
        ComponentModel::new("root", "Container")
            .with_child(
                ComponentModel::new("title", "Text")
                    .with_prop("content", "Hello")
                    .with_style("fontSize", 16),
            )
            .with_child(
                ComponentModel::new("row", "Container")
                    .with_child(ComponentModel::new("buy", "Button")),
            )
    }

    #[test]
    fn test_descendants_pre_order() {
        let tree = sample_tree();
        let ids: Vec<_> = tree.descendants().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "title", "row", "buy"]);
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_deserialize_page() {
        let page: PageModel = serde_json::from_value(json!({
            "name": "Home",
            "components": {
                "id": "root",
                "type": "Container",
                "name": "Root",
                "style": { "padding": 12 },
                "children": [
                    { "id": "t", "type": "Text", "props": { "content": "Hi" } }
                ]
            }
        }))
        .unwrap();

        let root = page.components.unwrap();
        assert_eq!(root.component_type, "Container");
        assert_eq!(root.style.get("padding"), Some(&json!(12)));
        assert_eq!(root.children[0].props["content"].as_str(), Some("Hi"));
        assert!(root.children[0].children.is_empty());
    }

    #[test]
    fn test_props_keep_authoring_order() {
        let node: ComponentModel = serde_json::from_str(
            r#"{"id": "b", "type": "Button", "props": {"z": 1, "a": 2, "m": 3}}"#,
        )
        .unwrap();
        let keys: Vec<_> = node.props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let page: PageModel = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(page.components.is_none());

        let node: ComponentModel = serde_json::from_str(r#"{"children": [{}]}"#).unwrap();
        assert!(node.id.is_empty());
        assert!(node.children[0].component_type.is_empty());
    }
}
