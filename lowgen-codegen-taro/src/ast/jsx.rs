//! JSX markup for AST trees.

use lowgen_codegen::{
    ast::is_omitted,
    builder::{CodeBuilder, CodeFragment, Renderable},
};
use lowgen_ir::{AstNode, PropValue};
use serde_json::Value;

/// JSX markup of one AST node and its subtree.
///
/// An element without children is self-closing and an element whose only
/// child is text stays on one line; everything else nests one level per
/// child element.
#[derive(Debug, Clone, Copy)]
pub struct JsxElement<'a>(pub &'a AstNode);

impl Renderable for JsxElement<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        element_fragments(self.0)
    }
}

fn element_fragments(node: &AstNode) -> Vec<CodeFragment> {
    if node.is_text() {
        return vec![CodeFragment::line(jsx_text(
            node.text.as_deref().unwrap_or_default(),
        ))];
    }

    let open = opening_tag(node);
    match node.children.as_slice() {
        [] => vec![CodeFragment::line(format!("{} />", open))],
        [only] if only.is_text() => vec![CodeFragment::line(format!(
            "{}>{}</{}>",
            open,
            jsx_text(only.text.as_deref().unwrap_or_default()),
            node.tag_name
        ))],
        children => vec![CodeFragment::block(
            format!("{}>", open),
            children.iter().flat_map(element_fragments).collect(),
            Some(format!("</{}>", node.tag_name)),
        )],
    }
}

/// `<Tag attr={...}` without the closing bracket.
fn opening_tag(node: &AstNode) -> String {
    let mut parts = vec![format!("<{}", node.tag_name)];
    parts.extend(
        node.props
            .iter()
            .filter(|(_, value)| !is_omitted(value))
            .map(|(name, value)| render_attribute(name, value)),
    );
    if !node.styles.is_empty() {
        parts.push(format!("style={{{}}}", object_literal(&node.styles)));
    }
    parts.join(" ")
}

/// Render one JSX attribute.
///
/// Plain strings are quoted; other literals and expressions go in braces.
pub fn render_attribute(name: &str, value: &PropValue) -> String {
    match value {
        PropValue::Expression(expr) => format!("{}={{{}}}", name, expr.code),
        PropValue::Literal(Value::String(s)) if is_plain_attribute_text(s) => {
            format!("{}=\"{}\"", name, s)
        }
        PropValue::Literal(Value::Object(map)) => {
            format!("{}={{{}}}", name, object_literal(map))
        }
        PropValue::Literal(other) => format!("{}={{{}}}", name, other),
    }
}

/// JavaScript object literal with unquoted keys where possible.
pub fn object_literal<'a>(entries: impl IntoIterator<Item = (&'a String, &'a Value)>) -> String {
    let fields: Vec<String> = entries
        .into_iter()
        .map(|(key, value)| {
            if is_identifier(key) {
                format!("{}: {}", key, value)
            } else {
                format!("{}: {}", Value::String(key.clone()), value)
            }
        })
        .collect();
    if fields.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", fields.join(", "))
    }
}

/// Text content, wrapped in an expression when JSX would misread it.
fn jsx_text(text: &str) -> String {
    let needs_expression = text.is_empty()
        || text.trim() != text
        || text.contains(['{', '}', '<', '>', '\n']);
    if needs_expression {
        format!("{{{}}}", Value::String(text.to_string()))
    } else {
        text.to_string()
    }
}

fn is_plain_attribute_text(s: &str) -> bool {
    !s.contains(['"', '&', '\n'])
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Render a tree as standalone JSX markup.
pub fn render_jsx(node: &AstNode) -> String {
    let mut builder = CodeBuilder::typescript();
    builder.emit(&JsxElement(node));
    builder.build().trim_end().to_string()
}
