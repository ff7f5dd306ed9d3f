//! Function component declarations.

use lowgen_codegen::builder::{CodeFragment, Renderable};
use lowgen_ir::AstNode;

use super::JsxElement;

/// `export default function Name() { return ( ... ); }` around a JSX tree.
#[derive(Debug, Clone)]
pub struct ComponentFn<'a> {
    name: String,
    root: &'a AstNode,
}

impl<'a> ComponentFn<'a> {
    pub fn new(name: impl Into<String>, root: &'a AstNode) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }
}

impl Renderable for ComponentFn<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("export default function {}() {{", self.name),
            vec![CodeFragment::block(
                "return (",
                JsxElement(self.root).to_fragments(),
                Some(");".to_string()),
            )],
            Some("}".to_string()),
        )]
    }
}
