//! Page component source emission.

use lowgen_codegen::generation::GenerationContext;
use lowgen_core::to_pascal_case;
use lowgen_ir::AstNode;

use crate::{
    CodeFile,
    ast::{ComponentFn, Import},
};

/// Emitted source of a component together with the tree it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedComponent {
    pub code: String,
    pub ast: AstNode,
}

/// Emit a TSX function component for a lowered tree.
///
/// The import section comes from `ctx.imports`; `name` is turned into a
/// PascalCase identifier.
pub fn generate_component_code(
    ast: &AstNode,
    ctx: &GenerationContext,
    name: &str,
) -> RenderedComponent {
    let code = CodeFile::new()
        .imports(Import::from_collector(&ctx.imports))
        .add(ComponentFn::new(component_name(name), ast))
        .render();
    RenderedComponent {
        code,
        ast: ast.clone(),
    }
}

/// JavaScript identifier for a component name.
pub fn component_name(name: &str) -> String {
    let pascal = to_pascal_case(name);
    match pascal.chars().next() {
        None => "Page".to_string(),
        Some(c) if c.is_ascii_digit() => format!("Page{}", pascal),
        Some(_) => pascal,
    }
}
