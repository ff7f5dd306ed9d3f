//! Structured TypeScript source files.

use lowgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// A TypeScript file made of an import section and body elements.
///
/// Sections are separated by one blank line, as are body elements.
///
/// # Example
///
/// ```ignore
/// let code = CodeFile::new()
///     .imports(Import::from_collector(&ctx.imports))
///     .add(ComponentFn::new("Index", &ast))
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with 2-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}

/// Raw source lines usable as a [`CodeFile`] body element.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.lines().map(CodeFragment::line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_sections_are_separated() {
        let code = CodeFile::new()
            .import(Import::new("@tarojs/taro").default("Taro"))
            .add(RawCode::new("const a = 1;"))
            .add(RawCode::new("const b = 2;"))
            .render();

        assert_eq!(
            code,
            "import Taro from \"@tarojs/taro\";\n\nconst a = 1;\n\nconst b = 2;\n"
        );
    }

    #[test]
    fn test_body_only() {
        let code = CodeFile::new().add(RawCode::new("export {};")).render();
        assert_eq!(code, "export {};\n");
    }
}
