//! Code builder for properly indented source text.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Consuming methods (returning `Self`) suit straight-line templates;
/// `push_` methods (returning `&mut Self`) suit loops and recursive emitters.
///
/// # Example
///
/// ```
/// use lowgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export default function Index() {")
///     .indent()
///     .line("return null;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "export default function Index() {\n  return null;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self.push_blank();
        }
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a single-line JSDoc comment.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Add a `//` comment.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn raw(mut self, s: &str) -> Self {
        self.push_raw(s);
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use lowgen_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::typescript()
    ///     .block_with_close("export default defineAppConfig({", "});", |b| {
    ///         b.line("pages: [],")
    ///     })
    ///     .build();
    ///
    /// assert_eq!(code, "export default defineAppConfig({\n  pages: [],\n});\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    pub fn jsdoc(mut self, text: &str) -> Self {
        self.push_jsdoc(text);
        self
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::typescript()
            .line("function foo() {")
            .indent()
            .line("return 1;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_empty_line_has_no_trailing_whitespace() {
        let code = CodeBuilder::typescript().indent().line("").line("x").build();
        assert_eq!(code, "\n  x\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::typescript()
            .line("const pages = [")
            .indent()
            .each(["index", "cart"], |b, page| {
                b.line(&format!("'pages/{}/index',", page))
            })
            .dedent()
            .line("];")
            .build();

        assert_eq!(
            code,
            "const pages = [\n  'pages/index/index',\n  'pages/cart/index',\n];\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::typescript().dedent().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct FnNode;
        impl Renderable for FnNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::jsdoc("Page component"),
                    CodeFragment::block(
                        "export default function Index() {",
                        vec![CodeFragment::line("return null;")],
                        Some("}".to_string()),
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&FnNode);
        assert_eq!(
            builder.build(),
            "/** Page component */\nexport default function Index() {\n  return null;\n}\n"
        );
    }

    #[test]
    fn test_emit_comment_and_indent() {
        let mut builder = CodeBuilder::typescript();
        builder.apply_fragment(CodeFragment::sequence(vec![
            CodeFragment::comment("generated"),
            CodeFragment::indent(vec![CodeFragment::line("a")]),
        ]));
        assert_eq!(builder.as_str(), "// generated\n  a\n");
    }
}
