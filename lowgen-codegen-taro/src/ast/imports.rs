//! ES module import statements.

use lowgen_codegen::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    generation::ImportCollector,
};

/// Builder for one `import` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports.
    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Check if this only runs the module for its side effects.
    pub fn is_side_effect(&self) -> bool {
        self.default.is_none() && self.named.is_empty()
    }

    /// One statement per collected module.
    ///
    /// Modules with symbols come first, sorted by path; side-effect imports
    /// (stylesheets) follow in the order they were added.
    pub fn from_collector(imports: &ImportCollector) -> Vec<Import> {
        let mut statements: Vec<Import> = imports
            .sorted()
            .into_iter()
            .filter(|(_, symbols)| !symbols.is_empty())
            .map(|(module, symbols)| Import::new(module).named_all(symbols.iter().cloned()))
            .collect();
        statements.extend(
            imports
                .iter()
                .filter(|(_, symbols)| symbols.is_empty())
                .map(|(module, _)| Import::new(module)),
        );
        statements
    }

    fn statement(&self) -> String {
        let named = self.named.join(", ");
        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {} from \"{}\";", def, self.from),
            (Some(def), false) => {
                format!("import {}, {{ {} }} from \"{}\";", def, named, self.from)
            }
            (None, false) => format!("import {{ {} }} from \"{}\";", named, self.from),
            (None, true) => format!("import \"{}\";", self.from),
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("@tarojs/components")
            .named("Text")
            .named("View")
            .build();
        assert_eq!(i, "import { Text, View } from \"@tarojs/components\";\n");
    }

    #[test]
    fn test_default_and_named_import() {
        let i = Import::new("react").default("React").named("useState").build();
        assert_eq!(i, "import React, { useState } from \"react\";\n");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./index.scss");
        assert!(i.is_side_effect());
        assert_eq!(i.build(), "import \"./index.scss\";\n");
    }

    #[test]
    fn test_from_collector() {
        let mut imports = ImportCollector::new();
        imports.add_module("./index.scss");
        imports.add("@tarojs/components", "View");
        imports.add("@acme/ui", "Card");
        imports.add("@tarojs/components", "Text");

        let statements: Vec<_> = Import::from_collector(&imports)
            .iter()
            .map(Import::build)
            .collect();
        assert_eq!(
            statements,
            vec![
                "import { Card } from \"@acme/ui\";\n",
                "import { Text, View } from \"@tarojs/components\";\n",
                "import \"./index.scss\";\n",
            ]
        );
    }
}
