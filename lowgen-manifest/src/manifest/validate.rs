//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source, the filename, and the current path through the
/// manifest so nested validation can report where a problem is.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "lowgen.toml");
/// let card = ctx.push("components").push("Card");
/// card.validate_tag("View", true)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["components", "Card", "weapp"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "tag in 'Card.weapp'" or just "component type" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a usable JavaScript identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_js_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a target tag name.
    ///
    /// Imported components must be capitalized so JSX treats them as
    /// references. Intrinsic elements may be lowercase and dashed.
    pub fn validate_tag(&self, tag: &str, imported: bool) -> Result<()> {
        if !imported {
            return match validate_element_name(tag) {
                Some(reason) => Err(self.source.invalid_identifier_error(
                    tag,
                    self.context_for("element"),
                    reason,
                    self.find_span(tag),
                )),
                None => Ok(()),
            };
        }

        self.validate_name(tag, "component tag")?;
        if !tag.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Err(self.source.invalid_identifier_error(
                tag,
                self.context_for("component tag"),
                "imported component tags must start with an uppercase letter",
                self.find_span(tag),
            ));
        }
        Ok(())
    }

    /// Validate a project name for use as an npm package name.
    pub fn validate_package_name(&self, name: &str) -> Result<()> {
        match validate_package_name(name) {
            Some(reason) => Err(self.source.validation_error_at(
                format!("invalid project name '{name}': {reason}"),
                self.find_span(name),
            )),
            None => Ok(()),
        }
    }
}

/// JavaScript reserved words that cannot be used as identifiers
pub(crate) const JS_KEYWORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Check if a name is a JavaScript reserved word
pub(crate) fn is_js_keyword(name: &str) -> bool {
    JS_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source.
///
/// Searches for `.name]`, `.name.`, then `= "name"`.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let table_patterns = [format!(".{}]", name), format!(".{}.", name)];

    for pattern in &table_patterns {
        if let Some(pos) = src.find(pattern) {
            // skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    for quote in ['"', '\''] {
        let pattern = format!("= {quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 3, name.len())));
        }
    }

    None
}

/// Validate that a name is a JavaScript identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
        None => return Some("name cannot be empty"),
    }

    if is_js_keyword(name) {
        return Some("name is a JavaScript reserved word");
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, numbers, '_' and '$'");
    }

    None
}

/// Validate an intrinsic element name such as `div` or `my-element`.
pub(crate) fn validate_element_name(name: &str) -> Option<&'static str> {
    match name.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(_) => return Some("element names must start with a letter"),
        None => return Some("element name cannot be empty"),
    }
    if name.ends_with('-') {
        return Some("element names cannot end with a dash");
    }
    if name.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '-')) {
        return Some("element names must contain only letters, numbers and dashes");
    }
    None
}

/// Validate an npm package name.
pub(crate) fn validate_package_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if name.len() > 214 {
        return Some("name cannot be longer than 214 characters");
    }
    if name.starts_with('.') || name.starts_with('_') {
        return Some("name cannot start with '.' or '_'");
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("name must be lowercase");
    }
    if name
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Some("name must contain only letters, numbers, '-', '_' and '.'");
    }
    None
}
