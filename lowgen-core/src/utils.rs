//! Shared string utilities for code generation.

/// Prefix used when a sanitized page name would start with a digit.
const DIGIT_PREFIX: &str = "page-";

/// Fallback for page names that sanitize to nothing.
const EMPTY_PAGE_NAME: &str = "page";

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
///
/// Underscores, hyphens and spaces all act as word separators.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "on-click" -> "onClick")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a camelCase identifier to kebab-case (e.g., "backgroundColor" -> "background-color")
///
/// A hyphen is inserted only between a lowercase letter or digit and the
/// uppercase letter following it, so already hyphenated names pass through.
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            result.push('-');
        }
        result.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    result
}

/// Turn a user supplied page name into a file-system friendly directory name.
///
/// The name is lower-cased, every character outside `[a-z0-9_-]` is removed
/// and a `page-` prefix is added when the result would start with a digit.
pub fn sanitize_page_name(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect();

    match cleaned.chars().next() {
        None => EMPTY_PAGE_NAME.to_string(),
        Some(c) if c.is_ascii_digit() => format!("{}{}", DIGIT_PREFIX, cleaned),
        Some(_) => cleaned,
    }
}
