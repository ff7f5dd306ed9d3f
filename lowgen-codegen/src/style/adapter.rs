//! Style map adaptation and rendering.

use lowgen_core::TargetPlatform;
use lowgen_ir::StyleMap;
use serde_json::Value;

use super::StylePolicy;
use crate::Diagnostic;

/// Output shape of [`generate_style_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleFormat {
    /// A CSS declaration block.
    #[default]
    Css,
    /// A pretty-printed object literal.
    Object,
}

/// Adapt a logical style map to a platform.
///
/// Unsupported properties are dropped with a warning; every other entry is
/// renamed and has its value transformed. Entry order is preserved.
pub fn adapt_styles(
    styles: &StyleMap,
    platform: TargetPlatform,
    diagnostics: &mut Vec<Diagnostic>,
) -> StyleMap {
    StylePolicy::for_platform(platform).adapt(styles, diagnostics)
}

impl StylePolicy {
    /// Adapt a whole style map. See [`adapt_styles`].
    pub fn adapt(&self, styles: &StyleMap, diagnostics: &mut Vec<Diagnostic>) -> StyleMap {
        let mut adapted = StyleMap::with_capacity(styles.len());
        for (key, value) in styles {
            match self.transform(key, value) {
                Some((name, value)) => {
                    adapted.insert(name, value);
                }
                None => {
                    tracing::warn!(
                        property = %key,
                        platform = %self.platform(),
                        "dropping unsupported style property"
                    );
                    diagnostics.push(Diagnostic::warning(
                        "style",
                        format!(
                            "style property '{}' is not supported on {} and was dropped",
                            key,
                            self.platform().display_name()
                        ),
                    ));
                }
            }
        }
        adapted
    }
}

/// Adapt a style map and render it as text.
pub fn generate_style_string(
    styles: &StyleMap,
    platform: TargetPlatform,
    format: StyleFormat,
) -> String {
    let adapted = adapt_styles(styles, platform, &mut Vec::new());
    match format {
        StyleFormat::Css => render_declarations(&adapted, |key| key.to_string()),
        StyleFormat::Object => format!("{:#}", Value::Object(adapted.into_iter().collect())),
    }
}

/// Render `{ key: value; ... }` with one declaration per line.
pub(crate) fn render_declarations(styles: &StyleMap, key_name: impl Fn(&str) -> String) -> String {
    if styles.is_empty() {
        return "{}".to_string();
    }
    let body: Vec<String> = styles
        .iter()
        .map(|(key, value)| format!("  {}: {};", key_name(key), css_value(value)))
        .collect();
    format!("{{\n{}\n}}", body.join("\n"))
}

/// Text of a value inside a CSS declaration.
pub fn css_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Severity;

    fn styles(value: Value) -> StyleMap {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_adapt_weapp() {
        let mut diagnostics = Vec::new();
        let adapted = adapt_styles(
            &styles(json!({"fontSize": 14, "boxShadow": "none", "width": "100px"})),
            TargetPlatform::Weapp,
            &mut diagnostics,
        );

        assert_eq!(adapted, styles(json!({"font-size": "14rpx", "width": "100rpx"})));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(diagnostics[0].message.contains("boxShadow"));
    }

    #[test]
    fn test_adapt_rn_keeps_order() {
        let adapted = adapt_styles(
            &styles(json!({"padding": "8px", "flex": 1, "float": "left", "color": "red"})),
            TargetPlatform::Rn,
            &mut Vec::new(),
        );
        let keys: Vec<_> = adapted.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["padding", "flex", "color"]);
        assert_eq!(adapted["padding"], json!(8));
    }

    #[test]
    fn test_adapt_empty() {
        let mut diagnostics = Vec::new();
        let adapted = adapt_styles(&StyleMap::new(), TargetPlatform::H5, &mut diagnostics);
        assert!(adapted.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_css_string() {
        let css = generate_style_string(
            &styles(json!({"backgroundColor": "#fff", "marginTop": 8})),
            TargetPlatform::Weapp,
            StyleFormat::Css,
        );
        assert_eq!(css, "{\n  background-color: #fff;\n  margin-top: 8rpx;\n}");
    }

    #[test]
    fn test_object_string() {
        let object = generate_style_string(
            &styles(json!({"width": "10px"})),
            TargetPlatform::Rn,
            StyleFormat::Object,
        );
        assert_eq!(object, "{\n  \"width\": 10\n}");
    }

    #[test]
    fn test_empty_css_string() {
        assert_eq!(
            generate_style_string(&StyleMap::new(), TargetPlatform::H5, StyleFormat::Css),
            "{}"
        );
    }
}
