//! Custom component mapping declarations (`[components.<Type>]`).

use indexmap::IndexMap;
use lowgen_core::TargetPlatform;
use serde::Deserialize;
use serde_json::Value;

/// Declared mapping for one logical component type.
///
/// ```toml
/// [components.Card]
/// override = true
///
/// [components.Card.weapp]
/// component = "View"
/// import = "@tarojs/components"
/// props = [{ source = "onClick", target = "onTap" }]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentDecl {
    /// Replace an existing custom mapping instead of merging per platform.
    #[serde(default, rename = "override")]
    pub override_existing: bool,

    /// Per-platform rules.
    #[serde(flatten)]
    pub platforms: IndexMap<TargetPlatform, RuleDecl>,
}

/// Declared rule for one platform.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDecl {
    /// Tag name emitted for this platform.
    pub component: String,
    /// Module the tag is imported from; empty for intrinsic elements.
    #[serde(default, rename = "import")]
    pub import_path: String,
    pub props: Option<Vec<PropRuleDecl>>,
    pub styles: Option<Vec<StyleRuleDecl>>,
}

/// Declared prop rename.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropRuleDecl {
    pub source: String,
    pub target: String,
    pub transform: Option<TransformDecl>,
}

/// Declared style rename.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleRuleDecl {
    pub source: String,
    pub target: String,
    pub transform: Option<TransformDecl>,
    /// Restrict the rule to these platforms.
    pub platforms: Option<Vec<TargetPlatform>>,
}

/// Declarative value transform.
///
/// ```toml
/// transform = "not"
/// transform = { template = "btn-{}" }
/// transform = { wrap = "uri" }
/// transform = { choose = { equals = "contained", then = "primary", otherwise = "default" } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformDecl {
    /// Boolean negation using JavaScript truthiness.
    Not,
    /// String template where `{}` is replaced with the value.
    Template(String),
    /// Wrap the value into a single-key object.
    Wrap(String),
    /// Pick `then` when the value equals `equals`, otherwise `otherwise`.
    Choose {
        equals: Value,
        then: Value,
        otherwise: Value,
    },
}
