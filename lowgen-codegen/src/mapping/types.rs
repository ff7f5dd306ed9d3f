//! Mapping rule types.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use lowgen_core::TargetPlatform;
use lowgen_ir::PropValue;
use serde_json::{Map, Value};

/// Signature of a code-registered value transform.
pub type TransformFn = dyn Fn(&PropValue) -> PropValue + Send + Sync;

/// A pure transform applied to a prop (or style) value while it is renamed.
///
/// Literal values are transformed eagerly. Expressions are opaque, so the
/// transform is written around them into the generated source instead.
#[derive(Clone)]
pub enum PropTransform {
    /// `then` when the value equals `equals`, otherwise `otherwise`.
    Choose {
        equals: Value,
        then: Value,
        otherwise: Value,
    },
    /// Format into a string template; `{}` is replaced with the value.
    Template(String),
    /// Boolean negation using JavaScript truthiness.
    Not,
    /// Wrap into a single-key object (`{ key: value }`).
    Wrap(String),
    /// Arbitrary transform registered from code.
    Custom(Arc<TransformFn>),
}

impl PropTransform {
    /// Create a transform from a closure.
    pub fn custom(f: impl Fn(&PropValue) -> PropValue + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Shorthand for the common two-way choice on a string value.
    pub fn choose(
        equals: impl Into<Value>,
        then: impl Into<Value>,
        otherwise: impl Into<Value>,
    ) -> Self {
        Self::Choose {
            equals: equals.into(),
            then: then.into(),
            otherwise: otherwise.into(),
        }
    }

    /// Apply the transform to a value.
    pub fn apply(&self, value: &PropValue) -> PropValue {
        match (self, value) {
            (Self::Custom(f), value) => f(value),

            (
                Self::Choose {
                    equals,
                    then,
                    otherwise,
                },
                PropValue::Literal(v),
            ) => {
                let chosen = if v == equals { then } else { otherwise };
                PropValue::Literal(chosen.clone())
            }
            (
                Self::Choose {
                    equals,
                    then,
                    otherwise,
                },
                PropValue::Expression(expr),
            ) => PropValue::expr(format!(
                "({}) === {} ? {} : {}",
                expr.code, equals, then, otherwise
            )),

            (Self::Template(template), PropValue::Literal(v)) => {
                let text = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                PropValue::Literal(Value::String(template.replace("{}", &text)))
            }
            (Self::Template(template), PropValue::Expression(expr)) => {
                let body = template
                    .replace('`', "\\`")
                    .replace("{}", &format!("${{{}}}", expr.code));
                PropValue::expr(format!("`{}`", body))
            }

            (Self::Not, PropValue::Literal(_)) => {
                PropValue::Literal(Value::Bool(!value.is_truthy()))
            }
            (Self::Not, PropValue::Expression(expr)) => {
                PropValue::expr(format!("!({})", expr.code))
            }

            (Self::Wrap(key), PropValue::Literal(v)) => {
                let mut object = Map::new();
                object.insert(key.clone(), v.clone());
                PropValue::Literal(Value::Object(object))
            }
            (Self::Wrap(key), PropValue::Expression(expr)) => PropValue::expr(format!(
                "{{ {}: {} }}",
                Value::String(key.clone()),
                expr.code
            )),
        }
    }
}

impl fmt::Debug for PropTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choose {
                equals,
                then,
                otherwise,
            } => f
                .debug_struct("Choose")
                .field("equals", equals)
                .field("then", then)
                .field("otherwise", otherwise)
                .finish(),
            Self::Template(t) => f.debug_tuple("Template").field(t).finish(),
            Self::Not => write!(f, "Not"),
            Self::Wrap(key) => f.debug_tuple("Wrap").field(key).finish(),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl PartialEq for PropTransform {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Choose {
                    equals: a,
                    then: b,
                    otherwise: c,
                },
                Self::Choose {
                    equals: x,
                    then: y,
                    otherwise: z,
                },
            ) => a == x && b == y && c == z,
            (Self::Template(a), Self::Template(b)) => a == b,
            (Self::Not, Self::Not) => true,
            (Self::Wrap(a), Self::Wrap(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Rename of one prop, with an optional value transform.
#[derive(Debug, Clone, PartialEq)]
pub struct PropMapping {
    pub source: String,
    pub target: String,
    pub transform: Option<PropTransform>,
}

impl PropMapping {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            transform: None,
        }
    }

    /// Same name on both sides.
    pub fn keep(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), name)
    }

    pub fn with_transform(mut self, transform: PropTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Apply the transform, if any, to a source value.
    pub fn apply(&self, value: &PropValue) -> PropValue {
        match &self.transform {
            Some(transform) => transform.apply(value),
            None => value.clone(),
        }
    }
}

/// Rename of one style attribute, optionally restricted to some platforms.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleMapping {
    pub source: String,
    pub target: String,
    pub transform: Option<PropTransform>,
    pub platforms: Option<Vec<TargetPlatform>>,
}

impl StyleMapping {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            transform: None,
            platforms: None,
        }
    }

    pub fn with_transform(mut self, transform: PropTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn only_on(mut self, platforms: impl IntoIterator<Item = TargetPlatform>) -> Self {
        self.platforms = Some(platforms.into_iter().collect());
        self
    }

    /// Check whether this mapping applies on a platform.
    pub fn applies_to(&self, platform: TargetPlatform) -> bool {
        self.platforms
            .as_ref()
            .is_none_or(|platforms| platforms.contains(&platform))
    }

    /// Apply the transform, if any, to a style value.
    ///
    /// Expressions produced by a custom transform are kept as their source text.
    pub fn apply(&self, value: &Value) -> Value {
        let Some(transform) = &self.transform else {
            return value.clone();
        };
        match transform.apply(&PropValue::Literal(value.clone())) {
            PropValue::Literal(v) => v,
            PropValue::Expression(expr) => Value::String(expr.code),
        }
    }
}

/// How one logical type is realized on one platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformRule {
    /// Target tag name.
    pub component: String,
    /// Module the tag is imported from. Empty for intrinsic elements.
    pub import_path: String,
    /// Prop renames. `None` passes props through unchanged.
    pub props: Option<Vec<PropMapping>>,
    pub styles: Option<Vec<StyleMapping>>,
}

impl PlatformRule {
    pub fn new(component: impl Into<String>, import_path: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            import_path: import_path.into(),
            props: None,
            styles: None,
        }
    }

    /// A rule for an intrinsic element that needs no import.
    pub fn intrinsic(component: impl Into<String>) -> Self {
        Self::new(component, "")
    }

    pub fn with_props(mut self, props: Vec<PropMapping>) -> Self {
        self.props = Some(props);
        self
    }

    pub fn with_styles(mut self, styles: Vec<StyleMapping>) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn is_intrinsic(&self) -> bool {
        self.import_path.is_empty()
    }
}

/// Rules for one logical component type across platforms.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentPlatformMapping {
    pub component_type: String,
    pub platforms: IndexMap<TargetPlatform, PlatformRule>,
}

impl ComponentPlatformMapping {
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            platforms: IndexMap::new(),
        }
    }

    /// Set the rule for one platform.
    pub fn with_rule(mut self, platform: TargetPlatform, rule: PlatformRule) -> Self {
        self.platforms.insert(platform, rule);
        self
    }

    /// Set the same rule for every platform.
    pub fn with_all(mut self, rule: PlatformRule) -> Self {
        for platform in TargetPlatform::ALL {
            self.platforms.insert(platform, rule.clone());
        }
        self
    }

    /// Set the same rule for several platforms.
    pub fn with_each(
        mut self,
        platforms: impl IntoIterator<Item = TargetPlatform>,
        rule: PlatformRule,
    ) -> Self {
        for platform in platforms {
            self.platforms.insert(platform, rule.clone());
        }
        self
    }

    /// Get the rule for a platform.
    pub fn rule(&self, platform: TargetPlatform) -> Option<&PlatformRule> {
        self.platforms.get(&platform)
    }

    /// Platforms without a rule, in canonical order.
    pub fn missing_platforms(&self) -> Vec<TargetPlatform> {
        TargetPlatform::ALL
            .into_iter()
            .filter(|p| !self.platforms.contains_key(p))
            .collect()
    }

    /// Overlay another mapping's rules, replacing each mentioned platform's rule whole.
    pub fn merge(&mut self, patch: &ComponentPlatformMapping) {
        for (platform, rule) in &patch.platforms {
            self.platforms.insert(*platform, rule.clone());
        }
    }
}
