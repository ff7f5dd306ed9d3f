//! Registry of built-in and custom component mappings.

use indexmap::IndexMap;
use lowgen_core::TargetPlatform;

use super::{ComponentPlatformMapping, PlatformRule, builtin_mappings};

/// Options for [`MappingRegistry::register`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterOptions {
    /// Replace an existing custom entry wholesale instead of merging per platform.
    pub override_existing: bool,
}

impl RegisterOptions {
    /// Options that replace existing custom entries.
    pub fn overriding() -> Self {
        Self {
            override_existing: true,
        }
    }
}

/// Resolves logical component types to platform rules.
///
/// Holds two tables: the built-in mappings, fixed at construction, and the
/// custom mappings added through [`register`](Self::register). Lookups see a
/// merged view where a custom entry replaces the built-in rule of every
/// platform it mentions.
///
/// # Example
///
/// ```
/// use lowgen_codegen::mapping::{ComponentPlatformMapping, MappingRegistry, PlatformRule, RegisterOptions};
/// use lowgen_core::TargetPlatform;
///
/// let mut registry = MappingRegistry::new();
/// registry.register(
///     [ComponentPlatformMapping::new("Card").with_all(PlatformRule::new("View", "@tarojs/components"))],
///     RegisterOptions::default(),
/// );
///
/// let rule = registry.get("Card", TargetPlatform::Weapp).unwrap();
/// assert_eq!(rule.component, "View");
/// ```
#[derive(Debug, Clone)]
pub struct MappingRegistry {
    builtins: IndexMap<String, ComponentPlatformMapping>,
    custom: IndexMap<String, ComponentPlatformMapping>,
}

impl MappingRegistry {
    /// Create a registry with the standard built-in mappings.
    pub fn new() -> Self {
        Self::with_builtins(builtin_mappings())
    }

    /// Create a registry with the given built-in table.
    pub fn with_builtins(builtins: impl IntoIterator<Item = ComponentPlatformMapping>) -> Self {
        Self {
            builtins: builtins
                .into_iter()
                .map(|m| (m.component_type.clone(), m))
                .collect(),
            custom: IndexMap::new(),
        }
    }

    /// Add custom mappings.
    ///
    /// A type without a custom entry is inserted. An existing entry is
    /// replaced wholesale when `override_existing` is set, otherwise each
    /// platform in the incoming mapping replaces that platform's rule.
    pub fn register(
        &mut self,
        mappings: impl IntoIterator<Item = ComponentPlatformMapping>,
        options: RegisterOptions,
    ) {
        for incoming in mappings {
            match self.custom.get_mut(&incoming.component_type) {
                Some(existing) if !options.override_existing => existing.merge(&incoming),
                Some(existing) => *existing = incoming,
                None => {
                    self.custom.insert(incoming.component_type.clone(), incoming);
                }
            }
        }
    }

    /// Remove every custom mapping. Built-ins are untouched.
    pub fn clear_custom(&mut self) {
        self.custom.clear();
    }

    /// Merged view of one type, custom rules over built-in rules.
    pub fn resolved(&self, component_type: &str) -> Option<ComponentPlatformMapping> {
        match (
            self.builtins.get(component_type),
            self.custom.get(component_type),
        ) {
            (Some(builtin), Some(custom)) => {
                let mut merged = builtin.clone();
                merged.merge(custom);
                Some(merged)
            }
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }

    /// Get the rule for a type on a platform.
    pub fn get(&self, component_type: &str, platform: TargetPlatform) -> Option<PlatformRule> {
        self.custom
            .get(component_type)
            .and_then(|m| m.rule(platform))
            .or_else(|| {
                self.builtins
                    .get(component_type)
                    .and_then(|m| m.rule(platform))
            })
            .cloned()
    }

    /// All known types: built-ins in declaration order, then new custom types.
    pub fn supported_types(&self) -> Vec<String> {
        self.builtins
            .keys()
            .chain(
                self.custom
                    .keys()
                    .filter(|t| !self.builtins.contains_key(*t)),
            )
            .cloned()
            .collect()
    }

    /// Check if a type has a rule for a platform.
    pub fn is_supported(&self, component_type: &str, platform: TargetPlatform) -> bool {
        self.get(component_type, platform).is_some()
    }

    /// Merged view of every known type, in [`supported_types`](Self::supported_types) order.
    pub fn all_resolved(&self) -> Vec<ComponentPlatformMapping> {
        self.supported_types()
            .iter()
            .filter_map(|t| self.resolved(t))
            .collect()
    }

    /// Types that lack a rule for at least one platform.
    pub fn incomplete_mappings(&self) -> Vec<(String, Vec<TargetPlatform>)> {
        self.all_resolved()
            .into_iter()
            .filter_map(|m| {
                let missing = m.missing_platforms();
                (!missing.is_empty()).then_some((m.component_type, missing))
            })
            .collect()
    }

    /// Check if a custom entry exists for a type.
    pub fn has_custom(&self, component_type: &str) -> bool {
        self.custom.contains_key(component_type)
    }
}

impl Default for MappingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
