//! Conversion of `[components.*]` declarations from lowgen.toml.

use lowgen_manifest::{
    ComponentDecl, Manifest, PropRuleDecl, RuleDecl, StyleRuleDecl, TransformDecl,
};

use super::{
    ComponentPlatformMapping, MappingRegistry, PlatformRule, PropMapping, PropTransform,
    RegisterOptions, StyleMapping,
};

impl From<&TransformDecl> for PropTransform {
    fn from(decl: &TransformDecl) -> Self {
        match decl {
            TransformDecl::Not => PropTransform::Not,
            TransformDecl::Template(template) => PropTransform::Template(template.clone()),
            TransformDecl::Wrap(key) => PropTransform::Wrap(key.clone()),
            TransformDecl::Choose {
                equals,
                then,
                otherwise,
            } => PropTransform::choose(equals.clone(), then.clone(), otherwise.clone()),
        }
    }
}

impl From<&PropRuleDecl> for PropMapping {
    fn from(decl: &PropRuleDecl) -> Self {
        PropMapping {
            source: decl.source.clone(),
            target: decl.target.clone(),
            transform: decl.transform.as_ref().map(PropTransform::from),
        }
    }
}

impl From<&StyleRuleDecl> for StyleMapping {
    fn from(decl: &StyleRuleDecl) -> Self {
        StyleMapping {
            source: decl.source.clone(),
            target: decl.target.clone(),
            transform: decl.transform.as_ref().map(PropTransform::from),
            platforms: decl.platforms.clone(),
        }
    }
}

impl From<&RuleDecl> for PlatformRule {
    fn from(decl: &RuleDecl) -> Self {
        PlatformRule {
            component: decl.component.clone(),
            import_path: decl.import_path.clone(),
            props: decl
                .props
                .as_ref()
                .map(|props| props.iter().map(PropMapping::from).collect()),
            styles: decl
                .styles
                .as_ref()
                .map(|styles| styles.iter().map(StyleMapping::from).collect()),
        }
    }
}

impl ComponentPlatformMapping {
    /// Build a mapping from its lowgen.toml declaration.
    pub fn from_decl(component_type: &str, decl: &ComponentDecl) -> Self {
        decl.platforms.iter().fold(
            ComponentPlatformMapping::new(component_type),
            |mapping, (platform, rule)| mapping.with_rule(*platform, PlatformRule::from(rule)),
        )
    }
}

impl MappingRegistry {
    /// Register every component declared in a manifest, honoring each entry's `override` flag.
    pub fn register_manifest(&mut self, manifest: &Manifest) {
        for (component_type, decl) in &manifest.components {
            self.register(
                [ComponentPlatformMapping::from_decl(component_type, decl)],
                RegisterOptions {
                    override_existing: decl.override_existing,
                },
            );
        }
    }
}
