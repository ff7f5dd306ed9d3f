//! Lowering of component trees into the platform-resolved AST.

use lowgen_core::TargetPlatform;
use lowgen_ir::{AstNode, ComponentModel, PropMap, PropValue, StyleMap};
use serde_json::Value;

use crate::{
    Error, Result,
    generation::GenerationContext,
    mapping::{MappingRegistry, PlatformRule, StyleMapping},
    style::StylePolicy,
};

/// Prop that carries text content for the node's children.
const CHILDREN_PROP: &str = "children";

/// Result of lowering a page tree.
#[derive(Debug, Clone)]
pub struct PageAst {
    pub ast: AstNode,
    pub context: GenerationContext,
}

/// Lowers [`ComponentModel`] trees using the rules of a [`MappingRegistry`].
///
/// The generator itself holds no state; everything it learns while lowering
/// (imports, dependencies, dropped styles) goes into the supplied
/// [`GenerationContext`].
#[derive(Debug, Clone, Copy)]
pub struct AstGenerator<'a> {
    registry: &'a MappingRegistry,
}

impl<'a> AstGenerator<'a> {
    pub fn new(registry: &'a MappingRegistry) -> Self {
        Self { registry }
    }

    /// Lower a whole tree with a fresh context.
    pub fn generate_page_ast(
        &self,
        root: &ComponentModel,
        platform: TargetPlatform,
    ) -> Result<PageAst> {
        let mut context = GenerationContext::new(platform);
        let ast = self.component_to_ast(root, &mut context)?;
        tracing::debug!(
            platform = %platform,
            nodes = root.node_count(),
            imports = context.imports.len(),
            "lowered component tree"
        );
        Ok(PageAst { ast, context })
    }

    /// Lower one node and its subtree.
    ///
    /// Fails on the first node whose type has no rule for the context's
    /// platform; nothing after it is lowered.
    pub fn component_to_ast(
        &self,
        node: &ComponentModel,
        ctx: &mut GenerationContext,
    ) -> Result<AstNode> {
        let platform = ctx.platform;
        let rule = self
            .registry
            .get(&node.component_type, platform)
            .ok_or_else(|| {
                Box::new(Error::UnsupportedComponent {
                    component_type: node.component_type.clone(),
                    platform,
                })
            })?;

        let ast = if rule.is_intrinsic() {
            AstNode::element(&rule.component)
        } else {
            ctx.use_component(&rule.import_path, &rule.component);
            AstNode::component(&rule.component)
        };

        let mut props = transform_props(&node.props, &rule);
        let text = match props.get(CHILDREN_PROP).and_then(PropValue::as_str) {
            Some(text) => {
                let text = text.to_string();
                props.shift_remove(CHILDREN_PROP);
                Some(text)
            }
            None => None,
        };

        let styles = apply_style_mappings(&node.style, rule.styles.as_deref(), platform);
        let styles = StylePolicy::for_platform(platform).adapt(&styles, &mut ctx.diagnostics);

        let mut children = Vec::with_capacity(node.children.len() + 1);
        if let Some(text) = text {
            children.push(AstNode::text(text));
        }
        for child in &node.children {
            children.push(self.component_to_ast(child, ctx)?);
        }

        Ok(ast
            .with_props(props)
            .with_styles(styles)
            .with_children(children))
    }
}

/// Rename props according to a rule.
///
/// Without prop rules every prop passes through unchanged. With rules, every
/// rule whose source prop is present writes its target, in rule order, so
/// one source may feed several targets. Props no rule mentions keep their
/// name unless a rule already wrote that name.
fn transform_props(props: &PropMap, rule: &PlatformRule) -> PropMap {
    let Some(mappings) = &rule.props else {
        return props.clone();
    };

    let mut out = PropMap::with_capacity(props.len());
    for mapping in mappings {
        if let Some(value) = props.get(&mapping.source) {
            out.insert(mapping.target.clone(), mapping.apply(value));
        }
    }
    for (key, value) in props {
        if !mappings.iter().any(|m| m.source == *key) {
            out.entry(key.clone()).or_insert_with(|| value.clone());
        }
    }
    out
}

/// Apply the rule-level style renames that target a platform.
fn apply_style_mappings(
    styles: &StyleMap,
    mappings: Option<&[StyleMapping]>,
    platform: TargetPlatform,
) -> StyleMap {
    let Some(mappings) = mappings else {
        return styles.clone();
    };

    styles
        .iter()
        .map(|(key, value)| {
            match mappings
                .iter()
                .find(|m| m.source == *key && m.applies_to(platform))
            {
                Some(mapping) => (mapping.target.clone(), mapping.apply(value)),
                None => (key.clone(), value.clone()),
            }
        })
        .collect::<StyleMap>()
}

/// Check if a literal prop value needs no attribute at all.
pub fn is_omitted(value: &PropValue) -> bool {
    matches!(value, PropValue::Literal(Value::Null))
}

#[cfg(test)]
mod tests {
    use lowgen_ir::AstKind;
    use serde_json::json;

    use super::*;
    use crate::mapping::{
        ComponentPlatformMapping, PropMapping, PropTransform, RegisterOptions, TARO_COMPONENTS,
    };

    fn lower(root: &ComponentModel, platform: TargetPlatform) -> Result<PageAst> {
        AstGenerator::new(&MappingRegistry::new()).generate_page_ast(root, platform)
    }

    fn sample_page() -> ComponentModel {
        ComponentModel::new("root", "Container")
            .with_style("padding", "16px")
            .with_children([
                ComponentModel::new("title", "Text").with_prop("content", "Hello"),
                ComponentModel::new("go", "Button")
                    .with_prop("variant", "contained")
                    .with_prop("onClick", PropValue::expr("() => go()"))
                    .with_prop("children", "Go"),
            ])
    }

    #[test]
    fn test_weapp_page() {
        let PageAst { ast, context } = lower(&sample_page(), TargetPlatform::Weapp).unwrap();

        assert_eq!(ast.tag_name, "View");
        assert_eq!(ast.styles["padding"], json!("16rpx"));
        assert_eq!(ast.children.len(), 2);

        let text = &ast.children[0];
        assert_eq!(text.tag_name, "Text");
        assert!(text.props.is_empty());
        assert_eq!(text.children[0].text.as_deref(), Some("Hello"));

        let button = &ast.children[1];
        assert_eq!(button.props["type"], PropValue::from("primary"));
        assert_eq!(button.props["onClick"], PropValue::expr("() => go()"));
        assert_eq!(button.children[0].kind, AstKind::Text);

        let symbols: Vec<_> = context
            .imports
            .symbols(TARO_COMPONENTS)
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(symbols, vec!["Button", "Text", "View"]);
        assert_eq!(context.imports.len(), 1);
    }

    #[test]
    fn test_rn_button() {
        let PageAst { ast, .. } = lower(&sample_page(), TargetPlatform::Rn).unwrap();
        let button = &ast.children[1];
        assert!(button.props.contains_key("onPress"));
        assert!(!button.props.contains_key("onClick"));
        assert_eq!(ast.styles["padding"], json!(16));
    }

    #[test]
    fn test_h5_button_class_name() {
        let PageAst { ast, .. } = lower(&sample_page(), TargetPlatform::H5).unwrap();
        let button = &ast.children[1];
        assert_eq!(button.props["className"], PropValue::from("btn-contained"));
    }

    #[test]
    fn test_unmapped_props_keep_their_name() {
        let root = ComponentModel::new("i", "Input")
            .with_prop("placeholder", "Name")
            .with_prop("maxlength", 10_i64);
        let PageAst { ast, .. } = lower(&root, TargetPlatform::Weapp).unwrap();
        let keys: Vec<_> = ast.props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["placeholder", "maxlength"]);
    }

    #[test]
    fn test_passthrough_without_prop_rules() {
        let root = ComponentModel::new("b", "Button").with_prop("variant", "contained");
        let PageAst { ast, .. } = lower(&root, TargetPlatform::Tt).unwrap();
        assert_eq!(ast.props["variant"], PropValue::from("contained"));
    }

    #[test]
    fn test_unsupported_type_is_fatal() {
        let root = ComponentModel::new("root", "Container")
            .with_child(ComponentModel::new("c", "Chart"));
        let err = lower(&root, TargetPlatform::Weapp).unwrap_err();
        assert!(matches!(
            *err,
            Error::UnsupportedComponent { ref component_type, platform: TargetPlatform::Weapp }
                if component_type == "Chart"
        ));
    }

    #[test]
    fn test_missing_platform_is_fatal() {
        let root = ComponentModel::new("s", "Swiper");
        assert!(lower(&root, TargetPlatform::Weapp).is_ok());
        assert!(lower(&root, TargetPlatform::Rn).is_err());
    }

    #[test]
    fn test_intrinsic_element_has_no_import() {
        let root = ComponentModel::new("root", "Container")
            .with_child(ComponentModel::new("d", "Divider"));
        let PageAst { ast, context } = lower(&root, TargetPlatform::H5).unwrap();

        assert_eq!(ast.children[0].kind, AstKind::Element);
        assert_eq!(ast.children[0].tag_name, "hr");
        assert!(!context.imports.has_symbol(TARO_COMPONENTS, "hr"));
        assert!(context.imports.has_symbol(TARO_COMPONENTS, "View"));
    }

    #[test]
    fn test_custom_mapping_records_dependency() {
        let mut registry = MappingRegistry::new();
        registry.register(
            [ComponentPlatformMapping::new("Card").with_all(
                PlatformRule::new("AcmeCard", "@acme/ui").with_styles(vec![
                    StyleMapping::new("tint", "backgroundColor").only_on([TargetPlatform::H5]),
                ]),
            )],
            RegisterOptions::default(),
        );
        let root = ComponentModel::new("c", "Card").with_style("tint", "red");

        let generator = AstGenerator::new(&registry);
        let h5 = generator.generate_page_ast(&root, TargetPlatform::H5).unwrap();
        assert_eq!(h5.ast.styles["backgroundColor"], json!("red"));
        assert!(h5.context.dependencies.has("@acme/ui"));

        let weapp = generator.generate_page_ast(&root, TargetPlatform::Weapp).unwrap();
        assert_eq!(weapp.ast.styles["tint"], json!("red"));
    }

    #[test]
    fn test_custom_transform() {
        let mut registry = MappingRegistry::new();
        registry.register(
            [ComponentPlatformMapping::new("Badge").with_all(
                PlatformRule::new("Text", TARO_COMPONENTS).with_props(vec![
                    PropMapping::new("count", "children").with_transform(PropTransform::custom(
                        |v| PropValue::from(format!("{} new", v.to_source())),
                    )),
                ]),
            )],
            RegisterOptions::default(),
        );
        let root = ComponentModel::new("b", "Badge").with_prop("count", 3_i64);
        let page = AstGenerator::new(&registry)
            .generate_page_ast(&root, TargetPlatform::Qq)
            .unwrap();
        assert_eq!(page.ast.children[0].text.as_deref(), Some("3 new"));
    }

    #[test]
    fn test_one_source_feeds_several_targets() {
        let mut registry = MappingRegistry::new();
        registry.register(
            [ComponentPlatformMapping::new("Link").with_all(
                PlatformRule::new("Navigator", TARO_COMPONENTS).with_props(vec![
                    PropMapping::new("href", "url"),
                    PropMapping::new("href", "data-href"),
                ]),
            )],
            RegisterOptions::default(),
        );
        let root = ComponentModel::new("l", "Link")
            .with_prop("href", "/a")
            .with_prop("openType", "navigate");
        let page = AstGenerator::new(&registry)
            .generate_page_ast(&root, TargetPlatform::Weapp)
            .unwrap();

        let keys: Vec<_> = page.ast.props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["url", "data-href", "openType"]);
        assert_eq!(page.ast.props["data-href"], PropValue::from("/a"));
    }

    #[test]
    fn test_absent_source_writes_nothing() {
        let root = ComponentModel::new("b", "Button").with_prop("disabled", true);
        let PageAst { ast, .. } = lower(&root, TargetPlatform::Weapp).unwrap();
        let keys: Vec<_> = ast.props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["disabled"]);
    }

    #[test]
    fn test_text_value_becomes_text_child() {
        let root = ComponentModel::new("t", "Text").with_prop("value", "Hello");
        let PageAst { ast, .. } = lower(&root, TargetPlatform::H5).unwrap();
        assert!(ast.props.is_empty());
        assert_eq!(ast.children[0].kind, AstKind::Text);
        assert_eq!(ast.children[0].text.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_dropped_style_is_reported() {
        let root = ComponentModel::new("root", "Container").with_style("boxShadow", "none");
        let PageAst { ast, context } = lower(&root, TargetPlatform::Alipay).unwrap();
        assert!(ast.styles.is_empty());
        assert_eq!(context.warning_count(), 1);
    }

    #[test]
    fn test_lowering_is_deterministic() {
        let first = lower(&sample_page(), TargetPlatform::Weapp).unwrap();
        let second = lower(&sample_page(), TargetPlatform::Weapp).unwrap();
        assert_eq!(first.ast, second.ast);
        assert_eq!(first.context.imports, second.context.imports);
    }

    #[test]
    fn test_omitted_values() {
        assert!(is_omitted(&PropValue::Literal(Value::Null)));
        assert!(!is_omitted(&PropValue::from(false)));
    }
}
