//! Components command report data structures.

use lowgen_codegen::mapping::MappingRegistry;
use lowgen_core::TargetPlatform;

use super::output::{Output, Report};

/// One component type resolved for one platform.
#[derive(Debug)]
pub struct ComponentRow {
    pub platform: TargetPlatform,
    /// Rendered tag, or `None` when the platform has no rule.
    pub tag: Option<String>,
    pub import_path: Option<String>,
    pub custom: bool,
}

/// Known component types and how each platform renders them.
#[derive(Debug)]
pub struct ComponentsReport {
    pub components: Vec<(String, Vec<ComponentRow>)>,
}

impl ComponentsReport {
    /// Collect rows for every known type on the given platforms.
    pub fn collect(registry: &MappingRegistry, platforms: &[TargetPlatform]) -> Self {
        let components = registry
            .supported_types()
            .into_iter()
            .map(|component_type| {
                let custom = registry.has_custom(&component_type);
                let rows = platforms
                    .iter()
                    .map(|&platform| {
                        let rule = registry.get(&component_type, platform);
                        ComponentRow {
                            platform,
                            tag: rule.as_ref().map(|r| r.component.clone()),
                            import_path: rule
                                .filter(|r| !r.is_intrinsic())
                                .map(|r| r.import_path),
                            custom,
                        }
                    })
                    .collect();
                (component_type, rows)
            })
            .collect();
        Self { components }
    }
}

impl Report for ComponentsReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, (component_type, rows)) in self.components.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            let custom = rows.first().is_some_and(|r| r.custom);
            out.section(&if custom {
                format!("{} (custom)", component_type)
            } else {
                component_type.clone()
            });
            for row in rows {
                let value = match (&row.tag, &row.import_path) {
                    (Some(tag), Some(path)) => format!("{} from {}", tag, path),
                    (Some(tag), None) => format!("<{}>", tag),
                    (None, _) => "unsupported".to_string(),
                };
                out.key_value_indented(row.platform.as_str(), &value);
            }
        }
    }
}
