//! Page and project generation.
//!
//! [`GenerationService`] is the entry point for every caller: it owns the
//! component mapping registry and runs the whole pipeline (lowering,
//! emission, stylesheets, project files) for one page or a set of pages.

use lowgen_codegen::{
    Diagnostic, Error, Result,
    ast::{AstGenerator, PageAst},
    generation::{DependencyCollector, ImportCollector},
    mapping::MappingRegistry,
    style::{StylePolicy, StyleSheet},
    validate::PageValidator,
};
use lowgen_core::{GeneratedFile, TargetPlatform, sanitize_page_name};
use lowgen_ir::{AstNode, PageModel};
use lowgen_manifest::CodeGenerationConfig;

use crate::{
    archive::{Archive, ArchiveWriter},
    ast::render_jsx,
    emitter::{RenderedComponent, generate_component_code},
    files::{AppConfig, AppEntry, PackageJson, PageConfig, ProjectConfig, TsConfig},
    output::{GeneratedCode, PageSource},
};

/// Side-effect import of a page's own stylesheet.
const PAGE_STYLESHEET: &str = "./index.scss";

/// Output of generating one page.
#[derive(Debug, Clone)]
pub struct PageOutput {
    /// TSX source of the page component.
    pub code: String,
    /// CSS text of the page stylesheet, empty when no node is styled.
    pub styles: String,
    pub ast: AstNode,
    pub diagnostics: Vec<Diagnostic>,
    pub imports: ImportCollector,
    pub dependencies: DependencyCollector,
}

/// Renderable portion of a page for live preview.
#[derive(Debug, Clone)]
pub struct Preview {
    /// JSX markup of the page root.
    pub jsx: String,
    pub styles: String,
    pub ast: AstNode,
}

/// Generates pages and whole projects against one mapping registry.
///
/// # Example
///
/// ```
/// use lowgen_codegen_taro::GenerationService;
/// use lowgen_core::TargetPlatform;
/// use lowgen_ir::{ComponentModel, PageModel};
///
/// let page = PageModel::new(
///     "home",
///     ComponentModel::new("root", "Container")
///         .with_child(ComponentModel::new("t", "Text").with_prop("content", "Hello")),
/// );
///
/// let output = GenerationService::new()
///     .generate_page_code(&page, TargetPlatform::Weapp, "home")
///     .unwrap();
/// assert!(output.code.contains("<Text>Hello</Text>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenerationService {
    registry: MappingRegistry,
}

impl GenerationService {
    /// Create a service over the built-in mappings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: MappingRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    /// Mutable access for registering custom mappings.
    pub fn registry_mut(&mut self) -> &mut MappingRegistry {
        &mut self.registry
    }

    /// Generate the component source and stylesheet of one page.
    ///
    /// Every failure is reported as [`Error::Generation`] carrying the
    /// platform; [`Error::root`] gives the underlying cause.
    pub fn generate_page_code(
        &self,
        page: &PageModel,
        platform: TargetPlatform,
        page_name: &str,
    ) -> Result<PageOutput> {
        self.page_output(page, platform, page_name)
            .map_err(|err| err.on_platform(platform))
    }

    fn page_output(
        &self,
        page: &PageModel,
        platform: TargetPlatform,
        page_name: &str,
    ) -> Result<PageOutput> {
        let root = page.components.as_ref().ok_or_else(|| {
            Box::new(Error::MissingComponents {
                page: page.name.clone(),
            })
        })?;

        let PageAst { ast, mut context } =
            AstGenerator::new(&self.registry).generate_page_ast(root, platform)?;

        // Dropped properties were already reported while lowering.
        context.global_styles = StyleSheet::for_tree(root, platform, &mut Vec::new());
        if !context.global_styles.is_empty() {
            context.imports.add_module(PAGE_STYLESHEET);
        }
        let styles = context.global_styles.render();

        let RenderedComponent { code, ast } = generate_component_code(&ast, &context, page_name);
        tracing::debug!(
            page = page_name,
            platform = %platform,
            warnings = context.warning_count(),
            "generated page"
        );

        Ok(PageOutput {
            code,
            styles,
            ast,
            diagnostics: context.diagnostics,
            imports: context.imports,
            dependencies: context.dependencies,
        })
    }

    /// Generate every file of a project.
    ///
    /// Each page lands in `pages/<sanitized name>/`; pages whose names
    /// sanitize to the same directory get a numeric suffix. The first page
    /// is the home page. Fails on the first page that cannot be generated.
    pub fn generate_project_code(
        &self,
        pages: &[PageModel],
        platform: TargetPlatform,
        config: &CodeGenerationConfig,
    ) -> Result<GeneratedCode> {
        let mut out = GeneratedCode::default();
        let mut routes = Vec::with_capacity(pages.len());

        for page in pages {
            let name = unique_dir_name(&sanitize_page_name(&page.name), &routes);
            let dir = format!("pages/{name}");
            let output = self.generate_page_code(page, platform, &name)?;

            if !output.styles.is_empty() {
                out.styles.insert(format!("{dir}/index.scss"), output.styles);
            }
            let page_config = page
                .title
                .as_ref()
                .map(|title| PageConfig::new(&dir, title).render());

            let route = format!("{dir}/index");
            out.diagnostics.extend(
                output
                    .diagnostics
                    .into_iter()
                    .map(|d| located_in(d, &route)),
            );
            out.pages.insert(
                route.clone(),
                PageSource {
                    code: output.code,
                    imports: output.imports,
                    dependencies: output.dependencies,
                    config: page_config,
                },
            );
            routes.push(route);
        }

        let global = self.global_stylesheet(config, platform, &mut out.diagnostics);
        if !global.is_empty() {
            out.styles.insert("app.scss".to_string(), global.render());
        }

        let dependencies = out.dependencies();
        let files: [&dyn GeneratedFile; 5] = [
            &AppConfig::new(config, routes),
            &AppEntry::new(!global.is_empty()),
            &ProjectConfig::new(config, platform),
            &PackageJson::new(config, platform).with_dependencies(&dependencies),
            &TsConfig,
        ];
        for file in files {
            out.configs.insert(file.path(), file.render());
        }

        tracing::debug!(
            platform = %platform,
            pages = out.page_count(),
            "generated project"
        );
        Ok(out)
    }

    /// Generate a project and package it with `writer`.
    ///
    /// The archive is named `<projectName>-<platform>.<ext>`.
    pub fn generate_and_download(
        &self,
        pages: &[PageModel],
        platform: TargetPlatform,
        config: &CodeGenerationConfig,
        writer: &dyn ArchiveWriter,
    ) -> Result<Archive> {
        let code = self.generate_project_code(pages, platform, config)?;
        let bytes = writer.write_archive(&code.files())?;
        Ok(Archive {
            file_name: format!(
                "{}-{}.{}",
                config.project_name,
                platform,
                writer.extension()
            ),
            bytes,
        })
    }

    /// Run the page pipeline and keep the renderable part.
    pub fn preview_code(&self, page: &PageModel, platform: TargetPlatform) -> Result<Preview> {
        let output = self.generate_page_code(page, platform, &page.name)?;
        Ok(Preview {
            jsx: render_jsx(&output.ast),
            styles: output.styles,
            ast: output.ast,
        })
    }

    /// Structural defects of a page as readable messages.
    ///
    /// Reports a blank name, a missing tree and nodes without an id or a
    /// type. Never fails; an empty list means the page can be lowered as
    /// far as its shape goes.
    pub fn validate_page_configuration(
        &self,
        page: &PageModel,
        platform: TargetPlatform,
    ) -> Vec<String> {
        PageValidator::structural()
            .validate(page, platform, &self.registry)
            .into_iter()
            .map(|d| match d.location {
                Some(location) => format!("{} (at {})", d.message, location),
                None => d.message,
            })
            .collect()
    }

    /// Every finding of the built-in lints, including component types the
    /// platform has no mapping for.
    pub fn validate_page(&self, page: &PageModel, platform: TargetPlatform) -> Vec<Diagnostic> {
        PageValidator::new().validate(page, platform, &self.registry)
    }

    fn global_stylesheet(
        &self,
        config: &CodeGenerationConfig,
        platform: TargetPlatform,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> StyleSheet {
        let policy = StylePolicy::for_platform(platform);
        let mut sheet = StyleSheet::new();
        for (selector, styles) in &config.global_styles {
            let adapted = policy.adapt(styles, diagnostics);
            if !adapted.is_empty() {
                sheet.add_rule(selector, adapted);
            }
        }
        sheet
    }
}

/// Pick a page directory name not used by an earlier route.
fn unique_dir_name(name: &str, routes: &[String]) -> String {
    let taken = |candidate: &str| {
        routes
            .iter()
            .any(|route| route == &format!("pages/{candidate}/index"))
    };
    if !taken(name) {
        return name.to_string();
    }
    (2..)
        .map(|n| format!("{name}-{n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| name.to_string())
}

fn located_in(diagnostic: Diagnostic, route: &str) -> Diagnostic {
    let location = match &diagnostic.location {
        Some(inner) => format!("{route}: {inner}"),
        None => route.to_string(),
    };
    diagnostic.at(location)
}

#[cfg(test)]
mod tests {
    use lowgen_ir::ComponentModel;

    use super::*;

    fn page(name: &str) -> PageModel {
        PageModel::new(name, ComponentModel::new("root", "Container"))
    }

    #[test]
    fn test_unique_dir_name() {
        let routes = vec![
            "pages/home/index".to_string(),
            "pages/home-2/index".to_string(),
        ];
        assert_eq!(unique_dir_name("cart", &routes), "cart");
        assert_eq!(unique_dir_name("home", &routes), "home-3");
    }

    #[test]
    fn test_colliding_page_names() {
        let config = CodeGenerationConfig::new("shop", TargetPlatform::H5);
        let code = GenerationService::new()
            .generate_project_code(&[page("Home"), page("home!")], TargetPlatform::H5, &config)
            .unwrap();
        let routes: Vec<_> = code.pages.keys().map(String::as_str).collect();
        assert_eq!(routes, vec!["pages/home/index", "pages/home-2/index"]);
    }

    #[test]
    fn test_missing_tree() {
        let blank = PageModel {
            name: "blank".to_string(),
            ..PageModel::default()
        };
        let err = GenerationService::new()
            .generate_page_code(&blank, TargetPlatform::Weapp, "blank")
            .unwrap_err();
        assert!(matches!(*err, Error::Generation { platform: TargetPlatform::Weapp, .. }));
        assert!(matches!(err.root(), Error::MissingComponents { page } if page == "blank"));
    }

    #[test]
    fn test_located_in() {
        let d = located_in(Diagnostic::warning("style", "x").at("components"), "pages/a/index");
        assert_eq!(d.location.as_deref(), Some("pages/a/index: components"));
        let d = located_in(Diagnostic::warning("style", "x"), "pages/a/index");
        assert_eq!(d.location.as_deref(), Some("pages/a/index"));
    }
}
