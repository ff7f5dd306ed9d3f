//! Integration tests for whole-project generation, packaging and writing.

use std::io::{Cursor, Read};

use lowgen_codegen::{
    Error, Severity,
    mapping::{ComponentPlatformMapping, PlatformRule, RegisterOptions},
};
use lowgen_codegen_taro::{GenerationService, ZipArchiveWriter};
use lowgen_core::TargetPlatform;
use lowgen_ir::{ComponentModel, PageModel};
use lowgen_manifest::CodeGenerationConfig;
use serde_json::{Value, json};
use tempfile::TempDir;

fn pages() -> Vec<PageModel> {
    vec![
        PageModel::new(
            "Home",
            ComponentModel::new("root", "Container")
                .with_style("padding", 12)
                .with_child(ComponentModel::new("t", "Text").with_prop("content", "Hi")),
        )
        .with_title("Home"),
        PageModel::new(
            "My Orders",
            ComponentModel::new("root", "Container")
                .with_child(ComponentModel::new("img", "Image").with_prop("src", "a.png")),
        ),
    ]
}

fn config(platform: TargetPlatform) -> CodeGenerationConfig {
    CodeGenerationConfig::new("shop", platform)
        .with_description("Demo shop")
        .with_global_style(
            "page",
            serde_json::from_value(json!({"backgroundColor": "rgba(245, 245, 245, 1)"})).unwrap(),
        )
}

#[test]
fn test_weapp_project_files() {
    let code = GenerationService::new()
        .generate_project_code(&pages(), TargetPlatform::Weapp, &config(TargetPlatform::Weapp))
        .unwrap();
    let files = code.files();
    let paths: Vec<_> = files.keys().map(String::as_str).collect();

    assert_eq!(
        paths,
        vec![
            "project.config.json",
            "package.json",
            "tsconfig.json",
            "app.config.ts",
            "app.tsx",
            "app.scss",
            "pages/home/index.tsx",
            "pages/home/index.config.ts",
            "pages/myorders/index.tsx",
            "pages/home/index.scss",
        ]
    );
    assert_eq!(
        files["app.scss"],
        "page {\n  background-color: rgb(245, 245, 245);\n}"
    );
    assert!(files["app.tsx"].contains("import \"./app.scss\";"));
    // an unstyled page has no stylesheet to import
    assert!(!files["pages/myorders/index.tsx"].contains("index.scss"));
    assert!(files["pages/myorders/index.tsx"].contains("export default function Myorders()"));
}

#[test]
fn test_h5_project_has_no_project_manifest() {
    let code = GenerationService::new()
        .generate_project_code(&pages(), TargetPlatform::H5, &config(TargetPlatform::H5))
        .unwrap();

    assert_eq!(code.configs["project.config.json"], "");
    assert!(!code.files().contains_key("project.config.json"));

    let package: Value = serde_json::from_str(&code.configs["package.json"]).unwrap();
    assert_eq!(package["description"], "Demo shop");
    assert_eq!(package["scripts"]["build:h5"], "taro build --type h5");
}

#[test]
fn test_custom_component_dependency_reaches_package_json() {
    let mut service = GenerationService::new();
    service.registry_mut().register(
        [ComponentPlatformMapping::new("Chart")
            .with_all(PlatformRule::new("LineChart", "@acme/charts/line"))],
        RegisterOptions::default(),
    );
    let page = PageModel::new(
        "stats",
        ComponentModel::new("root", "Container").with_child(ComponentModel::new("c", "Chart")),
    );

    let code = service
        .generate_project_code(&[page], TargetPlatform::Alipay, &config(TargetPlatform::Alipay))
        .unwrap();
    let source = &code.pages["pages/stats/index"];
    assert!(source.code.contains("import { LineChart } from \"@acme/charts/line\";"));
    assert!(source.dependencies.has("@acme/charts"));

    let package: Value = serde_json::from_str(&code.configs["package.json"]).unwrap();
    assert_eq!(package["dependencies"]["@acme/charts"], "*");
}

#[test]
fn test_generate_and_download() {
    let archive = GenerationService::new()
        .generate_and_download(
            &pages(),
            TargetPlatform::Qq,
            &config(TargetPlatform::Qq),
            &ZipArchiveWriter,
        )
        .unwrap();
    assert_eq!(archive.file_name, "shop-qq.zip");

    let mut zip = zip::ZipArchive::new(Cursor::new(archive.bytes)).unwrap();
    assert_eq!(zip.len(), 10);

    let mut app_config = String::new();
    zip.by_name("app.config.ts")
        .unwrap()
        .read_to_string(&mut app_config)
        .unwrap();
    assert!(app_config.contains("\"pages/myorders/index\","));
}

#[test]
fn test_unsupported_component_aborts_project() {
    let page = PageModel::new(
        "gallery",
        ComponentModel::new("root", "Container").with_child(ComponentModel::new("s", "Swiper")),
    );
    let err = GenerationService::new()
        .generate_project_code(&[page], TargetPlatform::Rn, &config(TargetPlatform::Rn))
        .unwrap_err();

    assert!(matches!(*err, Error::Generation { platform: TargetPlatform::Rn, .. }));
    assert!(matches!(
        err.root(),
        Error::UnsupportedComponent { component_type, .. } if component_type == "Swiper"
    ));
    assert_eq!(
        err.root().to_string(),
        "component type 'Swiper' is not supported on platform 'rn'"
    );
}

#[test]
fn test_dropped_styles_are_reported_per_page() {
    let page = PageModel::new(
        "home",
        ComponentModel::new("root", "Container").with_style("boxShadow", "0 0 1px #000"),
    );
    let code = GenerationService::new()
        .generate_project_code(&[page], TargetPlatform::Weapp, &config(TargetPlatform::Weapp))
        .unwrap();

    assert_eq!(code.diagnostics.len(), 1);
    assert_eq!(code.diagnostics[0].severity, Severity::Warning);
    assert_eq!(code.diagnostics[0].location.as_deref(), Some("pages/home/index"));
    assert!(!code.styles.contains_key("pages/home/index.scss"));
}

#[test]
fn test_write_keeps_edited_project_manifest() {
    let temp = TempDir::new().unwrap();
    let manifest_path = temp.path().join("project.config.json");
    std::fs::write(&manifest_path, "{\"appid\": \"wx-real\"}").unwrap();

    let code = GenerationService::new()
        .generate_project_code(&pages(), TargetPlatform::Weapp, &config(TargetPlatform::Weapp))
        .unwrap();
    let stats = code.to_registry().write_all(temp.path()).unwrap();

    assert_eq!(stats.skipped_paths, vec!["project.config.json"]);
    assert_eq!(stats.written, 9);
    assert_eq!(
        std::fs::read_to_string(&manifest_path).unwrap(),
        "{\"appid\": \"wx-real\"}"
    );
    assert!(temp.path().join("pages").join("home").join("index.tsx").exists());
}

#[test]
fn test_preview_is_structural() {
    let preview = GenerationService::new()
        .preview_code(&pages()[0], TargetPlatform::H5)
        .unwrap();

    assert_eq!(
        preview.jsx,
        "<View style={{ padding: \"12px\" }}>\n  <Text>Hi</Text>\n</View>"
    );
    assert_eq!(preview.styles, ".container-root {\n  padding: 12px;\n}");
    assert_eq!(preview.ast.tag_name, "View");
}

#[test]
fn test_validate_page_configuration() {
    let service = GenerationService::new();
    let page = PageModel::new(
        "",
        ComponentModel::new("root", "Container").with_child(ComponentModel::new("", "Text")),
    );

    assert_eq!(
        service.validate_page_configuration(&page, TargetPlatform::Weapp),
        vec![
            "page name cannot be empty (at name)".to_string(),
            "component id cannot be empty (at components.children[0])".to_string(),
        ]
    );
    assert!(
        service
            .validate_page_configuration(&pages()[0], TargetPlatform::Weapp)
            .is_empty()
    );
}

#[test]
fn test_validate_page_warns_on_unsupported_types() {
    let page = PageModel::new(
        "gallery",
        ComponentModel::new("root", "Container").with_child(ComponentModel::new("s", "Swiper")),
    );
    let service = GenerationService::new();

    assert!(service.validate_page_configuration(&page, TargetPlatform::Rn).is_empty());
    let diagnostics = service.validate_page(&page, TargetPlatform::Rn);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].severity.is_warning());
    assert_eq!(
        diagnostics[0].message,
        "component type 'Swiper' is not supported on React Native"
    );
}

#[test]
fn test_generation_is_deterministic() {
    let service = GenerationService::new();
    let first = service
        .generate_project_code(&pages(), TargetPlatform::Tt, &config(TargetPlatform::Tt))
        .unwrap()
        .files();
    let second = service
        .generate_project_code(&pages(), TargetPlatform::Tt, &config(TargetPlatform::Tt))
        .unwrap()
        .files();
    assert_eq!(first, second);
}
