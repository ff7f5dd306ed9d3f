//! Snapshot tests for emitted page and project sources.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use lowgen_codegen_taro::GenerationService;
use lowgen_core::TargetPlatform;
use lowgen_ir::{ComponentModel, PageModel, PropValue};
use lowgen_manifest::CodeGenerationConfig;

fn home_page() -> PageModel {
    PageModel::new(
        "home",
        ComponentModel::new("root", "Container")
            .with_style("padding", "16px")
            .with_style("backgroundColor", "#fff")
            .with_children([
                ComponentModel::new("title", "Text")
                    .with_prop("content", "Hello")
                    .with_style("fontSize", 14),
                ComponentModel::new("go", "Button")
                    .with_prop("variant", "contained")
                    .with_prop("onClick", PropValue::expr("handleClick"))
                    .with_prop("children", "Go"),
            ]),
    )
    .with_title("Welcome")
}

#[test]
fn test_weapp_page_component() {
    let output = GenerationService::new()
        .generate_page_code(&home_page(), TargetPlatform::Weapp, "home")
        .unwrap();

    insta::assert_snapshot!(output.code, @r##"
import { Button, Text, View } from "@tarojs/components";
import "./index.scss";

export default function Home() {
  return (
    <View style={{ padding: "16rpx", "background-color": "#fff" }}>
      <Text style={{ "font-size": "14rpx" }}>Hello</Text>
      <Button type="primary" onClick={handleClick}>Go</Button>
    </View>
  );
}
"##);
}

#[test]
fn test_weapp_page_stylesheet() {
    let output = GenerationService::new()
        .generate_page_code(&home_page(), TargetPlatform::Weapp, "home")
        .unwrap();

    insta::assert_snapshot!(output.styles, @r"
.container-root {
  padding: 16rpx;
  background-color: #fff;
}

.text-title {
  font-size: 14rpx;
}
");
}

#[test]
fn test_rn_page_component() {
    let output = GenerationService::new()
        .generate_page_code(&home_page(), TargetPlatform::Rn, "home")
        .unwrap();

    insta::assert_snapshot!(output.code, @r##"
import { Button, Text, View } from "@tarojs/components";
import "./index.scss";

export default function Home() {
  return (
    <View style={{ padding: 16, backgroundColor: "#fff" }}>
      <Text style={{ fontSize: 14 }}>Hello</Text>
      <Button type="primary" onPress={handleClick}>Go</Button>
    </View>
  );
}
"##);
}

#[test]
fn test_h5_page_component() {
    let output = GenerationService::new()
        .generate_page_code(&home_page(), TargetPlatform::H5, "home")
        .unwrap();

    insta::assert_snapshot!(output.code, @r##"
import { Button, Text, View } from "@tarojs/components";
import "./index.scss";

export default function Home() {
  return (
    <View style={{ padding: "16px", backgroundColor: "#fff" }}>
      <Text style={{ fontSize: "14px" }}>Hello</Text>
      <Button className="btn-contained" onClick={handleClick}>Go</Button>
    </View>
  );
}
"##);
}

#[test]
fn test_app_config() {
    let pages = vec![
        home_page(),
        PageModel::new("Cart", ComponentModel::new("root", "Container")),
    ];
    let config = CodeGenerationConfig::new("shop", TargetPlatform::Weapp);
    let code = GenerationService::new()
        .generate_project_code(&pages, TargetPlatform::Weapp, &config)
        .unwrap();

    insta::assert_snapshot!(code.configs["app.config.ts"], @r##"
export default defineAppConfig({
  pages: [
    "pages/home/index",
    "pages/cart/index",
  ],
  window: {
    backgroundTextStyle: "light",
    navigationBarBackgroundColor: "#fff",
    navigationBarTitleText: "shop",
    navigationBarTextStyle: "black",
  },
});
"##);
}

#[test]
fn test_page_config() {
    let config = CodeGenerationConfig::new("shop", TargetPlatform::Tt);
    let code = GenerationService::new()
        .generate_project_code(&[home_page()], TargetPlatform::Tt, &config)
        .unwrap();
    let files = code.files();

    insta::assert_snapshot!(files["pages/home/index.config.ts"], @r#"
export default definePageConfig({
  navigationBarTitleText: "Welcome",
});
"#);
}
