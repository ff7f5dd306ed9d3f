//! app.config.ts generator.

use lowgen_codegen::builder::CodeBuilder;
use lowgen_core::GeneratedFile;
use lowgen_manifest::CodeGenerationConfig;
use serde_json::Value;

/// Application config listing every page route.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Route of each page, e.g. `pages/index/index`; the first one is the home page.
    pub pages: Vec<String>,
    /// Navigation bar title.
    pub title: String,
}

impl AppConfig {
    pub fn new(config: &CodeGenerationConfig, pages: impl IntoIterator<Item = String>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
            title: config.project_name.clone(),
        }
    }
}

impl GeneratedFile for AppConfig {
    fn path(&self) -> String {
        "app.config.ts".to_string()
    }

    fn render(&self) -> String {
        let title = Value::String(self.title.clone());
        CodeBuilder::typescript()
            .block_with_close("export default defineAppConfig({", "});", |b| {
                b.line("pages: [")
                    .indent()
                    .each(&self.pages, |b, page| {
                        b.line(&format!("{},", Value::String(page.clone())))
                    })
                    .dedent()
                    .line("],")
                    .block_with_close("window: {", "},", |b| {
                        b.line("backgroundTextStyle: \"light\",")
                            .line("navigationBarBackgroundColor: \"#fff\",")
                            .line(&format!("navigationBarTitleText: {},", title))
                            .line("navigationBarTextStyle: \"black\",")
                    })
            })
            .build()
    }
}
