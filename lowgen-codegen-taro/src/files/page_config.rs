//! Per-page `index.config.ts` generator.

use lowgen_codegen::builder::CodeBuilder;
use lowgen_core::GeneratedFile;
use serde_json::Value;

/// Page config carrying the navigation bar title of one page.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Page directory, e.g. `pages/index`.
    pub dir: String,
    pub title: String,
}

impl PageConfig {
    pub fn new(dir: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            title: title.into(),
        }
    }
}

impl GeneratedFile for PageConfig {
    fn path(&self) -> String {
        format!("{}/index.config.ts", self.dir)
    }

    fn render(&self) -> String {
        CodeBuilder::typescript()
            .block_with_close("export default definePageConfig({", "});", |b| {
                b.line(&format!(
                    "navigationBarTitleText: {},",
                    Value::String(self.title.clone())
                ))
            })
            .build()
    }
}
