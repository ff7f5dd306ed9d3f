//! project.config.json generator for mini-program targets.

use lowgen_core::{FileRules, GeneratedFile, Overwrite, TargetPlatform};
use lowgen_manifest::CodeGenerationConfig;
use serde_json::json;

/// App id used when the project declares none.
pub const DEFAULT_APP_ID: &str = "touristappid";

/// Mini-program developer tool manifest.
///
/// Only mini-program targets have one; for other platforms the rendered
/// content is empty. Developers usually edit this file by hand, so it is
/// never overwritten once it exists.
#[derive(Debug, Clone)]
pub struct ProjectConfig<'a> {
    config: &'a CodeGenerationConfig,
    platform: TargetPlatform,
}

impl<'a> ProjectConfig<'a> {
    pub fn new(config: &'a CodeGenerationConfig, platform: TargetPlatform) -> Self {
        Self { config, platform }
    }
}

impl GeneratedFile for ProjectConfig<'_> {
    fn path(&self) -> String {
        "project.config.json".to_string()
    }

    fn render(&self) -> String {
        if !self.platform.is_mini_program() {
            return String::new();
        }
        let manifest = json!({
            "miniprogramRoot": "dist/",
            "projectname": self.config.project_name,
            "description": self.config.description.clone().unwrap_or_default(),
            "appid": self.config.app_id.as_deref().unwrap_or(DEFAULT_APP_ID),
            "setting": {
                "urlCheck": true,
                "es6": false,
                "postcss": false,
                "minified": false
            },
            "compileType": "miniprogram"
        });
        format!("{:#}\n", manifest)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
        }
    }
}
