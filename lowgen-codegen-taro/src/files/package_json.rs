//! package.json generator.

use lowgen_codegen::generation::DependencyCollector;
use lowgen_core::{GeneratedFile, TargetPlatform};
use lowgen_manifest::CodeGenerationConfig;
use serde_json::{Map, Value, json};

/// Version range used for every `@tarojs/*` package.
pub const TARO_VERSION: &str = "^3.6.0";

const REACT_VERSION: &str = "^18.2.0";
const TYPESCRIPT_VERSION: &str = "^5.1.0";

/// npm manifest of a generated project.
#[derive(Debug, Clone)]
pub struct PackageJson<'a> {
    config: &'a CodeGenerationConfig,
    platform: TargetPlatform,
    extra: DependencyCollector,
}

impl<'a> PackageJson<'a> {
    pub fn new(config: &'a CodeGenerationConfig, platform: TargetPlatform) -> Self {
        Self {
            config,
            platform,
            extra: DependencyCollector::new(),
        }
    }

    /// Add packages the generated pages import.
    pub fn with_dependencies(mut self, dependencies: &DependencyCollector) -> Self {
        self.extra.merge(dependencies);
        self
    }

    fn dependencies(&self) -> Map<String, Value> {
        let mut deps = Map::new();
        let mut add = |name: &str, version: &str| {
            deps.insert(name.to_string(), Value::String(version.to_string()));
        };

        add("@tarojs/components", TARO_VERSION);
        add("@tarojs/runtime", TARO_VERSION);
        add("@tarojs/taro", TARO_VERSION);
        add("@tarojs/react", TARO_VERSION);
        add(&platform_plugin(self.platform), TARO_VERSION);
        add("react", REACT_VERSION);
        match self.platform {
            TargetPlatform::Rn => {
                add("@tarojs/taro-rn", TARO_VERSION);
                add("@tarojs/components-rn", TARO_VERSION);
                add("react-native", "^0.73.0");
            }
            _ => add("react-dom", REACT_VERSION),
        }

        for (name, spec) in self.extra.sorted() {
            if !spec.dev && !deps.contains_key(name) {
                deps.insert(name.to_string(), Value::String(spec.version.clone()));
            }
        }
        deps
    }

    fn dev_dependencies(&self) -> Map<String, Value> {
        let runner = match self.platform {
            TargetPlatform::Rn => "@tarojs/rn-runner",
            _ => "@tarojs/webpack5-runner",
        };
        let mut deps = Map::new();
        deps.insert("@tarojs/cli".to_string(), json!(TARO_VERSION));
        deps.insert(runner.to_string(), json!(TARO_VERSION));
        deps.insert("@types/react".to_string(), json!(REACT_VERSION));
        deps.insert("typescript".to_string(), json!(TYPESCRIPT_VERSION));
        for (name, spec) in self.extra.sorted() {
            if spec.dev && !deps.contains_key(name) {
                deps.insert(name.to_string(), Value::String(spec.version.clone()));
            }
        }
        deps
    }
}

/// The Taro plugin package that builds for a platform.
fn platform_plugin(platform: TargetPlatform) -> String {
    match platform {
        TargetPlatform::H5 => "@tarojs/plugin-platform-h5".to_string(),
        TargetPlatform::Rn => "@tarojs/plugin-platform-rn".to_string(),
        other => format!("@tarojs/plugin-platform-{}", other.as_str()),
    }
}

impl GeneratedFile for PackageJson<'_> {
    fn path(&self) -> String {
        "package.json".to_string()
    }

    fn render(&self) -> String {
        let p = self.platform.as_str();
        let mut scripts = Map::new();
        scripts.insert(format!("build:{p}"), json!(format!("taro build --type {p}")));
        scripts.insert(
            format!("dev:{p}"),
            json!(format!("npm run build:{p} -- --watch")),
        );

        let manifest = json!({
            "name": self.config.project_name,
            "version": self.config.version.to_string(),
            "private": true,
            "description": self.config.description.clone().unwrap_or_default(),
            "author": self.config.author.clone().unwrap_or_default(),
            "scripts": scripts,
            "dependencies": self.dependencies(),
            "devDependencies": self.dev_dependencies(),
        });
        format!("{:#}\n", manifest)
    }
}
