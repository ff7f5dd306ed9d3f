use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use lowgen_core::{File, GeneratedFile, TargetPlatform};

#[derive(Args)]
pub struct InitCommand {
    /// Project name (defaults to current directory)
    #[arg(default_value = ".")]
    pub name: String,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Default target platform
    #[arg(short, long)]
    pub platform: Option<TargetPlatform>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let (project_name, output_dir) = Self::resolve_paths(&self.name, self.output.clone())?;
        let platform = match self.platform {
            Some(platform) => platform,
            None => Self::prompt_platform()?,
        };

        File::if_missing("lowgen.toml", manifest_template(&project_name, platform))
            .write(&output_dir)?;
        File::if_missing("pages/home.json", HOME_PAGE).write(&output_dir)?;

        println!(
            "Created new {} project in {}",
            platform.display_name(),
            output_dir.display()
        );
        println!();
        println!("Next steps:");
        if output_dir != Path::new(".") {
            println!("  cd {}", output_dir.display());
        }
        println!("  lowgen preview pages/home.json");
        println!("  lowgen generate");

        Ok(())
    }

    fn prompt_platform() -> Result<TargetPlatform> {
        let names: Vec<_> = TargetPlatform::ALL
            .iter()
            .map(TargetPlatform::display_name)
            .collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a target platform")
            .items(&names)
            .default(0)
            .interact()
            .wrap_err("Failed to get platform selection")?;

        Ok(TargetPlatform::ALL[selection])
    }

    fn resolve_paths(name: &str, output: Option<PathBuf>) -> Result<(String, PathBuf)> {
        if name == "." {
            let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
            let dir_name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?
                .to_string();
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            Ok((dir_name, output_dir))
        } else {
            let output_dir = output.unwrap_or_else(|| PathBuf::from(name));
            Ok((name.to_string(), output_dir))
        }
    }
}

fn manifest_template(name: &str, platform: TargetPlatform) -> String {
    format!(
        r##"[project]
name = "{name}"
version = "0.1.0"
platform = "{platform}"
pages = ["pages/home.json"]

[styles]
page = {{ backgroundColor = "#f5f5f5" }}
"##
    )
}

const HOME_PAGE: &str = r#"{
  "name": "Home",
  "title": "Home",
  "components": {
    "id": "root",
    "type": "Container",
    "style": { "padding": "16px" },
    "children": [
      { "id": "title", "type": "Text", "props": { "content": "Hello" }, "style": { "fontSize": 18 } },
      { "id": "go", "type": "Button", "props": { "variant": "contained", "children": "Get started" } }
    ]
  }
}
"#;
