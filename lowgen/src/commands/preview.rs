use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use lowgen_codegen_taro::GenerationService;
use lowgen_core::TargetPlatform;
use lowgen_manifest::parse_page_file;

use super::UnwrapOrExit;
use crate::ops::Project;

#[derive(Args)]
pub struct PreviewCommand {
    /// Page file to preview
    pub page: PathBuf,

    /// lowgen.toml whose custom components should be used
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target platform (defaults to the one in lowgen.toml, else weapp)
    #[arg(short, long)]
    pub platform: Option<TargetPlatform>,

    /// Print the platform-resolved tree as JSON instead of markup
    #[arg(long)]
    pub ast: bool,
}

impl PreviewCommand {
    pub fn run(&self) -> Result<()> {
        let page = parse_page_file(&self.page).unwrap_or_exit();

        let (service, platform) = match &self.config {
            Some(config) => {
                let project = Project::open(config).unwrap_or_exit();
                (project.service(), project.platform(self.platform))
            }
            None => (
                GenerationService::new(),
                self.platform.unwrap_or(TargetPlatform::Weapp),
            ),
        };

        let preview = service.preview_code(&page, platform).unwrap_or_exit();

        if self.ast {
            println!("{}", serde_json::to_string_pretty(&preview.ast)?);
            return Ok(());
        }

        println!("── {} ({}) ──", page.name, platform.display_name());
        println!("{}", preview.jsx);
        if !preview.styles.is_empty() {
            println!();
            println!("── styles ──");
            print!("{}", preview.styles);
        }

        Ok(())
    }
}
