use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use lowgen_codegen_taro::ZipArchiveWriter;
use lowgen_core::TargetPlatform;

use super::UnwrapOrExit;
use crate::ops::Project;

#[derive(Args)]
pub struct PackCommand {
    /// Path to lowgen.toml (defaults to ./lowgen.toml)
    #[arg(short, long, default_value = "lowgen.toml")]
    pub config: PathBuf,

    /// Target platform (defaults to the one in lowgen.toml)
    #[arg(short, long)]
    pub platform: Option<TargetPlatform>,

    /// Directory to place the archive in
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

impl PackCommand {
    pub fn run(&self) -> Result<()> {
        let project = Project::open(&self.config).unwrap_or_exit();
        let platform = project.platform(self.platform);

        let archive = project
            .service()
            .generate_and_download(
                project.pages(),
                platform,
                project.config(),
                &ZipArchiveWriter,
            )
            .unwrap_or_exit();

        std::fs::create_dir_all(&self.out)
            .wrap_err_with(|| format!("Failed to create {}", self.out.display()))?;
        let path = self.out.join(&archive.file_name);
        std::fs::write(&path, &archive.bytes)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        tracing::info!(bytes = archive.bytes.len(), "wrote archive");
        println!("Packed {} ({})", path.display(), platform.display_name());

        Ok(())
    }
}
