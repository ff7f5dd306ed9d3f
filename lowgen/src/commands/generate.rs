use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use lowgen_core::TargetPlatform;

use super::UnwrapOrExit;
use crate::{
    ops::{self, Project},
    reports::{GenerateReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to lowgen.toml (defaults to ./lowgen.toml)
    #[arg(short, long, default_value = "lowgen.toml")]
    pub config: PathBuf,

    /// Target platform (defaults to the one in lowgen.toml)
    #[arg(short, long)]
    pub platform: Option<TargetPlatform>,

    /// Output directory (defaults to the one in lowgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let project = Project::open(&self.config).unwrap_or_exit();
        let platform = project.platform(self.platform);
        let output_dir = project.output_dir(self.output.as_deref());

        let code = project
            .service()
            .generate_project_code(project.pages(), platform, project.config())
            .unwrap_or_exit();

        let warnings = code
            .diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .map(|d| match &d.location {
                Some(loc) => format!("{} ({})", d.message, loc),
                None => d.message.clone(),
            })
            .collect();

        let result = ops::write_project(&code, &output_dir, self.dry_run)?;

        let report = GenerateReport {
            project_name: project.config().project_name.clone(),
            version: project.config().version.to_string(),
            platform,
            output_dir,
            page_count: code.page_count(),
            warnings,
            result,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
