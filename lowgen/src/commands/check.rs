use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use lowgen_core::TargetPlatform;

use super::UnwrapOrExit;
use crate::{
    ops::{self, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to lowgen.toml (defaults to ./lowgen.toml)
    #[arg(short, long, default_value = "lowgen.toml")]
    pub config: PathBuf,

    /// Platform to check against (defaults to the one in lowgen.toml)
    #[arg(short, long)]
    pub platform: Option<TargetPlatform>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let project = Project::open(&self.config).unwrap_or_exit();
        let report = ops::check(&project, project.platform(self.platform));
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
