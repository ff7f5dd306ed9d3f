use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use lowgen_codegen::mapping::MappingRegistry;
use lowgen_core::TargetPlatform;

use super::UnwrapOrExit;
use crate::{
    ops::Project,
    reports::{ComponentsReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct ComponentsCommand {
    /// lowgen.toml whose custom components should be listed too
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only show rules for this platform
    #[arg(short, long)]
    pub platform: Option<TargetPlatform>,
}

impl ComponentsCommand {
    pub fn run(&self) -> Result<()> {
        let registry = match &self.config {
            Some(config) => Project::open(config)
                .unwrap_or_exit()
                .service()
                .registry()
                .clone(),
            None => MappingRegistry::new(),
        };
        let platforms = match self.platform {
            Some(platform) => vec![platform],
            None => TargetPlatform::ALL.to_vec(),
        };

        ComponentsReport::collect(&registry, &platforms).render(&mut TerminalOutput::new());
        Ok(())
    }
}
