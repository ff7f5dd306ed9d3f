mod check;
mod completions;
mod components;
mod generate;
mod init;
mod pack;
mod preview;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use components::ComponentsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use pack::PackCommand;
use preview::PreviewCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for lowgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for lowgen_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "lowgen")]
#[command(version)]
#[command(about = "Generate Taro projects from low-code page definitions")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Preview(cmd) => cmd.run(),
            Commands::Pack(cmd) => cmd.run(),
            Commands::Components(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project with a sample page
    Init(InitCommand),

    /// Generate the Taro project described by lowgen.toml
    Generate(GenerateCommand),

    /// Validate lowgen.toml and its pages without generating code
    Check(CheckCommand),

    /// Print the JSX and stylesheet of a single page
    Preview(PreviewCommand),

    /// Generate the project into a zip archive
    Pack(PackCommand),

    /// List known component types and their platform rules
    Components(ComponentsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
