mod check;
mod completions;
mod generate;
mod manifest;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use manifest::ManifestCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for nestdto_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with_config_error(*e),
        }
    }
}

/// Configuration errors from a generation run get the same treatment;
/// everything else is handed back as an eyre report.
pub(crate) trait ConfigErrorExit<T> {
    fn exit_on_config_error(self) -> Result<T>;
}

impl<T> ConfigErrorExit<T> for nestdto_codegen::Result<T> {
    fn exit_on_config_error(self) -> Result<T> {
        match self {
            Ok(v) => Ok(v),
            Err(nestdto_codegen::Error::Config(e)) => exit_with_config_error(*e),
            Err(e) => Err(e.into()),
        }
    }
}

fn exit_with_config_error(error: nestdto_config::Error) -> ! {
    eprintln!("{:?}", miette::Report::new(error));
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "nestdto")]
#[command(version)]
#[command(about = "Generate NestJS DTO sources from a Prisma schema model")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run().await,
            Commands::Check(cmd) => cmd.run(),
            Commands::Manifest(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate DTO sources and barrels into the output directory
    Generate(GenerateCommand),

    /// Resolve generator options without generating code
    Check(CheckCommand),

    /// Print the generator manifest as JSON
    Manifest(ManifestCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
