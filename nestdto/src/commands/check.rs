use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use nestdto_codegen::manifest::DEFAULT_OUTPUT;
use nestdto_config::GeneratorToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the generator config (defaults to ./generator.toml)
    #[arg(short, long, default_value = "generator.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = GeneratorToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(&file, DEFAULT_OUTPUT).unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
