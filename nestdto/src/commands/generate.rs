use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use nestdto_codegen::{CommandTransform, GeneratorOptions, manifest::DEFAULT_OUTPUT};
use nestdto_config::{GeneratorToml, absolute};
use tracing::debug;

use super::{ConfigErrorExit, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the generator config (defaults to ./generator.toml)
    #[arg(short, long, default_value = "generator.toml")]
    pub config: PathBuf,

    /// Path to the schema model (DMMF) as JSON
    #[arg(short, long)]
    pub dmmf: PathBuf,

    /// Program that turns the schema model into source files
    #[arg(short, long)]
    pub transformer: PathBuf,

    /// Output directory (overrides the one declared in the config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Extra arguments passed to the transformer
    #[arg(last = true)]
    pub transformer_args: Vec<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub async fn run(&self) -> Result<()> {
        let file = GeneratorToml::open(&self.config).unwrap_or_exit();
        let output = match &self.output {
            Some(output) => absolute(output).unwrap_or_exit(),
            None => file.resolve_output(DEFAULT_OUTPUT).unwrap_or_exit(),
        };

        debug!(output = %output.display(), "resolved output directory");

        let options = GeneratorOptions {
            output,
            config: file.config().clone(),
            dmmf: read_dmmf(&self.dmmf)?,
        };
        let transform = CommandTransform::new(&self.transformer).args(&self.transformer_args);

        let report = ops::generate(&options, &transform, self.dry_run)
            .await
            .exit_on_config_error()
            .wrap_err("Failed to generate code")?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

fn read_dmmf(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read schema model '{}'", path.display()))?;
    serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse schema model '{}'", path.display()))
}
