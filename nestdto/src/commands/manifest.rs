use clap::Args;
use eyre::{Context, Result};
use nestdto_codegen::GeneratorManifest;

#[derive(Args)]
pub struct ManifestCommand {
    /// Print on a single line
    #[arg(long)]
    pub compact: bool,
}

impl ManifestCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = GeneratorManifest::default();
        let json = if self.compact {
            serde_json::to_string(&manifest)
        } else {
            serde_json::to_string_pretty(&manifest)
        }
        .wrap_err("Failed to encode manifest")?;

        println!("{}", json);
        Ok(())
    }
}
