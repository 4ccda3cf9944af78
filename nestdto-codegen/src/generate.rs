//! Top-level generation run: resolve, transform, aggregate, materialize.

use std::path::PathBuf;

use nestdto_config::{RawConfig, ResolvedConfig};
use nestdto_core::FileSpec;
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::info;

use crate::{
    Error, GenerateRequest, Result, Transform, materialize::materialize,
    reexport::collect_barrels,
};

/// Everything the host supplies for one run.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Absolute output directory, already resolved by the host.
    pub output: PathBuf,
    /// Raw generator options.
    pub config: RawConfig,
    /// The parsed schema model.
    pub dmmf: serde_json::Value,
}

/// Files a run would write, before touching the filesystem.
#[derive(Debug, Clone)]
pub struct Plan {
    pub config: ResolvedConfig,
    /// Files produced by the transformation, in order.
    pub generated: Vec<FileSpec>,
    /// Synthesized barrels, empty unless `reExport` is enabled.
    pub barrels: Vec<FileSpec>,
}

impl Plan {
    /// Generated files followed by barrels.
    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.generated.iter().chain(self.barrels.iter())
    }

    pub fn into_files(self) -> Vec<FileSpec> {
        let mut files = self.generated;
        files.extend(self.barrels);
        files
    }
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct GenerateReport {
    pub output: PathBuf,
    /// Number of files produced by the transformation.
    pub generated: usize,
    /// Number of barrels synthesized.
    pub barrels: usize,
    /// Every written path, generated files first.
    pub written: Vec<PathBuf>,
}

/// Resolve options, run the transformation and synthesize barrels.
///
/// Nothing is written.
///
/// # Errors
///
/// Returns [`Error::Config`] for invalid options and
/// [`Error::Transformation`] if the transformation fails.
pub fn plan(options: &GeneratorOptions, transform: &dyn Transform) -> Result<Plan> {
    let config = ResolvedConfig::resolve(&options.config)?;

    let request = GenerateRequest {
        output: &options.output,
        dmmf: &options.dmmf,
        config: &config,
    };
    let generated = transform
        .transform(&request)
        .map_err(Error::Transformation)?;

    let barrels = if config.re_export {
        collect_barrels(&generated)
    } else {
        Vec::new()
    };

    info!(
        generated = generated.len(),
        barrels = barrels.len(),
        "planned generation"
    );

    Ok(Plan {
        config,
        generated,
        barrels,
    })
}

/// Run a full generation and write every file under `options.output`.
///
/// # Errors
///
/// Everything [`plan`] returns, plus [`Error::Storage`] when a write fails.
/// Writes already issued are not undone.
pub async fn generate(
    options: &GeneratorOptions,
    transform: &dyn Transform,
) -> Result<GenerateReport> {
    let plan = run_blocking(|| plan(options, transform))?;
    let generated = plan.generated.len();
    let barrels = plan.barrels.len();

    let written = materialize(&options.output, plan.into_files()).await?;

    info!(
        output = %options.output.display(),
        files = written.len(),
        "generation complete"
    );

    Ok(GenerateReport {
        output: options.output.clone(),
        generated,
        barrels,
        written,
    })
}

/// Run a blocking transformation from async code.
///
/// `block_in_place` is unavailable on a current-thread runtime; there `f`
/// runs inline.
fn run_blocking<T>(f: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}

#[cfg(test)]
mod tests {
    use nestdto_core::FileSpec;
    use tempfile::TempDir;

    use super::*;
    use crate::testing::StaticTransform;

    fn options(output: &std::path::Path) -> GeneratorOptions {
        GeneratorOptions {
            output: output.to_path_buf(),
            config: RawConfig::new().with("reExport", "true"),
            dmmf: serde_json::Value::Null,
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_generate_on_multi_thread_runtime() {
        let temp = TempDir::new().unwrap();
        let transform = StaticTransform::new([FileSpec::new("user/user.dto.ts", "")]);

        let report = generate(&options(temp.path()), &transform).await.unwrap();

        assert_eq!(report.generated, 1);
        assert_eq!(report.barrels, 1);
        assert!(temp.path().join("user/index.ts").exists());
    }

    #[tokio::test]
    async fn test_generate_on_current_thread_runtime() {
        let temp = TempDir::new().unwrap();
        let transform = StaticTransform::new([FileSpec::new("user/user.dto.ts", "")]);

        let report = generate(&options(temp.path()), &transform).await.unwrap();

        assert_eq!(report.written.len(), 2);
    }

    #[test]
    fn test_run_blocking_outside_runtime() {
        assert_eq!(run_blocking(|| 7), 7);
    }
}
