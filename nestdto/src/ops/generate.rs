//! Generate operation - full run or dry-run preview.

use nestdto_codegen::{GeneratorOptions, Result, Transform, generate as run, plan};

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Execute the generate operation.
///
/// With `dry_run` the files are planned but not written.
pub async fn generate(
    options: &GeneratorOptions,
    transform: &dyn Transform,
    dry_run: bool,
) -> Result<GenerateReport> {
    let result = if dry_run {
        let plan = plan(options, transform)?;
        let files = plan
            .files()
            .map(|file| PreviewFile {
                path: file.file_name.display().to_string(),
                content: file.content.clone(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let report = run(options, transform).await?;
        let files = report
            .written
            .iter()
            .map(|path| {
                path.strip_prefix(&report.output)
                    .unwrap_or(path)
                    .display()
                    .to_string()
            })
            .collect();
        GenerationResult::Written(WrittenResult {
            generated: report.generated,
            barrels: report.barrels,
            files,
        })
    };

    Ok(GenerateReport {
        output_dir: options.output.clone(),
        result,
    })
}
