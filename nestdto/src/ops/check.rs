//! Check operation - option resolution without generation.

use nestdto_config::{GeneratorToml, ResolvedConfig, Result, unrecognized_keys};

use crate::reports::CheckReport;

/// Resolve the options and output path declared in a generator config.
pub fn check(file: &GeneratorToml, default_output: &str) -> Result<CheckReport> {
    let config = ResolvedConfig::resolve(file.config())?;
    let output_dir = file.resolve_output(default_output)?;

    Ok(CheckReport {
        config_path: file.path().to_path_buf(),
        output_dir,
        options: config
            .entries()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
        ignored: unrecognized_keys(file.config())
            .map(str::to_string)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use nestdto_config::Error;

    use super::*;

    #[test]
    fn test_check_reports_resolved_options() {
        let file = GeneratorToml::parse(
            r#"
            [generator]
            output = "generated"

            [generator.config]
            reExport = "true"
            provider = "nestjs-dto"
            "#,
            "/project/prisma/generator.toml",
        )
        .unwrap();

        let report = check(&file, "unused").unwrap();

        assert!(report.output_dir.ends_with("prisma/generated"));
        assert_eq!(report.options.len(), 10);
        assert!(
            report
                .options
                .contains(&("reExport".to_string(), "true".to_string()))
        );
        assert_eq!(report.ignored, vec!["provider"]);
    }

    #[test]
    fn test_check_rejects_invalid_style() {
        let file = GeneratorToml::parse(
            "[generator.config]\nfileNamingStyle = \"title\"\n",
            "generator.toml",
        )
        .unwrap();

        let err = check(&file, "out").unwrap_err();
        assert!(matches!(*err, Error::InvalidConfigValue { .. }));
    }
}
