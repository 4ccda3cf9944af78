use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, RawConfig, Result};

#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default)]
    generator: GeneratorSection,
}

#[derive(Debug, Default, Deserialize)]
struct GeneratorSection {
    output: Option<String>,
    #[serde(default)]
    config: toml::Table,
}

/// A generator config file with its declared output and raw options.
///
/// ```toml
/// [generator]
/// output = "../src/generated/nestjs-dto"
///
/// [generator.config]
/// reExport = "true"
/// ```
#[derive(Debug)]
pub struct GeneratorToml {
    path: PathBuf,
    output: Option<String>,
    config: RawConfig,
}

impl GeneratorToml {
    /// Open and parse a generator config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        Self::parse(&content, path)
    }

    /// Parse generator config content; `path` is used for error reporting
    /// and as the base for relative output paths.
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let filename = path.display().to_string();
        let document: Document =
            toml::from_str(content).map_err(|e| Error::parse(e, content, &filename))?;

        Ok(Self {
            path,
            output: document.generator.output,
            config: RawConfig::from_toml_table(&document.generator.config),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the declared output, unresolved.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Get the raw generator options.
    pub fn config(&self) -> &RawConfig {
        &self.config
    }

    /// Resolve the output directory to an absolute path.
    ///
    /// Uses the declared output or `default_output` when none is declared.
    /// Relative paths are taken relative to the directory of this file.
    pub fn resolve_output(&self, default_output: &str) -> Result<PathBuf> {
        let declared = parse_env_value(self.output.as_deref().unwrap_or(default_output))?;
        let base = self.path.parent().unwrap_or_else(|| Path::new(""));
        absolute(&base.join(declared))
    }
}

/// Resolve an output value that may reference the environment.
///
/// `env("NAME")` reads the variable `NAME`; anything else is returned as-is.
pub fn parse_env_value(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let Some(inner) = trimmed
        .strip_prefix("env(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return Ok(value.to_string());
    };

    let name = inner.trim().trim_matches(|c| c == '"' || c == '\'');
    std::env::var(name).map_err(|_| {
        Box::new(Error::MissingEnv {
            name: name.to_string(),
        })
    })
}

/// Make `path` absolute against the current directory.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        Box::new(Error::OutputPath {
            path: path.to_path_buf(),
            source: e,
        })
    })
}
