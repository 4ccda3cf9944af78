use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("'{value}' is not a valid {kind}. Valid options are {}.", quote_all(.valid))]
    #[diagnostic(
        code(nestdto::invalid_config_value),
        help("set '{key}' to one of the valid options or remove it to use the default")
    )]
    InvalidConfigValue {
        key: String,
        kind: String,
        value: String,
        valid: Vec<String>,
    },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse generator config")]
    #[diagnostic(code(nestdto::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("environment variable '{name}' is not set")]
    #[diagnostic(
        code(nestdto::missing_env),
        help("export {name} or set 'output' to a literal path")
    )]
    MissingEnv { name: String },

    #[error("failed to resolve output path '{path}'")]
    OutputPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn quote_all(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{}'", v))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Create an invalid value error for an enumerated option
    pub fn invalid_value(
        key: impl Into<String>,
        kind: impl Into<String>,
        value: impl Into<String>,
        valid: &[&str],
    ) -> Box<Self> {
        Box::new(Error::InvalidConfigValue {
            key: key.into(),
            kind: kind.into(),
            value: value.into(),
            valid: valid.iter().map(|v| v.to_string()).collect(),
        })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
