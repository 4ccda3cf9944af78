use std::path::PathBuf;

use thiserror::Error;

use crate::TransformError;

/// Result type for generation runs
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a generation run.
///
/// Every variant aborts the run. Storage failures may leave files from the
/// same run on disk.
#[derive(Debug, Error)]
pub enum Error {
    /// The generator options could not be resolved.
    #[error(transparent)]
    Config(#[from] Box<nestdto_config::Error>),

    /// The schema transformation failed.
    #[error("schema transformation failed")]
    Transformation(#[source] TransformError),

    /// A directory could not be created or a file could not be written.
    #[error("failed to write '{path}'")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
