//! Concurrent writing of generated files.

use std::path::{Path, PathBuf};

use nestdto_core::{FileSpec, write_file};
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::{Error, Result};

/// Write every file under `base`, one task per file.
///
/// All writes run to completion even when some fail; nothing is rolled
/// back. On failure the error of the earliest failing file (in input order)
/// is returned. On success the written paths are returned in input order.
pub async fn materialize(base: &Path, files: Vec<FileSpec>) -> Result<Vec<PathBuf>> {
    let mut tasks = JoinSet::new();

    for (index, file) in files.into_iter().enumerate() {
        let path = file.resolve(base);
        tasks.spawn(async move {
            let result = write_file(&path, &file.content).await;
            (index, path, result)
        });
    }

    let mut written = Vec::new();
    let mut failures = Vec::new();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, path, Ok(()))) => {
                debug!(path = %path.display(), "wrote file");
                written.push((index, path));
            }
            Ok((index, path, Err(source))) => {
                error!(path = %path.display(), error = %source, "failed to write file");
                failures.push((index, path, source));
            }
            Err(join_error) => {
                error!(error = %join_error, "write task did not complete");
                failures.push((usize::MAX, base.to_path_buf(), std::io::Error::other(join_error)));
            }
        }
    }

    if let Some((_, path, source)) = failures.into_iter().min_by_key(|(index, ..)| *index) {
        return Err(Error::Storage { path, source });
    }

    written.sort_by_key(|(index, _)| *index);
    Ok(written.into_iter().map(|(_, path)| path).collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_writes_all_files() {
        let temp = TempDir::new().unwrap();
        let files = vec![
            FileSpec::new("a/x.ts", "x"),
            FileSpec::new("a/y.ts", "y"),
            FileSpec::new("b/c/z.ts", "z"),
        ];

        let written = materialize(temp.path(), files).await.unwrap();

        assert_eq!(
            written,
            vec![
                temp.path().join("a/x.ts"),
                temp.path().join("a/y.ts"),
                temp.path().join("b/c/z.ts"),
            ]
        );
        assert_eq!(fs::read_to_string(temp.path().join("a/x.ts")).unwrap(), "x");
        assert_eq!(fs::read_to_string(temp.path().join("a/y.ts")).unwrap(), "y");
        assert_eq!(
            fs::read_to_string(temp.path().join("b/c/z.ts")).unwrap(),
            "z"
        );
    }

    #[tokio::test]
    async fn test_overwrites_existing_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();
        fs::write(temp.path().join("a/x.ts"), "stale").unwrap();

        materialize(temp.path(), vec![FileSpec::new("a/x.ts", "fresh")])
            .await
            .unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("a/x.ts")).unwrap(),
            "fresh"
        );
    }

    #[tokio::test]
    async fn test_failure_does_not_cancel_other_writes() {
        let temp = TempDir::new().unwrap();
        // A plain file where a directory is expected makes the write fail.
        fs::write(temp.path().join("blocked"), "").unwrap();

        let files = vec![
            FileSpec::new("ok/first.ts", "1"),
            FileSpec::new("blocked/x.ts", "x"),
            FileSpec::new("ok/second.ts", "2"),
        ];

        let err = materialize(temp.path(), files).await.unwrap_err();

        match err {
            Error::Storage { path, .. } => assert_eq!(path, temp.path().join("blocked/x.ts")),
            other => panic!("expected storage error, got {other:?}"),
        }
        assert_eq!(
            fs::read_to_string(temp.path().join("ok/first.ts")).unwrap(),
            "1"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("ok/second.ts")).unwrap(),
            "2"
        );
    }

    #[tokio::test]
    async fn test_empty_file_list() {
        let temp = TempDir::new().unwrap();
        let written = materialize(temp.path(), Vec::new()).await.unwrap();
        assert!(written.is_empty());
    }
}
