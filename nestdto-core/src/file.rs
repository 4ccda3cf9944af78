use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A single generated file: where it goes and what it contains.
///
/// `file_name` is usually relative to the generator output directory.
/// Absolute paths are kept as-is when resolved against a base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    #[serde(rename = "fileName")]
    pub file_name: PathBuf,
    pub content: String,
}

impl FileSpec {
    /// Create a new file spec with the given path and content
    pub fn new(file_name: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Directory containing this file (empty for a bare file name)
    pub fn dir(&self) -> &Path {
        self.file_name.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Path of this file once placed under `base`
    pub fn resolve(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// Existing files are overwritten.
pub async fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, content).await
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.ts");

        write_file(&path, "hello").await.unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.ts");

        write_file(&path, "nested").await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[tokio::test]
    async fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.ts");

        write_file(&path, "first").await.unwrap();
        write_file(&path, "second").await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_write_file_into_existing_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("user")).unwrap();
        let path = temp.path().join("user").join("user.dto.ts");

        write_file(&path, "export class UserDto {}").await.unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "export class UserDto {}"
        );
    }

    #[test]
    fn test_dir() {
        assert_eq!(FileSpec::new("a/b/x.ts", "").dir(), Path::new("a/b"));
        assert_eq!(FileSpec::new("x.ts", "").dir(), Path::new(""));
    }

    #[test]
    fn test_resolve() {
        let spec = FileSpec::new("user/user.dto.ts", "");
        assert_eq!(
            spec.resolve(Path::new("/out")),
            PathBuf::from("/out/user/user.dto.ts")
        );

        let absolute = FileSpec::new("/elsewhere/x.ts", "");
        assert_eq!(
            absolute.resolve(Path::new("/out")),
            PathBuf::from("/elsewhere/x.ts")
        );
    }

    #[test]
    fn test_serde_field_names() {
        let spec: FileSpec =
            serde_json::from_str(r#"{"fileName":"user/user.dto.ts","content":"x"}"#).unwrap();
        assert_eq!(spec, FileSpec::new("user/user.dto.ts", "x"));

        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"fileName":"user/user.dto.ts","content":"x"}"#);
    }
}
