//! Barrel (`index.ts`) synthesis.
//!
//! For every directory that received generated files, one barrel re-exports
//! each sibling module in the order the files were generated.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use nestdto_core::FileSpec;

/// File name of a directory barrel.
pub const BARREL_FILE_NAME: &str = "index.ts";

/// Extension stripped from module file names in export paths.
pub const MODULE_EXTENSION: &str = ".ts";

/// Barrel being accumulated for one directory.
#[derive(Debug)]
struct BarrelEntry {
    file_name: PathBuf,
    content: String,
}

impl BarrelEntry {
    fn new(dir: &Path) -> Self {
        Self {
            file_name: dir.join(BARREL_FILE_NAME),
            content: String::new(),
        }
    }

    /// Append an export line. Lines are joined with a preceding line break,
    /// so the content starts with an empty line.
    fn push_export(&mut self, module: &str) {
        self.content.push('\n');
        self.content.push_str(&re_export_line(module));
    }

    fn finish(mut self) -> FileSpec {
        self.content.push('\n');
        FileSpec::new(self.file_name, self.content)
    }
}

/// Render `export * from './<module>';`.
pub fn re_export_line(module: &str) -> String {
    format!("export * from './{}';", module)
}

/// Module name of a generated file: its file name without the `.ts`
/// extension. Other extensions are kept.
pub fn module_name(file: &FileSpec) -> String {
    let name = file
        .file_name
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.strip_suffix(MODULE_EXTENSION) {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// Build one barrel per directory touched by `files`.
///
/// Directories appear in first-encounter order. Duplicate file names produce
/// duplicate export lines.
pub fn collect_barrels(files: &[FileSpec]) -> Vec<FileSpec> {
    let mut entries: IndexMap<PathBuf, BarrelEntry> = IndexMap::new();

    for file in files {
        let dir = file.dir();
        entries
            .entry(dir.to_path_buf())
            .or_insert_with(|| BarrelEntry::new(dir))
            .push_export(&module_name(file));
    }

    entries.into_values().map(BarrelEntry::finish).collect()
}
