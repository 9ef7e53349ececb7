//! File discovery for the tree walk.
//!
//! Candidates are yielded lazily in directory traversal order. Siblings are
//! visited sorted by file name, but nothing downstream depends on that.

use crate::config::BatchRoots;
use crate::utils::has_container_extension;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A `.mkv` file found under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Path relative to the source root.
    pub relative: PathBuf,
}

/// A candidate paired with its destination in the target tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub source: SourceFile,
    pub target: PathBuf,
}

impl ConversionJob {
    /// Maps a candidate onto the target tree: `target_root / relative`.
    pub fn plan(roots: &BatchRoots, source: SourceFile) -> Self {
        let target = roots.target.join(&source.relative);
        Self { source, target }
    }
}

/// Lazily walks `roots.source` and yields every candidate file.
///
/// Directory entries that cannot be read are logged and skipped. If the
/// target root lies inside the source root it is not descended into.
pub fn find_processable_files(roots: &BatchRoots) -> impl Iterator<Item = SourceFile> + '_ {
    WalkDir::new(&roots.source)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !(entry.file_type().is_dir() && entry.path() == roots.target))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry during discovery: {}", e);
                None
            }
        })
        .filter(|entry| has_container_extension(entry.path()) && entry.path().is_file())
        .filter_map(move |entry| to_source_file(&roots.source, entry.into_path()))
}

fn to_source_file(source_root: &Path, path: PathBuf) -> Option<SourceFile> {
    match path.strip_prefix(source_root) {
        Ok(relative) => Some(SourceFile {
            relative: relative.to_path_buf(),
            path,
        }),
        Err(_) => {
            log::warn!(
                "Ignoring {} which is outside of {}",
                path.display(),
                source_root.display()
            );
            None
        }
    }
}
