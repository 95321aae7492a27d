//! Source folder listing ordered by file size

use crate::io::error::{Result, WithPath};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Direction in which files are ordered by byte size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest files first
    #[default]
    Ascending,
    /// Largest files first
    Descending,
}

/// A regular file found in the source folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full path to the file
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
}

/// List the regular files directly inside `dir`, ordered by size
///
/// Subdirectories and dangling symlinks are skipped; other symlinks are
/// followed. Files of equal size are ordered by path so the listing does not
/// depend on directory order.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read
pub fn files_by_size(dir: &Path, order: SortOrder) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_path(dir, "read directory")? {
        let path = entry.with_path(dir, "read directory entry")?.path();
        // Dangling symlinks are not regular files
        let metadata = match fs::metadata(&path) {
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            result => result.with_path(&path, "read metadata")?,
        };
        if metadata.is_file() {
            files.push(SourceFile {
                path,
                size: metadata.len(),
            });
        }
    }

    files.sort_by(|a, b| {
        let by_size = match order {
            SortOrder::Ascending => a.size.cmp(&b.size),
            SortOrder::Descending => b.size.cmp(&a.size),
        };
        by_size.then_with(|| a.path.cmp(&b.path))
    });

    Ok(files)
}

/// Keep the first `count` files of an ordered listing
///
/// Returns every file when fewer than `count` are available
pub fn take_smallest(mut files: Vec<SourceFile>, count: usize) -> Vec<SourceFile> {
    files.truncate(count);
    files
}
