use crate::error::{Result, SizerError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub size: u64,
}

/// Regular files under a root, in traversal order. The order decides which
/// physical bytes land at which virtual offset, so it must be reproducible.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    entries: Vec<FileEntry>,
}

impl Inventory {
    pub fn from_entries(entries: Vec<FileEntry>) -> Self {
        Self { entries }
    }

    /// Walk `root` and record every regular file with its size.
    ///
    /// Directories and symlinks are left out. Entries that cannot be
    /// inspected are logged and skipped.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(SizerError::NotADirectory(root.to_path_buf()));
        }

        let mut entries = Vec::new();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name();
        for e in walker {
            let e = match e {
                Ok(e) => e,
                Err(err) => {
                    let at = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    warn!("skipping '{at}': {err}");
                    continue;
                }
            };
            // with follow_links(false) a symlink never reports as a file
            if !e.file_type().is_file() {
                continue;
            }
            match e.metadata() {
                Ok(md) => entries.push(FileEntry {
                    path: e.into_path(),
                    size: md.len(),
                }),
                Err(err) => warn!("error getting size of file '{}': {err}", e.path().display()),
            }
        }
        debug!(files = entries.len(), root = %root.display(), "inventory complete");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }
}
