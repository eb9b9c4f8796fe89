use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{LinkscanError, Result};

/// A symbolic link discovered during a scan, paired with its raw
/// (unresolved) target as stored in the link itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymlinkEntry {
    /// Path of the link, always a descendant of the scan root
    pub path: PathBuf,
    /// Raw link target, never resolved or checked for existence
    pub target: PathBuf,
}

/// Walks a directory tree and collects every symbolic link in it,
/// skipping excluded directory names
pub struct SymlinkScanner {
    root: PathBuf,
    exclude: BTreeSet<String>,
}

impl SymlinkScanner {
    /// Create a scanner rooted at `root`. Fails if the root does not exist.
    pub fn new(root: PathBuf, exclude: BTreeSet<String>) -> Result<Self> {
        if !root.exists() {
            return Err(LinkscanError::RootNotFound(root));
        }

        tracing::debug!(
            "SymlinkScanner initialized with {} excluded names",
            exclude.len()
        );
        for name in &exclude {
            tracing::debug!("  excluded: {}", name);
        }

        Ok(Self { root, exclude })
    }

    /// Collect every symlink under the root that is not beneath an
    /// excluded directory.
    ///
    /// Symlinked directories are reported as entries but never entered,
    /// so cyclic links cannot loop the walk and nothing behind a link
    /// is double-reported. Exclusion is applied before descent: a
    /// subtree under an excluded name is never visited at all. Any walk
    /// error (permission denied, entry removed mid-walk) aborts the
    /// scan.
    pub fn scan(&self) -> Result<Vec<SymlinkEntry>> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| {
                // The root is walked regardless of its own name
                if e.depth() == 0 {
                    return true;
                }
                !self.is_excluded_dir(e)
            });

        for entry in walker {
            let entry = entry?;
            if entry.depth() == 0 {
                continue;
            }

            if entry.path_is_symlink() {
                let target = fs::read_link(entry.path())?;
                tracing::debug!(
                    "found symlink {} -> {}",
                    entry.path().display(),
                    target.display()
                );
                entries.push(SymlinkEntry {
                    path: entry.path().to_path_buf(),
                    target,
                });
            }
        }

        Ok(entries)
    }

    /// Get the scan root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// An entry is dropped when its name is excluded and it would be
    /// descended into: a real directory, or a symlink pointing at one.
    fn is_excluded_dir(&self, entry: &walkdir::DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        if !self.exclude.contains(name.as_ref()) {
            return false;
        }

        if entry.file_type().is_dir() {
            tracing::debug!("skipping excluded directory {}", entry.path().display());
            return true;
        }

        // follow_links(false) reports a symlinked directory with a
        // symlink file type; is_dir() on the path looks through it
        if entry.path_is_symlink() && entry.path().is_dir() {
            tracing::debug!(
                "skipping excluded symlinked directory {}",
                entry.path().display()
            );
            return true;
        }

        false
    }
}
