//! linkscan-core - Core library for the linkscan symlink audit tool
//!
//! This crate provides the pieces behind the `linkscan` binary:
//! - Directory tree walking that collects symbolic links without
//!   following them
//! - Name-based directory exclusion applied before descent
//! - Report formatting (text and JSON)
//! - Configuration management

pub mod config;
pub mod error;
pub mod fs;
pub mod report;

pub use config::Config;
pub use error::{LinkscanError, Result};
pub use fs::{SymlinkEntry, SymlinkScanner};
pub use report::ScanReport;

use std::path::Path;

/// Scan `root` for symlinks, skipping the configured exclusions plus
/// any extra directory names from the caller.
pub fn scan<I, S>(root: &Path, config: &Config, extra_excludes: I) -> Result<Vec<SymlinkEntry>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let exclude = config.exclusion_set(extra_excludes);
    let scanner = SymlinkScanner::new(root.to_path_buf(), exclude)?;
    scanner.scan()
}
