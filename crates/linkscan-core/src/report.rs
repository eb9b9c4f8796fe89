use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::fs::SymlinkEntry;

/// Result of a scan, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Discovered symlinks, sorted by link path
    pub entries: Vec<ReportLine>,
}

/// A single report line
#[derive(Debug, Clone, Serialize)]
pub struct ReportLine {
    /// Link path as displayed (relative to root unless absolute mode)
    pub path: String,
    /// Raw link target
    pub target: String,
}

impl ScanReport {
    /// Build a report from raw scan entries.
    ///
    /// Entries are sorted by the string form of the link path so output
    /// is deterministic across runs. Paths are displayed relative to
    /// `root` unless `absolute` is set; a path that does not sit under
    /// `root` falls back to its full form.
    pub fn new(mut entries: Vec<SymlinkEntry>, root: &Path, absolute: bool) -> Self {
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        let entries = entries
            .into_iter()
            .map(|entry| ReportLine {
                path: display_path(&entry.path, root, absolute),
                target: entry.target.display().to_string(),
            })
            .collect();

        Self { entries }
    }

    /// Check if the scan found anything
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format the report for human-readable output
    pub fn format_text(&self) -> String {
        if self.entries.is_empty() {
            return "No symbolic links found.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!("Found {} symbolic link(s):\n\n", self.entries.len()));

        for line in &self.entries {
            output.push_str(&format!("{} -> {}\n", line.path, line.target));
        }

        output
    }

    /// Format the report as JSON
    pub fn format_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

fn display_path(path: &Path, root: &Path, absolute: bool) -> String {
    if absolute {
        return path.display().to_string();
    }
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
