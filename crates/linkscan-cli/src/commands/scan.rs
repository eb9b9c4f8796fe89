use anyhow::{Context, Result};
use std::path::PathBuf;

use linkscan_core::{scan, Config, ScanReport};

use crate::OutputFormat;

pub fn run(
    root: Option<PathBuf>,
    absolute: bool,
    excludes: Vec<String>,
    config_path: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    // An explicit config file must parse; implicit locations fall
    // through to defaults
    let config = match config_path {
        Some(path) => Config::load_from(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load(),
    };

    let root = match root {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    tracing::debug!("scanning {}", root.display());

    let entries = scan(&root, &config, excludes)
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    let report = ScanReport::new(entries, &root, absolute);

    match format {
        OutputFormat::Text => print!("{}", report.format_text()),
        OutputFormat::Json => {
            println!(
                "{}",
                report.format_json().context("Failed to render JSON report")?
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_run_missing_root() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing");

        let result = run(Some(missing), false, vec![], None, OutputFormat::Text);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_with_extra_exclude() {
        let temp_dir = tempdir().unwrap();
        let foo = temp_dir.path().join("foo");
        std::fs::create_dir(&foo).unwrap();
        std::os::unix::fs::symlink("nowhere", foo.join("link")).unwrap();

        let result = run(
            Some(temp_dir.path().to_path_buf()),
            false,
            vec!["foo".to_string()],
            None,
            OutputFormat::Text,
        );
        assert!(result.is_ok());
    }
}
