//! Shared traversal loop for `rewrite` and `check`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use fob_alias::ImportRewriter;
use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::error::{CliError, Result};
use crate::ui;
use crate::walk::SourceWalker;

/// What to do with a file that has rewritable imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write the rewritten text back
    Write,
    /// Report the file without writing
    DryRun,
    /// Report the file as still needing a rewrite
    Check,
}

/// Outcome of a full traversal.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Files read and scanned
    pub scanned: usize,
    /// Files that were (or would be) changed, relative to the project root
    pub changed: Vec<PathBuf>,
    /// Entries skipped because they were unreadable or not UTF-8
    pub skipped: usize,
    pub elapsed: Duration,
}

/// Walk the project and apply the rewriter to every candidate file.
pub fn run(config: &RunConfig, mode: Mode) -> Result<RunSummary> {
    let start = Instant::now();
    let rewriter = ImportRewriter::new(&config.aliases);
    let walker = SourceWalker::new(&config.root)
        .extensions(&config.extensions)
        .exclude(config.exclude.iter().cloned());

    let mut summary = RunSummary::default();

    for entry in walker.walk() {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                ui::warning(&format!("Skipping unreadable entry: {}", err));
                summary.skipped += 1;
                continue;
            }
        };

        match process_file(&rewriter, &config.root, &path, mode)? {
            FileOutcome::Changed(relative) => summary.changed.push(relative),
            FileOutcome::Unchanged => {}
            FileOutcome::Skipped => {
                summary.skipped += 1;
                continue;
            }
        }
        summary.scanned += 1;
    }

    summary.elapsed = start.elapsed();
    Ok(summary)
}

/// Result of handling one file.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Changed(PathBuf),
    Unchanged,
    Skipped,
}

/// Rewrite a single file according to `mode`.
///
/// # Errors
///
/// Read and write failures abort the run. Files that are not valid UTF-8 are
/// skipped with a warning.
pub fn process_file(
    rewriter: &ImportRewriter<'_>,
    root: &Path,
    path: &Path,
    mode: Mode,
) -> Result<FileOutcome> {
    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();

    let Ok(source) = String::from_utf8(bytes) else {
        warn!("Skipping non-UTF-8 file: {}", relative.display());
        ui::warning(&format!("Skipping non-UTF-8 file: {}", relative.display()));
        return Ok(FileOutcome::Skipped);
    };

    let result = rewriter.rewrite(path, &source);
    if !result.modified {
        return Ok(FileOutcome::Unchanged);
    }

    for rewrite in &result.rewrites {
        debug!(
            "{}: '{}' -> '{}'",
            relative.display(),
            rewrite.original,
            rewrite.replacement
        );
    }

    match mode {
        Mode::Write => {
            fs::write(path, &result.text).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            ui::success(&format!("Updated: {}", relative.display()));
        }
        Mode::DryRun => ui::info(&format!("[dry-run] Would update: {}", relative.display())),
        Mode::Check => ui::warning(&format!("Needs update: {}", relative.display())),
    }

    Ok(FileOutcome::Changed(relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AliasConfig;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> (TempDir, RunConfig) {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();

        fs::create_dir_all(root.join("src/pages")).unwrap();
        fs::create_dir_all(root.join("src/utils")).unwrap();
        fs::write(
            root.join("src/pages/Home.tsx"),
            "import { fmt } from '../utils/fmt';\nimport React from 'react';\n",
        )
        .unwrap();
        fs::write(root.join("src/utils/fmt.ts"), "export const fmt = 1;\n").unwrap();

        let config = RunConfig::from_config(AliasConfig::default(), root).unwrap();
        (temp, config)
    }

    #[test]
    fn test_run_writes_changes() {
        let (_temp, config) = project();

        let summary = run(&config, Mode::Write).unwrap();
        assert_eq!(summary.scanned, 2);
        assert_eq!(summary.changed, vec![PathBuf::from("src/pages/Home.tsx")]);

        let text = fs::read_to_string(config.root.join("src/pages/Home.tsx")).unwrap();
        assert!(text.contains("from '@/utils/fmt'"));
        assert!(text.contains("from 'react'"));
    }

    #[test]
    fn test_dry_run_leaves_files_untouched() {
        let (_temp, config) = project();
        let before = fs::read_to_string(config.root.join("src/pages/Home.tsx")).unwrap();

        let summary = run(&config, Mode::DryRun).unwrap();
        assert_eq!(summary.changed.len(), 1);

        let after = fs::read_to_string(config.root.join("src/pages/Home.tsx")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let (_temp, config) = project();

        run(&config, Mode::Write).unwrap();
        let summary = run(&config, Mode::Check).unwrap();
        assert!(summary.changed.is_empty());
    }

    #[test]
    fn test_non_utf8_file_is_skipped() {
        let (_temp, config) = project();
        fs::write(config.root.join("src/binary.js"), [0xff, 0xfe, 0x00]).unwrap();

        let summary = run(&config, Mode::Write).unwrap();
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.scanned, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, config) = project();
        let locked = config.root.join("src/locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.ts"), "import x from '../utils/fmt';\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let summary = run(&config, Mode::Write);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        let summary = summary.unwrap();

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.scanned, 2);
        assert_eq!(summary.changed, vec![PathBuf::from("src/pages/Home.tsx")]);
    }

    #[test]
    fn test_process_file_reports_relative_path() {
        let (_temp, config) = project();
        let rewriter = ImportRewriter::new(&config.aliases);
        let path = config.root.join("src/pages/Home.tsx");

        let outcome = process_file(&rewriter, &config.root, &path, Mode::DryRun).unwrap();
        assert_eq!(outcome, FileOutcome::Changed(PathBuf::from("src/pages/Home.tsx")));

        let outcome = process_file(
            &rewriter,
            &config.root,
            &config.root.join("src/utils/fmt.ts"),
            Mode::DryRun,
        )
        .unwrap();
        assert_eq!(outcome, FileOutcome::Unchanged);
    }

    #[test]
    fn test_process_file_missing_file() {
        let (_temp, config) = project();
        let rewriter = ImportRewriter::new(&config.aliases);

        let err = process_file(
            &rewriter,
            &config.root,
            &config.root.join("src/missing.ts"),
            Mode::Write,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
