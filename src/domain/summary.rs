//! Per-file and per-run result types
//!
//! Provides structures for tracking rewrite results at file and run levels.

use std::path::{Path, PathBuf};

/// A file whose content changed during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path to the source file
    pub path: PathBuf,
    /// Path shown to the user, relative to the project root when possible
    pub display_path: PathBuf,
    /// Content before rewriting
    pub before: String,
    /// Content after rewriting
    pub after: String,
    /// Names of the rules that matched, in application order
    pub rules: Vec<&'static str>,
}

impl FileRecord {
    /// Creates a new FileRecord
    pub fn new(
        path: impl Into<PathBuf>,
        before: impl Into<String>,
        after: impl Into<String>,
        rules: Vec<&'static str>,
    ) -> Self {
        let path = path.into();
        Self {
            display_path: path.clone(),
            path,
            before: before.into(),
            after: after.into(),
            rules,
        }
    }

    /// Show the path relative to `root` (`./src/App.tsx` becomes `src/App.tsx`)
    pub fn with_root(mut self, root: &Path) -> Self {
        if let Ok(relative) = self.path.strip_prefix(root) {
            self.display_path = relative.to_path_buf();
        }
        self
    }

    /// Returns the line pairs that differ as `(line_number, old, new)`.
    ///
    /// Returns `None` when the line count changed, in which case a
    /// line-by-line pairing is meaningless.
    pub fn changed_lines(&self) -> Option<Vec<(usize, &str, &str)>> {
        let old: Vec<&str> = self.before.lines().collect();
        let new: Vec<&str> = self.after.lines().collect();
        if old.len() != new.len() {
            return None;
        }

        Some(
            old.into_iter()
                .zip(new)
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(|(i, (a, b))| (i + 1, a, b))
                .collect(),
        )
    }
}

/// Outcome of rewriting a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one rule matched and the content changed
    Modified(FileRecord),
    /// No rule matched; the file was left untouched
    Unmodified,
}

impl FileOutcome {
    /// Returns true if the file was (or, in dry-run, would be) modified
    pub fn is_modified(&self) -> bool {
        matches!(self, FileOutcome::Modified(_))
    }

    /// Returns the record for a modified file
    pub fn record(&self) -> Option<&FileRecord> {
        match self {
            FileOutcome::Modified(record) => Some(record),
            FileOutcome::Unmodified => None,
        }
    }
}

/// Summary of a single run over the source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Directory that was scanned
    pub source_dir: PathBuf,
    /// Whether the source directory existed
    pub source_found: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Number of eligible files inspected
    pub scanned: usize,
    /// Files that were modified, in processing order
    pub modified: Vec<FileRecord>,
    /// Subdirectories skipped because they could not be read
    pub skipped: Vec<PathBuf>,
}

impl RunSummary {
    /// Creates a new RunSummary for a source directory that exists
    pub fn new(source_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            source_dir: source_dir.into(),
            source_found: true,
            dry_run,
            scanned: 0,
            modified: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Creates a summary for a run that stopped because the source directory is absent
    pub fn missing_source(source_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            source_found: false,
            ..Self::new(source_dir, dry_run)
        }
    }

    /// Records the outcome of one file
    pub fn record(&mut self, outcome: FileOutcome) {
        self.scanned += 1;
        if let FileOutcome::Modified(record) = outcome {
            self.modified.push(record);
        }
    }

    /// Returns the number of modified files
    pub fn modified_count(&self) -> usize {
        self.modified.len()
    }

    /// Returns the number of scanned files left untouched
    pub fn unmodified_count(&self) -> usize {
        self.scanned - self.modified.len()
    }

    /// Returns the source directory
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}
