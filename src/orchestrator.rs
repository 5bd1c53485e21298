//! Rewrite orchestrator for coordinating a single run
//!
//! This module provides:
//! - Workflow coordination: resolve → discover → read → rewrite → write
//! - Dry-run mode support
//! - Per-file notification as soon as a file is modified
//! - Fail-fast error handling (the first file error aborts the run)
//! - Unreadable subdirectories skipped and recorded in the summary

use crate::cli::CliArgs;
use crate::domain::{FileOutcome, FileRecord, RunSummary};
use crate::error::AppError;
use crate::progress::Progress;
use crate::rewriter::ImportRewriter;
use crate::scanner::{discover_files, SOURCE_DIR};
use std::path::{Path, PathBuf};

/// Orchestrator for a rewrite run over `<root>/src`
pub struct Orchestrator {
    /// Project root containing the source directory
    root: PathBuf,
    /// Compute changes without writing them
    dry_run: bool,
    /// Show spinner and progress bar on stderr
    show_progress: bool,
    rewriter: ImportRewriter,
}

impl Orchestrator {
    /// Create an orchestrator for the given project root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
            show_progress: false,
            rewriter: ImportRewriter::new(),
        }
    }

    /// Create an orchestrator configured from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self::new(&args.path)
            .with_dry_run(args.dry_run)
            .with_progress(args.show_progress())
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enable or disable the progress display
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Returns the directory that will be scanned
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    /// Returns the rewriter in use
    pub fn rewriter(&self) -> &ImportRewriter {
        &self.rewriter
    }

    /// Run without per-file notification
    pub fn run(&self) -> Result<RunSummary, AppError> {
        self.run_with(|_| Ok(()))
    }

    /// Run, calling `on_modified` for each modified file as soon as it is handled.
    ///
    /// A missing source directory is not an error: the returned summary has
    /// `source_found == false` and nothing was scanned.
    pub fn run_with<F>(&self, mut on_modified: F) -> Result<RunSummary, AppError>
    where
        F: FnMut(&FileRecord) -> std::io::Result<()>,
    {
        let source_dir = self.source_dir();
        if !source_dir.is_dir() {
            return Ok(RunSummary::missing_source(source_dir, self.dry_run));
        }

        let mut progress = Progress::new(self.show_progress);
        progress.spinner(&format!("Scanning {}...", source_dir.display()));
        let discovery = discover_files(&source_dir);
        progress.finish_and_clear();
        let discovery = discovery?;

        let mut summary = RunSummary::new(&source_dir, self.dry_run);
        summary.skipped = discovery.skipped;
        progress.start(discovery.files.len() as u64, "Rewriting imports");

        for path in &discovery.files {
            let outcome = self
                .process_file(path)
                .map_err(|e| progress.abandon(e))?;

            if let Some(record) = outcome.record() {
                progress
                    .suspend(|| on_modified(record))
                    .map_err(|e| progress.abandon(AppError::from(e)))?;
            }
            summary.record(outcome);
            progress.inc();
        }

        progress.finish_and_clear();
        Ok(summary)
    }

    fn process_file(&self, path: &Path) -> Result<FileOutcome, AppError> {
        let outcome = if self.dry_run {
            self.rewriter.preview_file(path)?
        } else {
            self.rewriter.fix_file(path)?
        };

        Ok(match outcome {
            FileOutcome::Modified(record) => FileOutcome::Modified(record.with_root(&self.root)),
            FileOutcome::Unmodified => FileOutcome::Unmodified,
        })
    }
}

/// Run the rewriter over `<root>/src` with default settings
pub fn run(root: &Path) -> Result<RunSummary, AppError> {
    Orchestrator::new(root).run()
}
