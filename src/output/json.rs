//! JSON output formatter for machine processing
//!
//! The whole document is written once at the end of the run; per-file
//! progress entries are suppressed.

use crate::domain::{FileRecord, RunSummary};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbose output includes before/after line pairs
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    dry_run: bool,
    src_found: bool,
    src_dir: String,
    summary: JsonSummary,
    files: Vec<JsonFile>,
}

#[derive(Serialize)]
struct JsonSummary {
    /// Files inspected
    scanned: usize,
    /// Files modified (or that would be, in dry-run)
    modified: usize,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    rules: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    changes: Vec<JsonLineChange>,
}

#[derive(Serialize)]
struct JsonLineChange {
    line: usize,
    from: String,
    to: String,
}

impl JsonFormatter {
    fn file_to_json(&self, record: &FileRecord) -> JsonFile {
        let changes = if self.verbosity == Verbosity::Verbose {
            record
                .changed_lines()
                .unwrap_or_default()
                .into_iter()
                .map(|(line, from, to)| JsonLineChange {
                    line,
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect()
        } else {
            Vec::new()
        };

        JsonFile {
            path: record.display_path.display().to_string(),
            rules: record.rules.clone(),
            changes,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_file(&self, _record: &FileRecord, _writer: &mut dyn Write) -> std::io::Result<()> {
        Ok(())
    }

    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            dry_run: summary.dry_run,
            src_found: summary.source_found,
            src_dir: summary.source_dir().display().to_string(),
            summary: JsonSummary {
                scanned: summary.scanned,
                modified: summary.modified_count(),
            },
            files: summary
                .modified
                .iter()
                .map(|r| self.file_to_json(r))
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
