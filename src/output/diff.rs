//! Diff output formatter for showing changes
//!
//! Each modified file is rendered as it is processed, one hunk per changed
//! line. Files whose line count changed are rendered as a single whole-file hunk.

use crate::domain::{FileRecord, RunSummary};
use crate::output::OutputFormatter;
use crate::scanner::SOURCE_DIR;
use std::io::Write;

/// Diff formatter for showing rewritten lines
pub struct DiffFormatter {
    /// Whether this is a dry-run
    dry_run: bool,
}

impl DiffFormatter {
    /// Create a new diff formatter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> &'static str {
        if self.dry_run {
            "(dry-run) "
        } else {
            ""
        }
    }
}

impl OutputFormatter for DiffFormatter {
    fn format_file(&self, record: &FileRecord, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();

        writeln!(writer, "{}--- a/{}", prefix, record.display_path.display())?;
        writeln!(writer, "{}+++ b/{}", prefix, record.display_path.display())?;

        match record.changed_lines() {
            Some(lines) => {
                for (line, old, new) in lines {
                    writeln!(writer, "@@ -{line} +{line} @@")?;
                    writeln!(writer, "-{}", old)?;
                    writeln!(writer, "+{}", new)?;
                }
            }
            None => {
                let old_len = record.before.lines().count();
                let new_len = record.after.lines().count();
                writeln!(writer, "@@ -1,{} +1,{} @@", old_len, new_len)?;
                for line in record.before.lines() {
                    writeln!(writer, "-{}", line)?;
                }
                for line in record.after.lines() {
                    writeln!(writer, "+{}", line)?;
                }
            }
        }

        writeln!(writer)
    }

    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();

        if !summary.source_found {
            return writeln!(writer, "{}# directory {} not found", prefix, SOURCE_DIR);
        }

        let verb = if self.dry_run {
            "would be fixed"
        } else {
            "fixed"
        };
        writeln!(
            writer,
            "{}# {} file(s) {}",
            prefix,
            summary.modified_count(),
            verb
        )
    }
}
