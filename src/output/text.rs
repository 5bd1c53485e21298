//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One colored line per modified file, printed as the run progresses
//! - Missing source directory message
//! - Summary line with the follow-up instruction

use crate::domain::{FileRecord, RunSummary};
use crate::output::{OutputFormatter, Verbosity, FOLLOW_UP};
use crate::scanner::SOURCE_DIR;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, dry_run: bool, color: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
        }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> String {
        if !self.dry_run {
            String::new()
        } else if self.color {
            format!("{} ", "(dry-run)".cyan())
        } else {
            "(dry-run) ".to_string()
        }
    }

    fn paint(&self, text: &str, style: fn(&str) -> colored::ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_file(&self, record: &FileRecord, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        let label = if self.dry_run { "Would fix:" } else { "Fixed:" };
        write!(
            writer,
            "{}✅ {} {}",
            self.dry_run_prefix(),
            self.paint(label, |s| s.green()),
            record.display_path.display()
        )?;

        if self.verbosity == Verbosity::Verbose && !record.rules.is_empty() {
            let rules = format!("[{}]", record.rules.join(", "));
            write!(writer, " {}", self.paint(&rules, |s| s.dimmed()))?;
        }

        writeln!(writer)
    }

    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if !summary.source_found {
            writeln!(
                writer,
                "❌ {}",
                self.paint(&format!("Directory {} not found!", SOURCE_DIR), |s| s.red())
            )?;
            if self.verbosity == Verbosity::Verbose {
                writeln!(writer, "   Looked in: {}", summary.source_dir().display())?;
            }
            return Ok(());
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "Scanned {} file(s), {} unchanged",
                summary.scanned,
                summary.unmodified_count()
            )?;
            for dir in &summary.skipped {
                writeln!(
                    writer,
                    "{} {}",
                    self.paint("Skipped unreadable:", |s| s.yellow()),
                    dir.display()
                )?;
            }
        }

        let label = if self.dry_run {
            "Files to fix:"
        } else {
            "Files fixed:"
        };

        if self.verbosity != Verbosity::Quiet {
            writeln!(writer)?;
        }
        writeln!(
            writer,
            "{}🎉 Done! {} {}",
            self.dry_run_prefix(),
            label,
            summary.modified_count()
        )?;

        if self.verbosity != Verbosity::Quiet && !self.dry_run {
            writeln!(writer)?;
            writeln!(writer, "{}", self.paint(FOLLOW_UP, |s| s.bold()))?;
        }

        Ok(())
    }
}
