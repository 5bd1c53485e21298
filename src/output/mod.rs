//! Output formatting for rewrite results
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing
//! - Diff output for showing changes

mod diff;
mod json;
mod text;

pub use diff::DiffFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::{FileRecord, RunSummary};
use std::io::Write;

/// Follow-up instruction printed after a successful run
pub const FOLLOW_UP: &str = "Now run: npm run dev";

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
    /// Unified diff format
    Diff,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Summary only
    Quiet,
    /// One line per modified file plus summary
    #[default]
    Normal,
    /// Adds rule names and scan statistics
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json, diff)
    pub format: OutputFormat,
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Whether this is a dry-run
    pub dry_run: bool,
    /// Whether to use colors (when supported)
    pub color: bool,
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(
        json: bool,
        diff: bool,
        verbose: bool,
        quiet: bool,
        dry_run: bool,
        no_color: bool,
    ) -> Self {
        let format = if json {
            OutputFormat::Json
        } else if diff {
            OutputFormat::Diff
        } else {
            OutputFormat::Text
        };

        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self {
            format,
            verbosity,
            dry_run,
            color: !no_color,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write the progress entry for a file that was just modified
    fn format_file(&self, record: &FileRecord, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Write the end-of-run report
    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::new(
            config.verbosity,
            config.dry_run,
            config.color,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.verbosity)),
        OutputFormat::Diff => Box::new(DiffFormatter::new(config.dry_run)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::{FileOutcome, FileRecord, RunSummary};

    pub fn sample_record() -> FileRecord {
        FileRecord::new(
            "src/components/ui/sonner.tsx",
            "import { useTheme } from \"next-themes@0.4.6\";\nimport { Toaster } from \"sonner@2.0.3\";\n",
            "import { useTheme } from \"next-themes\";\nimport { Toaster } from \"sonner\";\n",
            vec!["next-themes", "sonner"],
        )
    }

    pub fn sample_summary(dry_run: bool) -> RunSummary {
        let mut summary = RunSummary::new("src", dry_run);
        summary.record(FileOutcome::Modified(sample_record()));
        summary.record(FileOutcome::Unmodified);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_verbosity_default() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_output_config_from_cli() {
        let config = OutputConfig::from_cli(false, false, false, false, false, false);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert!(!config.dry_run);
        assert!(config.color);

        let config = OutputConfig::from_cli(true, false, false, false, false, false);
        assert_eq!(config.format, OutputFormat::Json);

        let config = OutputConfig::from_cli(false, true, false, false, true, false);
        assert_eq!(config.format, OutputFormat::Diff);
        assert!(config.dry_run);

        let config = OutputConfig::from_cli(false, false, true, false, false, false);
        assert_eq!(config.verbosity, Verbosity::Verbose);

        let config = OutputConfig::from_cli(false, false, false, true, false, false);
        assert_eq!(config.verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_no_color_reaches_text_formatter() {
        let config = OutputConfig::from_cli(false, false, false, false, true, true);
        assert!(!config.color);

        let mut output = Vec::new();
        create_formatter(config)
            .format_file(&test_support::sample_record(), &mut output)
            .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "(dry-run) ✅ Would fix: src/components/ui/sonner.tsx\n"
        );
    }

    #[test]
    fn test_create_formatter_writes_summary() {
        let summary = test_support::sample_summary(false);
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Diff] {
            let config = OutputConfig {
                format,
                verbosity: Verbosity::Normal,
                dry_run: false,
                color: false,
            };
            let mut output = Vec::new();
            create_formatter(config).format(&summary, &mut output).unwrap();
            assert!(!output.is_empty(), "{:?} wrote nothing", format);
        }
    }
}
