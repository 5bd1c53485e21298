//! CLI argument parsing module for unpin

use clap::Parser;
use std::path::PathBuf;

/// Strip version pins from import specifiers under `<PATH>/src`
#[derive(Parser, Debug, Clone)]
#[command(
    name = "unpin",
    version,
    about = "Strip version pins from import specifiers in .tsx and .ts files"
)]
pub struct CliArgs {
    /// Project root containing the src directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Dry run mode - show what would be rewritten without changing files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - print only the summary
    #[arg(short, long)]
    pub quiet: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long, conflicts_with = "diff")]
    pub json: bool,

    /// Show changes in diff format
    #[arg(long)]
    pub diff: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Whether the stderr progress display should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["unpin"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.dry_run);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.json);
        assert!(!args.diff);
        assert!(!args.no_color);
    }

    #[test]
    fn test_no_color_flag() {
        assert!(CliArgs::parse_from(["unpin", "--no-color"]).no_color);
    }

    #[test]
    fn test_path_argument() {
        let args = CliArgs::parse_from(["unpin", "/some/frontend"]);
        assert_eq!(args.path, PathBuf::from("/some/frontend"));
    }

    #[test]
    fn test_dry_run_flags() {
        assert!(CliArgs::parse_from(["unpin", "-n"]).dry_run);
        assert!(CliArgs::parse_from(["unpin", "--dry-run"]).dry_run);
    }

    #[test]
    fn test_quiet_flags() {
        assert!(CliArgs::parse_from(["unpin", "-q"]).quiet);
        assert!(CliArgs::parse_from(["unpin", "--quiet"]).quiet);
    }

    #[test]
    fn test_output_flags() {
        assert!(CliArgs::parse_from(["unpin", "--json"]).json);
        assert!(CliArgs::parse_from(["unpin", "--diff"]).diff);
        assert!(CliArgs::parse_from(["unpin", "--verbose"]).verbose);
    }

    #[test]
    fn test_conflicting_flags() {
        assert!(CliArgs::try_parse_from(["unpin", "--quiet", "--verbose"]).is_err());
        assert!(CliArgs::try_parse_from(["unpin", "--json", "--diff"]).is_err());
    }

    #[test]
    fn test_show_progress() {
        assert!(CliArgs::parse_from(["unpin"]).show_progress());
        assert!(!CliArgs::parse_from(["unpin", "-q"]).show_progress());
        assert!(!CliArgs::parse_from(["unpin", "--json"]).show_progress());
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from(["unpin", "web", "-n", "--verbose", "--diff"]);
        assert_eq!(args.path, PathBuf::from("web"));
        assert!(args.dry_run);
        assert!(args.verbose);
        assert!(args.diff);
        assert!(!args.json);
    }
}
