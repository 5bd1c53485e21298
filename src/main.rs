//! unpin - strip version pins from frontend import specifiers
//!
//! Rewrites every `.tsx` and `.ts` file under `./src`, turning
//! `'@radix-ui/react-slot@1.1.2'` into `'@radix-ui/react-slot'` and
//! `'sonner@2.0.3'` into `'sonner'`.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use unpin::cli::CliArgs;
use unpin::domain::SourceExtension;
use unpin::orchestrator::Orchestrator;
use unpin::output::{create_formatter, OutputConfig};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let orchestrator = Orchestrator::from_cli(&args);

    if args.verbose {
        eprintln!("unpin v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Source: {}", orchestrator.source_dir().display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
        let rules: Vec<_> = orchestrator.rewriter().rules().iter().map(|r| r.name).collect();
        eprintln!("Rules: {}", rules.join(", "));
        let extensions: Vec<_> = SourceExtension::all().iter().map(|e| e.to_string()).collect();
        eprintln!("Extensions: {}", extensions.join(", "));
    }

    let output_config = OutputConfig::from_cli(
        args.json,
        args.diff,
        args.verbose,
        args.quiet,
        args.dry_run,
        args.no_color,
    );
    let formatter = create_formatter(output_config);

    let stdout = io::stdout();
    let summary = orchestrator.run_with(|record| {
        let mut out = stdout.lock();
        formatter.format_file(record, &mut out)?;
        out.flush()
    })?;

    let mut out = stdout.lock();
    formatter.format(&summary, &mut out)?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
