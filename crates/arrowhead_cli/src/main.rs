//! arrowhead: parse ECMAScript, TypeScript and JSX files and report syntax
//! errors.
//!
//! Usage:
//!   arrowhead [options] <file...>
//!
//! Exits with status 1 when any file produced a diagnostic.

mod error;
mod report;
mod tracing_config;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use arrowhead_options::{Goal, ParseOptions};
use bumpalo::Bump;
use clap::Parser as ClapParser;
use tracing::{debug, info};

use crate::error::CliError;
use crate::report::{FileReport, ParseStats, SourceDiagnostic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Source-annotated diagnostics on stderr.
    Pretty,
    /// One JSON document on stdout.
    Json,
}

#[derive(ClapParser, Debug)]
#[command(name = "arrowhead", version, about = "arrowhead - a fast ECMAScript/TypeScript/JSX parser")]
struct Cli {
    /// Source files to parse.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// JSON file with parse options (goal, webCompat, impliedStrict, jsx).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Parse with the module goal.
    #[arg(long)]
    module: bool,

    /// Parse as if every file began with "use strict".
    #[arg(long)]
    strict: bool,

    /// Turn off Annex B web-compatibility semantics.
    #[arg(long)]
    disable_web_compat: bool,

    /// Recognise JSX in every file, not only .jsx/.tsx.
    #[arg(long)]
    jsx: bool,

    /// Diagnostic output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Print node counts, root transform flags and timing per file.
    #[arg(long)]
    stats: bool,
}

fn main() -> miette::Result<ExitCode> {
    tracing_config::init_tracing();
    let cli = Cli::parse();
    Ok(run(&cli)?)
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let base = base_options(cli)?;
    debug!(?base, files = cli.files.len(), "resolved options");

    let mut reports = Vec::new();
    let mut diagnostic_count = 0;
    let mut error_count = 0;

    for path in &cli.files {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        let options = options_for_file(base, path);
        let file = path.display().to_string();

        let arena = Bump::new();
        let start = Instant::now();
        let result = arrowhead_parser::parse(&arena, &source, &options);
        let elapsed = start.elapsed();

        let diagnostics = result.diagnostics.diagnostics();
        diagnostic_count += diagnostics.len();
        error_count += diagnostics.iter().filter(|d| d.is_error()).count();
        info!(file = %file, diagnostics = diagnostics.len(), ?elapsed, "parsed");

        let stats = cli.stats.then(|| ParseStats::collect(result.root, elapsed));
        match cli.format {
            OutputFormat::Pretty => {
                for diagnostic in diagnostics {
                    let report = miette::Report::new(SourceDiagnostic::new(&file, &source, diagnostic));
                    eprintln!("{:?}", report);
                }
                if let Some(stats) = &stats {
                    println!("{}: {}", file, stats);
                }
            }
            OutputFormat::Json => {
                reports.push(FileReport::new(file, options.goal, &source, diagnostics, stats));
            }
        }
    }

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports).map_err(CliError::Json)?;
            println!("{}", json);
        }
        OutputFormat::Pretty if error_count > 0 => {
            eprintln!(
                "Found {} error{}.",
                error_count,
                if error_count == 1 { "" } else { "s" }
            );
        }
        OutputFormat::Pretty => {}
    }

    Ok(if diagnostic_count > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

/// Options from `--config`, overridden by the command-line flags.
fn base_options(cli: &Cli) -> Result<ParseOptions, CliError> {
    let mut options = match &cli.config {
        Some(path) => ParseOptions::from_file(path)?,
        None => ParseOptions::default(),
    };
    if cli.module {
        options.goal = Goal::Module;
    }
    if cli.strict {
        options.implied_strict = true;
    }
    if cli.disable_web_compat {
        options.web_compat = false;
    }
    if cli.jsx {
        options.jsx = true;
    }
    Ok(options)
}

/// `.jsx`/`.tsx` files always allow JSX; `.mjs`/`.mts` files are modules.
fn options_for_file(base: ParseOptions, path: &Path) -> ParseOptions {
    match path.extension().and_then(OsStr::to_str) {
        Some("jsx" | "tsx") => base.with_jsx(true),
        Some("mjs" | "mts") => ParseOptions {
            goal: Goal::Module,
            ..base
        },
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("arrowhead").chain(args.iter().copied()))
    }

    #[test]
    fn test_flags_override_defaults() {
        let options = base_options(&cli(&["--module", "--strict", "--disable-web-compat", "a.js"]))
            .expect("options");
        assert_eq!(options.goal, Goal::Module);
        assert!(options.implied_strict);
        assert!(!options.web_compat);
        assert!(!options.jsx);
    }

    #[test]
    fn test_extension_selects_jsx_and_module() {
        let base = ParseOptions::default();
        assert!(options_for_file(base, Path::new("a.tsx")).jsx);
        assert!(!options_for_file(base, Path::new("a.ts")).jsx);
        assert_eq!(options_for_file(base, Path::new("a.mjs")).goal, Goal::Module);
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(cli(&["--format", "json", "a.js"]).format, OutputFormat::Json);
        assert_eq!(cli(&["a.js"]).format, OutputFormat::Pretty);
    }

    #[test]
    fn test_missing_config_file() {
        let err = base_options(&cli(&["--config", "/nonexistent/arrowhead.json", "a.js"]))
            .expect_err("missing file");
        assert!(matches!(err, CliError::Options(_)));
    }
}
