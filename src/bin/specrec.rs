//! specrec - Spec reconciliation CLI
//!
//! Compares two spec documents structurally, or three-way merges a local
//! copy with a fresh upstream revision against their common ancestor.
//!
//! Exit codes: 0 no differences / clean merge, 1 differences or conflicts
//! found (merge output still written, ours kept at conflicts), 2 input
//! error (unreadable file, invalid JSON/YAML).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use spec_reconcile::document::{self, DocumentError};
use spec_reconcile::report;
use spec_reconcile::{diff, merge};

#[derive(Parser)]
#[command(name = "specrec", version, about = "Structural diff and three-way merge for spec documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two documents and report differences grouped by schema/endpoint
    Diff {
        /// Old/base document
        file_a: PathBuf,
        /// New/modified document
        file_b: PathBuf,
    },
    /// Three-way merge: keep local edits, pull in upstream changes, flag conflicts
    Merge {
        /// Common ancestor (last-known upstream)
        base: PathBuf,
        /// Our local version with customizations
        ours: PathBuf,
        /// Freshly fetched upstream version
        theirs: PathBuf,
        /// Output file (default: overwrite ours)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Report what would happen without writing
        #[arg(long)]
        dry_run: bool,
    },
}

const INPUT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Diff { file_a, file_b } => run_diff(&file_a, &file_b),
        Command::Merge {
            base,
            ours,
            theirs,
            output,
            dry_run,
        } => run_merge(&base, &ours, &theirs, output, dry_run),
    };

    match code {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(INPUT_ERROR)
        }
    }
}

fn run_diff(file_a: &PathBuf, file_b: &PathBuf) -> Result<u8, DocumentError> {
    let a = document::load(file_a)?;
    let b = document::load(file_b)?;

    let records = diff(&a, &b);
    print!(
        "{}",
        report::render_diff(&file_a.display().to_string(), &file_b.display().to_string(), &records)
    );

    Ok(report::diff_exit_code(&records))
}

fn run_merge(
    base_file: &PathBuf,
    ours_file: &PathBuf,
    theirs_file: &PathBuf,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<u8, DocumentError> {
    let base = document::load(base_file)?;
    let ours = document::load(ours_file)?;
    let theirs = document::load(theirs_file)?;

    let (merged, outcome) = merge(&base, &ours, &theirs);
    print!("{}", report::render_merge(&outcome));

    let output_path = output.unwrap_or_else(|| ours_file.clone());
    if dry_run {
        println!("\nDry run: would write to {}", output_path.display());
    } else {
        document::write_json(&output_path, &merged)?;
        println!("\nMerged spec written to {}", output_path.display());
    }

    if !outcome.is_clean() {
        println!(
            "\n⚠ {} conflict(s): ours was kept. Review manually.",
            outcome.conflicts.len()
        );
    }

    Ok(report::merge_exit_code(&outcome))
}
