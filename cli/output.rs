use anyhow::{Context, Result};
use colored::*;
use nbtools_core::ProcessResult;
use std::io::{self, Write};
use std::path::Path;

/// Single machine-readable payload of the run report, written to stdout.
pub fn print_result_json(result: &ProcessResult) -> Result<()> {
    let content = serde_json::to_string(result).context("Failed to serialize run report")?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(content.as_bytes())
        .context("Failed to write to stdout")?;
    handle.write_all(b"\n").context("Failed to write to stdout")?;
    handle.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Human-readable summary of the run report.
pub fn print_result_text(
    result: &ProcessResult,
    source_root: &Path,
    dest_path: &Path,
    quiet: bool,
    verbose: u8,
) {
    if !quiet {
        println!(
            "{} Files concatenated successfully from {} to {}",
            "✅".green(),
            source_root.display().to_string().blue(),
            dest_path.display().to_string().blue()
        );
        if !result.static_files.is_empty() {
            println!(
                "{} static files copied to the static/ directory",
                result.static_files.len().to_string().cyan()
            );
        }
    }

    if verbose > 0 {
        print_summary(result);
    }
}

fn print_summary(result: &ProcessResult) {
    println!();
    println!("{}", " Execution Summary ".green().bold().underline());
    println!(
        "{:<25} {}",
        "Total files:".green(),
        result.total_files.to_string().cyan()
    );
    println!(
        "{:<25} {}",
        "Successfully processed:".green(),
        result.successful.len().to_string().cyan()
    );
    println!(
        "{:<25} {}",
        "Failed to process:".green(),
        result.failed.len().to_string().cyan()
    );
    println!(
        "{:<25} {}",
        "Static files copied:".green(),
        result.static_files.len().to_string().cyan()
    );

    if !result.static_files.is_empty() {
        println!("\n{}", " Static Files ".green().bold().underline());
        for copy in &result.static_files {
            println!("- {} -> {}", copy.original.cyan(), copy.copied.dimmed());
        }
    }

    if !result.failed.is_empty() {
        println!("\n{}", " Failed Files ".yellow().bold().underline());
        for failure in &result.failed {
            eprintln!("- {}: {}", failure.file.yellow(), failure.error);
        }
    }
    println!();
}
