use crate::cli_args::PkgArgs;
use crate::output;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub fn handle_pkg_command(args: PkgArgs, quiet: bool, verbose: u8) -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let source_root = absolutize(&cwd, args.source.unwrap_or_else(|| cwd.clone()));
    let dest_path = absolutize(&cwd, args.dest);

    log::info!(
        "Packing {} into {}",
        source_root.display(),
        dest_path.display()
    );

    let result = nbtools_core::aggregate::run(&source_root, &dest_path, verbose > 0)
        .with_context(|| format!("Failed to aggregate files from {}", source_root.display()))?;

    // Per-file failures are reported but never change the exit code.
    match args.output.as_str() {
        "json" => output::print_result_json(&result)?,
        _ => output::print_result_text(&result, &source_root, &dest_path, quiet, verbose),
    }

    Ok(())
}

fn absolutize(cwd: &std::path::Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
