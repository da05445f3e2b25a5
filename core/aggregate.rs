use crate::classify::{self, FileClassification};
use crate::error::{AppError, Result};
use crate::ignore_rules;
use crate::report::{FailedFile, ProcessResult, StaticFileCopy};
use crate::traverse;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the sibling directory receiving verbatim copies of static files.
pub const STATIC_DIR_NAME: &str = "static";

/// Aggregates every non-ignored file under `source_root` into a single text
/// artifact at `dest_path`, copying static files into a `static` sibling
/// directory.
///
/// Fails only on setup: unreadable root, invalid ignore patterns, an
/// uncreatable static directory, or an unwritable destination. Once the
/// traversal succeeds, per-file errors are recorded in the report and never
/// abort the run.
pub fn run(source_root: &Path, dest_path: &Path, verbose: bool) -> Result<ProcessResult> {
    let rules = ignore_rules::resolve(source_root, dest_path)?;
    let files = traverse::enumerate(source_root, &rules)?;

    let mut result = ProcessResult {
        total_files: files.len(),
        output: dest_path.to_string_lossy().into_owned(),
        ..Default::default()
    };

    let static_dir = static_dir_for(dest_path);
    fs::create_dir_all(&static_dir).map_err(|e| AppError::DirCreation {
        path: static_dir.clone(),
        source: e,
    })?;

    log::info!(
        "Aggregating {} files from {} into {}",
        result.total_files,
        source_root.display(),
        dest_path.display()
    );

    let mut concatenated = String::new();
    for relative in files {
        match process_file(source_root, &static_dir, &relative, &mut concatenated, &mut result) {
            Ok(()) => {
                if verbose {
                    log::info!("Processed: {}", relative);
                }
                result.successful.push(relative);
            }
            Err(e) => {
                if verbose {
                    log::warn!("Failed to process {}: {}", relative, e);
                }
                result.failed.push(FailedFile {
                    file: relative,
                    error: e.to_string(),
                });
            }
        }
    }

    // One write at the end, so the destination never holds a partial run.
    fs::write(dest_path, concatenated).map_err(|e| AppError::FileWrite {
        path: dest_path.to_path_buf(),
        source: e,
    })?;

    Ok(result)
}

fn static_dir_for(dest_path: &Path) -> PathBuf {
    match dest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(STATIC_DIR_NAME),
        _ => PathBuf::from(STATIC_DIR_NAME),
    }
}

fn process_file(
    source_root: &Path,
    static_dir: &Path,
    relative: &str,
    buffer: &mut String,
    result: &mut ProcessResult,
) -> Result<()> {
    let absolute = source_root.join(relative);
    match classify::classify(Path::new(relative)) {
        FileClassification::Static => {
            let flattened = classify::flatten_static_name(relative);
            let copy_path = static_dir.join(&flattened);
            let bytes = fs::read(&absolute).map_err(|e| AppError::FileRead {
                path: absolute.clone(),
                source: e,
            })?;
            fs::write(&copy_path, bytes).map_err(|e| AppError::FileWrite {
                path: copy_path.clone(),
                source: e,
            })?;
            let copied = format!("{}/{}", STATIC_DIR_NAME, flattened);
            buffer.push_str(&format!(
                "\n// Static File: {}\n// Copied to: {}\n\n",
                relative, copied
            ));
            result.static_files.push(StaticFileCopy {
                original: relative.to_string(),
                copied,
            });
        }
        FileClassification::Text => {
            let bytes = fs::read(&absolute).map_err(|e| AppError::FileRead {
                path: absolute.clone(),
                source: e,
            })?;
            let content = String::from_utf8(bytes).map_err(|e| AppError::InvalidUtf8 {
                path: absolute.clone(),
                source: e.utf8_error(),
            })?;
            buffer.push_str(&format!("\n// File: {}\n{}\n", relative, content));
        }
    }
    Ok(())
}
