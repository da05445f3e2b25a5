use crate::error::{AppError, Result};
use crate::ignore_rules::IgnoreRuleSet;
use ignore::WalkBuilder;
use std::path::Path;

/// Enumerates every non-ignored regular file under `source_root`, as
/// POSIX-separated paths relative to the root, sorted lexicographically.
///
/// Walk errors are fatal: an unreadable root or subdirectory means the input
/// tree is unusable, unlike the per-file errors handled downstream.
pub fn enumerate(source_root: &Path, rules: &IgnoreRuleSet) -> Result<Vec<String>> {
    if !source_root.is_dir() {
        return Err(AppError::InvalidArgument(format!(
            "Source root is not a readable directory: {}",
            source_root.display()
        )));
    }

    let mut builder = WalkBuilder::new(source_root);
    // Ignore-file layering is owned by ignore_rules; disable the walker's
    // own gitignore handling. Hidden entries stay filtered (the default),
    // and symlinks are not followed.
    builder.ignore(false);
    builder.git_ignore(false);
    builder.git_global(false);
    builder.git_exclude(false);
    builder.parents(false);
    builder.require_git(false);
    builder.follow_links(false);

    let mut entries = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let Some(relative) = pathdiff::diff_paths(entry.path(), source_root) else {
            log::warn!("Could not relativize path: {}", entry.path().display());
            continue;
        };
        if rules.is_match(&relative) {
            log::trace!("Excluded by ignore rules: {}", relative.display());
            continue;
        }
        entries.push(to_posix_string(&relative));
    }

    // Filesystem enumeration order is not deterministic; fix it here.
    entries.sort();
    log::debug!("Traversal yielded {} files", entries.len());
    Ok(entries)
}

pub(crate) fn to_posix_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn yields_sorted_relative_files_and_skips_hidden() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join(".hidden")).unwrap();
        fs::write(dir.path().join("zeta.txt"), "z").unwrap();
        fs::write(dir.path().join("src/alpha.rs"), "a").unwrap();
        fs::write(dir.path().join(".hidden/file.txt"), "h").unwrap();
        fs::write(dir.path().join(".dotfile"), "d").unwrap();

        let rules = crate::ignore_rules::resolve(dir.path(), &dir.path().join("out")).unwrap();
        let entries = enumerate(dir.path(), &rules).unwrap();
        assert_eq!(entries, vec!["src/alpha.rs".to_string(), "zeta.txt".to_string()]);
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let rules = crate::ignore_rules::resolve(dir.path(), &dir.path().join("out")).unwrap();
        assert!(enumerate(&missing, &rules).is_err());
    }
}
