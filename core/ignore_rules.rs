use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::Path;

pub const PROJECT_IGNORE_FILE: &str = ".notebooklmignore";
pub const FALLBACK_IGNORE_FILE: &str = ".gitignore";

// Always excluded, regardless of any ignore file.
const BUILTIN_IGNORE_PATTERNS: &[&str] = &[
    // Version control metadata
    "**/.git/**",
    "**/.svn/**",
    "**/.hg/**",
    // Dependency directories
    "**/node_modules/**",
    "**/vendor/**",
    // Build output
    "**/dist/**",
    "**/build/**",
    "**/target/**",
    // Logs and generic lockfiles
    "**/*.log",
    "**/*.lock",
];

const LOCKFILE_BLACKLIST: &[&str] = &[
    "bun.toml",
    "bun.lockb",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.lock",
];

/// Resolved exclusion rules for one aggregation run. Patterns are additive
/// only; there is no negation support.
#[derive(Debug)]
pub struct IgnoreRuleSet {
    patterns: Vec<String>,
    matcher: GlobSet,
}

impl IgnoreRuleSet {
    /// True if the source-root-relative path matches any resolved pattern.
    pub fn is_match(&self, relative_path: &Path) -> bool {
        self.matcher.is_match(relative_path)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// Builds the exclusion rules for a run: built-ins, the destination artifact
/// itself, then any patterns contributed by the project's ignore file.
pub fn resolve(source_root: &Path, dest_path: &Path) -> Result<IgnoreRuleSet> {
    let mut patterns: Vec<String> = BUILTIN_IGNORE_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect();
    patterns.extend(LOCKFILE_BLACKLIST.iter().map(|name| format!("**/{}", name)));

    // Never read our own output mid-run: if the destination lies under the
    // source root, exclude its exact relative path.
    if let Some(rel_dest) = pathdiff::diff_paths(dest_path, source_root) {
        if !rel_dest.as_os_str().is_empty() && !rel_dest.starts_with("..") {
            let posix = rel_dest.to_string_lossy().replace('\\', "/");
            patterns.push(globset::escape(&posix));
        }
    }

    match read_ignore_file(source_root) {
        Some((name, content)) => {
            log::debug!("Applying ignore patterns from {}", name);
            patterns.extend(content.lines().filter_map(normalize_pattern));
        }
        None => {
            log::debug!("No ignore file found at {}, built-ins only", source_root.display());
        }
    }

    let matcher = build_glob_set(&patterns)?;
    log::trace!("Resolved {} ignore patterns", patterns.len());
    Ok(IgnoreRuleSet { patterns, matcher })
}

// Project-specific file wins; the generic one is only consulted when the
// first is absent or unreadable. Read failures are not errors.
fn read_ignore_file(source_root: &Path) -> Option<(&'static str, String)> {
    fs::read_to_string(source_root.join(PROJECT_IGNORE_FILE))
        .ok()
        .map(|content| (PROJECT_IGNORE_FILE, content))
        .or_else(|| {
            fs::read_to_string(source_root.join(FALLBACK_IGNORE_FILE))
                .ok()
                .map(|content| (FALLBACK_IGNORE_FILE, content))
        })
}

/// Normalizes one ignore-file line into a depth-independent glob, or `None`
/// for blank lines and comments. A trailing `/` marks a directory pattern
/// and is widened to match everything beneath it.
fn normalize_pattern(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let mut pattern = trimmed.to_string();
    if pattern.ends_with('/') {
        pattern.push_str("**");
    }
    if !pattern.starts_with("**") {
        pattern = format!("**/{}", pattern);
    }
    Some(pattern)
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            crate::error::AppError::Glob(format!("Invalid glob pattern \"{}\": {}", pattern, e))
        })?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn normalize_skips_blanks_and_comments() {
        assert_eq!(normalize_pattern(""), None);
        assert_eq!(normalize_pattern("   "), None);
        assert_eq!(normalize_pattern("# a comment"), None);
    }

    #[test]
    fn normalize_anchors_at_any_depth() {
        assert_eq!(normalize_pattern("*.tmp").as_deref(), Some("**/*.tmp"));
        assert_eq!(normalize_pattern("dist/**").as_deref(), Some("**/dist/**"));
        assert_eq!(normalize_pattern("**/cache").as_deref(), Some("**/cache"));
    }

    #[test]
    fn normalize_widens_directory_patterns() {
        assert_eq!(normalize_pattern("coverage/").as_deref(), Some("**/coverage/**"));
    }

    #[test]
    fn builtins_match_common_noise() {
        let dir = tempfile::tempdir().unwrap();
        let rules = resolve(dir.path(), &dir.path().join("out.txt")).unwrap();
        assert!(rules.is_match(&PathBuf::from("node_modules/pkg/index.js")));
        assert!(rules.is_match(&PathBuf::from("a/b/.git/HEAD")));
        assert!(rules.is_match(&PathBuf::from("deep/nested/debug.log")));
        assert!(rules.is_match(&PathBuf::from("yarn.lock")));
        assert!(rules.is_match(&PathBuf::from("sub/Cargo.lock")));
        assert!(!rules.is_match(&PathBuf::from("src/main.rs")));
    }

    #[test]
    fn destination_under_root_is_excluded() {
        let dir = tempfile::tempdir().unwrap();
        let rules = resolve(dir.path(), &dir.path().join("notebooklm")).unwrap();
        assert!(rules.is_match(&PathBuf::from("notebooklm")));
        assert!(!rules.is_match(&PathBuf::from("notebooklm.md")));
    }

    #[test]
    fn project_ignore_file_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_IGNORE_FILE), "secrets/\n").unwrap();
        std::fs::write(dir.path().join(FALLBACK_IGNORE_FILE), "docs/\n").unwrap();
        let rules = resolve(dir.path(), &dir.path().join("out.txt")).unwrap();
        assert!(rules.is_match(&PathBuf::from("secrets/key.txt")));
        // .gitignore must not have been consulted
        assert!(!rules.is_match(&PathBuf::from("docs/guide.txt")));
    }

    #[test]
    fn falls_back_to_gitignore() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(FALLBACK_IGNORE_FILE), "# noise\n\ndocs/\n").unwrap();
        let rules = resolve(dir.path(), &dir.path().join("out.txt")).unwrap();
        assert!(rules.is_match(&PathBuf::from("docs/guide.txt")));
    }
}
