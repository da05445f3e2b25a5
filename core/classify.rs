use std::path::Path;

/// How a discovered file is handled: `Text` content is inlined into the
/// concatenated artifact, `Static` content is copied verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClassification {
    Text,
    Static,
}

// Closed allow-list keyed on extension. Anything not listed is treated as
// text; content is never sniffed.
const STATIC_FILE_EXTENSIONS: &[&str] = &[
    // Images
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "svg",
    // Documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    // Media
    "mp3", "mp4", "wav", "avi", "mov",
    // Archives
    "zip", "rar", "7z", "tar", "gz",
];

/// Classifies a path by its extension, case-insensitively. Paths without an
/// extension are text.
pub fn classify(relative_path: &Path) -> FileClassification {
    match relative_path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            if STATIC_FILE_EXTENSIONS.contains(&ext.as_str()) {
                FileClassification::Static
            } else {
                FileClassification::Text
            }
        }
        None => FileClassification::Text,
    }
}

/// Flattened destination name for a static file: every path separator
/// becomes `_`, leading/trailing underscores trimmed. Paths differing only
/// in separator choice collide; the last copy wins, as in the original tool.
pub fn flatten_static_name(relative_path: &str) -> String {
    relative_path
        .replace(['/', '\\'], "_")
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn known_extensions_are_static() {
        assert_eq!(classify(&PathBuf::from("assets/logo.png")), FileClassification::Static);
        assert_eq!(classify(&PathBuf::from("report.pdf")), FileClassification::Static);
        assert_eq!(classify(&PathBuf::from("bundle.tar")), FileClassification::Static);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify(&PathBuf::from("photo.PNG")), FileClassification::Static);
        assert_eq!(classify(&PathBuf::from("clip.Mp4")), FileClassification::Static);
    }

    #[test]
    fn unknown_or_missing_extension_is_text() {
        assert_eq!(classify(&PathBuf::from("src/index.js")), FileClassification::Text);
        assert_eq!(classify(&PathBuf::from("Makefile")), FileClassification::Text);
        assert_eq!(classify(&PathBuf::from("data.unknownext")), FileClassification::Text);
    }

    #[test]
    fn flatten_replaces_separators_and_trims() {
        assert_eq!(flatten_static_name("assets/logo.png"), "assets_logo.png");
        assert_eq!(flatten_static_name("a\\b/c.gif"), "a_b_c.gif");
        assert_eq!(flatten_static_name("/rooted/x.zip"), "rooted_x.zip");
    }
}
