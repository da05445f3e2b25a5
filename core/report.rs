use serde::Serialize;

/// One file that could not be processed, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedFile {
    pub file: String,
    pub error: String,
}

/// Mapping from a static file's source-relative path to its copy under the
/// static directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticFileCopy {
    pub original: String,
    pub copied: String,
}

/// Outcome of one aggregation run. All paths are POSIX-separated and
/// relative to the source root, except `output` which is the destination
/// path as supplied by the caller.
///
/// Invariant: `successful.len() + failed.len() == total_files`. Entries in
/// `static_files` are an annotation of `successful`, not a separate tally.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub total_files: usize,
    pub successful: Vec<String>,
    pub failed: Vec<FailedFile>,
    pub static_files: Vec<StaticFileCopy>,
    pub output: String,
}
