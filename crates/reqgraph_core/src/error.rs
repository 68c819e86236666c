use std::path::PathBuf;

/// Malformed source that the extractor could not turn into a specifier list.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Syntax error in {path}: {message}")]
pub struct ParseError {
    pub path: PathBuf,
    pub message: String,
}
