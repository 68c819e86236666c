use std::{io, path::PathBuf};

use reqgraph_core::ParseError;

/// Failures that abort a whole crawl. Past the first file these are stored
/// on the affected node instead.
#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    #[error("No entry files given")]
    NoEntries,

    #[error("Failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Parse(#[from] ParseError),
}
