use log::debug;
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::{
    error::CrawlError,
    types::{FileNode, ModuleGroup, NodeKind},
};

/// Makes every entry absolute and lexically normalized, keeping their order.
pub(crate) fn normalize_entries<P: AsRef<Path>>(entries: &[P]) -> Result<Vec<PathBuf>, CrawlError> {
    if entries.is_empty() {
        return Err(CrawlError::NoEntries);
    }
    let entries = entries
        .iter()
        .map(|entry| absolute_path(entry.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Normalized {} entry files", entries.len());
    Ok(entries)
}

pub(crate) fn absolute_path(path: &Path) -> Result<PathBuf, CrawlError> {
    let absolute = std::path::absolute(path)
        .map_err(|source| CrawlError::Io { path: path.to_path_buf(), source })?;
    Ok(clean(absolute))
}

pub(crate) fn entry_node(path: &Path) -> FileNode {
    FileNode {
        kind: NodeKind::Local { path: path.to_path_buf() },
        parents: Vec::new(),
        group: ModuleGroup::None,
        error: None,
    }
}
