use log::debug;
use std::path::{Component, Path, PathBuf};

use crate::types::{FileNode, Record};

/// Turns crawled nodes into records, rewriting paths relative to `base` unless
/// `absolute` is set. Order and parent sets are left untouched.
pub(crate) fn finalize(nodes: Vec<FileNode>, base: &Path, absolute: bool) -> Vec<Record> {
    debug!("Finalizing {} nodes (absolute: {})", nodes.len(), absolute);
    let present = |p: &Path| {
        if absolute { p.to_path_buf() } else { make_relative(p, base).unwrap_or_else(|| p.into()) }
    };

    nodes
        .into_iter()
        .map(|node| Record {
            id: node.display_id(),
            filename: node.path().map(present),
            parents: node.parents.iter().map(|p| present(p)).collect(),
            module: node.is_module(),
            native: node.is_native(),
            mgroup: node.group.as_deref().map(str::to_string),
            error: node.error,
        })
        .collect()
}

/// Create a relative path from `base` to `target`. Both must be absolute and
/// normalized; `None` when they do not share a root.
pub(crate) fn make_relative(target: &Path, base: &Path) -> Option<PathBuf> {
    let target_parts: Vec<Component> = target.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    if target_parts.first() != base_parts.first() {
        return None;
    }

    let common = target_parts.iter().zip(&base_parts).take_while(|(t, b)| t == b).count();

    let mut result = PathBuf::new();
    for _ in &base_parts[common..] {
        result.push("..");
    }
    for component in &target_parts[common..] {
        result.push(component.as_os_str());
    }

    if result.as_os_str().is_empty() { Some(PathBuf::from(".")) } else { Some(result) }
}
