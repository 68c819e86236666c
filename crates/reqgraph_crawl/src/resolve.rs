use log::trace;
use std::path::Path;

use reqgraph_core::{Location, ModuleLocator, is_path_specifier, resolve_relative};

use crate::types::{FileNode, ModuleGroup, NodeKind};

/// What the resolver knows about the file doing the importing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ImportContext<'a> {
    pub(crate) dir: &'a Path,
    pub(crate) importer: &'a Path,
    pub(crate) group: &'a ModuleGroup,
}

/// Resolves one specifier into a child node whose only parent is the importer.
///
/// Local files inherit the importer's group. Packages start a group of their
/// own and builtins are grouped under their specifier. Packages the locator
/// cannot find yield `None`.
pub(crate) fn resolve_import<L: ModuleLocator>(
    request: &str,
    ctx: &ImportContext<'_>,
    locator: &L,
) -> Option<FileNode> {
    let (kind, group) = if is_path_specifier(request) {
        let path = resolve_relative(ctx.dir, request);
        (NodeKind::Local { path }, ctx.group.clone())
    } else {
        match locator.locate(request, ctx.dir, ctx.importer) {
            Location::Native => (
                NodeKind::Native { name: request.to_string() },
                ModuleGroup::Package(request.to_string()),
            ),
            Location::Package { id, path } => {
                let group = ModuleGroup::Package(id.clone());
                (NodeKind::Package { id, path }, group)
            }
            Location::NotFound => {
                trace!("Dropping unresolved import '{}' in {}", request, ctx.importer.display());
                return None;
            }
        }
    };

    Some(FileNode { kind, parents: vec![ctx.importer.to_path_buf()], group, error: None })
}

/// Collapses children of one file that point at the same target, keeping the
/// first occurrence.
pub(crate) fn dedup_children(children: Vec<FileNode>) -> Vec<FileNode> {
    let mut unique: Vec<FileNode> = Vec::with_capacity(children.len());
    for child in children {
        if unique.iter().any(|seen| same_reference(seen, &child)) {
            trace!("Collapsing duplicate import of {}", child.key());
            continue;
        }
        unique.push(child);
    }
    unique
}

fn same_reference(a: &FileNode, b: &FileNode) -> bool {
    match (a.is_module(), b.is_module()) {
        (true, true) => a.display_id() == b.display_id(),
        (false, false) => a.path() == b.path(),
        _ => false,
    }
}
