use log::trace;
use std::{collections::HashMap, path::Path};

use crate::types::{FileNode, NodeKey};

/// Outcome of merging a discovered child into the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Merge {
    /// First discovery; the node lives at this index.
    Created(usize),
    /// Already known; at most a parent link was added.
    Linked,
}

/// Every node of one crawl, in discovery order, looked up by key.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    nodes: Vec<FileNode>,
    index: HashMap<NodeKey, usize>,
}

impl Registry {
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn get(&self, key: &NodeKey) -> Option<&FileNode> {
        self.index.get(key).map(|&idx| &self.nodes[idx])
    }

    pub(crate) fn get_mut(&mut self, key: &NodeKey) -> Option<&mut FileNode> {
        self.index.get(key).map(|&idx| &mut self.nodes[idx])
    }

    pub(crate) fn node(&self, idx: usize) -> &FileNode {
        &self.nodes[idx]
    }

    /// Adds `child` unless its key is already present, in which case `parent`
    /// is appended to the existing node's parents if missing.
    pub(crate) fn merge(&mut self, child: FileNode, parent: &Path) -> Merge {
        let key = child.key();
        if let Some(&idx) = self.index.get(&key) {
            let existing = &mut self.nodes[idx];
            if !existing.parents.iter().any(|p| p == parent) {
                trace!("Linking {} under {}", key, parent.display());
                existing.parents.push(parent.to_path_buf());
            }
            return Merge::Linked;
        }

        trace!("Registering {}", key);
        let idx = self.nodes.len();
        self.nodes.push(child);
        self.index.insert(key, idx);
        Merge::Created(idx)
    }

    /// Inserts a node with no importer. Returns false if the key was taken.
    pub(crate) fn seed(&mut self, node: FileNode) -> bool {
        let key = node.key();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.nodes.len());
        self.nodes.push(node);
        true
    }

    pub(crate) fn into_nodes(self) -> Vec<FileNode> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ModuleGroup, NodeKind};
    use std::path::PathBuf;

    fn local(path: &str, parents: &[&str]) -> FileNode {
        FileNode {
            kind: NodeKind::Local { path: PathBuf::from(path) },
            parents: parents.iter().map(PathBuf::from).collect(),
            group: ModuleGroup::None,
            error: None,
        }
    }

    #[test]
    fn test_merge_creates_then_links() {
        let mut registry = Registry::default();
        assert!(registry.seed(local("/p/a.js", &[])));
        assert!(registry.seed(local("/p/b.js", &[])));

        let created = registry.merge(local("/p/c.js", &["/p/a.js"]), Path::new("/p/a.js"));
        assert_eq!(created, Merge::Created(2));
        let linked = registry.merge(local("/p/c.js", &["/p/b.js"]), Path::new("/p/b.js"));
        assert_eq!(linked, Merge::Linked);
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.node(2).parents,
            vec![PathBuf::from("/p/a.js"), PathBuf::from("/p/b.js")]
        );
    }

    #[test]
    fn test_merge_does_not_duplicate_parent() {
        let mut registry = Registry::default();
        registry.seed(local("/p/a.js", &[]));
        registry.merge(local("/p/b.js", &["/p/a.js"]), Path::new("/p/a.js"));
        registry.merge(local("/p/b.js", &["/p/a.js"]), Path::new("/p/a.js"));
        assert_eq!(registry.node(1).parents, vec![PathBuf::from("/p/a.js")]);
    }

    #[test]
    fn test_rediscovery_keeps_first_group() {
        let mut registry = Registry::default();
        let mut first = local("/p/shared.js", &["/p/a.js"]);
        first.group = ModuleGroup::Package("one".to_string());
        let mut second = local("/p/shared.js", &["/p/b.js"]);
        second.group = ModuleGroup::Package("two".to_string());

        registry.merge(first, Path::new("/p/a.js"));
        registry.merge(second, Path::new("/p/b.js"));
        assert_eq!(registry.node(0).group, ModuleGroup::Package("one".to_string()));
    }

    #[test]
    fn test_seed_rejects_duplicate_entry() {
        let mut registry = Registry::default();
        assert!(registry.seed(local("/p/a.js", &[])));
        assert!(!registry.seed(local("/p/a.js", &[])));
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&NodeKey::Path(PathBuf::from("/p/a.js"))).is_some());
    }

    #[test]
    fn test_get_mut_records_error() {
        let mut registry = Registry::default();
        registry.seed(local("/p/a.js", &[]));
        let key = NodeKey::Path(PathBuf::from("/p/a.js"));
        registry.get_mut(&key).unwrap().error = Some("boom".to_string());
        assert_eq!(registry.into_nodes()[0].error.as_deref(), Some("boom"));
    }
}
