use serde::{Serialize, Serializer};
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Registry key of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// Local files and packages resolved to a file.
    Path(PathBuf),
    /// Builtin module, keyed by specifier.
    Native(String),
    /// Package whose directory exists but whose entry file could not be found.
    Package(String),
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Path(p) => write!(f, "{}", p.display()),
            NodeKey::Native(name) => write!(f, "native::{}", name),
            NodeKey::Package(id) => write!(f, "package::{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Local { path: PathBuf },
    Package { id: String, path: Option<PathBuf> },
    Native { name: String },
}

/// Nearest enclosing package of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModuleGroup {
    #[default]
    None,
    Package(String),
}

impl ModuleGroup {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            ModuleGroup::None => None,
            ModuleGroup::Package(id) => Some(id),
        }
    }
}

/// One file (or package, or builtin) in the import graph.
///
/// `group` is set when the node is created and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub kind: NodeKind,
    /// Files importing this node, in discovery order, without duplicates.
    pub parents: Vec<PathBuf>,
    pub group: ModuleGroup,
    /// Why this node's own imports could not be listed.
    pub error: Option<String>,
}

impl FileNode {
    pub fn key(&self) -> NodeKey {
        match &self.kind {
            NodeKind::Local { path } | NodeKind::Package { path: Some(path), .. } => {
                NodeKey::Path(path.clone())
            }
            NodeKind::Package { id, path: None } => NodeKey::Package(id.clone()),
            NodeKind::Native { name } => NodeKey::Native(name.clone()),
        }
    }

    /// Short label: the file name for local files, the specifier otherwise.
    pub fn display_id(&self) -> String {
        match &self.kind {
            NodeKind::Local { path } => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.to_string_lossy().to_string()),
            NodeKind::Package { id, .. } => id.clone(),
            NodeKind::Native { name } => name.clone(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.kind {
            NodeKind::Local { path } => Some(path),
            NodeKind::Package { path, .. } => path.as_deref(),
            NodeKind::Native { .. } => None,
        }
    }

    pub fn is_module(&self) -> bool {
        !matches!(self.kind, NodeKind::Local { .. })
    }

    pub fn is_native(&self) -> bool {
        matches!(self.kind, NodeKind::Native { .. })
    }

    /// Path to expand next, if this freshly created node should be crawled.
    pub(crate) fn expandable_path(&self, traverse_modules: bool) -> Option<&Path> {
        match &self.kind {
            NodeKind::Local { path } => Some(path),
            NodeKind::Package { path, .. } if traverse_modules => path.as_deref(),
            _ => None,
        }
    }
}

/// A finalized node as handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<PathBuf>,
    pub parents: Vec<PathBuf>,
    /// Anything that is not a local file.
    pub module: bool,
    pub native: bool,
    /// `false` when the node belongs to no package.
    #[serde(serialize_with = "serialize_group")]
    pub mgroup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn serialize_group<S: Serializer>(group: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match group {
        Some(id) => serializer.serialize_str(id),
        None => serializer.serialize_bool(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: NodeKind) -> FileNode {
        FileNode { kind, parents: vec![], group: ModuleGroup::None, error: None }
    }

    #[test]
    fn test_keys_by_kind() {
        let local = node(NodeKind::Local { path: PathBuf::from("/p/a.js") });
        let package = node(NodeKind::Package {
            id: "async".to_string(),
            path: Some(PathBuf::from("/p/node_modules/async/lib/async.js")),
        });
        let pathless = node(NodeKind::Package { id: "empty".to_string(), path: None });
        let native = node(NodeKind::Native { name: "fs".to_string() });

        assert_eq!(local.key(), NodeKey::Path(PathBuf::from("/p/a.js")));
        assert_eq!(
            package.key(),
            NodeKey::Path(PathBuf::from("/p/node_modules/async/lib/async.js"))
        );
        assert_eq!(pathless.key().to_string(), "package::empty");
        assert_eq!(native.key().to_string(), "native::fs");
    }

    #[test]
    fn test_display_ids() {
        let local = node(NodeKind::Local { path: PathBuf::from("/p/lib/a.js") });
        assert_eq!(local.display_id(), "a.js");
        let package = node(NodeKind::Package {
            id: "async".to_string(),
            path: Some(PathBuf::from("/p/node_modules/async/lib/async.js")),
        });
        assert_eq!(package.display_id(), "async");
        assert_eq!(node(NodeKind::Native { name: "http".to_string() }).display_id(), "http");
    }

    #[test]
    fn test_expandable_path() {
        let local = node(NodeKind::Local { path: PathBuf::from("/p/a.js") });
        let package = node(NodeKind::Package {
            id: "nub".to_string(),
            path: Some(PathBuf::from("/p/node_modules/nub/index.js")),
        });
        let pathless = node(NodeKind::Package { id: "empty".to_string(), path: None });
        let native = node(NodeKind::Native { name: "fs".to_string() });

        assert!(local.expandable_path(false).is_some());
        assert!(package.expandable_path(false).is_none());
        assert!(package.expandable_path(true).is_some());
        assert!(pathless.expandable_path(true).is_none());
        assert!(native.expandable_path(true).is_none());
    }

    #[test]
    fn test_record_group_serializes_as_false_when_absent() {
        let record = |mgroup: Option<&str>| Record {
            id: "a.js".to_string(),
            filename: Some(PathBuf::from("a.js")),
            parents: vec![],
            module: false,
            native: false,
            mgroup: mgroup.map(str::to_string),
            error: None,
        };

        let ungrouped = serde_json::to_value(record(None)).unwrap();
        assert_eq!(ungrouped["mgroup"], false);

        let grouped = serde_json::to_value(record(Some("nub"))).unwrap();
        assert_eq!(grouped["mgroup"], "nub");
    }
}
