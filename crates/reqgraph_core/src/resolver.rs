use log::{debug, trace};
use path_clean::clean;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::constants::{INDEX_FILES, NATIVE_PREFIX, NODE_BUILTINS, RESOLVE_EXTENSIONS};

/// Where a non-path specifier points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Provided by the runtime; nothing on disk.
    Native,
    /// An installed package. `path` is `None` when the package directory
    /// exists but no entry file could be found in it.
    Package { id: String, path: Option<PathBuf> },
    NotFound,
}

/// Maps a package specifier to a [`Location`], given the directory of the
/// importing file and the importing file itself.
pub trait ModuleLocator {
    fn locate(&self, request: &str, from_dir: &Path, importer: &Path) -> Location;
}

/// Node.js style lookup: builtins first, then `node_modules` folders from the
/// importing directory up to the filesystem root.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeLocator;

impl ModuleLocator for NodeLocator {
    fn locate(&self, request: &str, from_dir: &Path, importer: &Path) -> Location {
        if is_builtin(request) {
            trace!("'{}' is a builtin module", request);
            return Location::Native;
        }

        trace!("Walking up from {:?} to find node_modules for '{}'", from_dir, request);
        for dir in from_dir.ancestors() {
            if let Some(path) = resolve_node_module(dir, request) {
                debug!("Resolved package '{}' from {}", request, importer.display());
                return Location::Package { id: request.to_string(), path };
            }
        }

        trace!("Failed to resolve package '{}' from {}", request, importer.display());
        Location::NotFound
    }
}

/// Whether a specifier names a file rather than a package.
pub fn is_path_specifier(request: &str) -> bool {
    request.starts_with('.') || request.starts_with('/')
}

/// Resolves a relative or absolute specifier against `dir`.
///
/// Falls back to the joined path when no candidate exists; reading it will
/// fail later and that failure belongs to the imported node.
pub fn resolve_relative(dir: &Path, request: &str) -> PathBuf {
    let target = clean(dir.join(request));
    match resolve_file(&target) {
        Some(found) => {
            trace!("Resolved relative import '{}' to {:?}", request, found);
            found
        }
        None => {
            trace!("No candidate exists for '{}', keeping {:?}", request, target);
            target
        }
    }
}

fn is_builtin(request: &str) -> bool {
    if request.starts_with(NATIVE_PREFIX) {
        return true;
    }
    let name = request.split('/').next().unwrap_or(request);
    NODE_BUILTINS.contains(&name)
}

fn resolve_file(p: &Path) -> Option<PathBuf> {
    // Try exact path first
    if p.is_file() {
        return Some(p.to_path_buf());
    }

    // Try adding extensions
    for ext in RESOLVE_EXTENSIONS {
        let mut name = p.as_os_str().to_owned();
        name.push(".");
        name.push(ext);
        let candidate = PathBuf::from(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    // Try index files
    for index_file in INDEX_FILES {
        let candidate = p.join(index_file);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}

/// Name of the package a bare specifier points into: `lodash` for
/// `lodash/fp`, `@scope/pkg` for `@scope/pkg/sub`.
fn package_name(request: &str) -> &str {
    let mut segments = request.match_indices('/');
    let end = if request.starts_with('@') {
        segments.nth(1)
    } else {
        segments.next()
    };
    match end {
        Some((idx, _)) => &request[..idx],
        None => request,
    }
}

/// Looks for `request` in `dir/node_modules`. The outer `Option` says whether
/// the package is installed there, the inner one whether an entry file exists.
fn resolve_node_module(dir: &Path, request: &str) -> Option<Option<PathBuf>> {
    let nm = dir.join("node_modules");
    let pkg_dir = nm.join(package_name(request));
    if !pkg_dir.is_dir() {
        return None;
    }
    trace!("Checking node_modules at: {:?}", pkg_dir);

    if package_name(request) != request {
        // Deep import into a package, e.g. 'lodash/fp'
        return Some(resolve_file(&nm.join(request)));
    }

    Some(package_entry(&pkg_dir))
}

fn package_entry(pkg_dir: &Path) -> Option<PathBuf> {
    let entry = |s: &str| resolve_file(&clean(pkg_dir.join(s)));

    let pkg_json = pkg_dir.join("package.json");
    if let Ok(txt) = fs::read_to_string(&pkg_json)
        && let Ok(v) = serde_json::from_str::<serde_json::Value>(&txt)
    {
        if let Some(exports) = v.get("exports") {
            if let Some(s) = exports.as_str()
                && let Some(resolved) = entry(s)
            {
                return Some(resolved);
            }
            // { ".": "./x.js" } or { ".": { "import": ..., "require": ... } }
            let dot = exports.get(".").unwrap_or(exports);
            if let Some(s) = dot.as_str()
                && let Some(resolved) = entry(s)
            {
                return Some(resolved);
            }
            for key in ["import", "require", "default"] {
                if let Some(s) = dot.get(key).and_then(|x| x.as_str())
                    && let Some(resolved) = entry(s)
                {
                    return Some(resolved);
                }
            }
        }

        for field in ["module", "main"] {
            if let Some(s) = v.get(field).and_then(|x| x.as_str())
                && let Some(resolved) = entry(s)
            {
                return Some(resolved);
            }
        }
    }

    INDEX_FILES.iter().map(|index| pkg_dir.join(index)).find(|p| p.is_file())
}
