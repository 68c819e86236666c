use log::{debug, info, trace, warn};
use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
};

use reqgraph_core::{
    FsReader, ModuleLocator, NodeLocator, OxcExtractor, SourceReader, SpecifierExtractor,
};

use crate::{
    config::CrawlOptions,
    entry::{absolute_path, entry_node, normalize_entries},
    error::CrawlError,
    registry::{Merge, Registry},
    relativize::finalize,
    resolve::{ImportContext, dedup_children, resolve_import},
    types::{FileNode, ModuleGroup, NodeKey, Record},
};

/// Walks the import graph one file at a time.
///
/// Each call to [`Crawler::crawl`] owns its own registry and worklist, so a
/// crawler can be reused and several crawls can run side by side.
#[derive(Debug, Clone, Default)]
pub struct Crawler<R = FsReader, E = OxcExtractor, L = NodeLocator> {
    reader: R,
    extractor: E,
    locator: L,
    options: CrawlOptions,
}

impl Crawler {
    /// Crawler reading from disk, parsing with oxc and resolving like Node.js.
    pub fn new(options: CrawlOptions) -> Self {
        Self { reader: FsReader, extractor: OxcExtractor, locator: NodeLocator, options }
    }
}

impl<R, E, L> Crawler<R, E, L>
where
    R: SourceReader,
    E: SpecifierExtractor,
    L: ModuleLocator,
{
    pub fn with_collaborators(reader: R, extractor: E, locator: L, options: CrawlOptions) -> Self {
        Self { reader, extractor, locator, options }
    }

    /// Recursively collects every file reachable from `entries`, in discovery order.
    ///
    /// Fails only when the first entry cannot be read or parsed. Any later
    /// failure is stored in the affected record's `error`.
    pub fn crawl<P: AsRef<Path>>(&self, entries: &[P]) -> Result<Vec<Record>, CrawlError> {
        let entries = normalize_entries(entries)?;
        info!("Crawling from {} entry files", entries.len());

        let mut registry = Registry::default();
        let mut queue: VecDeque<PathBuf> = VecDeque::new();
        for entry in &entries {
            if registry.seed(entry_node(entry)) {
                queue.push_back(entry.clone());
            } else {
                debug!("Ignoring repeated entry {}", entry.display());
            }
        }

        let mut first = true;
        while let Some(current) = queue.pop_front() {
            let key = NodeKey::Path(current.clone());
            let Some(group) = registry.get(&key).map(|node| node.group.clone()) else {
                continue;
            };
            trace!("Expanding {} ({} queued)", current.display(), queue.len());

            let children = match self.expand(&current, &group) {
                Ok(children) => children,
                Err(e) if first => {
                    warn!("Cannot crawl entry {}: {}", current.display(), e);
                    return Err(e);
                }
                Err(e) => {
                    warn!("Skipping imports of {}: {}", current.display(), e);
                    if let Some(node) = registry.get_mut(&key) {
                        node.error = Some(e.to_string());
                    }
                    continue;
                }
            };
            first = false;

            for child in children {
                if let Merge::Created(idx) = registry.merge(child, &current)
                    && let Some(next) =
                        registry.node(idx).expandable_path(self.options.traverse_modules)
                {
                    queue.push_back(next.to_path_buf());
                }
            }
        }

        info!("Crawl complete. Found {} files", registry.len());
        Ok(finalize(registry.into_nodes(), base_dir(&entries[0]), self.options.absolute))
    }

    /// The file itself followed by its direct imports, with absolute paths.
    pub fn children(&self, file: &Path) -> Result<Vec<Record>, CrawlError> {
        let file = absolute_path(file)?;
        let mut nodes = vec![entry_node(&file)];
        nodes.extend(self.expand(&file, &ModuleGroup::None)?);
        debug!("{} has {} direct imports", file.display(), nodes.len() - 1);
        Ok(finalize(nodes, base_dir(&file), true))
    }

    /// Reads one file and resolves its imports into deduplicated child nodes.
    fn expand(&self, file: &Path, group: &ModuleGroup) -> Result<Vec<FileNode>, CrawlError> {
        let source = self
            .reader
            .read(file)
            .map_err(|source| CrawlError::Io { path: file.to_path_buf(), source })?;
        let requests = self.extractor.extract(file, &source)?;

        let ctx = ImportContext { dir: base_dir(file), importer: file, group };
        let children: Vec<FileNode> = requests
            .iter()
            .filter_map(|request| resolve_import(request, &ctx, &self.locator))
            .collect();

        trace!("{} imports resolved to {} children", requests.len(), children.len());
        Ok(dedup_children(children))
    }
}

fn base_dir(file: &Path) -> &Path {
    file.parent().unwrap_or(file)
}

/// Crawls `entries` with the default collaborators.
pub fn crawl<P: AsRef<Path>>(
    entries: &[P],
    options: CrawlOptions,
) -> Result<Vec<Record>, CrawlError> {
    Crawler::new(options).crawl(entries)
}

/// Lists the direct imports of `file` with the default collaborators.
pub fn children(file: &Path) -> Result<Vec<Record>, CrawlError> {
    Crawler::new(CrawlOptions::default()).children(file)
}
