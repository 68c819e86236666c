//! Static import graph crawler for JavaScript/TypeScript sources.
//!
//! Starting from one or more entry files, the crawler reads each file once,
//! resolves every import it contains and returns the deduplicated graph in
//! discovery order. Each record lists all of its importers and the nearest
//! package it was reached through.
//!
//! # Examples
//!
//! ```no_run
//! use reqgraph_crawl::{CrawlOptions, crawl};
//!
//! # fn main() -> Result<(), reqgraph_crawl::CrawlError> {
//! let options = CrawlOptions { traverse_modules: false, absolute: false };
//! let records = crawl(&["src/index.js"], options)?;
//!
//! for record in &records {
//!     println!("{} <- {:?}", record.id, record.parents);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod crawler;
mod entry;
mod error;
mod registry;
mod relativize;
mod reporter;
mod resolve;
mod types;

// Re-export public API
pub use config::CrawlOptions;
pub use crawler::{Crawler, children, crawl};
pub use error::CrawlError;
pub use reporter::{local_files, print_local_files, print_records};
pub use types::{FileNode, ModuleGroup, NodeKey, NodeKind, Record};
