//! Collaborators for the reqgraph crawler.
//!
//! This crate provides the pieces the graph crawler consumes but does not own:
//! - Reading source files ([`SourceReader`], [`FsReader`])
//! - Extracting import specifiers from JS/TS source ([`SpecifierExtractor`], [`OxcExtractor`])
//! - Probing relative imports on disk ([`resolve_relative`])
//! - Locating packages and builtins ([`ModuleLocator`], [`NodeLocator`])

mod constants;
mod error;
mod parser;
mod reader;
mod resolver;

// Re-export public API
pub use constants::{INDEX_FILES, NATIVE_PREFIX, NODE_BUILTINS, RESOLVE_EXTENSIONS};
pub use error::ParseError;
pub use parser::{OxcExtractor, SpecifierExtractor, extract_specifiers};
pub use reader::{FsReader, SourceReader};
pub use resolver::{Location, ModuleLocator, NodeLocator, is_path_specifier, resolve_relative};
