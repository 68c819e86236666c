use log::trace;
use std::{fs, io, path::Path};

/// Source of file contents for the crawler.
pub trait SourceReader {
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads files straight from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<String> {
        trace!("Reading {}", path.display());
        fs::read_to_string(path)
    }
}
