// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::base::write::ZipFileWriter;
use crate::entry::NewEntry;
use crate::error::{Result, ZipError};

/// Builds a complete archive in memory from a sequence of rows.
///
/// Unlike a [`WriteSession`](crate::base::write::WriteSession), a file entry's path may not end with `/`.
#[derive(Debug)]
pub struct ArchiveBuilder {
    writer: ZipFileWriter<Vec<u8>>,
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self { writer: ZipFileWriter::new(Vec::new()) }
    }

    /// Sets the deflate level (0 to 9) used for compressed entries.
    pub fn compression_level(self, level: u32) -> Self {
        Self { writer: self.writer.compression_level(level) }
    }

    /// Appends a row to the archive.
    pub fn append(&mut self, entry: impl Into<NewEntry>) -> Result<()> {
        let entry = entry.into();
        if !entry.is_dir() && entry.path.ends_with('/') {
            return Err(ZipError::TrailingSlash(entry.path));
        }

        self.writer.write_entry_whole(entry)
    }

    /// Returns the number of rows appended so far.
    pub fn len(&self) -> usize {
        self.writer.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.writer.entries().is_empty()
    }

    /// Writes the central directory and returns the finished archive.
    pub fn finish(self) -> Result<Vec<u8>> {
        self.writer.close()
    }
}
