// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A write transaction over an archive on disk.
//!
//! Opening a session loads the archive's current central directory. Each insert appends a local file header and
//! data to the end of the file immediately, but the central directory (old records first, then new ones) and a fresh
//! end of central directory record are only written on commit. Until then, readers continue to see the archive as
//! it was before the session began.

use crate::base::read::ScanCursor;
use crate::base::write::{PendingEntry, ZipFileWriter, DEFAULT_LEVEL};
use crate::entry::NewEntry;
use crate::error::{Result, ZipError};

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// What happens to appended bytes when a session is rolled back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RollbackPolicy {
    /// Leave the appended bytes in place, unreferenced by any directory.
    #[default]
    Abandon,
    /// Truncate the file back to its length when the session began.
    Truncate,
}

/// The result of rolling back a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollbackOutcome {
    /// The file's length when the session began.
    pub original_size: u64,
    /// The number of bytes appended during the session and left in the file.
    pub orphaned_bytes: u64,
}

/// An open write transaction over an archive file.
#[derive(Debug)]
pub struct WriteSession {
    path: PathBuf,
    writer: ZipFileWriter<File>,
    original_size: u64,
}

impl WriteSession {
    /// Opens a session over the archive at the given path, creating the file if it doesn't exist.
    pub fn begin(path: impl AsRef<Path>) -> Result<Self> {
        Self::begin_with_level(path, DEFAULT_LEVEL)
    }

    /// Opens a session which deflates entries at the given level.
    ///
    /// This function does so by:
    /// - opening the file for appending, creating it if absent
    /// - noting its current length as the offset of the first append
    /// - loading the records of its current central directory, if it isn't empty
    #[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
    pub fn begin_with_level(path: impl AsRef<Path>, level: u32) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let original_size = file.metadata()?.len();

        let mut writer = ZipFileWriter::with_offset(file, original_size).compression_level(level);

        if original_size > 0 {
            let mut cursor = ScanCursor::open(&path)?;
            while cursor.advance()? {
                if let Some(entry) = cursor.current() {
                    writer.push_existing(entry.central_directory_record());
                }
            }
        }

        tracing::debug!(original_size, existing = writer.entries().len(), "began write session");
        Ok(Self { path, writer, original_size })
    }

    /// Returns the path of the archive this session writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file's length when the session began.
    pub fn original_size(&self) -> u64 {
        self.original_size
    }

    /// Returns the offset at which the next entry will be appended.
    pub fn current_size(&self) -> u64 {
        self.writer.offset()
    }

    /// Returns the records which a commit would write, existing entries first.
    pub fn entries(&self) -> &[PendingEntry] {
        self.writer.entries()
    }

    /// Appends an entry's local file header and data to the archive and queues its central directory record.
    pub fn insert(&mut self, entry: impl Into<NewEntry>) -> Result<()> {
        self.writer.write_entry_whole(entry)
    }

    /// Writes the central directory and end of central directory record, completing the archive.
    ///
    /// Any failure is reported as [`ZipError::CommitFailed`]; the file is then left without a directory covering
    /// the appended entries.
    #[tracing::instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn commit(self) -> Result<()> {
        let entries = self.writer.entries().len();
        self.writer.close().map_err(|err| ZipError::CommitFailed(Box::new(err)))?;

        tracing::debug!(entries, "committed write session");
        Ok(())
    }

    /// Discards the queued records without writing a directory.
    #[tracing::instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn rollback(self, policy: RollbackPolicy) -> Result<RollbackOutcome> {
        let appended = self.writer.offset().saturating_sub(self.original_size);
        let file = self.writer.into_inner();

        let orphaned_bytes = match policy {
            RollbackPolicy::Abandon => appended,
            RollbackPolicy::Truncate => {
                file.set_len(self.original_size)?;
                0
            }
        };

        if orphaned_bytes > 0 {
            tracing::warn!(orphaned_bytes, "rolled back write session; appended bytes remain in the archive");
        } else {
            tracing::debug!("rolled back write session");
        }

        Ok(RollbackOutcome { original_size: self.original_size, orphaned_bytes })
    }
}
