// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing ZIP archives.
//!
//! Entries are appended to the underlying writer as soon as they're written, whilst their central directory records
//! are held back until [`ZipFileWriter::close()`].
//!
//! # Example
//! ```no_run
//! # use ziptable::base::write::ZipFileWriter;
//! # use ziptable::NewEntry;
//! # use ziptable::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut writer = ZipFileWriter::new(Vec::<u8>::new());
//!
//! writer.write_entry_whole(NewEntry::file("foo.txt", "This is an example file.").mtime(1700000000))?;
//! writer.write_entry_whole(NewEntry::directory("bar"))?;
//!
//! let archive: Vec<u8> = writer.close()?;
//! #   Ok(())
//! # }
//! ```

pub(crate) mod builder;
pub(crate) mod compressed_writer;
pub(crate) mod entry_whole;
pub(crate) mod io;
pub(crate) mod session;

pub use builder::ArchiveBuilder;
pub use compressed_writer::{compress, CompressedData, DEFAULT_LEVEL};
pub use session::{RollbackOutcome, RollbackPolicy, WriteSession};

use crate::core::cdr::{self, CentralDirectoryRecord};
use crate::core::eocdr::{self, EndOfCentralDirectoryRecord, RawEndOfCentralDirectoryRecord};
use crate::entry::NewEntry;
use crate::error::{Result, ZipError};

use entry_whole::EntryWholeWriter;
use io::offset::OffsetWriter;

use std::io::Write;

/// A central directory record awaiting the close of its writer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingEntry {
    pub(crate) path: String,
    pub(crate) record: Vec<u8>,
}

impl PendingEntry {
    /// Serialises a central directory record, keeping its name, extra field, and comment verbatim.
    pub(crate) fn from_record(record: &CentralDirectoryRecord) -> Self {
        let mut buffer = Vec::with_capacity(record.record_length());
        cdr::write(&mut buffer, record);

        Self { path: record.file_name_lossy(), record: buffer }
    }

    /// Returns the path of the entry this record describes.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the serialised central directory record.
    pub fn record(&self) -> &[u8] {
        &self.record
    }
}

/// A ZIP archive writer which acts over [`Write`] implementers.
///
/// # Note
/// - [`ZipFileWriter::close()`] must be called for the written data to become a valid archive.
#[derive(Debug)]
pub struct ZipFileWriter<W> {
    pub(crate) writer: OffsetWriter<W>,
    pub(crate) cd_entries: Vec<PendingEntry>,
    pub(crate) compression_level: u32,
}

impl<W: Write> ZipFileWriter<W> {
    /// Construct a new ZIP file writer from a writer.
    pub fn new(writer: W) -> Self {
        Self { writer: OffsetWriter::new(writer), cd_entries: Vec::new(), compression_level: DEFAULT_LEVEL }
    }

    /// Construct a new ZIP file writer which appends to `offset` bytes of existing data.
    ///
    /// Offsets recorded for new entries account for the existing data.
    pub fn with_offset(writer: W, offset: u64) -> Self {
        Self {
            writer: OffsetWriter::with_offset(writer, offset),
            cd_entries: Vec::new(),
            compression_level: DEFAULT_LEVEL,
        }
    }

    /// Sets the deflate level (0 to 9) used for compressed entries.
    pub fn compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(9);
        self
    }

    /// Write a new ZIP entry of known size and data.
    pub fn write_entry_whole<E: Into<NewEntry>>(&mut self, entry: E) -> Result<()> {
        EntryWholeWriter::from_raw(self, entry.into()).write()
    }

    /// Queues an existing central directory record to be rewritten on close, ahead of any entries written after it.
    pub(crate) fn push_existing(&mut self, record: &CentralDirectoryRecord) {
        self.cd_entries.push(PendingEntry::from_record(record));
    }

    /// Returns the central directory records queued so far, in write order.
    pub fn entries(&self) -> &[PendingEntry] {
        &self.cd_entries
    }

    /// Returns the offset at which the next byte will be written.
    pub fn offset(&self) -> u64 {
        self.writer.offset()
    }

    /// Returns a mutable reference to the inner writer.
    ///
    /// Care should be taken when using this inner writer as doing so may invalidate internal state of this writer.
    pub fn inner_mut(&mut self) -> &mut W {
        self.writer.inner_mut()
    }

    /// Consumes this writer without writing a central directory.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Consumes this ZIP writer and completes all closing tasks.
    ///
    /// This includes:
    /// - Writing all central directory records contiguously from the current offset.
    /// - Writing an end of central directory record bounding exactly those records.
    ///
    /// Failure to call this function would leave the written data without a directory.
    #[tracing::instrument(level = "debug", skip(self), fields(entries = self.cd_entries.len()))]
    pub fn close(mut self) -> Result<W> {
        let cd_offset = self.writer.offset();

        let mut directory = Vec::with_capacity(self.cd_entries.iter().map(|entry| entry.record.len()).sum());
        for entry in &self.cd_entries {
            directory.extend_from_slice(&entry.record);
        }

        let num_entries: u16 =
            self.cd_entries.len().try_into().map_err(|_| ZipError::Zip64Needed("more than 65535 entries"))?;
        let directory_size: u32 =
            directory.len().try_into().map_err(|_| ZipError::Zip64Needed("central directory larger than 4GiB"))?;
        let directory_offset: u32 =
            cd_offset.try_into().map_err(|_| ZipError::Zip64Needed("central directory starts beyond 4GiB"))?;

        let record = EndOfCentralDirectoryRecord {
            raw: RawEndOfCentralDirectoryRecord::new(num_entries, directory_size, directory_offset),
            zip_file_comment: Vec::new(),
        };
        eocdr::write(&mut directory, &record);

        self.writer.write_all(&directory)?;
        self.writer.flush()?;

        tracing::debug!(cd_offset, directory_size, "wrote central directory");
        Ok(self.writer.into_inner())
    }
}
