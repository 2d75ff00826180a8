// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A forward-only cursor over the entries of an archive.
//!
//! The cursor holds only the end of central directory record and the offset of the next central directory record;
//! each [`ScanCursor::advance()`] decodes one record and the local file header it points at. Column values are
//! computed on request, so entry data is only read when the `rawdata` or `data` columns are asked for.

use crate::base::read::column::{Column, ColumnValue};
use crate::base::read::io::compressed::decompress;
use crate::base::read::io::locator;
use crate::base::read::{read_central_record, read_stored_data, resolve_entry};
use crate::core::cdr;
use crate::core::eocdr::RawEndOfCentralDirectoryRecord;
use crate::entry::StoredEntry;
use crate::error::Result;
use crate::spec::Compression;
use crate::utils::ByteReader;

use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

#[derive(Debug)]
enum Source {
    /// The underlying data was empty.
    Empty,
    /// Walking the central directory on disk.
    Directory { start: u64, end: u64, next_offset: u64 },
    /// Walking serialised central directory records held in memory, such as those of an open write transaction.
    Snapshot { records: Vec<Vec<u8>>, next_index: usize },
}

/// A forward-only scanning cursor over an archive held by any [`Read`] + [`Seek`] implementer.
#[derive(Debug)]
pub struct ScanCursor<R> {
    reader: R,
    eocdr: Option<RawEndOfCentralDirectoryRecord>,
    source: Source,
    current: Option<StoredEntry>,
    row_id: i64,
    eof: bool,
}

impl ScanCursor<File> {
    /// Opens the archive at the given path for scanning.
    #[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(File::open(path)?)
    }
}

impl ScanCursor<Cursor<Vec<u8>>> {
    /// Constructs a cursor over an archive held entirely in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        Self::new(Cursor::new(bytes.into()))
    }
}

impl<R> ScanCursor<R>
where
    R: Read + Seek,
{
    /// Constructs a cursor by locating the archive's end of central directory record.
    ///
    /// Empty data yields a cursor with no rows for which [`ScanCursor::is_empty_archive()`] is true.
    pub fn new(mut reader: R) -> Result<Self> {
        let (eocdr, source) = match locator::eocdr(&mut reader)? {
            Some(located) => {
                let start = u64::from(located.record.offset_of_start_of_central_directory);
                let end = located.record.directory_end();
                (Some(located.record), Source::Directory { start, end, next_offset: start })
            }
            None => {
                tracing::debug!("archive is empty");
                (None, Source::Empty)
            }
        };

        Ok(Self { reader, eocdr, source, current: None, row_id: 0, eof: false })
    }

    /// Constructs a cursor over serialised central directory records rather than the reader's own directory.
    ///
    /// The records' local header offsets must be valid within the reader.
    pub(crate) fn from_snapshot(reader: R, records: Vec<Vec<u8>>) -> Self {
        let source = Source::Snapshot { records, next_index: 0 };
        Self { reader, eocdr: None, source, current: None, row_id: 0, eof: false }
    }

    /// Returns whether the underlying data was empty.
    pub fn is_empty_archive(&self) -> bool {
        matches!(self.source, Source::Empty)
    }

    /// Returns the end of central directory record the scan is anchored to, if any.
    pub fn end_of_central_directory(&self) -> Option<&RawEndOfCentralDirectoryRecord> {
        self.eocdr.as_ref()
    }

    /// Rewinds the cursor to before the first row.
    pub fn reset(&mut self) {
        match &mut self.source {
            Source::Empty => {}
            Source::Directory { start, next_offset, .. } => *next_offset = *start,
            Source::Snapshot { next_index, .. } => *next_index = 0,
        }

        self.current = None;
        self.row_id = 0;
        self.eof = false;
    }

    /// Moves to the next row, returning `false` once the rows are exhausted.
    pub fn advance(&mut self) -> Result<bool> {
        self.current = None;
        if self.eof {
            return Ok(false);
        }

        let record = match &mut self.source {
            Source::Empty => None,
            Source::Directory { end, next_offset, .. } if *next_offset < *end => {
                let record = read_central_record(&mut self.reader, *next_offset)?;
                *next_offset += record.record_length() as u64;
                Some(record)
            }
            Source::Directory { .. } => None,
            Source::Snapshot { records, next_index } => match records.get(*next_index) {
                Some(bytes) => {
                    let record = cdr::read(&mut ByteReader::new(bytes))?;
                    *next_index += 1;
                    Some(record)
                }
                None => None,
            },
        };

        match record {
            Some(record) => {
                self.current = Some(resolve_entry(&mut self.reader, record)?);
                self.row_id += 1;
                Ok(true)
            }
            None => {
                self.eof = true;
                Ok(false)
            }
        }
    }

    /// Returns whether the rows have been exhausted.
    pub fn at_end(&self) -> bool {
        self.eof
    }

    /// Returns the current row's id, counting from 1 in scan order.
    pub fn row_id(&self) -> i64 {
        self.row_id
    }

    /// Returns the entry at the current row.
    pub fn current(&self) -> Option<&StoredEntry> {
        self.current.as_ref()
    }

    /// Reads the current entry's data exactly as stored.
    ///
    /// Returns `None` when there is no current row, or for an empty directory entry.
    pub fn raw_data(&mut self) -> Result<Option<Vec<u8>>> {
        let Some(entry) = self.current.as_ref() else {
            return Ok(None);
        };
        if entry.uncompressed_size() == 0 {
            return Ok(empty_entry_data(entry));
        }

        read_stored_data(&mut self.reader, entry).map(Some)
    }

    /// Reads and decompresses the current entry's data.
    ///
    /// Returns `None` when there is no current row, for an empty directory entry, or when the entry uses a method
    /// this crate cannot decompress.
    pub fn data(&mut self) -> Result<Option<Vec<u8>>> {
        let Some(entry) = self.current.as_ref() else {
            return Ok(None);
        };
        if entry.uncompressed_size() == 0 {
            return Ok(empty_entry_data(entry));
        }
        if Compression::try_from(entry.method()).is_err() {
            return Ok(None);
        }

        let stored = read_stored_data(&mut self.reader, entry)?;
        decompress(&stored, entry.uncompressed_size(), entry.method()).map(Some)
    }

    /// Computes the value of a column at the current row.
    ///
    /// Every column is NULL when there is no current row.
    pub fn column(&mut self, column: Column) -> Result<ColumnValue> {
        match column {
            Column::RawData => return Ok(self.raw_data()?.map_or(ColumnValue::Null, ColumnValue::Blob)),
            Column::Data => return Ok(self.data()?.map_or(ColumnValue::Null, ColumnValue::Blob)),
            _ => {}
        }

        let Some(entry) = self.current.as_ref() else {
            return Ok(ColumnValue::Null);
        };

        let value = match column {
            Column::Name => ColumnValue::Text(entry.name()),
            Column::Mode => ColumnValue::Integer(entry.mode().0.into()),
            Column::Mtime => ColumnValue::Integer(entry.mtime().into()),
            Column::Size => ColumnValue::Integer(entry.central_directory_record().uncompressed_size.into()),
            Column::Method => ColumnValue::Integer(entry.method().into()),
            Column::RawData | Column::Data => ColumnValue::Null,
        };

        Ok(value)
    }

    /// Consumes this cursor and returns the inner reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Zero-length files read as an empty blob, while directories have no data at all.
fn empty_entry_data(entry: &StoredEntry) -> Option<Vec<u8>> {
    match entry.is_dir() {
        true => None,
        false => Some(Vec::new()),
    }
}
