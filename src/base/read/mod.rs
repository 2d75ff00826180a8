// Copyright (c) 2022-2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports reading ZIP archives.
//!
//! # Example
//! ```no_run
//! # use ziptable::base::read::{Column, ScanCursor};
//! # use ziptable::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut cursor = ScanCursor::open("./foo.zip")?;
//!
//! while cursor.advance()? {
//!     let name = cursor.column(Column::Name)?;
//!     let data = cursor.column(Column::Data)?;
//!     println!("{name:?}: {data:?}");
//! }
//! #   Ok(())
//! # }
//! ```

pub mod column;
pub mod cursor;

pub(crate) mod io;

pub use column::{Column, ColumnValue};
pub use cursor::ScanCursor;
pub use io::compressed::decompress;
pub use io::locator::SEARCH_WINDOW;

use crate::core::{cdr, lfh};
use crate::entry::StoredEntry;
use crate::error::Result;
use crate::spec::extra_field;
use crate::utils::ByteReader;

use io::read_at;
use std::io::{Read, Seek};

/// Reads the central directory record starting at the given offset.
#[tracing::instrument(level = "trace", skip(reader))]
pub(crate) fn read_central_record<R>(reader: &mut R, offset: u64) -> Result<cdr::CentralDirectoryRecord>
where
    R: Read + Seek,
{
    let mut buffer = read_at(reader, offset, cdr::LENGTH)?;
    let raw = cdr::read_raw(&mut ByteReader::new(&buffer))?;

    buffer.extend(read_at(reader, offset + cdr::LENGTH as u64, raw.tail_length())?);
    cdr::read(&mut ByteReader::new(&buffer))
}

/// Resolves a central directory record into a [`StoredEntry`].
///
/// This function does so by:
/// - reading the fixed portion of the local file header the record points at
/// - computing the data offset from that header's own name and extra field lengths
/// - looking for an extended timestamp within the record's extra field
#[tracing::instrument(level = "trace", skip(reader, record))]
pub(crate) fn resolve_entry<R>(reader: &mut R, record: cdr::CentralDirectoryRecord) -> Result<StoredEntry>
where
    R: Read + Seek,
{
    let header_offset = u64::from(record.relative_offset_of_local_header);
    let buffer = read_at(reader, header_offset, lfh::LENGTH)?;
    let header = lfh::read_raw(&mut ByteReader::new(&buffer))?;

    let data_offset = header.data_offset(header_offset);
    let extended_mtime = extra_field::modification_time(&record.extra_field);

    Ok(StoredEntry { record, header, data_offset, extended_mtime })
}

/// Reads an entry's stored (possibly compressed) data.
pub(crate) fn read_stored_data<R>(reader: &mut R, entry: &StoredEntry) -> Result<Vec<u8>>
where
    R: Read + Seek,
{
    read_at(reader, entry.data_offset, entry.record.compressed_size as usize)
}
