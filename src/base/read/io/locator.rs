// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! <https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316>
//!
//! As with other ZIP libraries, we face the predicament that the end of central directory record may contain a
//! variable-length file comment. As a result, we cannot just make the assumption that the start of this record is
//! 22 bytes from the end of the data - we must locate it ourselves.
//!
//! The tail of the data (at most [`SEARCH_WINDOW`] bytes) is read in a single pass and searched in reverse for the
//! signature. Comments long enough to push the record out of that window are not supported.

use crate::base::read::io::read_at;
use crate::core::eocdr::{self, RawEndOfCentralDirectoryRecord};
use crate::core::SIGNATURE_LENGTH;
use crate::error::{Result, ZipError};
use crate::utils::ByteReader;

use std::io::{Read, Seek, SeekFrom};

/// The number of bytes at the end of the data searched for the EOCDR signature, equal to 64KiB.
pub const SEARCH_WINDOW: u64 = 64 * 1024;

/// An end of central directory record alongside the offset of its signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocatedEocdr {
    pub offset: u64,
    pub record: RawEndOfCentralDirectoryRecord,
}

/// Locate and decode the `end of central directory record`.
///
/// Returns `Ok(None)` if the data is empty, which is treated as an archive without entries rather than an error.
#[tracing::instrument(level = "debug", skip(reader))]
pub fn eocdr<R>(reader: &mut R) -> Result<Option<LocatedEocdr>>
where
    R: Read + Seek,
{
    let length = reader.seek(SeekFrom::End(0))?;
    if length == 0 {
        return Ok(None);
    }

    let window_start = length.saturating_sub(SEARCH_WINDOW);
    let buffer = read_at(reader, window_start, (length - window_start) as usize)?;

    // The signature may only start where the rest of the fixed record still fits in the buffer.
    let search_end = match buffer.len().checked_sub(eocdr::LENGTH - SIGNATURE_LENGTH) {
        Some(search_end) => search_end,
        None => return Err(ZipError::UnableToLocateEOCDR),
    };
    let signature = eocdr::SIGNATURE.to_le_bytes();

    let match_index = reverse_search_buffer(&buffer[..search_end], &signature).ok_or(ZipError::UnableToLocateEOCDR)?;
    let start = match_index + 1 - SIGNATURE_LENGTH;

    let record = eocdr::read_raw(&mut ByteReader::at(&buffer, start))?;
    let offset = window_start + start as u64;

    if record.directory_end() > offset {
        return Err(ZipError::CorruptArchive(format!(
            "central directory ({} bytes at offset {}) overlaps its end record at offset {offset}",
            record.size_of_the_central_directory, record.offset_of_start_of_central_directory
        )));
    }

    tracing::debug!(offset, entries = record.total_number_of_entries_in_the_central_directory, "located EOCDR");
    Ok(Some(LocatedEocdr { offset, record }))
}

/// A naive reverse linear search along the buffer for the specified signature bytes.
///
/// Returns the index of the last byte of the right-most match.
pub(crate) fn reverse_search_buffer(buffer: &[u8], signature: &[u8]) -> Option<usize> {
    'outer: for index in (0..buffer.len()).rev() {
        for (signature_index, signature_byte) in signature.iter().rev().enumerate() {
            if let Some(next_index) = index.checked_sub(signature_index) {
                if buffer[next_index] != *signature_byte {
                    continue 'outer;
                }
            } else {
                break 'outer;
            }
        }
        return Some(index);
    }
    None
}
