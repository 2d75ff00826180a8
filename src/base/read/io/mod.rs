// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod compressed;
pub(crate) mod locator;

use crate::error::{Result, ZipError};

use std::io::{Read, Seek, SeekFrom};

/// Read and return exactly `length` bytes starting at `offset`.
///
/// Running out of data before `length` bytes have been read is reported as [`ZipError::TruncatedArchive`]. The
/// buffer grows with the data actually read rather than with the requested length.
pub(crate) fn read_at<R>(reader: &mut R, offset: u64, length: usize) -> Result<Vec<u8>>
where
    R: Read + Seek,
{
    reader.seek(SeekFrom::Start(offset))?;

    let mut buffer = Vec::new();
    reader.by_ref().take(length as u64).read_to_end(&mut buffer)?;

    if buffer.len() < length {
        return Err(ZipError::TruncatedArchive { needed: length, available: buffer.len() });
    }

    Ok(buffer)
}
