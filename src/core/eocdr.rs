// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316

use crate::core::{raw, raw_deref, SIGNATURE_LENGTH};

pub const SIGNATURE: u32 = 0x06054b50;

raw! {
    RawEndOfCentralDirectoryRecord {
        number_of_this_disk, u16, read_u16, write_u16,
        number_of_the_disk_with_the_start_of_the_central_directory, u16, read_u16, write_u16,
        total_number_of_entries_in_the_central_directory_on_this_disk, u16, read_u16, write_u16,
        total_number_of_entries_in_the_central_directory, u16, read_u16, write_u16,
        size_of_the_central_directory, u32, read_u32, write_u32,
        offset_of_start_of_central_directory, u32, read_u32, write_u32,
        zip_file_comment_length, u16, read_u16, write_u16
    }
}

/// The length in bytes of the fixed portion of an end of central directory record, including its signature.
pub const LENGTH: usize = SIGNATURE_LENGTH + RawEndOfCentralDirectoryRecord::LENGTH;

impl RawEndOfCentralDirectoryRecord {
    /// Constructs the record describing a single-disk directory of `entries` records spanning `size` bytes from
    /// `offset`.
    pub fn new(entries: u16, size: u32, offset: u32) -> Self {
        Self {
            number_of_this_disk: 0,
            number_of_the_disk_with_the_start_of_the_central_directory: 0,
            total_number_of_entries_in_the_central_directory_on_this_disk: entries,
            total_number_of_entries_in_the_central_directory: entries,
            size_of_the_central_directory: size,
            offset_of_start_of_central_directory: offset,
            zip_file_comment_length: 0,
        }
    }

    /// Returns the offset one past the last byte of the central directory.
    pub fn directory_end(&self) -> u64 {
        self.offset_of_start_of_central_directory as u64 + self.size_of_the_central_directory as u64
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndOfCentralDirectoryRecord {
    pub raw: RawEndOfCentralDirectoryRecord,
    pub zip_file_comment: Vec<u8>,
}

raw_deref!(EndOfCentralDirectoryRecord, RawEndOfCentralDirectoryRecord);

/// Reads the fixed portion of an end of central directory record from the given cursor.
///
/// This function does so by:
/// - asserting the signature of the end of central directory record
/// - reading the raw end of central directory record
#[tracing::instrument(level = "trace", skip(reader))]
pub(crate) fn read_raw(reader: &mut ByteReader<'_>) -> Result<RawEndOfCentralDirectoryRecord> {
    crate::utils::assert_signature(reader, SIGNATURE)?;
    raw_read(reader)
}

/// Appends the end of central directory record to the given buffer.
///
/// This function does so by:
/// - writing the signature of the end of central directory record
/// - writing the raw end of central directory record
/// - writing the zip file comment
pub fn write(buffer: &mut Vec<u8>, record: &EndOfCentralDirectoryRecord) {
    crate::utils::write_u32(buffer, SIGNATURE);

    raw_write(buffer, &record.raw);
    buffer.extend_from_slice(&record.zip_file_comment);
}
