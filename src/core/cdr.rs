// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312

use crate::core::{raw, raw_deref, SIGNATURE_LENGTH};

pub const SIGNATURE: u32 = 0x02014b50;

raw! {
    RawCentralDirectoryRecord {
        version_made_by, u16, read_u16, write_u16,
        version_needed_to_extract, u16, read_u16, write_u16,
        general_purpose_bit_flag, u16, read_u16, write_u16,
        compression_method, u16, read_u16, write_u16,
        last_mod_file_time, u16, read_u16, write_u16,
        last_mod_file_date, u16, read_u16, write_u16,
        crc_32, u32, read_u32, write_u32,
        compressed_size, u32, read_u32, write_u32,
        uncompressed_size, u32, read_u32, write_u32,
        file_name_length, u16, read_u16, write_u16,
        extra_field_length, u16, read_u16, write_u16,
        file_comment_length, u16, read_u16, write_u16,
        disk_number_start, u16, read_u16, write_u16,
        internal_file_attributes, u16, read_u16, write_u16,
        external_file_attributes, u32, read_u32, write_u32,
        relative_offset_of_local_header, u32, read_u32, write_u32
    }
}

/// The length in bytes of the fixed portion of a central directory record, including its signature.
pub const LENGTH: usize = SIGNATURE_LENGTH + RawCentralDirectoryRecord::LENGTH;

impl RawCentralDirectoryRecord {
    /// Returns the length of the variable-length tail (name, extra field, and comment) following the fixed fields.
    pub fn tail_length(&self) -> usize {
        self.file_name_length as usize + self.extra_field_length as usize + self.file_comment_length as usize
    }

    /// Returns the full on-disk length of this record.
    pub fn record_length(&self) -> usize {
        LENGTH + self.tail_length()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CentralDirectoryRecord {
    pub raw: RawCentralDirectoryRecord,
    pub file_name: Vec<u8>,
    pub extra_field: Vec<u8>,
    pub file_comment: Vec<u8>,
}

raw_deref!(CentralDirectoryRecord, RawCentralDirectoryRecord);

impl CentralDirectoryRecord {
    /// Returns the file name, replacing any invalid UTF-8 sequences.
    pub fn file_name_lossy(&self) -> String {
        String::from_utf8_lossy(&self.file_name).into_owned()
    }
}

/// Reads the fixed portion of a central directory record from the given cursor.
///
/// This function does so by:
/// - asserting the signature of the central directory record
/// - reading the raw central directory record
#[tracing::instrument(level = "trace", skip(reader))]
pub(crate) fn read_raw(reader: &mut ByteReader<'_>) -> Result<RawCentralDirectoryRecord> {
    crate::utils::assert_signature(reader, SIGNATURE)?;
    raw_read(reader)
}

/// Reads a central directory record from the given cursor.
///
/// This function does so by:
/// - asserting the signature of the central directory record
/// - reading the raw central directory record
/// - reading the file name
/// - reading the extra field
/// - reading the file comment
#[tracing::instrument(level = "trace", skip(reader))]
pub(crate) fn read(reader: &mut ByteReader<'_>) -> Result<CentralDirectoryRecord> {
    let raw = read_raw(reader)?;
    let file_name = reader.read_bytes(raw.file_name_length as usize)?.to_vec();
    let extra_field = reader.read_bytes(raw.extra_field_length as usize)?.to_vec();
    let file_comment = reader.read_bytes(raw.file_comment_length as usize)?.to_vec();

    Ok(CentralDirectoryRecord { raw, file_name, extra_field, file_comment })
}

/// Appends a central directory record to the given buffer.
///
/// This function does so by:
/// - writing the signature of the central directory record
/// - writing the raw central directory record
/// - writing the file name
/// - writing the extra field
/// - writing the file comment
pub fn write(buffer: &mut Vec<u8>, record: &CentralDirectoryRecord) {
    crate::utils::write_u32(buffer, SIGNATURE);

    raw_write(buffer, &record.raw);
    buffer.extend_from_slice(&record.file_name);
    buffer.extend_from_slice(&record.extra_field);
    buffer.extend_from_slice(&record.file_comment);
}
