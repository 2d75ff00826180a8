// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437

use crate::core::{raw, raw_deref, SIGNATURE_LENGTH};

pub const SIGNATURE: u32 = 0x04034b50;

raw! {
    RawLocalFileHeader {
        version_needed_to_extract, u16, read_u16, write_u16,
        general_purpose_flags, u16, read_u16, write_u16,
        compression_method, u16, read_u16, write_u16,
        last_mod_file_time, u16, read_u16, write_u16,
        last_mod_file_date, u16, read_u16, write_u16,
        crc_32, u32, read_u32, write_u32,
        compressed_size, u32, read_u32, write_u32,
        uncompressed_size, u32, read_u32, write_u32,
        file_name_length, u16, read_u16, write_u16,
        extra_field_length, u16, read_u16, write_u16
    }
}

/// The length in bytes of the fixed portion of a local file header, including its signature.
pub const LENGTH: usize = SIGNATURE_LENGTH + RawLocalFileHeader::LENGTH;

impl RawLocalFileHeader {
    /// Returns the offset at which the entry's data begins, given the offset of this header.
    ///
    /// The name and extra field lengths used are this header's own, which may differ from those held within the
    /// matching central directory record.
    pub fn data_offset(&self, header_offset: u64) -> u64 {
        header_offset + LENGTH as u64 + self.file_name_length as u64 + self.extra_field_length as u64
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalFileHeader {
    pub raw: RawLocalFileHeader,
    pub file_name: Vec<u8>,
    pub extra_field: Vec<u8>,
}

raw_deref!(LocalFileHeader, RawLocalFileHeader);

/// Reads the fixed portion of a local file header from the given cursor.
///
/// This function does so by:
/// - asserting the signature of the local file header
/// - reading the raw local file header
#[tracing::instrument(level = "trace", skip(reader))]
pub(crate) fn read_raw(reader: &mut ByteReader<'_>) -> Result<RawLocalFileHeader> {
    crate::utils::assert_signature(reader, SIGNATURE)?;
    raw_read(reader)
}

/// Appends a local file header to the given buffer.
///
/// This function does so by:
/// - writing the signature of the local file header
/// - writing the raw local file header
/// - writing the file name
/// - writing the extra field
pub fn write(buffer: &mut Vec<u8>, header: &LocalFileHeader) {
    crate::utils::write_u32(buffer, SIGNATURE);

    raw_write(buffer, &header.raw);
    buffer.extend_from_slice(&header.file_name);
    buffer.extend_from_slice(&header.extra_field);
}
