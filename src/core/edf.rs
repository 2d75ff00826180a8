// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#452

use crate::core::raw;
use crate::error::ZipError;

raw! {
    RawExtensibleDataFieldHeader {
        header_id, u16, read_u16, write_u16,
        data_size, u16, read_u16, write_u16
    }
}

/// A single `(id, length, data)` triple borrowed from an extra field span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtensibleDataField<'a> {
    pub header_id: u16,
    pub data: &'a [u8],
}

/// An iterator over the extensible data fields held within an extra field span.
///
/// Iteration stops at the first triple which does not fit within the span; those trailing bytes are ignored.
pub struct ExtensibleDataFields<'a> {
    reader: ByteReader<'a>,
}

impl<'a> Iterator for ExtensibleDataFields<'a> {
    type Item = ExtensibleDataField<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = raw_read(&mut self.reader).ok()?;
        let data = self.reader.read_bytes(header.data_size as usize).ok()?;

        Some(ExtensibleDataField { header_id: header.header_id, data })
    }
}

/// Returns an iterator over the extensible data fields within the given extra field span.
pub fn iter(extra_field: &[u8]) -> ExtensibleDataFields<'_> {
    ExtensibleDataFields { reader: ByteReader::new(extra_field) }
}

/// Appends an extensible data field to the given buffer.
pub fn write(buffer: &mut Vec<u8>, header_id: u16, data: &[u8]) -> Result<()> {
    let data_size = data.len().try_into().map_err(|_| ZipError::ExtraFieldTooLarge)?;

    raw_write(buffer, &RawExtensibleDataFieldHeader { header_id, data_size });
    buffer.extend_from_slice(data);
    Ok(())
}
