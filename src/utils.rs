// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// A bounds-checked little-endian cursor over a borrowed byte buffer.
///
/// Every read advances the cursor's offset and fails with [`ZipError::TruncatedArchive`] rather than reading past
/// the end of the buffer.
#[derive(Debug, Clone)]
pub(crate) struct ByteReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    /// Constructs a new cursor positioned at the start of the buffer.
    pub(crate) fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Constructs a new cursor positioned at the given offset within the buffer.
    pub(crate) fn at(buffer: &'a [u8], offset: usize) -> Self {
        Self { buffer, offset }
    }

    /// Returns the number of bytes left between the cursor and the end of the buffer.
    pub(crate) fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Borrows the next `length` bytes and advances past them.
    pub(crate) fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if length > available {
            return Err(ZipError::TruncatedArchive { needed: length, available });
        }

        let bytes = &self.buffer[self.offset..self.offset + length];
        self.offset += length;
        Ok(bytes)
    }
}

pub(crate) fn write_u16(buffer: &mut Vec<u8>, value: u16) {
    buffer.extend_from_slice(&value.to_le_bytes());
}

pub(crate) fn write_u32(buffer: &mut Vec<u8>, value: u32) {
    buffer.extend_from_slice(&value.to_le_bytes());
}

/// Assert that the next four-byte signature read by the cursor matches the expected signature.
pub(crate) fn assert_signature(reader: &mut ByteReader<'_>, expected: u32) -> Result<()> {
    match reader.read_u32()? {
        actual if actual == expected => Ok(()),
        actual => Err(ZipError::UnexpectedHeaderError(actual, expected)),
    }
}
