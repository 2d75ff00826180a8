// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// A compression method supported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    Stored,
    Deflate,
}

impl TryFrom<u16> for Compression {
    type Error = ZipError;

    // Convert a u16 stored with little endianness into a supported compression method.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#445
    fn try_from(value: u16) -> Result<Self> {
        match value {
            0 => Ok(Compression::Stored),
            8 => Ok(Compression::Deflate),
            _ => Err(ZipError::UnsupportedMethod(value)),
        }
    }
}

impl From<&Compression> for u16 {
    // Convert a supported compression method into its relevant u16 stored with little endianness.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#445
    fn from(compression: &Compression) -> u16 {
        match compression {
            Compression::Stored => 0,
            Compression::Deflate => 8,
        }
    }
}

impl From<Compression> for u16 {
    fn from(compression: Compression) -> u16 {
        (&compression).into()
    }
}

/// How the compression method of a new entry is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompressionChoice {
    /// Deflate, but only keep the result if it is smaller than the input.
    #[default]
    Auto,
    /// Always use the given method.
    Method(Compression),
}

impl CompressionChoice {
    /// Resolves an optional method code, where `None` selects [`CompressionChoice::Auto`].
    pub fn from_code(code: Option<u16>) -> Result<Self> {
        match code {
            None => Ok(CompressionChoice::Auto),
            Some(code) => Ok(CompressionChoice::Method(Compression::try_from(code)?)),
        }
    }
}

impl From<Compression> for CompressionChoice {
    fn from(compression: Compression) -> Self {
        CompressionChoice::Method(compression)
    }
}
