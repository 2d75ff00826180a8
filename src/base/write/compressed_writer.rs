// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::Result;
use crate::spec::{Compression, CompressionChoice};

use std::borrow::Cow;
use std::io::Write;

use flate2::write::DeflateEncoder;

/// The deflate level used when none is configured.
pub const DEFAULT_LEVEL: u32 = 9;

/// An entry's data as it will be stored, alongside the method which produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedData<'a> {
    pub compression: Compression,
    pub data: Cow<'a, [u8]>,
}

/// Compresses an entry's data per the requested choice.
///
/// - [`CompressionChoice::Auto`] deflates and keeps the result only if it is strictly smaller than the input,
///   storing the input otherwise (including when the encoder itself fails).
/// - An explicit method is always honoured.
#[tracing::instrument(level = "trace", skip(data))]
pub fn compress(data: &[u8], choice: CompressionChoice, level: u32) -> Result<CompressedData<'_>> {
    match choice {
        CompressionChoice::Method(Compression::Stored) => Ok(stored(data)),
        CompressionChoice::Method(Compression::Deflate) => {
            Ok(CompressedData { compression: Compression::Deflate, data: Cow::Owned(deflate(data, level)?) })
        }
        CompressionChoice::Auto => match deflate(data, level) {
            Ok(deflated) if deflated.len() < data.len() => {
                Ok(CompressedData { compression: Compression::Deflate, data: Cow::Owned(deflated) })
            }
            Ok(_) => Ok(stored(data)),
            Err(err) => {
                tracing::warn!(%err, "deflate failed, storing entry uncompressed");
                Ok(stored(data))
            }
        },
    }
}

fn stored(data: &[u8]) -> CompressedData<'_> {
    CompressedData { compression: Compression::Stored, data: Cow::Borrowed(data) }
}

/// Deflates data as a raw stream (no zlib or gzip framing).
fn deflate(data: &[u8], level: u32) -> std::io::Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(data.len() / 2), flate2::Compression::new(level.min(9)));
    encoder.write_all(data)?;
    encoder.finish()
}
