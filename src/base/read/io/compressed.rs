// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};
use crate::spec::Compression;

use flate2::{Decompress, FlushDecompress, Status};

/// Decompresses an entry's stored bytes given its declared uncompressed size and method code.
///
/// Stored data is returned verbatim. Deflated data is inflated as a raw stream (no zlib or gzip framing) into a
/// buffer sized from the declared uncompressed size, which is trusted; callers wishing to cap memory use must check
/// it before calling. The stream must reach its end marker and produce exactly the declared number of bytes.
#[tracing::instrument(level = "trace", skip(data))]
pub fn decompress(data: &[u8], uncompressed_size: u64, method: u16) -> Result<Vec<u8>> {
    match Compression::try_from(method)? {
        Compression::Stored => Ok(data.to_vec()),
        Compression::Deflate => inflate(data, uncompressed_size),
    }
}

fn inflate(data: &[u8], uncompressed_size: u64) -> Result<Vec<u8>> {
    let expected = usize::try_from(uncompressed_size)
        .map_err(|_| ZipError::CorruptStream(format!("declared size {uncompressed_size} is not addressable")))?;

    // One spare byte so that a stream longer than declared is observed rather than stalled.
    let mut output = Vec::with_capacity(expected.saturating_add(1));
    let mut inflater = Decompress::new(false);

    loop {
        let consumed_before = inflater.total_in();
        let produced_before = inflater.total_out();
        let input = &data[consumed_before as usize..];

        let status = inflater
            .decompress_vec(input, &mut output, FlushDecompress::Finish)
            .map_err(|err| ZipError::CorruptStream(err.to_string()))?;

        if output.len() > expected {
            return Err(ZipError::CorruptStream(format!("stream inflates to more than {expected} bytes")));
        }

        match status {
            Status::StreamEnd => break,
            _ if inflater.total_in() == consumed_before && inflater.total_out() == produced_before => {
                return Err(ZipError::CorruptStream(String::from("stream ended before its end marker")));
            }
            _ => continue,
        }
    }

    if output.len() != expected {
        return Err(ZipError::CorruptStream(format!("stream inflated to {} bytes, expected {expected}", output.len())));
    }

    Ok(output)
}
