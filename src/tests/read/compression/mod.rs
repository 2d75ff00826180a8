// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::base::read::decompress;
use crate::base::write::compress;
use crate::error::{ErrorKind, ZipError};
use crate::spec::{Compression, CompressionChoice};

use flate2::write::DeflateEncoder;
use std::io::Write;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut \
                     labore et dolore magna aliqua. Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::new(), flate2::Compression::best());
    encoder.write_all(data).expect("failed to write to encoder");
    encoder.finish().expect("failed to finish encoder")
}

#[test]
fn stored_test() {
    let data = decompress(b"foo bar", 7, 0).expect("failed to decompress stored data");
    assert_eq!(data, b"foo bar");
}

#[test]
fn deflate_test() {
    let deflated = deflate(LOREM.as_bytes());

    let data = decompress(&deflated, LOREM.len() as u64, 8).expect("failed to inflate data");
    assert_eq!(data, LOREM.as_bytes());
}

#[test]
fn deflate_empty_test() {
    let deflated = deflate(&[]);

    let data = decompress(&deflated, 0, 8).expect("failed to inflate data");
    assert!(data.is_empty());
}

#[test]
fn deflate_declared_too_small_test() {
    let deflated = deflate(LOREM.as_bytes());

    let err = decompress(&deflated, LOREM.len() as u64 - 1, 8).expect_err("inflated past the declared size");
    assert_eq!(err.kind(), ErrorKind::CorruptStream);
}

#[test]
fn deflate_declared_too_large_test() {
    let deflated = deflate(LOREM.as_bytes());

    let err = decompress(&deflated, LOREM.len() as u64 + 1, 8).expect_err("inflated short of the declared size");
    assert_eq!(err.kind(), ErrorKind::CorruptStream);
}

#[test]
fn deflate_truncated_stream_test() {
    let deflated = deflate(LOREM.as_bytes());

    let err = decompress(&deflated[..deflated.len() / 2], LOREM.len() as u64, 8)
        .expect_err("inflated a stream without its end marker");
    assert_eq!(err.kind(), ErrorKind::CorruptStream);
}

#[test]
fn unsupported_method_test() {
    let err = decompress(b"foo bar", 7, 12).expect_err("decompressed an unsupported method");
    assert!(matches!(err, ZipError::UnsupportedMethod(12)));
}

#[test]
fn auto_stores_incompressible_test() {
    let compressed = compress(b"hello", CompressionChoice::Auto, 9).expect("failed to compress");

    assert_eq!(compressed.compression, Compression::Stored);
    assert_eq!(&*compressed.data, b"hello");
}

#[test]
fn auto_deflates_compressible_test() {
    let data = LOREM.repeat(8);
    let compressed = compress(data.as_bytes(), CompressionChoice::Auto, 9).expect("failed to compress");

    assert_eq!(compressed.compression, Compression::Deflate);
    assert!(compressed.data.len() < data.len());

    let inflated = decompress(&compressed.data, data.len() as u64, 8).expect("failed to inflate");
    assert_eq!(inflated, data.as_bytes());
}

#[test]
fn auto_level_zero_stores_test() {
    let data = LOREM.repeat(8);
    let compressed = compress(data.as_bytes(), CompressionChoice::Auto, 0).expect("failed to compress");

    assert_eq!(compressed.compression, Compression::Stored);
}

#[test]
fn explicit_deflate_test() {
    let compressed = compress(b"hello", Compression::Deflate.into(), 9).expect("failed to compress");
    assert_eq!(compressed.compression, Compression::Deflate);

    let inflated = decompress(&compressed.data, 5, 8).expect("failed to inflate");
    assert_eq!(inflated, b"hello");
}

#[test]
fn explicit_stored_test() {
    let data = LOREM.repeat(8);
    let compressed = compress(data.as_bytes(), Compression::Stored.into(), 9).expect("failed to compress");

    assert_eq!(compressed.compression, Compression::Stored);
    assert_eq!(compressed.data.len(), data.len());
}
