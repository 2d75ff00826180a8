// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::edf;
use crate::error::{ErrorKind, ZipError};
use crate::spec::extra_field::{modification_time, parse_extra_fields, ExtendedTimestampField, ExtraField};

fn timestamp_field(time: u32) -> Vec<u8> {
    let mut buffer = Vec::new();
    ExtendedTimestampField::with_modification_time(time).write(&mut buffer).expect("failed to write field");
    buffer
}

#[test]
fn timestamp_layout_test() {
    let buffer = timestamp_field(1700000000);

    assert_eq!(buffer.len(), 9);
    assert_eq!(&buffer[..5], &[0x55, 0x54, 0x05, 0x00, 0x01]);
    assert_eq!(&buffer[5..], &1700000000u32.to_le_bytes());
    assert_eq!(modification_time(&buffer), Some(1700000000));
}

#[test]
fn unknown_fields_skipped_test() {
    let mut buffer = Vec::new();
    edf::write(&mut buffer, 0x7875, &[1, 4, 0xE8, 0x03, 0, 0, 4, 0xE8, 0x03, 0, 0]).expect("failed to write field");
    buffer.extend(timestamp_field(1234));

    let fields = parse_extra_fields(&buffer);
    assert_eq!(fields.len(), 2);
    assert!(matches!(fields[0], ExtraField::Unknown { header_id: 0x7875, .. }));
    assert_eq!(modification_time(&buffer), Some(1234));
}

#[test]
fn trailing_bytes_ignored_test() {
    let mut buffer = timestamp_field(1234);
    buffer.extend_from_slice(&[0x01, 0x02, 0x03]);

    assert_eq!(parse_extra_fields(&buffer).len(), 1);
    assert_eq!(modification_time(&buffer), Some(1234));
}

#[test]
fn incomplete_field_ignored_test() {
    // A header claiming more data than remains in the span.
    let buffer = [0x55, 0x54, 0x05, 0x00, 0x01, 0x02];
    assert!(parse_extra_fields(&buffer).is_empty());
    assert_eq!(modification_time(&buffer), None);
}

#[test]
fn flag_without_time_test() {
    let mut buffer = Vec::new();
    edf::write(&mut buffer, 0x5455, &[0x01, 0x02]).expect("failed to write field");

    assert!(matches!(parse_extra_fields(&buffer)[0], ExtraField::Unknown { header_id: 0x5455, .. }));
    assert_eq!(modification_time(&buffer), None);
}

#[test]
fn access_time_only_test() {
    let mut buffer = Vec::new();
    edf::write(&mut buffer, 0x5455, &[0x02, 0x10, 0x20, 0x30, 0x40]).expect("failed to write field");

    let fields = parse_extra_fields(&buffer);
    let expected = ExtendedTimestampField { flags: 0x02, modification_time: None };
    assert_eq!(fields, [ExtraField::ExtendedTimestamp(expected)]);
    assert_eq!(modification_time(&buffer), None);
}

#[test]
fn last_timestamp_wins_test() {
    let mut buffer = timestamp_field(1);
    buffer.extend(timestamp_field(2));

    assert_eq!(modification_time(&buffer), Some(2));
}

#[test]
fn oversized_field_rejected_test() {
    let mut buffer = Vec::new();
    let err = edf::write(&mut buffer, 0x7875, &vec![0; 65536]).expect_err("accepted a field over 65535 bytes");

    assert!(matches!(err, ZipError::ExtraFieldTooLarge));
    assert_eq!(err.kind(), ErrorKind::Constraint);
    assert!(buffer.is_empty());

    edf::write(&mut buffer, 0x7875, &vec![0; 65535]).expect("rejected a field of 65535 bytes");
    assert_eq!(buffer.len(), 4 + 65535);
}
