// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod offset;

use crate::base::read::{Column, ScanCursor};
use crate::base::write::{ArchiveBuilder, ZipFileWriter};
use crate::core::{cdr, eocdr, lfh};
use crate::entry::NewEntry;
use crate::error::{ErrorKind, ZipError};
use crate::utils::ByteReader;

use std::vec::Vec;

#[test]
fn empty() {
    crate::tests::init_logger();

    let archive = ZipFileWriter::new(Vec::<u8>::new()).close().expect("failed to close writer");
    assert_eq!(archive.len(), eocdr::LENGTH);

    let mut cursor = ScanCursor::from_bytes(archive).expect("failed to open cursor");
    assert!(!cursor.advance().expect("failed to advance"));
}

#[test]
fn single_entry_layout() {
    crate::tests::init_logger();

    let mut writer = ZipFileWriter::new(Vec::<u8>::new());
    writer.write_entry_whole(NewEntry::file("a.txt", "hello").mtime(1700000000)).expect("failed to write entry");
    let archive = writer.close().expect("failed to close writer");

    let header = lfh::read_raw(&mut ByteReader::new(&archive)).expect("failed to read local file header");
    assert_eq!(header.version_needed_to_extract, 20);
    assert_eq!(header.general_purpose_flags, 0x0800);
    assert_eq!(header.compression_method, 0);
    assert_eq!(header.crc_32, crc32fast::hash(b"hello"));
    assert_eq!((header.compressed_size, header.uncompressed_size), (5, 5));
    assert_eq!((header.file_name_length, header.extra_field_length), (5, 9));
    assert_eq!(&archive[lfh::LENGTH..lfh::LENGTH + 5], b"a.txt");
    assert_eq!(&archive[44..49], b"hello");

    let record = cdr::read(&mut ByteReader::at(&archive, 49)).expect("failed to read central directory record");
    assert_eq!(record.version_made_by, (3 << 8) + 30);
    assert_eq!(record.external_file_attributes, 0o100644 << 16);
    assert_eq!(record.relative_offset_of_local_header, 0);
    assert_eq!(record.extra_field, &archive[lfh::LENGTH + 5..44]);

    let end = eocdr::read_raw(&mut ByteReader::at(&archive, 49 + 60)).expect("failed to read EOCDR");
    assert_eq!(end.total_number_of_entries_in_the_central_directory, 1);
    assert_eq!((end.offset_of_start_of_central_directory, end.size_of_the_central_directory), (49, 60));
    assert_eq!(archive.len(), 49 + 60 + eocdr::LENGTH);
}

#[test]
fn insertion_order() {
    let mut writer = ZipFileWriter::new(Vec::<u8>::new());
    for name in ["b", "a", "c"] {
        writer.write_entry_whole(NewEntry::file(name, name)).expect("failed to write entry");
    }

    let paths: Vec<_> = writer.entries().iter().map(|entry| entry.path().to_owned()).collect();
    assert_eq!(paths, ["b", "a", "c"]);

    let mut cursor = ScanCursor::from_bytes(writer.close().expect("failed to close")).expect("failed to open");
    let mut names = Vec::new();
    while cursor.advance().expect("failed to advance") {
        names.push(cursor.column(Column::Name).expect("no name").as_text().map(str::to_owned));
    }
    assert_eq!(names, [Some(String::from("b")), Some(String::from("a")), Some(String::from("c"))]);
}

#[test]
fn directory_slash_appended() {
    let mut writer = ZipFileWriter::new(Vec::<u8>::new());
    writer.write_entry_whole(NewEntry::directory("docs")).expect("failed to write entry");
    writer.write_entry_whole(NewEntry::directory("src/").mode("drwx------")).expect("failed to write entry");

    let paths: Vec<_> = writer.entries().iter().map(|entry| entry.path().to_owned()).collect();
    assert_eq!(paths, ["docs/", "src/"]);
}

#[test]
fn directory_ignores_method() {
    let mut writer = ZipFileWriter::new(Vec::<u8>::new());
    writer.write_entry_whole(NewEntry::directory("docs").method(8)).expect("failed to write entry");

    let mut cursor = ScanCursor::from_bytes(writer.close().expect("failed to close")).expect("failed to open");
    assert!(cursor.advance().expect("failed to advance"));
    assert_eq!(cursor.column(Column::Method).expect("no method").as_integer(), Some(0));
}

#[test]
fn explicit_deflate_round_trip() {
    let mut writer = ZipFileWriter::new(Vec::<u8>::new());
    writer.write_entry_whole(NewEntry::file("a", "hello").method(8)).expect("failed to write entry");

    let mut cursor = ScanCursor::from_bytes(writer.close().expect("failed to close")).expect("failed to open");
    assert!(cursor.advance().expect("failed to advance"));
    assert_eq!(cursor.column(Column::Method).expect("no method").as_integer(), Some(8));
    assert_eq!(cursor.data().expect("failed to read data").expect("no data"), b"hello");
}

#[test]
fn unsupported_method_rejected() {
    let mut writer = ZipFileWriter::new(Vec::<u8>::new());
    let err = writer.write_entry_whole(NewEntry::file("a", "hello").method(14)).expect_err("accepted method 14");

    assert!(matches!(err, ZipError::UnsupportedMethod(14)));
    assert_eq!(writer.offset(), 0);
    assert!(writer.entries().is_empty());
}

#[test]
fn declared_size_checked() {
    let mut writer = ZipFileWriter::new(Vec::<u8>::new());
    writer.write_entry_whole(NewEntry::file("a", "hello").declared_size(5)).expect("rejected matching size");

    let err = writer.write_entry_whole(NewEntry::file("b", "hello").declared_size(4)).expect_err("accepted size");
    assert!(matches!(err, ZipError::SizeMismatch { declared: 4, actual: 5 }));
    assert_eq!(err.kind(), ErrorKind::Constraint);
    assert_eq!(writer.entries().len(), 1);
}

#[test]
fn mode_checked() {
    let mut writer = ZipFileWriter::new(Vec::<u8>::new());

    let err = writer.write_entry_whole(NewEntry::file("a", "x").mode("drwxr-xr-x")).expect_err("accepted mode");
    assert!(matches!(err, ZipError::ModeMismatch));

    let err = writer.write_entry_whole(NewEntry::file("a", "x").mode("-rw-r--r")).expect_err("accepted mode");
    assert_eq!(err.kind(), ErrorKind::InvalidMode);

    let err = writer.write_entry_whole(NewEntry::directory("d").mode("-rw-r--r--")).expect_err("accepted mode");
    assert!(matches!(err, ZipError::ModeMismatch));
}

#[test]
fn default_mtime_is_now() {
    let before = crate::date::unix_now();

    let mut writer = ZipFileWriter::new(Vec::<u8>::new());
    writer.write_entry_whole(NewEntry::file("a", "x")).expect("failed to write entry");

    let mut cursor = ScanCursor::from_bytes(writer.close().expect("failed to close")).expect("failed to open");
    assert!(cursor.advance().expect("failed to advance"));

    let mtime = cursor.column(Column::Mtime).expect("no mtime").as_integer().expect("mtime not an integer");
    assert!(mtime >= i64::from(before) && mtime <= i64::from(crate::date::unix_now()));
}

#[test]
fn offset_accounts_for_existing_data() {
    let mut writer = ZipFileWriter::with_offset(Vec::<u8>::new(), 1000);
    writer.write_entry_whole(NewEntry::file("a", "x")).expect("failed to write entry");

    let record = cdr::read(&mut ByteReader::new(writer.entries()[0].record())).expect("failed to read record");
    assert_eq!(record.relative_offset_of_local_header, 1000);
}

#[test]
fn builder_rejects_trailing_slash() {
    let mut builder = ArchiveBuilder::new();
    let err = builder.append(NewEntry::file("a/", "x")).expect_err("accepted a file named like a directory");

    assert!(matches!(err, ZipError::TrailingSlash(ref path) if path == "a/"));
    assert!(builder.is_empty());

    builder.append(NewEntry::directory("a/")).expect("rejected a directory");
    assert_eq!(builder.len(), 1);
}

#[test]
fn builder_compression_level() {
    let text = "0123456789".repeat(100);

    let mut builder = ArchiveBuilder::new().compression_level(0);
    builder.append(NewEntry::file("digits", text.clone())).expect("failed to append");
    let mut cursor = ScanCursor::from_bytes(builder.finish().expect("failed to finish")).expect("failed to open");

    assert!(cursor.advance().expect("failed to advance"));
    assert_eq!(cursor.column(Column::Method).expect("no method").as_integer(), Some(0));
    assert_eq!(cursor.data().expect("failed to read data").expect("no data"), text.as_bytes());
}
