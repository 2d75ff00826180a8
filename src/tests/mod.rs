// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod read;
pub(crate) mod write;

use crate::core::cdr::{self, CentralDirectoryRecord, RawCentralDirectoryRecord};
use crate::core::eocdr::{self, EndOfCentralDirectoryRecord, RawEndOfCentralDirectoryRecord};
use crate::core::lfh::{self, LocalFileHeader, RawLocalFileHeader};

use std::sync::Once;
static ENV_LOGGER: Once = Once::new();

/// Initialize the env logger for any tests that require it.
/// Safe to call multiple times.
fn init_logger() {
    ENV_LOGGER.call_once(|| {
        let _ = env_logger::Builder::from_default_env().format_module_path(true).is_test(true).try_init();
    });
}

/// An entry for [`hand_built_archive()`], whose local header and directory record may disagree on the name.
pub(crate) struct HandBuiltEntry<'a> {
    pub(crate) local_name: &'a str,
    pub(crate) central_name: &'a str,
    pub(crate) method: u16,
    pub(crate) stored: &'a [u8],
    pub(crate) uncompressed_size: u32,
    pub(crate) external_file_attributes: u32,
}

impl<'a> HandBuiltEntry<'a> {
    pub(crate) fn stored(name: &'a str, data: &'a [u8]) -> Self {
        Self {
            local_name: name,
            central_name: name,
            method: 0,
            stored: data,
            uncompressed_size: data.len() as u32,
            external_file_attributes: 0o100644 << 16,
        }
    }
}

/// Assembles an archive record by record, bypassing the writer.
pub(crate) fn hand_built_archive(entries: &[HandBuiltEntry<'_>]) -> Vec<u8> {
    let mut archive = Vec::new();
    let mut directory = Vec::new();

    for entry in entries {
        let offset = archive.len() as u32;
        let header = LocalFileHeader {
            raw: RawLocalFileHeader {
                version_needed_to_extract: 20,
                compression_method: entry.method,
                compressed_size: entry.stored.len() as u32,
                uncompressed_size: entry.uncompressed_size,
                file_name_length: entry.local_name.len() as u16,
                ..Default::default()
            },
            file_name: entry.local_name.as_bytes().to_vec(),
            extra_field: Vec::new(),
        };
        lfh::write(&mut archive, &header);
        archive.extend_from_slice(entry.stored);

        let record = CentralDirectoryRecord {
            raw: RawCentralDirectoryRecord {
                version_made_by: 3 << 8,
                version_needed_to_extract: 20,
                compression_method: entry.method,
                compressed_size: entry.stored.len() as u32,
                uncompressed_size: entry.uncompressed_size,
                file_name_length: entry.central_name.len() as u16,
                external_file_attributes: entry.external_file_attributes,
                relative_offset_of_local_header: offset,
                ..Default::default()
            },
            file_name: entry.central_name.as_bytes().to_vec(),
            extra_field: Vec::new(),
            file_comment: Vec::new(),
        };
        cdr::write(&mut directory, &record);
    }

    let record = EndOfCentralDirectoryRecord {
        raw: RawEndOfCentralDirectoryRecord::new(entries.len() as u16, directory.len() as u32, archive.len() as u32),
        zip_file_comment: Vec::new(),
    };
    archive.extend_from_slice(&directory);
    eocdr::write(&mut archive, &record);

    archive
}
