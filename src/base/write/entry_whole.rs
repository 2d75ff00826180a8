// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::base::write::compressed_writer::compress;
use crate::base::write::{PendingEntry, ZipFileWriter};
use crate::core::cdr::{self, CentralDirectoryRecord, RawCentralDirectoryRecord};
use crate::core::lfh::{self, LocalFileHeader, RawLocalFileHeader};
use crate::date::{unix_now, ZipDateTime};
use crate::entry::NewEntry;
use crate::error::{Result, ZipError};
use crate::spec::attribute::UnixMode;
use crate::spec::extra_field::ExtendedTimestampField;
use crate::spec::{Compression, CompressionChoice};

use crc32fast::Hasher;
use std::io::Write;

/// General purpose flag bit 11: the name is encoded as UTF-8.
const FLAG_UTF8: u16 = 0x0800;

pub struct EntryWholeWriter<'b, W: Write> {
    writer: &'b mut ZipFileWriter<W>,
    entry: NewEntry,
}

impl<'b, W: Write> EntryWholeWriter<'b, W> {
    pub fn from_raw(writer: &'b mut ZipFileWriter<W>, entry: NewEntry) -> Self {
        Self { writer, entry }
    }

    #[tracing::instrument(level = "debug", skip(self), fields(path = %self.entry.path))]
    pub fn write(self) -> Result<()> {
        let is_dir = self.entry.is_dir();
        let mode = UnixMode::resolve(self.entry.mode.as_ref(), is_dir)?;

        let data = self.entry.data.as_deref().unwrap_or_default();
        if let Some(declared) = self.entry.declared_size {
            if declared != data.len() as u64 {
                return Err(ZipError::SizeMismatch { declared, actual: data.len() as u64 });
            }
        }

        // Directories carry no data, so any requested method is moot.
        let choice = match is_dir {
            true => CompressionChoice::Method(Compression::Stored),
            false => CompressionChoice::from_code(self.entry.method)?,
        };

        let mut path = self.entry.path;
        if is_dir && !path.ends_with('/') {
            path.push('/');
        }

        let compressed = compress(data, choice, self.writer.compression_level)?;
        let mtime = self.entry.mtime.unwrap_or_else(unix_now);
        let date = ZipDateTime::from_unix(mtime);

        let mut extra_field = Vec::new();
        ExtendedTimestampField::with_modification_time(mtime).write(&mut extra_field)?;

        let lf_header = LocalFileHeader {
            raw: RawLocalFileHeader {
                version_needed_to_extract: crate::spec::version::as_needed_to_extract(),
                general_purpose_flags: FLAG_UTF8,
                compression_method: compressed.compression.into(),
                last_mod_file_time: date.time(),
                last_mod_file_date: date.date(),
                crc_32: compute_crc(data),
                compressed_size: as_u32(compressed.data.len())?,
                uncompressed_size: as_u32(data.len())?,
                file_name_length: path.len().try_into().map_err(|_| ZipError::FileNameTooLarge)?,
                extra_field_length: extra_field.len().try_into().map_err(|_| ZipError::ExtraFieldTooLarge)?,
            },
            file_name: path.clone().into_bytes(),
            extra_field,
        };

        let header = CentralDirectoryRecord {
            raw: RawCentralDirectoryRecord {
                version_made_by: crate::spec::version::as_made_by(),
                version_needed_to_extract: lf_header.version_needed_to_extract,
                general_purpose_bit_flag: lf_header.general_purpose_flags,
                compression_method: lf_header.compression_method,
                last_mod_file_time: lf_header.last_mod_file_time,
                last_mod_file_date: lf_header.last_mod_file_date,
                crc_32: lf_header.crc_32,
                compressed_size: lf_header.compressed_size,
                uncompressed_size: lf_header.uncompressed_size,
                file_name_length: lf_header.file_name_length,
                extra_field_length: lf_header.extra_field_length,
                file_comment_length: 0,
                disk_number_start: 0,
                internal_file_attributes: 0,
                external_file_attributes: mode.as_external_attributes(),
                relative_offset_of_local_header: self
                    .writer
                    .writer
                    .offset()
                    .try_into()
                    .map_err(|_| ZipError::Zip64Needed("local file header beyond 4GiB"))?,
            },
            file_name: lf_header.file_name.clone(),
            extra_field: lf_header.extra_field.clone(),
            file_comment: Vec::new(),
        };

        let mut buffer = Vec::with_capacity(lfh::LENGTH + path.len() + lf_header.extra_field.len());
        lfh::write(&mut buffer, &lf_header);

        self.writer.writer.write_all(&buffer)?;
        self.writer.writer.write_all(&compressed.data)?;

        let mut record = Vec::with_capacity(header.record_length());
        cdr::write(&mut record, &header);
        self.writer.cd_entries.push(PendingEntry { path, record });

        tracing::debug!(method = lf_header.compression_method, size = data.len(), "appended entry");
        Ok(())
    }
}

fn as_u32(size: usize) -> Result<u32> {
    size.try_into().map_err(|_| ZipError::Zip64Needed("entry larger than 4GiB"))
}

fn compute_crc(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
