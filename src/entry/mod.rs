// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;

use crate::core::cdr::CentralDirectoryRecord;
use crate::core::lfh::RawLocalFileHeader;
use crate::date::ZipDateTime;
use crate::entry::builder::NewEntryBuilder;
use crate::spec::attribute::{ModeInput, UnixMode};

/// A row to be appended to an archive.
///
/// # Builder pattern
/// Entries are constructed through [`NewEntryBuilder`], starting from either [`NewEntry::file()`] or
/// [`NewEntry::directory()`]. An entry with data is a file (or symlink); one without is a directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEntry {
    pub(crate) path: String,
    pub(crate) mode: Option<ModeInput>,
    pub(crate) mtime: Option<u32>,
    pub(crate) declared_size: Option<u64>,
    pub(crate) data: Option<Vec<u8>>,
    pub(crate) method: Option<u16>,
}

impl NewEntry {
    /// Starts building a file entry holding the given data.
    pub fn file(path: impl Into<String>, data: impl Into<Vec<u8>>) -> NewEntryBuilder {
        NewEntryBuilder::new(path).data(data)
    }

    /// Starts building a directory entry.
    pub fn directory(path: impl Into<String>) -> NewEntryBuilder {
        NewEntryBuilder::new(path)
    }

    /// Returns the entry's path as supplied.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the entry's uncompressed data, or `None` for a directory.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Returns whether this entry describes a directory.
    pub fn is_dir(&self) -> bool {
        self.data.is_none()
    }

    /// Returns the requested method code, or `None` if the method is chosen automatically.
    pub fn method(&self) -> Option<u16> {
        self.method
    }
}

impl From<NewEntryBuilder> for NewEntry {
    fn from(builder: NewEntryBuilder) -> Self {
        builder.0
    }
}

/// An entry as found within an archive: its central directory record, the local file header it points at, and the
/// offset of its data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredEntry {
    pub(crate) record: CentralDirectoryRecord,
    pub(crate) header: RawLocalFileHeader,
    pub(crate) data_offset: u64,
    pub(crate) extended_mtime: Option<u32>,
}

impl StoredEntry {
    /// Returns the entry's name, replacing any invalid UTF-8 sequences.
    ///
    /// # Note
    /// If calling this method on entries retrieved from untrusted ZIP files, the name should be sanitised before
    /// being used as a path.
    pub fn name(&self) -> String {
        self.record.file_name_lossy()
    }

    /// Returns the entry's raw name bytes.
    pub fn file_name(&self) -> &[u8] {
        &self.record.file_name
    }

    /// Returns the POSIX mode held in the upper half of the external file attribute.
    pub fn mode(&self) -> UnixMode {
        UnixMode::from_external_attributes(self.record.external_file_attributes)
    }

    /// Returns the MS-DOS modification date & time from the central directory record.
    pub fn last_modification_date(&self) -> ZipDateTime {
        ZipDateTime::from_raw(self.record.last_mod_file_date, self.record.last_mod_file_time)
    }

    /// Returns the modification time as a UNIX timestamp.
    ///
    /// An extended timestamp extra field takes precedence over the MS-DOS date & time.
    pub fn mtime(&self) -> u32 {
        self.extended_mtime.unwrap_or_else(|| self.last_modification_date().to_unix())
    }

    /// Returns whether an extended timestamp extra field supplied the modification time.
    pub fn has_extended_timestamp(&self) -> bool {
        self.extended_mtime.is_some()
    }

    pub fn uncompressed_size(&self) -> u64 {
        self.record.uncompressed_size.into()
    }

    pub fn compressed_size(&self) -> u64 {
        self.record.compressed_size.into()
    }

    /// Returns the method code, which may not be one this crate can decompress.
    pub fn method(&self) -> u16 {
        self.record.compression_method
    }

    pub fn crc32(&self) -> u32 {
        self.record.crc_32
    }

    /// Returns the offset at which the entry's stored data begins.
    pub fn data_offset(&self) -> u64 {
        self.data_offset
    }

    /// Returns whether the entry is a directory, either by its mode or by a trailing `/` in its name.
    pub fn is_dir(&self) -> bool {
        self.mode().is_dir() || self.record.file_name.last() == Some(&b'/')
    }

    pub fn central_directory_record(&self) -> &CentralDirectoryRecord {
        &self.record
    }

    pub fn local_file_header(&self) -> &RawLocalFileHeader {
        &self.header
    }
}
