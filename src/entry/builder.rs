// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::NewEntry;
use crate::spec::attribute::ModeInput;

/// A builder for [`NewEntry`].
#[derive(Clone, Debug)]
pub struct NewEntryBuilder(pub(crate) NewEntry);

impl From<NewEntry> for NewEntryBuilder {
    fn from(entry: NewEntry) -> Self {
        Self(entry)
    }
}

impl NewEntryBuilder {
    /// Constructs a new builder for a directory entry at the given path.
    ///
    /// Supplying [`NewEntryBuilder::data()`] turns it into a file entry.
    pub fn new(path: impl Into<String>) -> Self {
        Self(NewEntry { path: path.into(), mode: None, mtime: None, declared_size: None, data: None, method: None })
    }

    /// Sets the entry's path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.0.path = path.into();
        self
    }

    /// Sets the entry's mode, either as an integer or as text such as `-rw-r--r--`.
    ///
    /// Without a mode, files default to `0100644` and directories to `040755`.
    pub fn mode(mut self, mode: impl Into<ModeInput>) -> Self {
        self.0.mode = Some(mode.into());
        self
    }

    /// Sets the entry's modification time as a UNIX timestamp. Defaults to the current time.
    pub fn mtime(mut self, mtime: u32) -> Self {
        self.0.mtime = Some(mtime);
        self
    }

    /// Declares the uncompressed size, which must then equal the length of the data.
    pub fn declared_size(mut self, size: u64) -> Self {
        self.0.declared_size = Some(size);
        self
    }

    /// Sets the entry's uncompressed data.
    pub fn data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.0.data = Some(data.into());
        self
    }

    /// Requests a specific method code rather than choosing one automatically.
    pub fn method(mut self, method: u16) -> Self {
        self.0.method = Some(method);
        self
    }

    /// Consumes this builder and returns a final [`NewEntry`].
    pub fn build(self) -> NewEntry {
        self.into()
    }
}
