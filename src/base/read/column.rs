// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// A column of the table an archive is exposed as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    /// The entry's path.
    Name,
    /// The POSIX mode, including the file type bits.
    Mode,
    /// The modification time as a UNIX timestamp.
    Mtime,
    /// The uncompressed size.
    Size,
    /// The data exactly as stored in the archive.
    RawData,
    /// The uncompressed data.
    Data,
    /// The compression method code.
    Method,
}

impl Column {
    /// Every column, in table order.
    pub const ALL: [Column; 7] =
        [Column::Name, Column::Mode, Column::Mtime, Column::Size, Column::RawData, Column::Data, Column::Method];

    /// Returns the column at the given position in table order.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the column's name as it appears in the table.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Mode => "mode",
            Column::Mtime => "mtime",
            Column::Size => "sz",
            Column::RawData => "rawdata",
            Column::Data => "data",
            Column::Method => "method",
        }
    }
}

/// A single value produced for a column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnValue {
    Null,
    Integer(i64),
    Text(String),
    Blob(Vec<u8>),
}

impl ColumnValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ColumnValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ColumnValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            ColumnValue::Blob(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }
}
