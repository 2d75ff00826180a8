// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # ziptable
//!
//! A synchronous ZIP archive engine which exposes an archive as a table of entries.
//!
//! ## Features
//! - Scanning an archive row by row, with each entry's name, mode, modification time, size, raw data, decompressed
//!   data, and method computed on request.
//! - Appending entries within a transaction, with the central directory only rewritten on commit.
//! - Building a complete archive in memory from a sequence of rows.
//! - Support for the Stored and Deflate compression methods.
//! - Aims for reasonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ## Example
//! ```no_run
//! # use ziptable::{ArchiveBuilder, Column, NewEntry, ScanCursor};
//! # use ziptable::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut builder = ArchiveBuilder::new();
//! builder.append(NewEntry::file("hello.txt", "Hello, World!").mtime(1700000000))?;
//! builder.append(NewEntry::directory("docs"))?;
//!
//! let mut cursor = ScanCursor::from_bytes(builder.finish()?)?;
//! while cursor.advance()? {
//!     println!("{:?} {:?}", cursor.column(Column::Name)?, cursor.column(Column::Size)?);
//! }
//! #   Ok(())
//! # }
//! ```

pub mod base;
pub mod core;
pub mod date;
pub mod engine;
pub mod entry;
pub mod error;
pub mod spec;

pub(crate) mod utils;

#[cfg(test)]
pub(crate) mod tests;

pub use crate::base::read::{decompress, Column, ColumnValue, ScanCursor};
pub use crate::base::write::{ArchiveBuilder, RollbackOutcome, RollbackPolicy, WriteSession, ZipFileWriter};
pub use crate::date::ZipDateTime;
pub use crate::engine::{EngineConfig, EngineConfigBuilder, ZipEngine};
pub use crate::entry::{builder::NewEntryBuilder, NewEntry, StoredEntry};
pub use crate::error::{ErrorKind, ZipError};
pub use crate::spec::{Compression, CompressionChoice, ModeInput, UnixMode};
