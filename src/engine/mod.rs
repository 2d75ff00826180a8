// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! An archive exposed as a table with the columns `(name, mode, mtime, sz, rawdata, data, method)`.
//!
//! # Example
//! ```no_run
//! # use ziptable::base::read::Column;
//! # use ziptable::engine::{EngineConfig, ZipEngine};
//! # use ziptable::error::ZipError;
//! # use ziptable::NewEntry;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let config = EngineConfig::builder().default_archive("./foo.zip").build();
//! let mut engine = ZipEngine::new(config);
//!
//! engine.insert_entry(NewEntry::file("a.txt", "hello").mode("-rw-r--r--").mtime(1700000000))?;
//! engine.commit()?;
//!
//! let mut cursor = engine.scan(None)?;
//! while cursor.advance()? {
//!     println!("{:?}", cursor.column(Column::Name)?);
//! }
//! #   Ok(())
//! # }
//! ```

pub mod config;

pub use config::{EngineConfig, EngineConfigBuilder};

use crate::base::read::ScanCursor;
use crate::base::write::{RollbackOutcome, WriteSession};
use crate::entry::NewEntry;
use crate::error::{Result, ZipError};

use std::fs::File;
use std::path::Path;

/// Scans archives and writes to the configured archive within transactions.
///
/// At most one write transaction is open at a time. It begins on [`ZipEngine::begin_transaction()`] or on the first
/// insert, and ends on [`ZipEngine::commit()`] or [`ZipEngine::rollback()`]. Dropping the engine with a transaction
/// open abandons it without writing a directory.
#[derive(Debug)]
pub struct ZipEngine {
    config: EngineConfig,
    session: Option<WriteSession>,
}

impl ZipEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, session: None }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn archive_path<'a>(&'a self, archive: Option<&'a Path>) -> Result<&'a Path> {
        archive.or(self.config.default_archive()).ok_or(ZipError::MissingArchivePath)
    }

    /// Opens a scan over the given archive, or over the configured default archive if `None`.
    ///
    /// While a transaction is open on the same archive, the scan sees the transaction's entries: those present
    /// when it began followed by those inserted since.
    pub fn scan(&self, archive: Option<&Path>) -> Result<ScanCursor<File>> {
        let path = self.archive_path(archive)?;

        match &self.session {
            Some(session) if session.path() == path => {
                let records = session.entries().iter().map(|entry| entry.record().to_vec()).collect();
                Ok(ScanCursor::from_snapshot(File::open(path)?, records))
            }
            _ => ScanCursor::open(path),
        }
    }

    /// Returns whether a write transaction is open.
    pub fn in_transaction(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a write transaction on the configured archive, if one isn't already open.
    pub fn begin_transaction(&mut self) -> Result<&mut WriteSession> {
        let session = match self.session.take() {
            Some(session) => session,
            None => WriteSession::begin_with_level(self.archive_path(None)?, self.config.compression_level())?,
        };

        Ok(self.session.insert(session))
    }

    /// Appends an entry to the configured archive, opening a transaction first if needed.
    pub fn insert_entry(&mut self, entry: impl Into<NewEntry>) -> Result<()> {
        self.begin_transaction()?.insert(entry)
    }

    /// Entries cannot be modified once written.
    pub fn update_entry(&mut self, _name: &str, _entry: impl Into<NewEntry>) -> Result<()> {
        Err(ZipError::UnsupportedOperation("update"))
    }

    /// Entries cannot be removed once written.
    pub fn delete_entry(&mut self, _name: &str) -> Result<()> {
        Err(ZipError::UnsupportedOperation("delete"))
    }

    /// Commits the open transaction. Does nothing if none is open.
    pub fn commit(&mut self) -> Result<()> {
        match self.session.take() {
            Some(session) => session.commit(),
            None => Ok(()),
        }
    }

    /// Rolls back the open transaction per the configured [`RollbackPolicy`](crate::base::write::RollbackPolicy).
    ///
    /// Returns `None` if no transaction was open.
    pub fn rollback(&mut self) -> Result<Option<RollbackOutcome>> {
        match self.session.take() {
            Some(session) => session.rollback(self.config.rollback_policy()).map(Some),
            None => Ok(None),
        }
    }
}
