// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("an upstream reader returned an error: {0}")]
    UpstreamReadError(#[from] std::io::Error),

    #[error("encountered an unexpected header (actual: {0:#x}, expected: {1:#x})")]
    UnexpectedHeaderError(u32, u32),
    #[error("unable to locate the end of central directory record")]
    UnableToLocateEOCDR,
    #[error("corrupt archive: {0}")]
    CorruptArchive(String),
    #[error("truncated archive: needed {needed} bytes but only {available} were available")]
    TruncatedArchive { needed: usize, available: usize },

    #[error("parse error in mode: {0}")]
    InvalidMode(String),
    #[error("mode does not match data")]
    ModeMismatch,
    #[error("declared size ({declared}) does not match the data length ({actual})")]
    SizeMismatch { declared: u64, actual: u64 },
    #[error("non-directory name must not end with /: {0}")]
    TrailingSlash(String),
    #[error("file name too large to be stored in a ZIP record")]
    FileNameTooLarge,
    #[error("extra field too large to be stored in a ZIP record")]
    ExtraFieldTooLarge,
    #[error("ZIP64 is required but not supported: {0}")]
    Zip64Needed(&'static str),

    #[error("operation not supported: '{0}'")]
    UnsupportedOperation(&'static str),
    #[error("compression not supported: {0}")]
    UnsupportedMethod(u16),
    #[error("corrupt compressed stream: {0}")]
    CorruptStream(String),

    #[error("failed to commit the archive: {0}")]
    CommitFailed(#[source] Box<ZipError>),
    #[error("no archive path was given and no default archive was configured")]
    MissingArchivePath,
}

/// The broad category a [`ZipError`] falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    CorruptArchive,
    TruncatedArchive,
    InvalidMode,
    Constraint,
    UnsupportedOperation,
    UnsupportedMethod,
    CorruptStream,
    CommitFailed,
    Configuration,
}

impl ZipError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZipError::UpstreamReadError(_) => ErrorKind::Io,
            ZipError::UnexpectedHeaderError(..) | ZipError::UnableToLocateEOCDR | ZipError::CorruptArchive(_) => {
                ErrorKind::CorruptArchive
            }
            ZipError::TruncatedArchive { .. } => ErrorKind::TruncatedArchive,
            ZipError::InvalidMode(_) => ErrorKind::InvalidMode,
            ZipError::ModeMismatch
            | ZipError::SizeMismatch { .. }
            | ZipError::TrailingSlash(_)
            | ZipError::FileNameTooLarge
            | ZipError::ExtraFieldTooLarge
            | ZipError::Zip64Needed(_) => ErrorKind::Constraint,
            ZipError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            ZipError::UnsupportedMethod(_) => ErrorKind::UnsupportedMethod,
            ZipError::CorruptStream(_) => ErrorKind::CorruptStream,
            ZipError::CommitFailed(_) => ErrorKind::CommitFailed,
            ZipError::MissingArchivePath => ErrorKind::Configuration,
        }
    }
}
