// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// File type bits of a POSIX mode.
pub const S_IFREG: u32 = 0o100000;
pub const S_IFDIR: u32 = 0o040000;
pub const S_IFLNK: u32 = 0o120000;

const PERMISSION_TEMPLATE: &[u8; 10] = b"-rwxrwxrwx";

/// An attribute host compatibility supported by this crate.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCompatibility {
    Unix,
}

impl From<&AttributeCompatibility> for u16 {
    // Convert a supported attribute host compatibility into its relevant u16 stored with little endianness.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4422
    fn from(compatibility: &AttributeCompatibility) -> Self {
        match compatibility {
            AttributeCompatibility::Unix => 3,
        }
    }
}

impl From<AttributeCompatibility> for u16 {
    fn from(compatibility: AttributeCompatibility) -> Self {
        (&compatibility).into()
    }
}

/// A mode value as supplied for a new entry, before it has been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeInput {
    Integer(u32),
    Text(String),
}

impl From<u32> for ModeInput {
    fn from(value: u32) -> Self {
        ModeInput::Integer(value)
    }
}

impl From<&str> for ModeInput {
    fn from(value: &str) -> Self {
        ModeInput::Text(value.to_owned())
    }
}

impl From<String> for ModeInput {
    fn from(value: String) -> Self {
        ModeInput::Text(value)
    }
}

/// A POSIX file mode, including its file type bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnixMode(pub u32);

impl UnixMode {
    /// The mode given to regular files when none is supplied.
    pub const DEFAULT_FILE: UnixMode = UnixMode(S_IFREG | 0o644);
    /// The mode given to directories when none is supplied.
    pub const DEFAULT_DIRECTORY: UnixMode = UnixMode(S_IFDIR | 0o755);

    /// Returns whether the directory type bit is set.
    pub fn is_dir(&self) -> bool {
        self.0 & S_IFDIR != 0
    }

    /// Extracts the mode held in the upper 16 bits of an external file attribute.
    pub fn from_external_attributes(attributes: u32) -> Self {
        UnixMode(attributes >> 16)
    }

    /// Returns the external file attribute carrying this mode.
    pub fn as_external_attributes(&self) -> u32 {
        self.0 << 16
    }

    /// Resolves the mode of a new entry.
    ///
    /// A missing mode defaults per entry kind. Otherwise the mode must agree with the kind: directories (entries
    /// without data) must carry the directory bit and all other entries must not.
    pub fn resolve(input: Option<&ModeInput>, is_dir: bool) -> Result<Self> {
        let mode = match input {
            None if is_dir => Self::DEFAULT_DIRECTORY,
            None => Self::DEFAULT_FILE,
            Some(ModeInput::Integer(value)) => UnixMode(*value),
            Some(ModeInput::Text(text)) => text.parse()?,
        };

        if mode.is_dir() != is_dir {
            return Err(ZipError::ModeMismatch);
        }
        Ok(mode)
    }
}

impl std::str::FromStr for UnixMode {
    type Err = ZipError;

    /// Parses either a decimal integer or an `ls -l` style string such as `-rw-r--r--` or `drwxr-xr-x`.
    fn from_str(text: &str) -> Result<Self> {
        let invalid = || ZipError::InvalidMode(text.to_owned());

        if text.starts_with(|c: char| c.is_ascii_digit()) {
            let digits: &str = text.split(|c: char| !c.is_ascii_digit()).next().unwrap_or_default();
            return digits.parse().map(UnixMode).map_err(|_| invalid());
        }

        let bytes = text.as_bytes();
        if bytes.len() != PERMISSION_TEMPLATE.len() {
            return Err(invalid());
        }

        let mut mode = match bytes[0] {
            b'-' => S_IFREG,
            b'd' => S_IFDIR,
            b'l' => S_IFLNK,
            _ => return Err(invalid()),
        };

        for (index, (&actual, &expected)) in bytes.iter().zip(PERMISSION_TEMPLATE).enumerate().skip(1) {
            if actual == expected {
                mode |= 1 << (9 - index);
            } else if actual != b'-' {
                return Err(invalid());
            }
        }

        Ok(UnixMode(mode))
    }
}
