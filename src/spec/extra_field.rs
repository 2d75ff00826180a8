// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Interpretation of the extensible data fields attached to ZIP records.

use crate::core::edf;
use crate::error::Result;

/// The header IDs of extra fields this crate recognises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderId {
    /// Info-ZIP extended timestamp ("UT").
    ExtendedTimestamp,
    Other(u16),
}

impl From<u16> for HeaderId {
    fn from(value: u16) -> Self {
        match value {
            0x5455 => Self::ExtendedTimestamp,
            other => Self::Other(other),
        }
    }
}

impl From<HeaderId> for u16 {
    fn from(value: HeaderId) -> Self {
        match value {
            HeaderId::ExtendedTimestamp => 0x5455,
            HeaderId::Other(other) => other,
        }
    }
}

/// Bit 0 of the extended timestamp flags: a modification time follows.
const MODIFICATION_TIME_PRESENT: u8 = 0x01;

/// The Info-ZIP extended timestamp extra field.
///
/// Only the modification time is interpreted; access and creation times which may follow it are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtendedTimestampField {
    pub flags: u8,
    pub modification_time: Option<u32>,
}

impl ExtendedTimestampField {
    /// Constructs a field carrying only a modification time.
    pub fn with_modification_time(time: u32) -> Self {
        Self { flags: MODIFICATION_TIME_PRESENT, modification_time: Some(time) }
    }

    /// Parses the field's data, returning `None` if it is too short to hold what its flags claim.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let (&flags, rest) = data.split_first()?;

        let modification_time = match flags & MODIFICATION_TIME_PRESENT {
            0 => None,
            _ => Some(u32::from_le_bytes(rest.get(..4)?.try_into().ok()?)),
        };

        Some(Self { flags, modification_time })
    }

    /// Appends the complete field, header included, to the given buffer.
    pub fn write(&self, buffer: &mut Vec<u8>) -> Result<()> {
        let mut data = vec![self.flags];
        if let Some(time) = self.modification_time {
            data.extend_from_slice(&time.to_le_bytes());
        }
        edf::write(buffer, HeaderId::ExtendedTimestamp.into(), &data)
    }
}

/// An extra field, interpreted where recognised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtraField<'a> {
    ExtendedTimestamp(ExtendedTimestampField),
    Unknown { header_id: u16, data: &'a [u8] },
}

/// Parses every complete extra field in the given span, ignoring malformed trailing bytes.
pub fn parse_extra_fields(extra_field: &[u8]) -> Vec<ExtraField<'_>> {
    edf::iter(extra_field)
        .map(|field| match HeaderId::from(field.header_id) {
            HeaderId::ExtendedTimestamp => match ExtendedTimestampField::parse(field.data) {
                Some(timestamp) => ExtraField::ExtendedTimestamp(timestamp),
                None => ExtraField::Unknown { header_id: field.header_id, data: field.data },
            },
            HeaderId::Other(header_id) => ExtraField::Unknown { header_id, data: field.data },
        })
        .collect()
}

/// Returns the UNIX modification time carried by an extended timestamp field within the span, if any.
///
/// Should more than one such field be present, the last wins.
pub fn modification_time(extra_field: &[u8]) -> Option<u32> {
    parse_extra_fields(extra_field)
        .into_iter()
        .filter_map(|field| match field {
            ExtraField::ExtendedTimestamp(timestamp) => timestamp.modification_time,
            ExtraField::Unknown { .. } => None,
        })
        .last()
}
