// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::attribute::AttributeCompatibility;

/// The version of the ZIP specification this crate writes against (3.0).
const SPECIFICATION_VERSION: u16 = 30;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#442
pub fn as_made_by() -> u16 {
    let host: u16 = AttributeCompatibility::Unix.into();
    (host << 8) + SPECIFICATION_VERSION
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
//
// Every entry written is either stored, deflated, or a directory, all of which need 2.0.
pub fn as_needed_to_extract() -> u16 {
    20
}
