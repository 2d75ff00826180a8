// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Byte-level codecs for the on-disk ZIP records.
//!
//! Each record module exposes a `Raw*` struct holding the fixed-width fields in file order, `raw_read`/`raw_write`
//! functions generated by [`raw!`], and `read`/`write` functions which handle the signature and the variable-length
//! tail of the record. Decoding works over a [`ByteReader`](crate::utils::ByteReader) and encoding appends to a
//! `Vec<u8>`; neither touches an I/O device.

pub mod cdr;
pub mod edf;
pub mod eocdr;
pub mod lfh;

/// The length in bytes of a signature. All signatures are u32s, so 4 bytes long.
pub const SIGNATURE_LENGTH: usize = 4;

macro_rules! raw {
    ($name:ident { $($field:ident, $type:ty, $read:ident, $write:ident),* }) => {
        use crate::error::Result;
        use crate::utils::ByteReader;

        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            $(pub $field : $type),*
        }

        impl $name {
            /// The length in bytes of the fixed fields, excluding the signature.
            pub const LENGTH: usize = 0 $(+ std::mem::size_of::<$type>())*;
        }

        /// Reads the raw underlying header from the given cursor.
        #[tracing::instrument(level = "trace", skip(reader))]
        pub(crate) fn raw_read(reader: &mut ByteReader<'_>) -> Result<$name> {
            Ok($name {
                $($field : reader.$read()? ),*
            })
        }

        /// Appends the raw underlying header to the given buffer.
        pub fn raw_write(buffer: &mut Vec<u8>, raw: &$name) {
            $(crate::utils::$write(buffer, raw.$field);)*
        }
    }
}

macro_rules! raw_deref {
    ($from:ident, $to:ident) => {
        use std::ops::{Deref, DerefMut};

        impl Deref for $from {
            type Target = $to;

            fn deref(&self) -> &Self::Target {
                &self.raw
            }
        }

        impl DerefMut for $from {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.raw
            }
        }
    };
}

pub(crate) use raw;
pub(crate) use raw_deref;
