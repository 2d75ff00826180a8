// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::{IoSlice, Result, Write};

/// A wrapper around a [`Write`] implementation which tracks the current byte offset.
///
/// The offset may start above zero when appending to data which already exists.
#[derive(Debug)]
pub struct OffsetWriter<W> {
    inner: W,
    offset: u64,
}

impl<W> OffsetWriter<W>
where
    W: Write,
{
    /// Constructs a new wrapper from an inner [`Write`] writer.
    pub fn new(inner: W) -> Self {
        Self::with_offset(inner, 0)
    }

    /// Constructs a new wrapper whose first byte written lands at the given offset.
    pub fn with_offset(inner: W, offset: u64) -> Self {
        Self { inner, offset }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Consumes this wrapper and returns the inner [`Write`] writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.inner
    }
}

impl<W> Write for OffsetWriter<W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let written = self.inner.write(buf)?;
        self.offset += written as u64;
        Ok(written)
    }

    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> Result<usize> {
        let written = self.inner.write_vectored(bufs)?;
        self.offset += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}
