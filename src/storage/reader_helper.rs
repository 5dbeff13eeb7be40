//! Helper functions and a byte cursor for reading cell dictionary data.
//!
//! This module provides:
//! - [`ByteCursor`]: bounds-checked little-endian integer and UTF-16LE string reads
//!   over an in-memory source, positioned by absolute offset
//! - UTF-16LE decoding of raw byte ranges, with or without NUL padding

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use encoding_rs::UTF_16LE;
use log::debug;

use crate::{Result, ScelError};

/// Decodes UTF-16LE bytes to a string exactly as stored.
///
/// Odd trailing bytes and unpaired surrogates decode to U+FFFD.
pub fn decode_utf16le(bytes: &[u8]) -> String {
    let (decoded, had_errors) = UTF_16LE.decode_without_bom_handling(bytes);
    if had_errors {
        debug!("Decoding error with: {}", UTF_16LE.name());
    }
    decoded.into_owned()
}

/// Decodes a fixed-width, NUL-padded UTF-16LE field.
///
/// Everything from the first NUL code unit onward is padding.
pub fn decode_padded_utf16le(bytes: &[u8]) -> String {
    let end = bytes
        .chunks_exact(2)
        .position(|unit| unit == [0, 0])
        .map(|units| units * 2)
        .unwrap_or(bytes.len());
    decode_utf16le(&bytes[..end])
}

/// Encodes a string as UTF-16LE bytes.
pub fn str_to_utf16le_bytes(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|c| c.to_le_bytes()).collect()
}

/// A movable read position over a finite, read-only byte source.
///
/// Every read checks the remaining length first and fails with
/// [`ScelError::TruncatedInput`] without moving the cursor.
pub struct ByteCursor<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { cursor: Cursor::new(data) }
    }

    /// Total length of the underlying source.
    #[inline]
    pub fn len(&self) -> u64 {
        self.cursor.get_ref().len() as u64
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor.get_ref().is_empty()
    }

    /// Current absolute offset.
    #[inline]
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// Bytes left between the current position and the end of the source.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.len().saturating_sub(self.position())
    }

    /// Moves the cursor to an absolute offset.
    ///
    /// Seeking to the end of the source is allowed, seeking past it is not.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        if offset > self.len() {
            return Err(ScelError::truncated_input(self.position(), offset - self.position(), self.remaining()));
        }
        self.cursor.set_position(offset);
        Ok(())
    }

    fn ensure(&self, needed: u64) -> Result<()> {
        let available = self.remaining();
        if available < needed {
            return Err(ScelError::truncated_input(self.position(), needed, available));
        }
        Ok(())
    }

    /// Advances the cursor without decoding.
    pub fn skip(&mut self, byte_count: u64) -> Result<()> {
        self.ensure(byte_count)?;
        self.cursor.set_position(self.position() + byte_count);
        Ok(())
    }

    /// Advances the cursor by up to `byte_count` bytes, stopping at the end of
    /// the source. Returns how many bytes were skipped.
    pub fn skip_at_most(&mut self, byte_count: u64) -> u64 {
        let skipped = byte_count.min(self.remaining());
        self.cursor.set_position(self.position() + skipped);
        skipped
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.cursor.read_u8()?)
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.ensure(2)?;
        Ok(self.cursor.read_u16::<LittleEndian>()?)
    }

    /// Returns the next `len` bytes and advances past them.
    pub fn read_bytes(&mut self, len: u64) -> Result<&'a [u8]> {
        self.ensure(len)?;
        let start = self.position() as usize;
        let data: &'a [u8] = *self.cursor.get_ref();
        self.cursor.set_position(self.position() + len);
        Ok(&data[start..start + len as usize])
    }

    /// Reads `byte_len` bytes as UTF-16LE text.
    ///
    /// With `offset` set, the cursor jumps there first; otherwise the read starts
    /// at the current position.
    pub fn read_fixed_string(&mut self, offset: Option<u64>, byte_len: u64) -> Result<String> {
        if let Some(offset) = offset {
            self.seek(offset)?;
        }
        Ok(decode_utf16le(self.read_bytes(byte_len)?))
    }

    /// Reads a NUL-padded UTF-16LE field occupying `[start, end)`.
    pub fn read_padded_string(&mut self, start: u64, end: u64) -> Result<String> {
        self.seek(start)?;
        Ok(decode_padded_utf16le(self.read_bytes(end - start)?))
    }
}
