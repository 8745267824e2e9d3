//! Byte-level reader with bounded operations.

use std::num::NonZeroU32;

use crate::error::{ByteError, ByteResult};

/// A byte-level reader for decoding varint-packed binary data.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a single raw byte.
    pub fn read_u8(&mut self) -> ByteResult<u8> {
        let Some(&byte) = self.data.get(self.pos) else {
            return Err(ByteError::UnexpectedEof {
                requested: 1,
                available: 0,
            });
        };
        self.pos += 1;
        Ok(byte)
    }

    /// Reads a varint-encoded unsigned integer.
    ///
    /// Inverse of [`ByteWriter::write_varu32`](crate::ByteWriter::write_varu32).
    /// A continuation bit set on the fifth byte (past 35 payload bits) is
    /// [`ByteError::InvalidVarint`].
    pub fn read_varu32(&mut self) -> ByteResult<u32> {
        let mut result = 0u32;
        for shift in (0..35).step_by(7) {
            let byte = self.read_u8()?;
            result |= u32::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(result);
            }
        }
        Err(ByteError::InvalidVarint)
    }

    /// Reads a length-prefixed UTF-8 string.
    ///
    /// Inverse of [`ByteWriter::write_string`](crate::ByteWriter::write_string).
    pub fn read_string(&mut self) -> ByteResult<String> {
        let len = self.read_varu32()? as usize;
        if len > self.remaining() {
            return Err(ByteError::UnexpectedEof {
                requested: len,
                available: self.remaining(),
            });
        }
        let body = &self.data[self.pos..self.pos + len];
        let text = std::str::from_utf8(body).map_err(|err| ByteError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        })?;
        self.pos += len;
        Ok(text.to_owned())
    }

    /// Reads an optional string, with the empty string decoded as `None`.
    pub fn read_opt_string(&mut self) -> ByteResult<Option<String>> {
        let text = self.read_string()?;
        Ok(if text.is_empty() { None } else { Some(text) })
    }

    /// Reads an optional ID using the zero-means-absent convention.
    pub fn read_id(&mut self) -> ByteResult<Option<NonZeroU32>> {
        Ok(NonZeroU32::new(self.read_varu32()?))
    }
}
