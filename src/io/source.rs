use super::Endian;
use super::packed::{GROUP_BITS, GROUP_MASK, LAST_GROUP};
use crate::error::{CodecError, Result};

use byteorder::ByteOrder;

/// Read cursor over a borrowed byte slice.
///
/// Reads never go past the end of the slice: a read that cannot be satisfied
/// fails with [`CodecError::Truncated`] and leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct ByteSource<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Moves the cursor back to an earlier `position()` after a failed
    /// multi-part read.
    pub(crate) fn rewind(&mut self, position: usize) {
        debug_assert!(position <= self.offset);
        self.offset = position;
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(CodecError::Truncated {
                offset: self.offset,
                needed: len,
                available,
            });
        }

        let start = self.offset;
        self.offset += len;
        Ok(&self.bytes[start..self.offset])
    }

    /// Consumes every unread byte.
    pub fn read_remaining(&mut self) -> &'a [u8] {
        let start = self.offset;
        self.offset = self.bytes.len();
        &self.bytes[start..]
    }

    pub fn read_fixed_i32(&mut self) -> Result<i32> {
        self.read_bytes(4).map(Endian::read_i32)
    }

    pub fn read_fixed_i64(&mut self) -> Result<i64> {
        self.read_bytes(8).map(Endian::read_i64)
    }

    fn read_fixed_u32(&mut self) -> Result<u32> {
        self.read_bytes(4).map(Endian::read_u32)
    }

    pub fn read_packed_u32(&mut self) -> Result<u32> {
        self.read_packed(u64::from(u32::MAX), u32::BITS)
            .map(|value| value as u32)
    }

    pub fn read_packed_u64(&mut self) -> Result<u64> {
        self.read_packed(u64::MAX, u64::BITS)
    }

    fn read_packed(&mut self, max: u64, width: u32) -> Result<u64> {
        let bytes = self.bytes;
        let start = self.offset;
        let mut value = 0u64;

        for (i, &byte) in bytes[start..].iter().enumerate() {
            if value > max >> GROUP_BITS {
                return Err(CodecError::Overflow {
                    offset: start,
                    width,
                });
            }
            value = (value << GROUP_BITS) | u64::from(byte & GROUP_MASK);
            if value > max {
                return Err(CodecError::Overflow {
                    offset: start,
                    width,
                });
            }
            if byte & LAST_GROUP != 0 {
                self.offset = start + i + 1;
                return Ok(value);
            }
        }

        let available = self.remaining();
        Err(CodecError::Truncated {
            offset: start,
            needed: available + 1,
            available,
        })
    }

    /// Reads a 4-byte big-endian byte count followed by that many UTF-8
    /// bytes.
    pub fn read_utf8_text(&mut self) -> Result<String> {
        let start = self.offset;
        let len = self.read_fixed_u32()? as usize;
        let bytes = match self.read_bytes(len) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.rewind(start);
                return Err(err);
            }
        };

        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_owned()),
            Err(err) => {
                let offset = start + 4 + err.valid_up_to();
                self.rewind(start);
                let reason = match err.error_len() {
                    Some(len) => format!("invalid utf-8 sequence of {len} bytes"),
                    None => "incomplete utf-8 sequence at end of text".to_string(),
                };
                Err(CodecError::InvalidEncoding { offset, reason })
            }
        }
    }
}

impl<'a> From<&'a [u8]> for ByteSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteSource::new(bytes)
    }
}
