use super::Endian;
use super::packed::{self, MAX_PACKED_LEN};
use crate::error::{CodecError, Result};

use byteorder::ByteOrder;

/// Growable output buffer that serializers append to.
///
/// A sink is owned by the call that created it and handed to exactly one
/// `serialize` call at a time. Growth goes through `Vec::try_reserve` so an
/// allocation failure surfaces as [`CodecError::Allocation`] instead of
/// aborting the process.
#[derive(Debug, Default)]
pub struct ByteSink {
    buf: Vec<u8>,
}

impl ByteSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes written so far, which is also the write offset.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Reserves room for `additional` bytes ahead of a bulk write.
    ///
    /// Advisory only: if the reservation cannot be satisfied the next write
    /// reports the failure.
    pub fn hint_capacity(&mut self, additional: usize) {
        let _ = self.buf.try_reserve(additional);
    }

    fn grow(&mut self, additional: usize) -> Result<()> {
        self.buf
            .try_reserve(additional)
            .map_err(|_| CodecError::Allocation {
                offset: self.buf.len(),
                requested: additional,
            })
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.grow(1)?;
        self.buf.push(byte);
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.grow(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    pub fn write_fixed_i32(&mut self, value: i32) -> Result<()> {
        let mut bytes = [0; 4];
        Endian::write_i32(&mut bytes, value);
        self.write_bytes(&bytes)
    }

    pub fn write_fixed_i64(&mut self, value: i64) -> Result<()> {
        let mut bytes = [0; 8];
        Endian::write_i64(&mut bytes, value);
        self.write_bytes(&bytes)
    }

    fn write_fixed_u32(&mut self, value: u32) -> Result<()> {
        let mut bytes = [0; 4];
        Endian::write_u32(&mut bytes, value);
        self.write_bytes(&bytes)
    }

    pub fn write_packed_u32(&mut self, value: u32) -> Result<()> {
        self.write_packed_u64(u64::from(value))
    }

    pub fn write_packed_u64(&mut self, value: u64) -> Result<()> {
        let mut buf = [0; MAX_PACKED_LEN];
        let bytes = packed::pack(value, &mut buf);
        self.write_bytes(bytes)
    }

    /// Writes `text` as a 4-byte big-endian byte count followed by its UTF-8
    /// bytes.
    pub fn write_utf8_text(&mut self, text: &str) -> Result<()> {
        let len = u32::try_from(text.len()).map_err(|_| CodecError::Overflow {
            offset: self.buf.len(),
            width: u32::BITS,
        })?;
        self.grow(4 + text.len())?;
        self.write_fixed_u32(len)?;
        self.write_bytes(text.as_bytes())
    }

    /// Consumes the sink and returns exactly the bytes written.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl From<ByteSink> for Vec<u8> {
    fn from(sink: ByteSink) -> Self {
        sink.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ints_are_big_endian() {
        let mut sink = ByteSink::new();
        sink.write_fixed_i32(300).unwrap();
        sink.write_fixed_i64(-2).unwrap();
        assert_eq!(
            sink.into_bytes(),
            [0, 0, 0x01, 0x2c, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]
        );
    }

    #[test]
    fn text_has_fixed_length_prefix() {
        let mut sink = ByteSink::new();
        sink.write_utf8_text("héllo").unwrap();
        assert_eq!(
            sink.as_bytes(),
            [0, 0, 0, 6, b'h', 0xc3, 0xa9, b'l', b'l', b'o']
        );
    }

    #[test]
    fn hint_does_not_change_contents() {
        let mut sink = ByteSink::new();
        sink.hint_capacity(1024);
        sink.write_byte(7).unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.into_bytes(), [7]);

        let mut sink = ByteSink::new();
        sink.hint_capacity(1);
        sink.write_bytes(&[1, 2, 3, 4]).unwrap();
        assert_eq!(sink.into_bytes(), [1, 2, 3, 4]);
    }

    #[test]
    fn impossible_hint_is_ignored() {
        let mut sink = ByteSink::new();
        sink.hint_capacity(usize::MAX);
        sink.write_byte(1).unwrap();
        assert_eq!(sink.into_bytes(), [1]);
    }

    #[test]
    fn failed_growth_is_an_allocation_error() {
        let mut sink = ByteSink::new();
        assert_eq!(
            sink.grow(usize::MAX),
            Err(CodecError::Allocation {
                offset: 0,
                requested: usize::MAX
            })
        );
        assert_eq!(sink.len(), 0);

        sink.write_bytes(&[1, 2]).unwrap();
        assert_eq!(
            sink.grow(usize::MAX),
            Err(CodecError::Allocation {
                offset: 2,
                requested: usize::MAX
            })
        );
        assert_eq!(sink.into_bytes(), [1, 2]);
    }

    #[test]
    fn packed_writes_are_minimal() {
        let mut sink = ByteSink::new();
        sink.write_packed_u32(3).unwrap();
        sink.write_packed_u64(128).unwrap();
        assert_eq!(sink.into_bytes(), [0x83, 0x01, 0x80]);
    }

    #[test]
    fn empty_sink_extracts_nothing() {
        let sink = ByteSink::new();
        assert!(sink.is_empty());
        assert!(Vec::from(sink).is_empty());
    }
}
