use crate::error::{CodecError, Result};
use crate::io::{ByteSink, ByteSource};
use crate::serialize::Serializer;

/// Byte buffer behind a packed length.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixedBytes;

impl Serializer<Vec<u8>> for PrefixedBytes {
    fn name(&self) -> &'static str {
        "bytes"
    }

    fn serialize(&self, out: &mut ByteSink, value: &Vec<u8>) -> Result<()> {
        out.write_packed_u64(value.len() as u64)?;
        out.hint_capacity(value.len());
        out.write_bytes(value)
    }

    fn deserialize(&self, input: &mut ByteSource<'_>) -> Result<Vec<u8>> {
        let start = input.position();
        let len = input.read_packed_u64()?;
        let len = usize::try_from(len).map_err(|_| CodecError::Overflow {
            offset: start,
            width: usize::BITS,
        })?;
        match input.read_bytes(len) {
            Ok(bytes) => Ok(bytes.to_vec()),
            Err(err) => {
                input.rewind(start);
                Err(err)
            }
        }
    }
}

/// Byte buffer with no length field; decoding consumes the rest of the input.
///
/// Only valid for the last value of a stream. Anything written after it is
/// swallowed on the way back.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingBytes;

impl Serializer<Vec<u8>> for TrailingBytes {
    fn name(&self) -> &'static str {
        "bytes-nosize"
    }

    fn serialize(&self, out: &mut ByteSink, value: &Vec<u8>) -> Result<()> {
        out.hint_capacity(value.len());
        out.write_bytes(value)
    }

    fn deserialize(&self, input: &mut ByteSource<'_>) -> Result<Vec<u8>> {
        let len = input.remaining();
        Ok(input.read_bytes(len)?.to_vec())
    }
}
