use crate::error::Result;
use crate::io::{ByteSink, ByteSource};
use crate::serialize::Serializer;

/// `i32` as 4 big-endian bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int32;

impl Serializer<i32> for Int32 {
    fn name(&self) -> &'static str {
        "int32"
    }

    fn serialize(&self, out: &mut ByteSink, value: &i32) -> Result<()> {
        out.write_fixed_i32(*value)
    }

    fn deserialize(&self, input: &mut ByteSource<'_>) -> Result<i32> {
        input.read_fixed_i32()
    }
}

/// `i64` as 8 big-endian bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int64;

impl Serializer<i64> for Int64 {
    fn name(&self) -> &'static str {
        "int64"
    }

    fn serialize(&self, out: &mut ByteSink, value: &i64) -> Result<()> {
        out.write_fixed_i64(*value)
    }

    fn deserialize(&self, input: &mut ByteSource<'_>) -> Result<i64> {
        input.read_fixed_i64()
    }
}

/// `u32` packed into one to five bytes; small values are cheapest.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackedU32;

impl Serializer<u32> for PackedU32 {
    fn name(&self) -> &'static str {
        "packed32"
    }

    fn serialize(&self, out: &mut ByteSink, value: &u32) -> Result<()> {
        out.write_packed_u32(*value)
    }

    fn deserialize(&self, input: &mut ByteSource<'_>) -> Result<u32> {
        input.read_packed_u32()
    }
}

/// `u64` packed into one to ten bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackedU64;

impl Serializer<u64> for PackedU64 {
    fn name(&self) -> &'static str {
        "packed64"
    }

    fn serialize(&self, out: &mut ByteSink, value: &u64) -> Result<()> {
        out.write_packed_u64(*value)
    }

    fn deserialize(&self, input: &mut ByteSource<'_>) -> Result<u64> {
        input.read_packed_u64()
    }
}
