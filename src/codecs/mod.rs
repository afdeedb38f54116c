//! Serializers for the primitive value types.
//!
//! | codec          | value     | layout                                 |
//! |----------------|-----------|----------------------------------------|
//! | [`Int32`]      | `i32`     | 4 bytes, big-endian                    |
//! | [`Int64`]      | `i64`     | 8 bytes, big-endian                    |
//! | [`Utf8Text`]   | `String`  | 4-byte big-endian byte count, UTF-8    |
//! | [`PrefixedBytes`] | `Vec<u8>` | packed length, raw bytes            |
//! | [`TrailingBytes`] | `Vec<u8>` | raw bytes up to the end of input    |
//! | [`PackedU32`]  | `u32`     | packed, 1 to 5 bytes                   |
//! | [`PackedU64`]  | `u64`     | packed, 1 to 10 bytes                  |

mod bytes;
mod ints;
mod text;


pub use bytes::{PrefixedBytes, TrailingBytes};
pub use ints::{Int32, Int64, PackedU32, PackedU64};
pub use text::Utf8Text;

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Codecs addressable by name, e.g. from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    Int32,
    Int64,
    Text,
    Bytes,
    BytesNoSize,
    Packed32,
    Packed64,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown codec `{0}`, expected one of: {names}", names = CodecKind::names())]
pub struct UnknownCodecError(pub String);

impl CodecKind {
    pub const ALL: [CodecKind; 7] = [
        CodecKind::Int32,
        CodecKind::Int64,
        CodecKind::Text,
        CodecKind::Bytes,
        CodecKind::BytesNoSize,
        CodecKind::Packed32,
        CodecKind::Packed64,
    ];

    fn names() -> String {
        CodecKind::ALL.map(CodecKind::name).join(", ")
    }

    /// Name shared with the codec's `Serializer::name`.
    pub fn name(self) -> &'static str {
        match self {
            CodecKind::Int32 => "int32",
            CodecKind::Int64 => "int64",
            CodecKind::Text => "text",
            CodecKind::Bytes => "bytes",
            CodecKind::BytesNoSize => "bytes-nosize",
            CodecKind::Packed32 => "packed32",
            CodecKind::Packed64 => "packed64",
        }
    }
}

impl FromStr for CodecKind {
    type Err = UnknownCodecError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        CodecKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownCodecError(name.to_string()))
    }
}

impl Display for CodecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
