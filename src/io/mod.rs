//! Byte-level streams that serializers write to and read from.
//!
//! Fixed-width integers are big-endian. Packed integers use the layout
//! documented in [`packed`].

pub mod packed;
mod sink;
mod source;

pub use sink::ByteSink;
pub use source::ByteSource;

/// Byte order of every fixed-width integer in the format.
pub type Endian = byteorder::BigEndian;
