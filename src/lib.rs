//! Binary codecs for persisting typed records.
//!
//! A [`Serializer`] converts one value type to and from bytes through a
//! [`ByteSink`] and a [`ByteSource`]:
//!
//! ```
//! use recordcodec::codecs::{Int32, PrefixedBytes};
//! use recordcodec::{deserialize_from_bytes, serialize_to_bytes};
//!
//! let bytes = serialize_to_bytes(&300, &Int32).unwrap();
//! assert_eq!(deserialize_from_bytes(&bytes, &Int32).unwrap(), 300);
//!
//! let bytes = serialize_to_bytes(&vec![1, 2, 3], &PrefixedBytes).unwrap();
//! assert_eq!(bytes, [0x83, 1, 2, 3]);
//! ```

pub mod codecs;
pub mod config;
pub mod encode;
pub mod error;
pub mod file;
pub mod io;
pub mod report;
pub mod serialize;
pub mod value;

pub use encode::{deserialize_from_bytes, serialize_to_bytes, serialize_to_bytes_nullable};
pub use error::{CodecError, Result};
pub use io::{ByteSink, ByteSource};
pub use serialize::Serializer;
