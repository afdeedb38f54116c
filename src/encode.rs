use crate::error::{CodecError, Result};
use crate::io::{ByteSink, ByteSource};
use crate::serialize::Serializer;

use tracing::trace;

/// Serializes `value` into a freshly allocated buffer.
pub fn serialize_to_bytes<T, S>(value: &T, codec: &S) -> Result<Vec<u8>>
where
    S: Serializer<T> + ?Sized,
{
    let mut sink = ByteSink::new();
    codec.serialize(&mut sink, value)?;
    trace!(codec = codec.name(), len = sink.len(), "serialized value");
    Ok(sink.into_bytes())
}

/// Like [`serialize_to_bytes`], but `None` is passed through without
/// touching the codec.
pub fn serialize_to_bytes_nullable<T, S>(value: Option<&T>, codec: &S) -> Result<Option<Vec<u8>>>
where
    S: Serializer<T> + ?Sized,
{
    value.map(|value| serialize_to_bytes(value, codec)).transpose()
}

/// Decodes a single value that must span all of `bytes`.
pub fn deserialize_from_bytes<T, S>(bytes: &[u8], codec: &S) -> Result<T>
where
    S: Serializer<T> + ?Sized,
{
    let mut source = ByteSource::new(bytes);
    let value = codec.deserialize(&mut source)?;
    if !source.is_exhausted() {
        return Err(CodecError::InvalidEncoding {
            offset: source.position(),
            reason: format!(
                "{} trailing bytes after {} value",
                source.remaining(),
                codec.name()
            ),
        });
    }

    Ok(value)
}
