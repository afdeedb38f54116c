use crate::error::Result;
use crate::io::{ByteSink, ByteSource};

/// Converts values of type `T` to and from a byte stream.
///
/// Implementations hold no mutable state and may be shared freely between
/// threads. For every value `x` a codec accepts, `deserialize` applied to the
/// output of `serialize` yields a value equal to `x`.
pub trait Serializer<T>: Send + Sync {
    /// Stable name used when reporting failures.
    fn name(&self) -> &'static str;

    fn serialize(&self, out: &mut ByteSink, value: &T) -> Result<()>;

    fn deserialize(&self, input: &mut ByteSource<'_>) -> Result<T>;
}

impl<T, S: Serializer<T> + ?Sized> Serializer<T> for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn serialize(&self, out: &mut ByteSink, value: &T) -> Result<()> {
        (**self).serialize(out, value)
    }

    fn deserialize(&self, input: &mut ByteSource<'_>) -> Result<T> {
        (**self).deserialize(input)
    }
}
