use crate::error::Result;
use crate::io::{ByteSink, ByteSource};
use crate::serialize::Serializer;

/// UTF-8 text behind a 4-byte big-endian byte count.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Text;

impl Serializer<String> for Utf8Text {
    fn name(&self) -> &'static str {
        "text"
    }

    fn serialize(&self, out: &mut ByteSink, value: &String) -> Result<()> {
        out.write_utf8_text(value)
    }

    fn deserialize(&self, input: &mut ByteSource<'_>) -> Result<String> {
        input.read_utf8_text()
    }
}
