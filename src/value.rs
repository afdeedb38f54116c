use crate::codecs::{
    CodecKind, Int32, Int64, PackedU32, PackedU64, PrefixedBytes, TrailingBytes, Utf8Text,
};
use crate::error::{CodecError, Result};
use crate::io::{ByteSink, ByteSource};
use crate::serialize::Serializer;

use std::fmt::Display;

use thiserror::Error;

/// A value of any primitive codec, tagged with the codec it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Int32(i32),
    Int64(i64),
    Text(String),
    Bytes(Vec<u8>),
    BytesNoSize(Vec<u8>),
    Packed32(u32),
    Packed64(u64),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseValueError {
    #[error("`{text}` is not a valid {kind} value")]
    Number { kind: CodecKind, text: String },
    #[error("`{text}` is not valid hex: {reason}")]
    Hex { text: String, reason: String },
}

impl Value {
    pub fn kind(&self) -> CodecKind {
        match self {
            Value::Int32(_) => CodecKind::Int32,
            Value::Int64(_) => CodecKind::Int64,
            Value::Text(_) => CodecKind::Text,
            Value::Bytes(_) => CodecKind::Bytes,
            Value::BytesNoSize(_) => CodecKind::BytesNoSize,
            Value::Packed32(_) => CodecKind::Packed32,
            Value::Packed64(_) => CodecKind::Packed64,
        }
    }

    /// Parses the textual form of a value. Byte buffers are written as hex.
    pub fn parse(kind: CodecKind, text: &str) -> Result<Self, ParseValueError> {
        let number = || ParseValueError::Number {
            kind,
            text: text.to_string(),
        };

        Ok(match kind {
            CodecKind::Int32 => Value::Int32(text.parse().map_err(|_| number())?),
            CodecKind::Int64 => Value::Int64(text.parse().map_err(|_| number())?),
            CodecKind::Packed32 => Value::Packed32(text.parse().map_err(|_| number())?),
            CodecKind::Packed64 => Value::Packed64(text.parse().map_err(|_| number())?),
            CodecKind::Text => Value::Text(text.to_string()),
            CodecKind::Bytes => Value::Bytes(parse_hex(text)?),
            CodecKind::BytesNoSize => Value::BytesNoSize(parse_hex(text)?),
        })
    }
}

/// Decodes hex, ignoring whitespace so dumps can be pasted back in.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, ParseValueError> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&digits).map_err(|err| ParseValueError::Hex {
        text: text.to_string(),
        reason: err.to_string(),
    })
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Packed32(v) => write!(f, "{v}"),
            Value::Packed64(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Bytes(b) | Value::BytesNoSize(b) => f.write_str(&hex::encode(b)),
        }
    }
}

/// Dispatches to the codec named by the kind; the value's variant must match.
///
/// A mismatched pair is reported as [`CodecError::InvalidEncoding`] at the
/// current write offset: the value has no encoding under this codec.
/// `Value::parse` always produces the variant of the kind it is given, so the
/// command-line tool cannot hit this.
impl Serializer<Value> for CodecKind {
    fn name(&self) -> &'static str {
        CodecKind::name(*self)
    }

    fn serialize(&self, out: &mut ByteSink, value: &Value) -> Result<()> {
        match (self, value) {
            (CodecKind::Int32, Value::Int32(v)) => Int32.serialize(out, v),
            (CodecKind::Int64, Value::Int64(v)) => Int64.serialize(out, v),
            (CodecKind::Text, Value::Text(v)) => Utf8Text.serialize(out, v),
            (CodecKind::Bytes, Value::Bytes(v)) => PrefixedBytes.serialize(out, v),
            (CodecKind::BytesNoSize, Value::BytesNoSize(v)) => TrailingBytes.serialize(out, v),
            (CodecKind::Packed32, Value::Packed32(v)) => PackedU32.serialize(out, v),
            (CodecKind::Packed64, Value::Packed64(v)) => PackedU64.serialize(out, v),
            (kind, value) => Err(CodecError::InvalidEncoding {
                offset: out.len(),
                reason: format!("{kind} codec cannot encode a {} value", value.kind()),
            }),
        }
    }

    fn deserialize(&self, input: &mut ByteSource<'_>) -> Result<Value> {
        Ok(match self {
            CodecKind::Int32 => Value::Int32(Int32.deserialize(input)?),
            CodecKind::Int64 => Value::Int64(Int64.deserialize(input)?),
            CodecKind::Text => Value::Text(Utf8Text.deserialize(input)?),
            CodecKind::Bytes => Value::Bytes(PrefixedBytes.deserialize(input)?),
            CodecKind::BytesNoSize => Value::BytesNoSize(TrailingBytes.deserialize(input)?),
            CodecKind::Packed32 => Value::Packed32(PackedU32.deserialize(input)?),
            CodecKind::Packed64 => Value::Packed64(PackedU64.deserialize(input)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{deserialize_from_bytes, serialize_to_bytes, serialize_to_bytes_nullable};

    #[test]
    fn parse_and_encode_each_kind() {
        let cases = [
            (CodecKind::Int32, "300", "0000012c"),
            (CodecKind::Int64, "-1", "ffffffffffffffff"),
            (CodecKind::Text, "héllo", "0000000668c3a96c6c6f"),
            (CodecKind::Bytes, "010203", "83010203"),
            (CodecKind::BytesNoSize, "01 02 03", "010203"),
            (CodecKind::Packed32, "300", "02ac"),
            (CodecKind::Packed64, "0", "80"),
        ];

        for (kind, text, expected) in cases {
            let value = Value::parse(kind, text).unwrap();
            assert_eq!(value.kind(), kind);
            let bytes = serialize_to_bytes(&value, &kind).unwrap();
            assert_eq!(hex::encode(&bytes), expected, "{kind}");
            assert_eq!(deserialize_from_bytes(&bytes, &kind).unwrap(), value);
        }
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Int32(-5).to_string(), "-5");
        assert_eq!(Value::Text("a\"b".into()).to_string(), "\"a\\\"b\"");
        assert_eq!(Value::Bytes(vec![0xde, 0xad]).to_string(), "dead");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Value::parse(CodecKind::Int32, "4294967296"),
            Err(ParseValueError::Number {
                kind: CodecKind::Int32,
                text: "4294967296".into()
            })
        );
        assert!(matches!(
            Value::parse(CodecKind::Packed32, "-1"),
            Err(ParseValueError::Number { .. })
        ));
        assert!(matches!(
            Value::parse(CodecKind::Bytes, "abc"),
            Err(ParseValueError::Hex { .. })
        ));
    }

    #[test]
    fn mismatched_value_is_rejected() {
        let err = serialize_to_bytes(&Value::Int64(1), &CodecKind::Int32).unwrap_err();
        assert!(matches!(err, CodecError::InvalidEncoding { offset: 0, .. }));

        let mut sink = ByteSink::new();
        CodecKind::Int32.serialize(&mut sink, &Value::Int32(7)).unwrap();
        assert_eq!(
            CodecKind::Text
                .serialize(&mut sink, &Value::Bytes(vec![1]))
                .unwrap_err(),
            CodecError::InvalidEncoding {
                offset: 4,
                reason: "text codec cannot encode a bytes value".into()
            }
        );
        assert_eq!(sink.into_bytes(), [0, 0, 0, 7]);
    }

    #[test]
    fn null_never_reaches_codec() {
        assert_eq!(
            serialize_to_bytes_nullable::<Value, _>(None, &CodecKind::Text).unwrap(),
            None
        );
        let value = Value::Text("x".into());
        assert_eq!(
            serialize_to_bytes_nullable(Some(&value), &CodecKind::Text).unwrap(),
            Some(vec![0, 0, 0, 1, b'x'])
        );
    }
}
