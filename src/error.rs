use thiserror::Error;

/// Failure raised while writing to a `ByteSink` or reading from a `ByteSource`.
///
/// Every variant carries the byte offset at which the problem was detected so
/// that corrupted records can be located in the persisted data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("truncated input at offset {offset}: needed {needed} bytes, only {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("invalid encoding at offset {offset}: {reason}")]
    InvalidEncoding { offset: usize, reason: String },
    #[error("value at offset {offset} does not fit in {width} bits")]
    Overflow { offset: usize, width: u32 },
    #[error("cannot grow buffer by {requested} bytes at offset {offset}")]
    Allocation { offset: usize, requested: usize },
}

impl CodecError {
    pub fn offset(&self) -> usize {
        match *self {
            CodecError::Truncated { offset, .. }
            | CodecError::InvalidEncoding { offset, .. }
            | CodecError::Overflow { offset, .. }
            | CodecError::Allocation { offset, .. } => offset,
        }
    }
}

pub type Result<T, E = CodecError> = std::result::Result<T, E>;
