use crate::error::CodecError;

use std::fmt::Write;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Marker cell printed after the last byte so end-of-input has a position.
const END_MARKER: &str = "$$";
/// Width of the `00000000  ` offset column.
const OFFSET_COLUMN: usize = 10;
/// Two hex digits and a separator.
const CELL: usize = 3;

/// A decoding failure rendered against a hex dump of the input.
#[derive(Error, Debug, Diagnostic)]
#[error("cannot decode {codec} value")]
#[diagnostic(code(recordcodec::decode))]
pub struct DecodeReport {
    codec: &'static str,
    #[source_code]
    dump: String,
    #[label("{cause}")]
    span: SourceSpan,
    cause: CodecError,
}

impl DecodeReport {
    pub fn new(codec: &'static str, input: &[u8], cause: CodecError, bytes_per_line: usize) -> Self {
        let dump = HexDump::new(bytes_per_line);
        let offset = cause.offset().min(input.len());
        let last = match cause {
            CodecError::Truncated { .. } => input.len(),
            _ => offset,
        };
        let start = dump.cell_position(offset);
        let end = dump.cell_position(last) + END_MARKER.len();

        Self {
            codec,
            dump: dump.render(input),
            span: (start, end - start).into(),
            cause,
        }
    }

    pub fn codec(&self) -> &'static str {
        self.codec
    }

    pub fn cause(&self) -> &CodecError {
        &self.cause
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }

    pub fn dump(&self) -> &str {
        &self.dump
    }
}

struct HexDump {
    bytes_per_line: usize,
}

impl HexDump {
    fn new(bytes_per_line: usize) -> Self {
        Self {
            bytes_per_line: bytes_per_line.max(1),
        }
    }

    fn line_len(&self) -> usize {
        OFFSET_COLUMN + self.bytes_per_line * CELL
    }

    /// Character position of the cell for byte `offset`; `offset == len`
    /// addresses the end marker.
    fn cell_position(&self, offset: usize) -> usize {
        let line = offset / self.bytes_per_line;
        let column = offset % self.bytes_per_line;
        line * self.line_len() + OFFSET_COLUMN + column * CELL
    }

    fn render(&self, input: &[u8]) -> String {
        let lines = input.len() / self.bytes_per_line + 1;
        let mut out = String::with_capacity(lines * self.line_len());
        let cells = input
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .chain(std::iter::once(END_MARKER.to_string()));

        for (i, cell) in cells.enumerate() {
            let column = i % self.bytes_per_line;
            if column == 0 {
                if i > 0 {
                    out.push('\n');
                }
                let _ = write!(out, "{i:08x}  ");
            } else {
                out.push(' ');
            }
            out.push_str(&cell);
        }
        out.push('\n');
        out
    }
}
