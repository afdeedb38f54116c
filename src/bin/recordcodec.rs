use recordcodec::codecs::{CodecKind, UnknownCodecError};
use recordcodec::config::CONFIG;
use recordcodec::file::{RecordFile, RecordFileError};
use recordcodec::report::DecodeReport;
use recordcodec::value::{ParseValueError, Value, parse_hex};
use recordcodec::{CodecError, deserialize_from_bytes, serialize_to_bytes_nullable};

use miette::{Diagnostic, IntoDiagnostic, Result};
use thiserror::Error;
use tracing::{debug, info};

const USAGE: &str = "usage:
  recordcodec encode <codec> <value | --null>
  recordcodec decode <codec> <hex>
  recordcodec decode-file <codec> <path>";

#[derive(Error, Debug, Diagnostic)]
enum CliError {
    #[error("{}", USAGE)]
    #[diagnostic(help("codecs: int32, int64, text, bytes, bytes-nosize, packed32, packed64"))]
    Usage,
    #[error(transparent)]
    UnknownCodec(#[from] UnknownCodecError),
    #[error(transparent)]
    ParseValue(#[from] ParseValueError),
    #[error("cannot encode {codec} value")]
    Encode {
        codec: CodecKind,
        #[source]
        source: CodecError,
    },
    #[error("cannot read {path}")]
    RecordFile {
        path: String,
        #[source]
        source: RecordFileError,
    },
}

fn encode(kind: CodecKind, text: &str) -> Result<()> {
    let value = match text {
        "--null" => None,
        text => Some(Value::parse(kind, text).map_err(CliError::from)?),
    };

    let encoded = serialize_to_bytes_nullable(value.as_ref(), &kind)
        .map_err(|source| CliError::Encode { codec: kind, source })?;
    match encoded {
        Some(bytes) => {
            info!(codec = %kind, len = bytes.len(), "encoded value");
            println!("{}", hex::encode(bytes));
        }
        None => {
            debug!(codec = %kind, "null value bypassed codec");
            println!("null");
        }
    }

    Ok(())
}

fn decode(kind: CodecKind, bytes: &[u8]) -> Result<()> {
    match deserialize_from_bytes(bytes, &kind) {
        Ok(value) => {
            info!(codec = %kind, len = bytes.len(), "decoded value");
            println!("{value}");
            Ok(())
        }
        Err(cause) => {
            debug!(codec = %kind, offset = cause.offset(), "decoding failed");
            Err(DecodeReport::new(kind.name(), bytes, cause, CONFIG.HEX_BYTES_PER_LINE).into())
        }
    }
}

fn decode_file(kind: CodecKind, path: &str) -> Result<()> {
    let record =
        RecordFile::open(path, CONFIG.MAX_INPUT_SIZE).map_err(|source| CliError::RecordFile {
            path: path.to_string(),
            source,
        })?;
    decode(kind, &record)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recordcodec=info".parse().into_diagnostic()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let [command, codec, arg] = args.as_slice() else {
        return Err(CliError::Usage.into());
    };
    let kind = codec.parse::<CodecKind>().map_err(CliError::from)?;

    match command.as_str() {
        "encode" => encode(kind, arg),
        "decode" => {
            let bytes = parse_hex(arg).map_err(CliError::from)?;
            decode(kind, &bytes)
        }
        "decode-file" => decode_file(kind, arg),
        _ => Err(CliError::Usage.into()),
    }
}
