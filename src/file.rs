use std::fs::File;
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordFileError {
    #[error("io error")]
    Io(#[from] std::io::Error),
    #[error("file is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { size: u64, limit: usize },
}

/// Read-only view of an encoded record stored on disk.
pub enum RecordFile {
    // zero-length files cannot be mapped
    Empty,
    Mapped(Mmap),
}

impl RecordFile {
    /// Maps the file at `path`, refusing files over `max_size` bytes.
    pub fn open<P: AsRef<Path>>(path: P, max_size: usize) -> Result<Self, RecordFileError> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        if size > max_size as u64 {
            return Err(RecordFileError::TooLarge {
                size,
                limit: max_size,
            });
        }
        if size == 0 {
            return Ok(RecordFile::Empty);
        }

        // SAFETY: the map is read-only; a concurrent writer truncating the
        // file is outside what this tool supports.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(RecordFile::Mapped(mmap))
    }
}

impl Deref for RecordFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            RecordFile::Empty => &[],
            RecordFile::Mapped(mmap) => &mmap[..],
        }
    }
}
