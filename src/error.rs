// src/error.rs

//! Error types for reading and loading `.fnt` fonts.
//!
//! `ReadError` is what the primitive reader reports; the decoder tags it with
//! the field it was reading and surfaces it as a `LoadError`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single primitive read.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The stream ended before the value was complete.
    #[error("unexpected end of stream")]
    Truncated,
    /// The underlying stream failed for a reason other than end-of-file.
    #[error("read failed: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            ReadError::Truncated
        } else {
            ReadError::Io(err)
        }
    }
}

/// Reason a font could not be loaded.
///
/// Every variant is terminal for the `load` call that produced it; no partially
/// decoded font is ever handed out alongside an error.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("font file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error while loading font: {0}")]
    Io(#[source] io::Error),

    /// The first four bytes were not `RB11`. `found` holds whatever bytes were
    /// available, which may be fewer than four.
    #[error("bad magic {found:?}, expected \"RB11\"")]
    BadMagic { found: Vec<u8> },

    #[error("font data truncated while reading {field}")]
    Truncated { field: &'static str },

    #[error("cannot allocate {count} entries for the {section} section")]
    OutOfMemory { section: &'static str, count: u32 },
}

impl LoadError {
    pub(crate) fn open(path: PathBuf, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound { path }
        } else {
            LoadError::Io(err)
        }
    }

    /// True for `Truncated`.
    pub fn is_truncated(&self) -> bool {
        matches!(self, LoadError::Truncated { .. })
    }
}

/// Attaches the name of the field being decoded to a reader failure.
pub(crate) trait ReadResultExt<T> {
    fn field(self, name: &'static str) -> Result<T, LoadError>;
}

impl<T> ReadResultExt<T> for Result<T, ReadError> {
    fn field(self, name: &'static str) -> Result<T, LoadError> {
        self.map_err(|err| match err {
            ReadError::Truncated => LoadError::Truncated { field: name },
            ReadError::Io(io) => LoadError::Io(io),
        })
    }
}
