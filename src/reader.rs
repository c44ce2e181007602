// src/reader.rs

//! Little-endian primitive decoding over a forward-only byte stream.
//!
//! The `.fnt` format stores every multi-byte integer low byte first,
//! independent of the host. A read either yields the complete value or fails;
//! nothing partial is ever returned.

use crate::error::ReadError;
use std::io::Read;

const PAD_BYTE: u8 = b' ';

/// Sequential reader for `.fnt` primitives.
///
/// The reader does no buffering of its own; wrap files in a `BufReader`.
#[derive(Debug)]
pub struct BinaryReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> BinaryReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<(), ReadError> {
        self.inner.read_exact(buf)?;
        self.position += buf.len() as u64;
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf)?;
        Ok(buf[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, ReadError> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    pub fn read_u32(&mut self) -> Result<u32, ReadError> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Reads exactly `n` bytes.
    pub fn read_fixed_bytes(&mut self, n: usize) -> Result<Vec<u8>, ReadError> {
        let mut buf = vec![0u8; n];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Reads up to `n` bytes, returning fewer only if the stream ends first.
    ///
    /// Used where a short read is itself meaningful (the magic tag).
    pub fn read_at_most(&mut self, n: usize) -> Result<Vec<u8>, ReadError> {
        let mut buf = Vec::with_capacity(n);
        self.inner.by_ref().take(n as u64).read_to_end(&mut buf)?;
        self.position += buf.len() as u64;
        Ok(buf)
    }

    /// Reads a fixed-width, space-padded text field of `total_len` bytes.
    ///
    /// Trailing spaces are stripped; interior spaces survive. A NUL byte ends
    /// the string early.
    pub fn read_padded_string(&mut self, total_len: usize) -> Result<String, ReadError> {
        let raw = self.read_fixed_bytes(total_len)?;
        Ok(trim_padded(&raw))
    }
}

fn trim_padded(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .rposition(|&b| b != PAD_BYTE)
        .map_or(0, |last| last + 1);
    let text = &raw[..end];
    let text = match text.iter().position(|&b| b == 0) {
        Some(nul) => &text[..nul],
        None => text,
    };
    String::from_utf8_lossy(text).into_owned()
}
