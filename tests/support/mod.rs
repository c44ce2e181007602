// tests/support/mod.rs

//! Shared helpers for building `.fnt` fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Field-by-field `.fnt` image. Section counts default to the data lengths.
#[derive(Clone)]
pub struct FntImage {
    pub magic: Vec<u8>,
    pub name: String,
    pub copyright: String,
    pub max_width: u16,
    pub height: u16,
    pub ascent: u16,
    pub first_char: u32,
    pub default_char: u32,
    pub size: u32,
    pub noffset: Option<u32>,
    pub nwidth: Option<u32>,
    pub bits: Vec<u16>,
    pub offsets: Vec<u32>,
    pub widths: Vec<u8>,
}

impl FntImage {
    /// A fixed-width 8x2 font covering 'A'..='C'.
    pub fn fixed() -> Self {
        FntImage {
            magic: b"RB11".to_vec(),
            name: "fixed8x2".to_string(),
            copyright: "Public domain".to_string(),
            max_width: 8,
            height: 2,
            ascent: 2,
            first_char: 65,
            default_char: 65,
            size: 3,
            noffset: None,
            nwidth: None,
            bits: vec![0xFF00, 0x8100, 0x1800, 0x2400, 0x4200, 0x7E00],
            offsets: Vec::new(),
            widths: Vec::new(),
        }
    }

    /// A proportional font with offset and width sections.
    pub fn proportional() -> Self {
        FntImage {
            name: "prop".to_string(),
            max_width: 10,
            first_char: 32,
            default_char: 63,
            size: 2,
            bits: vec![0x0000, 0x0000, 0xFFC0, 0x8040],
            offsets: vec![0, 2],
            widths: vec![3, 10],
            ..Self::fixed()
        }
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut out = self.magic.clone();
        out.extend(padded(&self.name, 64));
        out.extend(padded(&self.copyright, 256));
        for v in [self.max_width, self.height, self.ascent, 0] {
            out.extend(v.to_le_bytes());
        }
        let noffset = self.noffset.unwrap_or(self.offsets.len() as u32);
        let nwidth = self.nwidth.unwrap_or(self.widths.len() as u32);
        for v in [
            self.first_char,
            self.default_char,
            self.size,
            self.bits.len() as u32,
            noffset,
            nwidth,
        ] {
            out.extend(v.to_le_bytes());
        }
        for w in &self.bits {
            out.extend(w.to_le_bytes());
        }
        for o in &self.offsets {
            out.extend(o.to_le_bytes());
        }
        out.extend(&self.widths);
        out
    }
}

fn padded(text: &str, len: usize) -> Vec<u8> {
    let mut field = text.as_bytes().to_vec();
    field.resize(len, b' ');
    field
}

/// Scratch directory under `temp_dir()`, removed with its contents on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        let path = std::env::temp_dir().join(format!(
            "fnt-loader-tests-{}-{}",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&path).expect("create scratch dir");
        ScratchDir { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `bytes` to `<scratch>/<file_name>` and returns the path.
    pub fn write(&self, file_name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path.join(file_name);
        std::fs::write(&path, bytes).expect("write fixture");
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
