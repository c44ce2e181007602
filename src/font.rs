// src/font.rs

//! In-memory representation of a loaded `.fnt` font.
//!
//! A `FontRecord` only ever exists fully populated: the decoder assembles it
//! from owned buffers after the last section has been read. Dropping it (or
//! calling [`unload`]) releases every buffer at once.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Number of character codes covered by [`FontInfo::widths`].
pub const FONT_INFO_CODES: usize = 256;

/// Bits per bitmap word.
const WORD_BITS: u32 = u16::BITS;

/// A per-glyph section that the header may declare absent.
///
/// When present it holds one entry per glyph. Absence is distinct from an
/// empty section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GlyphSection<T> {
    #[default]
    Absent,
    Present(Vec<T>),
}

impl<T> GlyphSection<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, GlyphSection::Present(_))
    }

    pub fn as_slice(&self) -> Option<&[T]> {
        match self {
            GlyphSection::Present(entries) => Some(entries),
            GlyphSection::Absent => None,
        }
    }

    /// Entry for glyph `index`, if the section is present and long enough.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().and_then(|entries| entries.get(index))
    }
}

impl<T> From<Option<Vec<T>>> for GlyphSection<T> {
    fn from(entries: Option<Vec<T>>) -> Self {
        entries.map_or(GlyphSection::Absent, GlyphSection::Present)
    }
}

bitflags! {
    /// Layout properties of a loaded font.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct FontFlags: u8 {
        /// Glyphs carry individual widths.
        const PROPORTIONAL = 1 << 0;
        /// Glyph bitmaps are located through the offset section.
        const HAS_OFFSETS  = 1 << 1;
    }
}

/// Summary metrics handed to text layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    pub max_width: u16,
    pub height: u16,
    pub baseline: u16,
    pub first_char: u32,
    /// Code of the last glyph; equals `first_char` for an empty font.
    pub last_char: u32,
    pub fixed: bool,
    pub flags: FontFlags,
    /// Advance width for each code in `0..FONT_INFO_CODES`.
    pub widths: [u16; FONT_INFO_CODES],
}

/// A fully decoded `.fnt` font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRecord {
    name: String,
    max_width: u16,
    height: u16,
    ascent: u16,
    first_char: u32,
    default_char: u32,
    glyph_count: u32,
    bitmap_words: Vec<u16>,
    offsets: GlyphSection<u32>,
    widths: GlyphSection<u8>,
}

/// Scalar header values carried into a [`FontRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontMetrics {
    pub name: String,
    pub max_width: u16,
    pub height: u16,
    pub ascent: u16,
    pub first_char: u32,
    pub default_char: u32,
    pub glyph_count: u32,
}

impl FontRecord {
    pub(crate) fn from_parts(
        metrics: FontMetrics,
        bitmap_words: Vec<u16>,
        offsets: GlyphSection<u32>,
        widths: GlyphSection<u8>,
    ) -> Self {
        Self {
            name: metrics.name,
            max_width: metrics.max_width,
            height: metrics.height,
            ascent: metrics.ascent,
            first_char: metrics.first_char,
            default_char: metrics.default_char,
            glyph_count: metrics.glyph_count,
            bitmap_words,
            offsets,
            widths,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_width(&self) -> u16 {
        self.max_width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn ascent(&self) -> u16 {
        self.ascent
    }

    pub fn first_char(&self) -> u32 {
        self.first_char
    }

    pub fn default_char(&self) -> u32 {
        self.default_char
    }

    pub fn glyph_count(&self) -> u32 {
        self.glyph_count
    }

    /// Packed glyph bitmaps, row-major, one `u16` per word.
    pub fn bitmap_words(&self) -> &[u16] {
        &self.bitmap_words
    }

    pub fn offsets(&self) -> &GlyphSection<u32> {
        &self.offsets
    }

    pub fn widths(&self) -> &GlyphSection<u8> {
        &self.widths
    }

    /// Code of the last glyph, or `None` for a font without glyphs.
    pub fn last_char(&self) -> Option<u32> {
        self.glyph_count
            .checked_sub(1)
            .and_then(|last| self.first_char.checked_add(last))
    }

    fn index_of(&self, code: u32) -> Option<usize> {
        let index = code.checked_sub(self.first_char)?;
        (index < self.glyph_count).then_some(index as usize)
    }

    /// Glyph index for `code`, substituting the default character when `code`
    /// is outside the font. `None` if the default character is missing too.
    pub fn glyph_index(&self, code: u32) -> Option<usize> {
        self.index_of(code).or_else(|| self.index_of(self.default_char))
    }

    /// Advance width of glyph `index` in pixels.
    pub fn glyph_width(&self, index: usize) -> Option<u16> {
        if index >= self.glyph_count as usize {
            return None;
        }
        match &self.widths {
            GlyphSection::Present(widths) => widths.get(index).map(|&w| u16::from(w)),
            GlyphSection::Absent => Some(self.max_width),
        }
    }

    /// Bitmap words of glyph `index`: `height` rows, each as many words as
    /// the glyph width needs.
    ///
    /// Without an offset section glyphs are laid out back to back at the
    /// `max_width` stride. Returns `None` when the glyph's words fall outside
    /// the bitmap.
    pub fn glyph_bits(&self, index: usize) -> Option<&[u16]> {
        let width = self.glyph_width(index)?;
        let height = usize::from(self.height);
        let start = match &self.offsets {
            GlyphSection::Present(offsets) => *offsets.get(index)? as usize,
            GlyphSection::Absent => index
                .checked_mul(height)?
                .checked_mul(words_per_row(self.max_width))?,
        };
        let len = height * words_per_row(width);
        self.bitmap_words.get(start..start.checked_add(len)?)
    }

    pub fn flags(&self) -> FontFlags {
        let mut flags = FontFlags::empty();
        flags.set(FontFlags::PROPORTIONAL, self.widths.is_present());
        flags.set(FontFlags::HAS_OFFSETS, self.offsets.is_present());
        flags
    }

    /// Metrics summary with per-code widths for the first 256 codes.
    pub fn font_info(&self) -> FontInfo {
        let mut widths = [0u16; FONT_INFO_CODES];
        for (code, width) in widths.iter_mut().enumerate() {
            *width = match &self.widths {
                GlyphSection::Absent => self.max_width,
                GlyphSection::Present(_) => self
                    .index_of(code as u32)
                    .and_then(|index| self.glyph_width(index))
                    .unwrap_or(0),
            };
        }

        FontInfo {
            max_width: self.max_width,
            height: self.height,
            baseline: self.ascent,
            first_char: self.first_char,
            last_char: self.last_char().unwrap_or(self.first_char),
            fixed: !self.widths.is_present(),
            flags: self.flags(),
            widths,
        }
    }

    /// Releases the font. Equivalent to dropping it.
    pub fn unload(self) {
        log::trace!("Unloading font '{}'", self.name);
    }
}

/// Releases a loaded font and all of its sections.
pub fn unload(font: FontRecord) {
    font.unload();
}

fn words_per_row(width: u16) -> usize {
    (u32::from(width)).div_ceil(WORD_BITS) as usize
}
