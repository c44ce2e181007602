// src/decoder.rs

//! Decoder for `.fnt` ("RB11") bitmap fonts.
//!
//! ```text
//! magic "RB11"           4
//! name, space padded    64
//! copyright, padded    256   (discarded)
//! max_width, height, ascent, pad      4 x u16
//! first_char, default_char, size      3 x u32
//! nbits, noffset, nwidth              3 x u32
//! bitmap                 nbits x u16
//! offsets                size x u32   (only if noffset != 0)
//! widths                 size x u8    (only if nwidth != 0)
//! ```
//!
//! All integers are little-endian. Section buffers are owned locals until the
//! final `FontRecord` is assembled, so any early return drops whatever was
//! allocated and no half-built font escapes.

use crate::error::{LoadError, ReadResultExt};
use crate::font::{FontMetrics, FontRecord, GlyphSection};
use crate::reader::BinaryReader;
use log::{debug, trace};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Magic and version tag at the start of every `.fnt` file.
pub const FNT_MAGIC: &[u8; 4] = b"RB11";

pub const NAME_LEN: usize = 64;
pub const COPYRIGHT_LEN: usize = 256;

/// Byte length of the fixed header, up to the start of the bitmap section.
pub const HEADER_LEN: u64 = 356;

/// Fixed-size header preceding the variable-length sections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FntHeader {
    pub metrics: FontMetrics,
    /// Word count of the bitmap section.
    pub nbits: u32,
    /// Nonzero if the offset section is present.
    pub noffset: u32,
    /// Nonzero if the width section is present.
    pub nwidth: u32,
}

/// How far a decode got. Reported when a load fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeStage {
    Opened,
    MagicChecked,
    HeaderRead,
    SectionsAllocated,
    SectionsFilled,
}

/// Opens `path` and decodes one font from it.
pub fn load<P: AsRef<Path>>(path: P) -> Result<FontRecord, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| {
        debug!("Cannot open font {}: {}", path.display(), err);
        LoadError::open(path.to_path_buf(), err)
    })?;

    let font = decode(BufReader::new(file));
    match &font {
        Ok(font) => debug!(
            "Loaded font '{}' from {}: {}x{}, {} glyphs",
            font.name(),
            path.display(),
            font.max_width(),
            font.height(),
            font.glyph_count()
        ),
        Err(err) => debug!("Failed to load font {}: {}", path.display(), err),
    }
    font
}

/// Decodes one font from a byte stream.
///
/// The stream is consumed up to the end of the last present section; any
/// trailing bytes are left unread.
pub fn decode<R: Read>(stream: R) -> Result<FontRecord, LoadError> {
    let mut reader = BinaryReader::new(stream);
    let mut stage = DecodeStage::Opened;
    let result = decode_stages(&mut reader, &mut stage);
    if let Err(err) = &result {
        trace!(
            "Decode failed after {:?} at byte {}: {}",
            stage,
            reader.position(),
            err
        );
    }
    result
}

fn decode_stages<R: Read>(
    reader: &mut BinaryReader<R>,
    stage: &mut DecodeStage,
) -> Result<FontRecord, LoadError> {
    check_magic(reader)?;
    *stage = DecodeStage::MagicChecked;

    let header = read_header(reader)?;
    *stage = DecodeStage::HeaderRead;

    let mut bits: Vec<u16> = alloc_section("bitmap", header.nbits)?;
    let mut offsets: Option<Vec<u32>> = match header.noffset {
        0 => None,
        n => Some(alloc_section("offset", n)?),
    };
    let mut widths: Option<Vec<u8>> = match header.nwidth {
        0 => None,
        n => Some(alloc_section("width", n)?),
    };
    *stage = DecodeStage::SectionsAllocated;

    for _ in 0..header.nbits {
        bits.push(reader.read_u16().field("bitmap data")?);
    }
    // Both per-glyph sections hold exactly `size` entries; the header counts
    // only say whether the section exists.
    // Offsets start right after the last bitmap word. A writer that pads odd
    // `nbits` to a 32-bit boundary leaves 2 bytes here, and those files decode
    // with every offset (and width) shifted.
    let glyph_count = header.metrics.glyph_count;
    if let Some(offsets) = offsets.as_mut() {
        for _ in 0..glyph_count {
            offsets.push(reader.read_u32().field("offset data")?);
        }
    }
    if let Some(widths) = widths.as_mut() {
        for _ in 0..glyph_count {
            widths.push(reader.read_u8().field("width data")?);
        }
    }
    *stage = DecodeStage::SectionsFilled;

    Ok(FontRecord::from_parts(
        header.metrics,
        bits,
        offsets.into(),
        widths.into(),
    ))
}

fn check_magic<R: Read>(reader: &mut BinaryReader<R>) -> Result<(), LoadError> {
    let found = reader.read_at_most(FNT_MAGIC.len()).field("magic")?;
    if found.as_slice() != FNT_MAGIC {
        return Err(LoadError::BadMagic { found });
    }
    Ok(())
}

/// Reads everything between the magic tag and the bitmap section.
///
/// Nothing is allocated for the variable-length sections until this returns.
pub fn read_header<R: Read>(reader: &mut BinaryReader<R>) -> Result<FntHeader, LoadError> {
    let name = reader.read_padded_string(NAME_LEN).field("name")?;
    // Provenance only; not kept.
    reader.read_padded_string(COPYRIGHT_LEN).field("copyright")?;

    let max_width = reader.read_u16().field("max_width")?;
    let height = reader.read_u16().field("height")?;
    let ascent = reader.read_u16().field("ascent")?;
    // Aligns the u32 fields that follow; never interpreted.
    let _pad = reader.read_u16().field("pad")?;
    let first_char = reader.read_u32().field("first_char")?;
    let default_char = reader.read_u32().field("default_char")?;
    let glyph_count = reader.read_u32().field("size")?;

    let nbits = reader.read_u32().field("nbits")?;
    let noffset = reader.read_u32().field("noffset")?;
    let nwidth = reader.read_u32().field("nwidth")?;

    trace!(
        "Header '{}': max_width={} height={} ascent={} first_char={} default_char={} size={}",
        name,
        max_width,
        height,
        ascent,
        first_char,
        default_char,
        glyph_count
    );
    trace!(
        "Sections: nbits={} noffset={} nwidth={}",
        nbits,
        noffset,
        nwidth
    );

    Ok(FntHeader {
        metrics: FontMetrics {
            name,
            max_width,
            height,
            ascent,
            first_char,
            default_char,
            glyph_count,
        },
        nbits,
        noffset,
        nwidth,
    })
}

/// Reserves exactly `count` entries, reporting failure instead of aborting.
fn alloc_section<T>(section: &'static str, count: u32) -> Result<Vec<T>, LoadError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(count as usize)
        .map_err(|_| LoadError::OutOfMemory { section, count })?;
    Ok(buf)
}
