//! Loader for `.fnt` ("RB11") bitmap fonts.
//!
//! ```ignore
//! let font = fnt_loader::load("fonts/helvR12.fnt")?;
//! let index = font.glyph_index('A' as u32);
//! fnt_loader::unload(font);
//! ```

pub mod config;
pub mod decoder;
pub mod driver;
pub mod error;
pub mod font;
pub mod locator;
pub mod reader;

pub use decoder::{decode, load, FntHeader, FNT_MAGIC};
pub use driver::{CoreFont, FntFontDriver, FontAttr, FontDriver};
pub use error::{LoadError, ReadError};
pub use font::{unload, FontFlags, FontInfo, FontMetrics, FontRecord, GlyphSection};
