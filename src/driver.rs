//! Font engine interface and the `.fnt` engine.
//!
//! This module defines the `FontDriver` trait: the capability set a font
//! engine offers to the text pipeline. Only loading, metric queries and
//! unloading live here; measuring and drawing belong to the renderer.

use crate::config::FontsConfig;
use crate::decoder;
use crate::error::LoadError;
use crate::font::{FontInfo, FontRecord};
use crate::locator::FontLocator;
use bitflags::bitflags;
use log::{debug, info};
use std::path::Path;

/// Engine name reported by fonts loaded through [`FntFontDriver`].
pub const FNT_ENGINE_NAME: &str = "FNT";

bitflags! {
    /// Rendering attributes requested for a font handle.
    ///
    /// Bitmap fonts are drawn as stored; the engine records the request so the
    /// renderer can synthesize the effect.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontAttr: u8 {
        const BOLD      = 1 << 0;
        const ITALIC    = 1 << 1;
        const UNDERLINE = 1 << 2;
    }
}

/// A font engine.
///
/// Implementors turn a font name into a loaded font handle and release it
/// again. The caller owns handles; `unload_font` consumes them, so a handle
/// cannot be released twice.
pub trait FontDriver {
    /// Engine-specific font handle.
    type Font;

    /// Engine name, e.g. `"FNT"`.
    fn name(&self) -> &'static str;

    /// Load a font by name or path.
    ///
    /// # Arguments
    /// * `name` - Bare font name or path to a font file
    /// * `size` - Requested pixel height; 0 means the font's own height
    /// * `attr` - Requested rendering attributes
    ///
    /// # Returns
    /// A fully loaded font, or the reason it could not be loaded
    fn load_font(&self, name: &Path, size: u16, attr: FontAttr)
        -> Result<Self::Font, LoadError>;

    /// Metrics summary for text layout.
    fn font_info(&self, font: &Self::Font) -> FontInfo;

    /// Release a font and everything it owns.
    fn unload_font(&self, font: Self::Font);
}

/// Handle for a font loaded by the `.fnt` engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreFont {
    engine: &'static str,
    size: u16,
    attr: FontAttr,
    record: FontRecord,
}

impl CoreFont {
    pub fn engine(&self) -> &'static str {
        self.engine
    }

    /// Pixel height asked for at load time.
    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn attr(&self) -> FontAttr {
        self.attr
    }

    pub fn record(&self) -> &FontRecord {
        &self.record
    }

    pub fn into_record(self) -> FontRecord {
        self.record
    }
}

/// Engine for `.fnt` bitmap fonts.
#[derive(Debug, Clone)]
pub struct FntFontDriver {
    locator: FontLocator,
}

impl FntFontDriver {
    pub fn new(locator: FontLocator) -> Self {
        Self { locator }
    }

    pub fn from_config(config: &FontsConfig) -> Self {
        Self::new(FontLocator::from_config(config))
    }
}

impl FontDriver for FntFontDriver {
    type Font = CoreFont;

    fn name(&self) -> &'static str {
        FNT_ENGINE_NAME
    }

    fn load_font(
        &self,
        name: &Path,
        size: u16,
        attr: FontAttr,
    ) -> Result<Self::Font, LoadError> {
        let path = self.locator.resolve(name);
        debug!(
            "FntFontDriver: '{}' resolved to {} (size {}, attr {:?})",
            name.display(),
            path.display(),
            size,
            attr
        );
        let record = decoder::load(&path)?;
        info!(
            "FntFontDriver: loaded '{}' ({} glyphs from U+{:04X})",
            record.name(),
            record.glyph_count(),
            record.first_char()
        );
        Ok(CoreFont {
            engine: FNT_ENGINE_NAME,
            size,
            attr,
            record,
        })
    }

    fn font_info(&self, font: &Self::Font) -> FontInfo {
        font.record.font_info()
    }

    fn unload_font(&self, font: Self::Font) {
        font.record.unload();
    }
}
