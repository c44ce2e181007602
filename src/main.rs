// In src/main.rs

use anyhow::{bail, Context};
use fnt_loader::config::{FontsConfig, CONFIG};
use fnt_loader::driver::FontAttr;
use fnt_loader::{FntFontDriver, FontDriver};
use log::{error, info};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Main entry point for `fntinfo`: loads each named font and logs its header.
fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let names = font_names(std::env::args_os().skip(1), &CONFIG.fonts)?;

    let driver = FntFontDriver::from_config(&CONFIG.fonts);
    let mut failures = 0usize;

    for name in &names {
        match describe(&driver, name) {
            Ok(()) => {}
            Err(e) => {
                error!("{:#}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} fonts failed to load", failures, names.len());
    }
    Ok(())
}

/// Fonts named on the command line, or the configured default font.
fn font_names<I>(args: I, fonts: &FontsConfig) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = OsString>,
{
    let names: Vec<PathBuf> = args.into_iter().map(PathBuf::from).collect();
    if !names.is_empty() {
        return Ok(names);
    }
    match &fonts.default_font {
        Some(default) => {
            info!("No font named, using default '{}'", default);
            Ok(vec![PathBuf::from(default)])
        }
        None => bail!("usage: fntinfo <font.fnt | font name>... (no default_font configured)"),
    }
}

fn describe(driver: &FntFontDriver, name: &Path) -> anyhow::Result<()> {
    // Size 0 keeps the font's own height.
    let font = driver
        .load_font(name, 0, FontAttr::empty())
        .with_context(|| format!("Failed to load font '{}'", name.display()))?;
    let record = font.record();
    let info = driver.font_info(&font);

    info!("{}: '{}' [{}]", name.display(), record.name(), font.engine());
    info!(
        "  max_width={} height={} ascent={}",
        info.max_width, info.height, info.baseline
    );
    info!(
        "  chars {}..={} ({} glyphs), default {}",
        info.first_char,
        info.last_char,
        record.glyph_count(),
        record.default_char()
    );
    info!(
        "  {} bitmap words, flags {:?}, {}",
        record.bitmap_words().len(),
        info.flags,
        if info.fixed { "fixed" } else { "proportional" }
    );

    driver.unload_font(font);
    Ok(())
}
