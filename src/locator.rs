// src/locator.rs

//! Resolves font names to `.fnt` file paths.

use crate::config::FontsConfig;
use log::trace;
use std::path::{Path, PathBuf};

/// Maps a requested font name to a path on disk.
///
/// Names that already look like paths (a directory component or an
/// extension) are used as given. Bare names are tried in each search
/// directory with the configured extension; the first existing file wins.
#[derive(Debug, Clone)]
pub struct FontLocator {
    search_dirs: Vec<PathBuf>,
    extension: String,
}

impl FontLocator {
    pub fn new(search_dirs: Vec<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            search_dirs,
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &FontsConfig) -> Self {
        Self::new(config.search_dirs.clone(), config.extension.clone())
    }

    /// Path to try for `name`. When nothing matches, `name` itself is
    /// returned so the open reports the failure.
    pub fn resolve<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        let requested = name.as_ref();
        if is_explicit_path(requested) {
            return requested.to_path_buf();
        }

        for dir in &self.search_dirs {
            let candidate = dir.join(requested).with_extension(&self.extension);
            trace!("FontLocator: trying {}", candidate.display());
            if candidate.is_file() {
                return candidate;
            }
        }
        requested.to_path_buf()
    }
}

fn is_explicit_path(path: &Path) -> bool {
    path.extension().is_some() || path.components().count() > 1
}
