//! Where a theme's palette document lives

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::document::ThemeDocument;

/// Relative path of the palette fragment some themes split out of theme.json
pub const SETTINGS_COLOR_FRAGMENT: &str = "src/theme-json/settings-color.json";

/// Name of the full theme configuration file
pub const THEME_JSON: &str = "theme.json";

/// Ordered list of candidate theme documents; the first readable one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeLocation {
    candidates: Vec<PathBuf>,
}

impl ThemeLocation {
    /// Candidates for a parent (template) theme and an active (stylesheet)
    /// theme. Pass the same directory twice when there is no child theme.
    ///
    /// Probe order:
    /// 1. `<template>/src/theme-json/settings-color.json`
    /// 2. `<stylesheet>/theme.json`, then `<template>/theme.json`
    /// 3. `<stylesheet>/src/theme-json/settings-color.json`
    pub fn new(template_dir: impl AsRef<Path>, stylesheet_dir: impl AsRef<Path>) -> Self {
        let template = template_dir.as_ref();
        let stylesheet = stylesheet_dir.as_ref();

        let mut candidates: Vec<PathBuf> = Vec::with_capacity(4);
        for path in [
            template.join(SETTINGS_COLOR_FRAGMENT),
            stylesheet.join(THEME_JSON),
            template.join(THEME_JSON),
            stylesheet.join(SETTINGS_COLOR_FRAGMENT),
        ] {
            if !candidates.contains(&path) {
                candidates.push(path);
            }
        }

        Self { candidates }
    }

    /// A single explicit theme document
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![path.into()],
        }
    }

    /// Paths that will be probed, in order
    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// First candidate that is a readable file
    #[must_use]
    pub fn locate(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|path| {
                let readable = path.is_file() && File::open(path).is_ok();
                tracing::debug!("Theme candidate {} readable: {}", path.display(), readable);
                readable
            })
    }

    /// Locate and parse the theme document
    pub fn load_document(&self) -> Result<ThemeDocument> {
        let path = self.locate().ok_or_else(|| Error::ThemeDocumentNotFound {
            candidates: self.candidates.clone(),
        })?;
        ThemeDocument::from_path(path)
    }
}
