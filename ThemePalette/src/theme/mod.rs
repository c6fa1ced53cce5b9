//! Theme documents - locating, loading, and serving palettes
//!
//! The strict loaders ([`ThemeLocation::load_document`], [`ThemeDocument::from_path`])
//! return errors. [`PaletteProvider`] is the soft layer used by fields: any
//! failure to find or decode the document degrades to an empty palette.

pub mod document;
pub mod location;

pub use document::ThemeDocument;
pub use location::{ThemeLocation, SETTINGS_COLOR_FRAGMENT, THEME_JSON};

use crate::palette::{Palette, PaletteSource};

/// Source of the full (unfiltered) palette for a given section
pub trait PaletteProvider {
    /// Full palette for `source`; empty when unavailable
    fn palette(&self, source: PaletteSource) -> Palette;
}

impl PaletteProvider for ThemeDocument {
    fn palette(&self, source: PaletteSource) -> Palette {
        ThemeDocument::palette(self, source)
    }
}

/// Re-reads the theme document on every call.
impl PaletteProvider for ThemeLocation {
    fn palette(&self, source: PaletteSource) -> Palette {
        match self.load_document() {
            Ok(document) => document.palette(source),
            Err(e) => {
                tracing::warn!("Theme palette unavailable: {}", e);
                Palette::new()
            }
        }
    }
}

impl<P: PaletteProvider + ?Sized> PaletteProvider for &P {
    fn palette(&self, source: PaletteSource) -> Palette {
        (**self).palette(source)
    }
}
