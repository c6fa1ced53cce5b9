#![allow(non_snake_case)]
//! # ThemePalette
//!
//! Design-system color palettes read from a theme's `theme.json`.
//!
//! ## What it does
//!
//! - **Extraction** - palettes from `settings.color.palette` (structured
//!   entries) and `custom.color` (flat slug -> color map), or both overlaid
//! - **Filtering** - include/exclude policies narrowing the palette offered
//!   to an editor
//! - **Resolution** - the effective value of a field given the stored value,
//!   a default, and whether "no color" is allowed
//! - **Formatting** - slug, color, label, or structured output for templates
//!
//! Everything is recomputed per call; nothing is cached.
//!
//! ## Quick Start
//!
//! ```no_run
//! use themepalette::prelude::*;
//!
//! let location = ThemeLocation::new("/srv/themes/parent", "/srv/themes/child");
//! let resolver = PaletteResolver::new(location);
//!
//! let settings = FieldSettings {
//!     filter_policy: FilterPolicy::exclude(["black"]),
//!     ..FieldSettings::default()
//! };
//! let resolution = resolver.resolve(&settings, "primary");
//! let output = format_value(&resolution.value, &resolution.full, ReturnFormat::Hex);
//! println!("{output:?}");
//! ```
//!
//! A missing or broken theme document never errors through
//! [`PaletteProvider`]; it yields an empty palette.

pub mod error;
pub mod filter;
pub mod format;
pub mod palette;
pub mod resolve;
pub mod settings;
pub mod swatch;
pub mod theme;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::filter::{filter, FilterMode, FilterPolicy};
    pub use crate::format::{format_value, sanitize_stored_value, ColorValue, FormattedValue, ReturnFormat};
    pub use crate::palette::{extract, slug_to_name, ColorEntry, Palette, PaletteSource};
    pub use crate::resolve::{resolve, PaletteResolver, Resolution};
    pub use crate::settings::FieldSettings;
    pub use crate::swatch::{option_label, swatch_from_label, HexColor};
    pub use crate::theme::{PaletteProvider, ThemeDocument, ThemeLocation};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
