//! Palette module - color entries and their extraction from theme documents
//!
//! - `settings` palettes come from the structured `settings.color.palette` list
//! - `custom` palettes come from the flat `custom.color` map
//! - `both` overlays custom onto settings

pub mod extract;
pub mod naming;
pub mod types;

pub use extract::{extract, CUSTOM_COLOR_POINTER, SETTINGS_PALETTE_POINTER};
pub use naming::slug_to_name;
pub use types::{ColorEntry, Palette, PaletteSource};
