//! Palette extraction from a decoded theme document

use serde_json::Value;

use super::naming::slug_to_name;
use super::types::{ColorEntry, Palette, PaletteSource};

/// JSON pointer of the structured `{name, slug, color}` list
pub const SETTINGS_PALETTE_POINTER: &str = "/settings/color/palette";

/// JSON pointer of the flat slug -> color map
pub const CUSTOM_COLOR_POINTER: &str = "/custom/color";

/// Extract the palette for `source` from a theme document.
///
/// Never fails: missing sections yield an empty palette and malformed
/// entries are skipped.
#[must_use]
pub fn extract(document: &Value, source: PaletteSource) -> Palette {
    match source {
        PaletteSource::Settings => settings_colors(document),
        PaletteSource::Custom => custom_colors(document),
        PaletteSource::Both => {
            let mut palette = settings_colors(document);
            palette.merge(custom_colors(document));
            palette
        }
    }
}

/// Colors from `settings.color.palette`
fn settings_colors(document: &Value) -> Palette {
    let Some(items) = document
        .pointer(SETTINGS_PALETTE_POINTER)
        .and_then(Value::as_array)
    else {
        return Palette::new();
    };

    let mut palette = Palette::new();
    for item in items {
        let fields = (
            item.get("name").and_then(Value::as_str),
            item.get("slug").and_then(Value::as_str),
            item.get("color").and_then(Value::as_str),
        );
        let (Some(name), Some(slug), Some(color)) = fields else {
            tracing::debug!("Skipping malformed palette entry: {}", item);
            continue;
        };
        palette.insert(ColorEntry::new(slug, name, color));
    }

    tracing::debug!("Extracted {} settings colors", palette.len());
    palette
}

/// Colors from `custom.color`, with names derived from the slugs
fn custom_colors(document: &Value) -> Palette {
    let Some(map) = document
        .pointer(CUSTOM_COLOR_POINTER)
        .and_then(Value::as_object)
    else {
        return Palette::new();
    };

    let mut palette = Palette::new();
    for (slug, value) in map {
        let Some(color) = value.as_str() else {
            tracing::debug!("Skipping non-string custom color '{}'", slug);
            continue;
        };
        palette.insert(ColorEntry::new(slug.as_str(), slug_to_name(slug), color));
    }

    tracing::debug!("Extracted {} custom colors", palette.len());
    palette
}
