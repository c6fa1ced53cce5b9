//! Decoded theme document

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::palette::{extract, Palette, PaletteSource};

/// A parsed `theme.json` (or `settings-color.json` fragment).
///
/// The top level is guaranteed to be a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDocument {
    root: Value,
}

impl ThemeDocument {
    /// Read and parse a theme document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading theme document {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a theme document from JSON text
    pub fn parse(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)?;
        Self::from_value(root)
    }

    /// Wrap an already-decoded JSON value
    pub fn from_value(root: Value) -> Result<Self> {
        if root.is_object() {
            Ok(Self { root })
        } else {
            Err(Error::ThemeDocumentNotObject {
                found: json_type_name(&root),
            })
        }
    }

    /// Extract the palette for `source`
    #[must_use]
    pub fn palette(&self, source: PaletteSource) -> Palette {
        extract(&self.root, source)
    }

    /// The decoded JSON
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.root
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(
            ThemeDocument::parse("[1, 2]"),
            Err(Error::ThemeDocumentNotObject { found: "an array" })
        ));
        assert!(matches!(
            ThemeDocument::parse("{ not json"),
            Err(Error::JsonError(_))
        ));
    }

    #[test]
    fn test_custom_colors_keep_document_order() {
        let doc = ThemeDocument::parse(
            r##"{ "custom": { "color": { "zeta": "#000001", "alpha": "#000002", "mid": "#000003" } } }"##,
        )
        .unwrap();

        let slugs: Vec<_> = doc
            .palette(PaletteSource::Custom)
            .slugs()
            .map(str::to_owned)
            .collect();
        assert_eq!(slugs, ["zeta", "alpha", "mid"]);
    }
}
