//! Output formatting and stored-value validation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::palette::Palette;

/// Shape of the value handed to templates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnFormat {
    /// The slug itself
    #[default]
    Value,
    /// The color string
    Hex,
    /// The display name
    Label,
    /// `{ value, label, color }`
    Array,
}

impl ReturnFormat {
    pub const ALL: [ReturnFormat; 4] = [Self::Value, Self::Hex, Self::Label, Self::Array];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Hex => "hex",
            Self::Label => "label",
            Self::Array => "array",
        }
    }
}

impl FromStr for ReturnFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(Self::Value),
            "hex" => Ok(Self::Hex),
            "label" => Ok(Self::Label),
            "array" => Ok(Self::Array),
            other => Err(Error::InvalidReturnFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ReturnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured output of the `array` return format.
///
/// `label` and `color` are absent when the slug is not in the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A formatted field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormattedValue {
    /// Slug, color, or label; empty for "no color"
    Text(String),
    /// The `array` return format
    Array(ColorValue),
}

impl FormattedValue {
    /// The "no color" output
    #[must_use]
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// Text output, if this is not an `array` value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Array(_) => None,
        }
    }
}

/// Format a stored slug for output.
///
/// `palette` should be the full, unfiltered palette. A slug that is no
/// longer in it is returned as-is (or as a bare `{ value }` for `array`).
#[must_use]
pub fn format_value(slug: &str, palette: &Palette, format: ReturnFormat) -> FormattedValue {
    if slug.is_empty() {
        return FormattedValue::empty();
    }

    let Some(entry) = palette.get(slug) else {
        tracing::debug!("Formatting unknown color '{}' as raw slug", slug);
        return match format {
            ReturnFormat::Array => FormattedValue::Array(ColorValue {
                value: slug.to_string(),
                label: None,
                color: None,
            }),
            _ => FormattedValue::Text(slug.to_string()),
        };
    };

    match format {
        ReturnFormat::Value => FormattedValue::Text(entry.slug().to_string()),
        ReturnFormat::Hex => FormattedValue::Text(entry.color().to_string()),
        ReturnFormat::Label => FormattedValue::Text(entry.name().to_string()),
        ReturnFormat::Array => FormattedValue::Array(ColorValue {
            value: entry.slug().to_string(),
            label: Some(entry.name().to_string()),
            color: Some(entry.color().to_string()),
        }),
    }
}

/// Validate a value about to be persisted.
///
/// Slugs not present in the full palette are coerced to empty.
#[must_use]
pub fn sanitize_stored_value(value: &str, palette: &Palette) -> String {
    if value.is_empty() || palette.contains(value) {
        value.to_string()
    } else {
        tracing::debug!("Rejecting unknown color '{}' on save", value);
        String::new()
    }
}
