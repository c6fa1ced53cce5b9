//! Type definitions for palette data structures

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A single named color from the theme palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    slug: String,
    name: String,
    color: String,
}

impl ColorEntry {
    /// Create a new entry
    pub fn new(slug: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Stable machine identifier (e.g. "`primary-orange`")
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Display label (e.g. "Primary Orange")
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color value as written in the theme document, usually `#RRGGBB`
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Ordered mapping of slug -> color entry.
///
/// Iteration order is insertion order, which for extracted palettes is the
/// order the colors appear in the theme document. Re-inserting an existing
/// slug replaces the entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    entries: IndexMap<String, ColorEntry>,
}

impl Palette {
    /// Create an empty palette
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keeping the position of an existing slug
    pub fn insert(&mut self, entry: ColorEntry) {
        self.entries.insert(entry.slug.clone(), entry);
    }

    /// Look up an entry by slug
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&ColorEntry> {
        self.entries.get(slug)
    }

    /// Whether a slug is present
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    /// Slug of the first entry in iteration order
    #[must_use]
    pub fn first_slug(&self) -> Option<&str> {
        self.entries.keys().next().map(String::as_str)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in order
    pub fn iter(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.values()
    }

    /// Iterate over slugs in order
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Overlay `other` onto this palette. Colliding slugs take `other`'s
    /// entry but keep their current position; new slugs are appended.
    pub fn merge(&mut self, other: Palette) {
        for entry in other {
            self.insert(entry);
        }
    }

    /// Keep only entries for which `keep` returns true, preserving order
    #[must_use]
    pub fn retain_by(mut self, mut keep: impl FnMut(&ColorEntry) -> bool) -> Self {
        self.entries.retain(|_, entry| keep(entry));
        self
    }
}

impl FromIterator<ColorEntry> for Palette {
    fn from_iter<I: IntoIterator<Item = ColorEntry>>(iter: I) -> Self {
        let mut palette = Self::new();
        for entry in iter {
            palette.insert(entry);
        }
        palette
    }
}

impl IntoIterator for Palette {
    type Item = ColorEntry;
    type IntoIter = indexmap::map::IntoValues<String, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorEntry;
    type IntoIter = indexmap::map::Values<'a, String, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Which section(s) of the theme document a palette is read from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteSource {
    /// `settings.color.palette` list of `{name, slug, color}` objects
    #[default]
    Settings,
    /// `custom.color` flat map of slug -> color
    Custom,
    /// Settings overlaid with custom; custom wins on slug collision
    Both,
}

impl PaletteSource {
    /// All sources, in the order they are offered to editors
    pub const ALL: [PaletteSource; 3] = [Self::Settings, Self::Custom, Self::Both];

    /// Get the wire name of this source
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Custom => "custom",
            Self::Both => "both",
        }
    }
}

impl FromStr for PaletteSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "settings" => Ok(Self::Settings),
            "custom" => Ok(Self::Custom),
            "both" => Ok(Self::Both),
            other => Err(Error::InvalidSource(other.to_string())),
        }
    }
}

impl fmt::Display for PaletteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
