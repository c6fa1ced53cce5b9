//! Value resolution - picking the effective slug for a field

use crate::filter::filter;
use crate::palette::{Palette, PaletteSource};
use crate::settings::FieldSettings;
use crate::theme::PaletteProvider;

/// Resolve the effective value of a field.
///
/// `available` is the filtered palette. An empty string means "no color".
/// Rules, first match wins:
/// 1. a current value present in `available` is kept
/// 2. a current value absent from `available` is treated as empty
/// 3. a default value present in `available` is used
/// 4. `allow_null` resolves to empty
/// 5. otherwise the first available slug
/// 6. otherwise empty
///
/// The function is idempotent: feeding its output back in returns the same
/// value.
#[must_use]
pub fn resolve(available: &Palette, settings: &FieldSettings, current_value: &str) -> String {
    if !current_value.is_empty() {
        if available.contains(current_value) {
            return current_value.to_string();
        }
        tracing::debug!("Stored color '{}' is no longer available", current_value);
    }

    if !settings.default_value.is_empty() && available.contains(&settings.default_value) {
        return settings.default_value.clone();
    }

    if settings.allow_null {
        return String::new();
    }

    available.first_slug().map(str::to_owned).unwrap_or_default()
}

/// Outcome of a full field resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Unfiltered palette of the field's source
    pub full: Palette,
    /// Palette after the field's filter policy
    pub available: Palette,
    /// Resolved slug, empty for "no color"
    pub value: String,
}

/// Loads, filters and resolves in one pass.
///
/// Holds no state beyond its provider; every call re-reads the palette.
#[derive(Debug, Clone)]
pub struct PaletteResolver<P> {
    provider: P,
}

impl<P: PaletteProvider> PaletteResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The underlying palette provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Full palette for `source`
    #[must_use]
    pub fn full_palette(&self, source: PaletteSource) -> Palette {
        self.provider.palette(source)
    }

    /// Filtered palette offered to the editor
    #[must_use]
    pub fn available(&self, settings: &FieldSettings) -> Palette {
        filter(self.full_palette(settings.source), &settings.filter_policy)
    }

    /// Resolve `current_value` against the field's palette
    #[must_use]
    pub fn resolve(&self, settings: &FieldSettings, current_value: &str) -> Resolution {
        let full = self.full_palette(settings.source);
        let available = filter(full.clone(), &settings.filter_policy);
        let value = resolve(&available, settings, current_value);
        Resolution {
            full,
            available,
            value,
        }
    }
}
