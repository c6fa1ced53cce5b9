//! Typed per-field settings consumed by the resolver and formatter

use crate::filter::FilterPolicy;
use crate::format::ReturnFormat;
use crate::palette::PaletteSource;

/// Settings of one palette field instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSettings {
    /// Whether "no color" is a valid choice
    pub allow_null: bool,
    /// Slug preselected when nothing is stored; empty for none
    pub default_value: String,
    /// Shape of the value handed to templates
    pub return_format: ReturnFormat,
    /// Theme document section the palette is read from
    pub source: PaletteSource,
    /// Narrowing of the full palette to the offered colors
    pub filter_policy: FilterPolicy,
}
