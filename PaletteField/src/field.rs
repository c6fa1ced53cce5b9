//! The theme color field - render model and value hooks

use serde::Serialize;

use themepalette::format::{format_value, sanitize_stored_value, FormattedValue};
use themepalette::palette::{ColorEntry, PaletteSource};
use themepalette::resolve::PaletteResolver;
use themepalette::settings::FieldSettings;
use themepalette::swatch::{option_label, HexColor};
use themepalette::theme::PaletteProvider;

/// Shown instead of the picker when the filtered palette is empty
pub const NO_COLORS_MESSAGE: &str = "No colors available for selection.";

/// Label of the explicit "no color" option
pub const NO_COLOR_LABEL: &str = "No color";

/// One radio option of the picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorOption {
    /// Slug submitted for this option; empty for "no color"
    pub value: String,
    pub label: String,
    /// Color string as written in the theme; `None` for "no color"
    pub color: Option<String>,
    /// Parsed swatch, when the color is a hex color
    #[serde(skip)]
    pub swatch: Option<HexColor>,
}

impl ColorOption {
    fn none() -> Self {
        Self {
            value: String::new(),
            label: NO_COLOR_LABEL.to_string(),
            color: None,
            swatch: None,
        }
    }

    fn from_entry(entry: &ColorEntry) -> Self {
        Self {
            value: entry.slug().to_string(),
            label: entry.name().to_string(),
            color: Some(entry.color().to_string()),
            swatch: HexColor::parse(entry.color()).ok(),
        }
    }

    /// Whether this is the explicit "no color" option
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.value.is_empty()
    }
}

/// What the editor sees for one field instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldView {
    /// The filtered palette is empty
    NoColors,
    /// A row of options with one selected
    Options {
        options: Vec<ColorOption>,
        /// Resolved slug; empty selects the "no color" option
        selected: String,
    },
}

/// Entry of the include/exclude multi-selects in the field settings,
/// and of the color query endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorChoice {
    /// Slug
    pub id: String,
    /// `Name (color)`
    pub text: String,
}

impl From<&ColorEntry> for ColorChoice {
    fn from(entry: &ColorEntry) -> Self {
        Self {
            id: entry.slug().to_string(),
            text: option_label(entry),
        }
    }
}

/// Palette-backed color field.
///
/// Built explicitly with its palette provider and composed by the host;
/// there is no shared instance.
#[derive(Debug, Clone)]
pub struct ThemeColorField<P> {
    resolver: PaletteResolver<P>,
}

impl<P: PaletteProvider> ThemeColorField<P> {
    pub fn new(provider: P) -> Self {
        Self {
            resolver: PaletteResolver::new(provider),
        }
    }

    /// The resolver backing this field
    pub fn resolver(&self) -> &PaletteResolver<P> {
        &self.resolver
    }

    /// Build the picker for a stored value
    #[must_use]
    pub fn render(&self, settings: &FieldSettings, stored: &str) -> FieldView {
        let resolution = self.resolver.resolve(settings, stored);
        if resolution.available.is_empty() {
            return FieldView::NoColors;
        }

        let mut options = Vec::with_capacity(resolution.available.len() + 1);
        if settings.allow_null {
            options.push(ColorOption::none());
        }
        options.extend(resolution.available.iter().map(ColorOption::from_entry));

        FieldView::Options {
            options,
            selected: resolution.value,
        }
    }

    /// Value shown when the field is loaded for editing
    #[must_use]
    pub fn load_value(&self, settings: &FieldSettings, stored: &str) -> String {
        self.resolver.resolve(settings, stored).value
    }

    /// Value actually persisted; slugs missing from the full palette become empty
    #[must_use]
    pub fn update_value(&self, settings: &FieldSettings, value: &str) -> String {
        let full = self.resolver.full_palette(settings.source);
        sanitize_stored_value(value, &full)
    }

    /// Value handed to templates, per the field's return format
    #[must_use]
    pub fn format_value(&self, settings: &FieldSettings, stored: &str) -> FormattedValue {
        let full = self.resolver.full_palette(settings.source);
        format_value(stored, &full, settings.return_format)
    }

    /// Choices for the include/exclude settings of a field reading `source`
    #[must_use]
    pub fn setting_choices(&self, source: PaletteSource) -> Vec<ColorChoice> {
        self.resolver
            .full_palette(source)
            .iter()
            .map(ColorChoice::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use themepalette::filter::FilterPolicy;
    use themepalette::format::ReturnFormat;
    use themepalette::theme::ThemeDocument;

    fn document() -> ThemeDocument {
        ThemeDocument::parse(
            r##"{
                "settings": { "color": { "palette": [
                    { "name": "Primary", "slug": "primary", "color": "#FF0000" },
                    { "name": "Wash", "slug": "wash", "color": "rgba(0,0,0,.1)" },
                    { "name": "Ink", "slug": "ink", "color": "#111" }
                ]}},
                "custom": { "color": { "accent-100": "#00FF00" } }
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_render_with_null_option() {
        let field = ThemeColorField::new(document());
        let settings = FieldSettings {
            allow_null: true,
            filter_policy: FilterPolicy::exclude(["wash"]),
            ..FieldSettings::default()
        };

        let FieldView::Options { options, selected } = field.render(&settings, "") else {
            panic!("expected options");
        };
        assert_eq!(selected, "");
        assert_eq!(
            options.iter().map(|o| o.label.as_str()).collect::<Vec<_>>(),
            [NO_COLOR_LABEL, "Primary", "Ink"]
        );
        assert!(options[0].is_none());
        assert_eq!(options[2].swatch, Some(HexColor { r: 0x11, g: 0x11, b: 0x11 }));
    }

    #[test]
    fn test_render_without_null_selects_first() {
        let field = ThemeColorField::new(document());
        let FieldView::Options { options, selected } =
            field.render(&FieldSettings::default(), "gone")
        else {
            panic!("expected options");
        };
        assert_eq!(selected, "primary");
        assert_eq!(options.len(), 3);
        assert_eq!(options[1].swatch, None);
    }

    #[test]
    fn test_render_empty_after_filter() {
        let field = ThemeColorField::new(document());
        let settings = FieldSettings {
            filter_policy: FilterPolicy::include(["not-in-theme"]),
            ..FieldSettings::default()
        };
        assert_eq!(field.render(&settings, ""), FieldView::NoColors);
    }

    #[test]
    fn test_update_value_validates_against_full_palette() {
        let field = ThemeColorField::new(document());
        let settings = FieldSettings {
            filter_policy: FilterPolicy::exclude(["primary"]),
            ..FieldSettings::default()
        };

        // Filtering narrows what is offered, not what may be stored
        assert_eq!(field.update_value(&settings, "primary"), "primary");
        assert_eq!(field.update_value(&settings, "accent-100"), "");

        let custom = FieldSettings {
            source: PaletteSource::Custom,
            ..FieldSettings::default()
        };
        assert_eq!(field.update_value(&custom, "accent-100"), "accent-100");
    }

    #[test]
    fn test_format_value_uses_field_source() {
        let field = ThemeColorField::new(document());
        let settings = FieldSettings {
            return_format: ReturnFormat::Label,
            source: PaletteSource::Both,
            ..FieldSettings::default()
        };
        assert_eq!(
            field.format_value(&settings, "accent-100"),
            FormattedValue::Text("Accent 100".into())
        );
        assert!(field.format_value(&settings, "").is_empty());
    }

    #[test]
    fn test_setting_choices() {
        let field = ThemeColorField::new(document());
        assert_eq!(
            field.setting_choices(PaletteSource::Custom),
            vec![ColorChoice {
                id: "accent-100".into(),
                text: "Accent 100 (#00FF00)".into(),
            }]
        );
    }
}
