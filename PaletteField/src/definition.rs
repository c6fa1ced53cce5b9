//! Persisted field definition - the typed boundary for field settings
//!
//! Hosts store palette field settings as a flat JSON object. Missing keys
//! take their defaults; unknown keys are rejected.

use serde::{Deserialize, Deserializer, Serialize};

use themepalette::filter::{FilterMode, FilterPolicy};
use themepalette::format::ReturnFormat;
use themepalette::palette::PaletteSource;
use themepalette::settings::FieldSettings;

use crate::error::Result;

/// Field settings as persisted alongside the field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDefinition {
    /// Allow "no color"; accepts `true`/`false` or `0`/`1`
    #[serde(default, deserialize_with = "flag")]
    pub allow_null: bool,
    /// Preselected slug; empty for none
    #[serde(default, deserialize_with = "nullable_string")]
    pub default_value: String,
    #[serde(default)]
    pub return_format: ReturnFormat,
    #[serde(default)]
    pub color_source: PaletteSource,
    #[serde(default)]
    pub color_filter: FilterMode,
    #[serde(default, deserialize_with = "slug_list")]
    pub exclude_colors: Vec<String>,
    #[serde(default, deserialize_with = "slug_list")]
    pub include_colors: Vec<String>,
}

impl FieldDefinition {
    /// Parse a definition from its persisted JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a definition from an already-decoded JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Filter policy described by this definition
    #[must_use]
    pub fn filter_policy(&self) -> FilterPolicy {
        FilterPolicy {
            mode: self.color_filter,
            exclude_slugs: self.exclude_colors.iter().cloned().collect(),
            include_slugs: self.include_colors.iter().cloned().collect(),
        }
    }

    /// Engine settings described by this definition
    #[must_use]
    pub fn settings(&self) -> FieldSettings {
        FieldSettings {
            allow_null: self.allow_null,
            default_value: self.default_value.clone(),
            return_format: self.return_format,
            source: self.color_source,
            filter_policy: self.filter_policy(),
        }
    }
}

impl From<FieldDefinition> for FieldSettings {
    fn from(definition: FieldDefinition) -> Self {
        definition.settings()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Int(value) => value != 0,
    })
}

fn nullable_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SlugList {
    One(String),
    Many(Vec<String>),
}

/// Multi-selects persist as a list, but an untouched one may be stored as
/// `""`, a single slug, or `null`.
fn slug_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    let slugs = match Option::<SlugList>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(SlugList::One(slug)) => vec![slug],
        Some(SlugList::Many(slugs)) => slugs,
    };
    Ok(slugs.into_iter().filter(|slug| !slug.is_empty()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_keys_take_defaults() {
        let definition = FieldDefinition::from_json("{}").unwrap();
        assert_eq!(definition, FieldDefinition::default());

        let settings = definition.settings();
        assert!(!settings.allow_null);
        assert_eq!(settings.default_value, "");
        assert_eq!(settings.return_format, ReturnFormat::Value);
        assert_eq!(settings.source, PaletteSource::Settings);
        assert_eq!(settings.filter_policy, FilterPolicy::default());
    }

    #[test]
    fn test_full_definition() {
        let definition = FieldDefinition::from_json(
            r#"{
                "allow_null": 1,
                "default_value": "primary",
                "return_format": "array",
                "color_source": "both",
                "color_filter": "include",
                "exclude_colors": ["black"],
                "include_colors": ["primary", "accent-100"]
            }"#,
        )
        .unwrap();

        let settings: FieldSettings = definition.into();
        assert!(settings.allow_null);
        assert_eq!(settings.default_value, "primary");
        assert_eq!(settings.return_format, ReturnFormat::Array);
        assert_eq!(settings.source, PaletteSource::Both);
        assert_eq!(settings.filter_policy.mode, FilterMode::Include);
        assert!(settings.filter_policy.is_inclusive());
        assert!(settings.filter_policy.allows("accent-100"));
        assert!(!settings.filter_policy.allows("black"));
    }

    #[test]
    fn test_lenient_host_encodings() {
        let definition = FieldDefinition::from_json(
            r#"{ "allow_null": false, "default_value": null, "exclude_colors": "", "include_colors": "primary" }"#,
        )
        .unwrap();

        assert!(!definition.allow_null);
        assert_eq!(definition.default_value, "");
        assert!(definition.exclude_colors.is_empty());
        assert_eq!(definition.include_colors, ["primary"]);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = FieldDefinition::from_json(r#"{ "allow_nul": true }"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_invalid_enum_values_rejected() {
        for json in [
            r#"{ "return_format": "rgb" }"#,
            r#"{ "color_source": "theme" }"#,
            r#"{ "color_filter": "only" }"#,
        ] {
            assert!(FieldDefinition::from_json(json).is_err(), "{json}");
        }
    }
}
