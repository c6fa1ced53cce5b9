//! Site configuration (palette.toml) - where the active theme lives

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use themepalette::palette::PaletteSource;
use themepalette::theme::ThemeLocation;

use crate::error::{Error, Result};

/// File name of the site config
pub const CONFIG_FILE_NAME: &str = "palette.toml";

/// Which theme the palette fields read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Parent theme directory (`~` is expanded)
    pub template_dir: String,
    /// Active child theme directory; the template when unset
    #[serde(default)]
    pub stylesheet_dir: Option<String>,
    /// Explicit theme document, bypassing candidate probing
    #[serde(default)]
    pub theme_file: Option<String>,
    /// Source used when a command does not name one
    #[serde(default)]
    pub default_source: PaletteSource,
}

impl SiteConfig {
    /// Config for a single theme directory
    pub fn for_theme(template_dir: impl Into<String>) -> Self {
        Self {
            template_dir: template_dir.into(),
            stylesheet_dir: None,
            theme_file: None,
            default_source: PaletteSource::default(),
        }
    }

    /// Default config file location
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ThemePalette").join(CONFIG_FILE_NAME))
    }

    /// Load the config from its default location
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok_or(Error::ConfigDirUnavailable)?;
        Self::from_path(path)
    }

    /// Load the config from `path`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse TOML config text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the config to `path`, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Theme location described by this config
    #[must_use]
    pub fn location(&self) -> ThemeLocation {
        if let Some(file) = &self.theme_file {
            return ThemeLocation::from_file(expand(file));
        }
        let template = expand(&self.template_dir);
        let stylesheet = self
            .stylesheet_dir
            .as_deref()
            .map_or_else(|| template.clone(), expand);
        ThemeLocation::new(template, stylesheet)
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal() {
        let config = SiteConfig::parse(r#"template_dir = "/srv/themes/parent""#).unwrap();
        assert_eq!(config, SiteConfig::for_theme("/srv/themes/parent"));
        assert_eq!(config.location().candidates().len(), 2);
    }

    #[test]
    fn test_child_theme_and_source() {
        let config = SiteConfig::parse(
            r#"
            template_dir = "/srv/themes/parent"
            stylesheet_dir = "/srv/themes/child"
            default_source = "both"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_source, PaletteSource::Both);
        assert_eq!(
            config.location().candidates()[1],
            PathBuf::from("/srv/themes/child/theme.json")
        );
    }

    #[test]
    fn test_theme_file_overrides_probing() {
        let mut config = SiteConfig::for_theme("/srv/themes/parent");
        config.theme_file = Some("/tmp/theme.json".into());
        assert_eq!(config.location().candidates(), [PathBuf::from("/tmp/theme.json")]);
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILE_NAME);
        let mut config = SiteConfig::for_theme("~/themes/parent");
        config.default_source = PaletteSource::Custom;

        config.save(&path).unwrap();
        assert_eq!(SiteConfig::from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_config() {
        let temp = TempDir::new().unwrap();
        let result = SiteConfig::from_path(temp.path().join(CONFIG_FILE_NAME));
        assert!(matches!(result, Err(Error::ConfigNotFound(_))));
    }
}
