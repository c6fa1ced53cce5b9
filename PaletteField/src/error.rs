use std::path::PathBuf;

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    #[error("ThemePalette error: {0}")]
    ThemePalette(#[from] themepalette::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("no site config found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("could not determine the user config directory")]
    ConfigDirUnavailable,
}

pub type Result<T> = std::result::Result<T, Error>;
