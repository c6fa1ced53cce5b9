use clap::Subcommand;
use std::path::PathBuf;

use palettefield::config::SiteConfig;
use themepalette::palette::PaletteSource;
use themepalette::theme::ThemeLocation;

pub mod extract;
pub mod init;
pub mod query;
pub mod resolve;
pub mod validate;

/// Where the theme comes from, shared by every command
pub struct ThemeArgs {
    pub theme: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl ThemeArgs {
    /// Theme location and the default source for commands that omit one
    pub fn resolve(&self) -> anyhow::Result<(ThemeLocation, PaletteSource)> {
        if let Some(theme) = &self.theme {
            return Ok((ThemeLocation::from_file(theme), PaletteSource::default()));
        }

        let config = match &self.config {
            Some(path) => SiteConfig::from_path(path)?,
            None => SiteConfig::load().map_err(|e| {
                anyhow::anyhow!("{e}. Pass --theme <file> or create one with 'palette init'")
            })?,
        };
        tracing::debug!("Using site config for {}", config.template_dir);
        Ok((config.location(), config.default_source))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the palette of a theme
    Extract {
        /// Palette source (settings, custom, both)
        #[arg(short, long)]
        source: Option<PaletteSource>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Resolve and format a field value
    Resolve {
        /// Field definition JSON file (defaults apply when omitted)
        #[arg(short, long)]
        field: Option<PathBuf>,

        /// Stored value (empty for none)
        #[arg(short, long, default_value = "")]
        value: String,
    },

    /// Answer a color query as the settings screen would
    Query {
        /// Source name as sent by the client
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Check a value before it is stored
    Validate {
        /// Value to store
        #[arg(short, long)]
        value: String,

        /// Palette source (settings, custom, both)
        #[arg(short, long)]
        source: Option<PaletteSource>,
    },

    /// Write a site config
    Init {
        /// Parent theme directory
        #[arg(short, long)]
        template: String,

        /// Child theme directory
        #[arg(long)]
        stylesheet: Option<String>,

        /// Default palette source
        #[arg(short, long, default_value = "settings")]
        source: PaletteSource,

        /// Output file (defaults to the user config directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    pub fn execute(&self, theme: &ThemeArgs) -> anyhow::Result<()> {
        match self {
            Commands::Extract { source, json } => {
                let (location, default_source) = theme.resolve()?;
                extract::execute(&location, source.unwrap_or(default_source), *json)
            }
            Commands::Resolve { field, value } => {
                let (location, _) = theme.resolve()?;
                resolve::execute(location, field.as_deref(), value)
            }
            Commands::Query { source } => {
                let (location, _) = theme.resolve()?;
                query::execute(location, source.as_deref())
            }
            Commands::Validate { value, source } => {
                let (location, default_source) = theme.resolve()?;
                validate::execute(&location, value, source.unwrap_or(default_source))
            }
            Commands::Init {
                template,
                stylesheet,
                source,
                output,
            } => init::execute(template, stylesheet.as_deref(), *source, output.as_deref()),
        }
    }
}

/// Default config path, or an error naming why there is none
fn default_config_path() -> anyhow::Result<PathBuf> {
    SiteConfig::config_path()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine the config directory; pass --output"))
}
