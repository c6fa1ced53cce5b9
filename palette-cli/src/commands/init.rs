//! CLI command for writing a site config

use std::path::Path;

use palettefield::config::SiteConfig;
use themepalette::palette::PaletteSource;

pub fn execute(
    template: &str,
    stylesheet: Option<&str>,
    source: PaletteSource,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let mut config = SiteConfig::for_theme(template);
    config.stylesheet_dir = stylesheet.map(str::to_owned);
    config.default_source = source;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => super::default_config_path()?,
    };

    match config.location().locate() {
        Some(found) => println!("Theme document: {}", found.display()),
        None => println!("Warning: no readable theme document under {template}"),
    }

    config.save(&path)?;
    println!("Wrote site config to {}", path.display());
    Ok(())
}
