//! CLI command for listing a theme palette

use themepalette::palette::PaletteSource;
use themepalette::swatch::HexColor;
use themepalette::theme::ThemeLocation;

pub fn execute(location: &ThemeLocation, source: PaletteSource, json: bool) -> anyhow::Result<()> {
    // Strict load: the CLI reports why a palette is missing instead of
    // printing an empty list
    let document = location.load_document()?;
    let palette = document.palette(source);

    if json {
        println!("{}", serde_json::to_string_pretty(&palette)?);
        return Ok(());
    }

    if palette.is_empty() {
        println!("No {source} colors found");
        return Ok(());
    }

    let slug_width = palette.slugs().map(str::len).max().unwrap_or(0);
    let name_width = palette.iter().map(|e| e.name().len()).max().unwrap_or(0);
    for entry in &palette {
        let marker = if HexColor::parse(entry.color()).is_ok() { " " } else { "?" };
        println!(
            "{:<slug_width$}  {:<name_width$}  {}{}",
            entry.slug(),
            entry.name(),
            entry.color(),
            marker,
        );
    }
    println!("\n{} {source} color(s)", palette.len());

    Ok(())
}
