//! CLI command for checking a value before it is stored

use palettefield::field::ThemeColorField;
use themepalette::palette::PaletteSource;
use themepalette::settings::FieldSettings;
use themepalette::theme::ThemeLocation;

pub fn execute(location: &ThemeLocation, value: &str, source: PaletteSource) -> anyhow::Result<()> {
    let settings = FieldSettings {
        source,
        ..FieldSettings::default()
    };
    let stored = ThemeColorField::new(location).update_value(&settings, value);

    if stored == value {
        println!("Validation: PASSED ({})", if value.is_empty() { "no color" } else { value });
        Ok(())
    } else {
        println!("Validation: FAILED - '{value}' is not in the {source} palette and would be stored empty");
        std::process::exit(1);
    }
}
