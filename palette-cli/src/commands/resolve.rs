//! CLI command for resolving a field value

use std::path::Path;

use palettefield::definition::FieldDefinition;
use palettefield::field::ThemeColorField;
use themepalette::theme::ThemeLocation;

pub fn execute(location: ThemeLocation, field: Option<&Path>, value: &str) -> anyhow::Result<()> {
    let definition = match field {
        Some(path) => FieldDefinition::from_json(&std::fs::read_to_string(path)?)?,
        None => FieldDefinition::default(),
    };
    let settings = definition.settings();
    let field = ThemeColorField::new(location);

    let resolution = field.resolver().resolve(&settings, value);
    println!(
        "Source: {} ({} available of {})",
        settings.source,
        resolution.available.len(),
        resolution.full.len()
    );

    if resolution.value.is_empty() {
        println!("Resolved: (no color)");
    } else {
        println!("Resolved: {}", resolution.value);
    }

    let output = field.format_value(&settings, &resolution.value);
    println!(
        "Output ({}): {}",
        settings.return_format,
        serde_json::to_string(&output)?
    );

    Ok(())
}
