//! Swatch helpers - hex parsing and "Name (#RRGGBB)" option labels

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::palette::ColorEntry;

/// An sRGB color parsed from `#RGB` or `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Parse `#RGB` or `#RRGGBB` (digits in either case)
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidHexColor(s.to_string());

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 0x11);
                Ok(Self {
                    r: short(0)?,
                    g: short(1)?,
                    b: short(2)?,
                })
            }
            6 => Ok(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            _ => Err(invalid()),
        }
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Label shown in color pickers: `Name (color)`
#[must_use]
pub fn option_label(entry: &ColorEntry) -> String {
    format!("{} ({})", entry.name(), entry.color())
}

fn label_swatch_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\(#([a-fA-F0-9]{6})\)").unwrap_or_else(|e| unreachable!("swatch pattern: {e}"))
    })
}

/// Recover the swatch color from an option label.
///
/// Only a six-digit `(#RRGGBB)` group is recognized; labels built from
/// short or non-hex colors get no swatch.
#[must_use]
pub fn swatch_from_label(label: &str) -> Option<HexColor> {
    if !label.contains('#') {
        return None;
    }
    let captures = label_swatch_pattern().captures(label)?;
    HexColor::parse(&format!("#{}", &captures[1])).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_forms() {
        assert_eq!(
            HexColor::parse("#ff8000").unwrap(),
            HexColor { r: 0xFF, g: 0x80, b: 0x00 }
        );
        assert_eq!(
            HexColor::parse("#F80").unwrap(),
            HexColor { r: 0xFF, g: 0x88, b: 0x00 }
        );
        assert_eq!(HexColor::parse("#abc").unwrap().to_string(), "#AABBCC");
    }

    #[test]
    fn test_parse_rejects_other_forms() {
        for bad in ["ff8000", "#ff80", "#ff80001", "#gg0000", "rgb(0,0,0)", "#", ""] {
            assert!(HexColor::parse(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_option_label() {
        let entry = ColorEntry::new("primary", "Primary", "#FF0000");
        assert_eq!(option_label(&entry), "Primary (#FF0000)");
    }

    #[test]
    fn test_swatch_from_label() {
        assert_eq!(
            swatch_from_label("Primary (#ff0000)"),
            Some(HexColor { r: 0xFF, g: 0, b: 0 })
        );
        assert_eq!(swatch_from_label("Short (#F00)"), None);
        assert_eq!(swatch_from_label("Var (var(--wp--primary))"), None);
        assert_eq!(swatch_from_label("No color"), None);
    }
}
