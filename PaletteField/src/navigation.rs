//! Keyboard and pointer model for the rendered option row

use themepalette::swatch::HexColor;

use crate::field::ColorOption;

/// Keys the option row reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Space,
    Enter,
    Other,
}

impl NavKey {
    /// Map a DOM `keyCode`
    #[must_use]
    pub fn from_key_code(code: u32) -> Self {
        match code {
            37 => Self::Left,
            39 => Self::Right,
            32 => Self::Space,
            13 => Self::Enter,
            _ => Self::Other,
        }
    }
}

/// Result of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Focus moved to this option
    Focus(usize),
    /// This option became selected
    Select(usize),
    /// Key not handled; let it propagate
    Ignored,
}

/// Preview strip shown under the options for the selected color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub name: String,
    pub swatch: Option<HexColor>,
}

/// Focus and selection over a row of options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCursor {
    len: usize,
    focused: usize,
    selected: Option<usize>,
}

impl OptionCursor {
    /// Cursor over `options`, focused and selected on `selected` (by value)
    #[must_use]
    pub fn new(options: &[ColorOption], selected: &str) -> Self {
        let selected = options.iter().position(|o| o.value == selected);
        Self {
            len: options.len(),
            focused: selected.unwrap_or(0),
            selected,
        }
    }

    #[must_use]
    pub fn focused(&self) -> usize {
        self.focused
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Handle a key press on the focused option
    pub fn key(&mut self, key: NavKey) -> NavOutcome {
        if self.len == 0 {
            return NavOutcome::Ignored;
        }

        match key {
            NavKey::Left => {
                self.focused = if self.focused > 0 {
                    self.focused - 1
                } else {
                    self.len - 1
                };
                NavOutcome::Focus(self.focused)
            }
            NavKey::Right => {
                self.focused = if self.focused + 1 < self.len {
                    self.focused + 1
                } else {
                    0
                };
                NavOutcome::Focus(self.focused)
            }
            NavKey::Space | NavKey::Enter => self.select(self.focused),
            NavKey::Other => NavOutcome::Ignored,
        }
    }

    /// Pointer selection of an option
    pub fn click(&mut self, index: usize) -> NavOutcome {
        if index >= self.len {
            return NavOutcome::Ignored;
        }
        self.focused = index;
        self.select(index)
    }

    fn select(&mut self, index: usize) -> NavOutcome {
        self.selected = Some(index);
        NavOutcome::Select(index)
    }

    /// Preview for the selected option; `None` for "no color" or no selection
    #[must_use]
    pub fn preview(&self, options: &[ColorOption]) -> Option<Preview> {
        let option = options.get(self.selected?)?;
        if option.is_none() {
            return None;
        }
        Some(Preview {
            name: option.label.clone(),
            swatch: option.swatch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldView, ThemeColorField};
    use themepalette::settings::FieldSettings;
    use themepalette::theme::ThemeDocument;

    fn options() -> Vec<ColorOption> {
        let document = ThemeDocument::parse(
            r##"{ "settings": { "color": { "palette": [
                { "name": "Red", "slug": "red", "color": "#FF0000" },
                { "name": "Green", "slug": "green", "color": "#00FF00" }
            ]}}}"##,
        )
        .unwrap();
        let settings = FieldSettings {
            allow_null: true,
            ..FieldSettings::default()
        };
        match ThemeColorField::new(document).render(&settings, "") {
            FieldView::Options { options, .. } => options,
            FieldView::NoColors => panic!("expected options"),
        }
    }

    #[test]
    fn test_arrows_wrap_around() {
        let options = options();
        let mut cursor = OptionCursor::new(&options, "");
        assert_eq!(cursor.focused(), 0);

        assert_eq!(cursor.key(NavKey::Left), NavOutcome::Focus(2));
        assert_eq!(cursor.key(NavKey::Right), NavOutcome::Focus(0));
        assert_eq!(cursor.key(NavKey::Right), NavOutcome::Focus(1));
        assert_eq!(cursor.key(NavKey::Other), NavOutcome::Ignored);
    }

    #[test]
    fn test_enter_selects_and_previews() {
        let options = options();
        let mut cursor = OptionCursor::new(&options, "");
        assert_eq!(cursor.preview(&options), None);

        cursor.key(NavKey::from_key_code(39));
        cursor.key(NavKey::from_key_code(39));
        assert_eq!(cursor.key(NavKey::from_key_code(13)), NavOutcome::Select(2));
        assert_eq!(
            cursor.preview(&options),
            Some(Preview {
                name: "Green".into(),
                swatch: Some(HexColor { r: 0, g: 0xFF, b: 0 }),
            })
        );
    }

    #[test]
    fn test_click_out_of_range() {
        let options = options();
        let mut cursor = OptionCursor::new(&options, "red");
        assert_eq!(cursor.selected(), Some(1));
        assert_eq!(cursor.click(7), NavOutcome::Ignored);
        assert_eq!(cursor.click(0), NavOutcome::Select(0));
        assert_eq!(cursor.preview(&options), None);
    }

    #[test]
    fn test_empty_row_ignores_keys() {
        let mut cursor = OptionCursor::new(&[], "");
        assert_eq!(cursor.key(NavKey::Space), NavOutcome::Ignored);
    }
}
