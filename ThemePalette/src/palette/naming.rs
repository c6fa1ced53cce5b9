//! Display names for slug-only colors

/// Turn a color slug into a readable name.
///
/// `-` and `_` become spaces and the first letter of every word is
/// upper-cased; everything else is kept as written.
/// `environnement-400` becomes `Environnement 400`.
#[must_use]
pub fn slug_to_name(slug: &str) -> String {
    let mut name = String::with_capacity(slug.len());
    let mut at_word_start = true;

    for ch in slug.chars() {
        let ch = if ch == '-' || ch == '_' { ' ' } else { ch };
        if at_word_start {
            name.extend(ch.to_uppercase());
        } else {
            name.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_to_name() {
        assert_eq!(slug_to_name("environnement-400"), "Environnement 400");
        assert_eq!(slug_to_name("accent_100"), "Accent 100");
        assert_eq!(slug_to_name("primary-dark_blue"), "Primary Dark Blue");
    }

    #[test]
    fn test_slug_to_name_keeps_existing_case() {
        assert_eq!(slug_to_name("brandRed"), "BrandRed");
        assert_eq!(slug_to_name("UI-gray"), "UI Gray");
    }

    #[test]
    fn test_slug_to_name_separators() {
        assert_eq!(slug_to_name(""), "");
        assert_eq!(slug_to_name("a--b"), "A  B");
        assert_eq!(slug_to_name("-lead"), " Lead");
    }
}
