//! Color Utilities
//!
//! Hex color parsing for the translucent wish-card backgrounds.

/// An opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse a `#RRGGBB` hex color. The leading `#` is optional and digits
/// are case insensitive.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// CSS `rgba(..)` value for a hex color at the given alpha. Falls back
/// to the raw input when the hex does not parse.
pub fn translucent(hex: &str, alpha: f64) -> String {
    match hex_to_rgb(hex) {
        Some(Rgb { r, g, b }) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        None => hex.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_room_colors() {
        assert_eq!(hex_to_rgb("#E8DED5"), Some(Rgb { r: 232, g: 222, b: 213 }));
        assert_eq!(hex_to_rgb("#DEE8D5"), Some(Rgb { r: 222, g: 232, b: 213 }));
    }

    #[test]
    fn hash_is_optional_and_case_does_not_matter() {
        assert_eq!(hex_to_rgb("e8ded5"), hex_to_rgb("#E8DED5"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#FFF"), None);
        assert_eq!(hex_to_rgb("#GGGGGG"), None);
        assert_eq!(hex_to_rgb("#E8DED5A0"), None);
    }

    #[test]
    fn formats_translucent_backgrounds() {
        assert_eq!(translucent("#E8DED5", 0.7), "rgba(232, 222, 213, 0.7)");
    }

    #[test]
    fn translucent_falls_back_to_raw_input() {
        assert_eq!(translucent("tomato", 0.7), "tomato");
    }
}
