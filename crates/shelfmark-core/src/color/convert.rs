//! Pure color conversions for spine rendering

/// Format RGB channels as a `#rrggbb` hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Parse a `#rrggbb` (or `rrggbb`) hex string into RGB channels
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Darken a color by multiplying each channel by `(1 - amount)`.
/// Unparsable input is returned unchanged.
pub fn darken(hex: &str, amount: f64) -> String {
    let Some((r, g, b)) = hex_to_rgb(hex) else {
        return hex.to_string();
    };

    let scale = |c: u8| (c as f64 * (1.0 - amount)).round() as u8;
    rgb_to_hex(scale(r), scale(g), scale(b))
}

/// WCAG relative luminance from sRGB channels
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn linearize(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Contrasting text color (black or white) for a background color.
/// Unparsable backgrounds get white.
pub fn contrast_color(background: &str) -> &'static str {
    let Some((r, g, b)) = hex_to_rgb(background) else {
        return "#ffffff";
    };

    if relative_luminance(r, g, b) > 0.5 {
        "#000000"
    } else {
        "#ffffff"
    }
}

/// Hue angle in degrees [0, 360) for a hex color, used as a sort key.
/// Achromatic and unparsable colors map to 0.
pub fn hue(hex: &str) -> f64 {
    let Some((r, g, b)) = hex_to_rgb(hex) else {
        return 0.0;
    };

    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return 0.0;
    }

    let hue = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(rgb_to_hex(107, 114, 128), "#6b7280");
        assert_eq!(hex_to_rgb("#6b7280"), Some((107, 114, 128)));
        assert_eq!(hex_to_rgb("6b7280"), Some((107, 114, 128)));
        assert_eq!(hex_to_rgb("#xyz"), None);
        assert_eq!(hex_to_rgb("#fff"), None);
    }

    #[test]
    fn test_darken_scales_channels() {
        assert_eq!(darken("#ffffff", 0.2), "#cccccc");
        assert_eq!(darken("#000000", 0.2), "#000000");
        // Unparsable input passes through
        assert_eq!(darken("bogus", 0.2), "bogus");
    }

    #[test_case("#ffffff", "#000000" ; "white background gets black text")]
    #[test_case("#000000", "#ffffff" ; "black background gets white text")]
    #[test_case("#6b7280", "#ffffff" ; "mid gray is below the threshold")]
    #[test_case("oops", "#ffffff" ; "unparsable background gets white text")]
    fn test_contrast_color(background: &str, expected: &str) {
        assert_eq!(contrast_color(background), expected);
    }

    #[test_case("#ff0000", 0.0 ; "red")]
    #[test_case("#00ff00", 120.0 ; "green")]
    #[test_case("#0000ff", 240.0 ; "blue")]
    #[test_case("#808080", 0.0 ; "achromatic gray")]
    fn test_hue(hex: &str, expected: f64) {
        assert!((hue(hex) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_hue_negative_wraps_to_positive() {
        // Magenta-ish: max is red, (g - b) negative
        let h = hue("#ff00aa");
        assert!(h >= 0.0 && h < 360.0);
        assert!(h > 300.0);
    }
}
