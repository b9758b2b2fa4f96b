//! Utility functions for color conversion and HTML escaping.

use console::Color;
use cssparser::color::parse_named_color;

/// Parses a CSS color into an RGB triplet.
///
/// Understands `#rgb`, `#rrggbb`, `rgb(r, g, b)` and the CSS named colors.
/// Returns `None` for anything else.
///
/// # Example
///
/// ```rust
/// use jsonstyle::parse_rgb;
///
/// assert_eq!(parse_rgb("#ff8000"), Some((255, 128, 0)));
/// assert_eq!(parse_rgb("#f80"), Some((255, 136, 0)));
/// assert_eq!(parse_rgb("DarkGreen"), Some((0, 100, 0)));
/// assert_eq!(parse_rgb("rgb(1, 2, 3)"), Some((1, 2, 3)));
/// assert_eq!(parse_rgb("chartreuse-ish"), None);
/// ```
pub fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = color.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<u8> = args
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .ok()?;
        return match parts[..] {
            [r, g, b] => Some((r, g, b)),
            _ => None,
        };
    }
    parse_named_color(&lower).ok()
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays land on the 24-step gray ramp (`232..=255`), or on the cube's black
/// and white corners at the extremes; every other color lands in the
/// 6x6x6 cube (`16..=231`).
///
/// # Example
///
/// ```rust
/// use jsonstyle::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 100, 0)), 22);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    let cube = |c: u8| (u16::from(c) * 5 / 255) as u8;
    match r {
        _ if r != g || g != b => 16 + 36 * cube(r) + 6 * cube(g) + cube(b),
        0..=7 => 16,
        249..=255 => 231,
        level => 232 + ((u16::from(level) - 8) * 24 / 247) as u8,
    }
}

/// The terminal color closest to an RGB triplet.
pub fn rgb_to_color(rgb: (u8, u8, u8)) -> Color {
    Color::Color256(rgb_to_ansi256(rgb))
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_ansi256_gray_ramp() {
        let ramp: Vec<u8> = [0u8, 7, 8, 100, 200, 248, 249]
            .into_iter()
            .map(|level| rgb_to_ansi256((level, level, level)))
            .collect();
        assert_eq!(ramp, vec![16, 16, 232, 240, 250, 255, 231]);
    }

    #[test]
    fn test_rgb_to_ansi256_default_palettes() {
        // Light and dark defaults must not collapse onto the same index.
        let light = ["blue", "darkgreen", "darkorange", "darkviolet", "red"];
        let dark = ["lightskyblue", "lightgreen", "orange", "violet", "salmon"];
        for (l, d) in light.iter().zip(dark.iter()) {
            let l = rgb_to_ansi256(parse_rgb(l).unwrap());
            let d = rgb_to_ansi256(parse_rgb(d).unwrap());
            assert!((16..=231).contains(&l));
            assert_ne!(l, d);
        }
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }

    #[test]
    fn test_parse_rgb_hex_forms() {
        assert_eq!(parse_rgb("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_rgb("#FFF"), Some((255, 255, 255)));
        assert_eq!(parse_rgb("  #0a0b0c "), Some((10, 11, 12)));
    }

    #[test]
    fn test_parse_rgb_rejects_bad_hex() {
        assert_eq!(parse_rgb("#12"), None);
        assert_eq!(parse_rgb("#gggggg"), None);
        assert_eq!(parse_rgb("#ééé"), None);
        assert_eq!(parse_rgb("#+f+f+f"), None);
        assert_eq!(parse_rgb("#+ff"), None);
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(parse_rgb("RGB(10,20,30)"), Some((10, 20, 30)));
        assert_eq!(parse_rgb("rgb(10, 20)"), None);
        assert_eq!(parse_rgb("rgb(300, 0, 0)"), None);
    }

    #[test]
    fn test_parse_rgb_named() {
        assert_eq!(parse_rgb("blue"), Some((0, 0, 255)));
        assert_eq!(parse_rgb("DarkViolet"), Some((148, 0, 211)));
        assert_eq!(parse_rgb("chartreuse"), Some((127, 255, 0)));
        assert_eq!(parse_rgb("darkslategray"), Some((47, 79, 79)));
        assert_eq!(parse_rgb("RebeccaPurple"), Some((102, 51, 153)));
        assert_eq!(parse_rgb("notacolor"), None);
    }

    #[test]
    fn test_rgb_to_color() {
        assert_eq!(rgb_to_color((255, 0, 0)), Color::Color256(196));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
