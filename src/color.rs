//! Portable-to-native color conversion.
//!
//! Callers describe calendar colors portably: a CSS color name, a `#`-hex
//! string, or `rgb()`/`rgba()` functional notation. The store wants its
//! native encoding, a packed 32-bit ARGB value. The conversion happens
//! exactly once, at the delegation boundary, and is never cached.

/// Convert a portable color to the native packed ARGB encoding.
///
/// Returns `None` for input the portable grammar does not recognize; the
/// bridge then delegates with no color at all.
pub fn to_native(input: &str) -> Option<u32> {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix('#') {
        return parse_hex(hex);
    }
    if input.starts_with("rgb") {
        return parse_functional(input);
    }
    named(&input.to_ascii_lowercase())
}

/// `#rgb`, `#rgba`, `#rrggbb`, and `#rrggbbaa` (CSS digit order, so trailing
/// alpha moves to the front of the packed value).
fn parse_hex(hex: &str) -> Option<u32> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        3 => {
            let (r, g, b) = ((value >> 8) & 0xf, (value >> 4) & 0xf, value & 0xf);
            Some(0xff00_0000 | (r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11)
        }
        4 => {
            let r = (value >> 12) & 0xf;
            let g = (value >> 8) & 0xf;
            let b = (value >> 4) & 0xf;
            let a = value & 0xf;
            Some((a * 0x11) << 24 | (r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11)
        }
        6 => Some(0xff00_0000 | value),
        8 => Some(value.rotate_right(8)),
        _ => None,
    }
}

/// `rgb(r, g, b)` with integer channels, `rgba(r, g, b, a)` with a 0..=1
/// fractional alpha.
fn parse_functional(input: &str) -> Option<u32> {
    let (has_alpha, body) = match input.strip_prefix("rgba") {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix("rgb")?),
    };
    let body = body.trim().strip_prefix('(')?.strip_suffix(')')?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();

    let expected = if has_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let r: u32 = parts[0].parse::<u8>().ok()?.into();
    let g: u32 = parts[1].parse::<u8>().ok()?.into();
    let b: u32 = parts[2].parse::<u8>().ok()?.into();
    let a: u32 = if has_alpha {
        let alpha: f64 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
        (alpha * 255.0).round() as u32
    } else {
        0xff
    };

    Some(a << 24 | r << 16 | g << 8 | b)
}

fn named(name: &str) -> Option<u32> {
    NAMED
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, value)| *value)
}

/// CSS color keywords, packed ARGB.
const NAMED: &[(&str, u32)] = &[
    ("aqua", 0xff00ffff),
    ("black", 0xff000000),
    ("blue", 0xff0000ff),
    ("brown", 0xffa52a2a),
    ("coral", 0xffff7f50),
    ("crimson", 0xffdc143c),
    ("cyan", 0xff00ffff),
    ("fuchsia", 0xffff00ff),
    ("gold", 0xffffd700),
    ("gray", 0xff808080),
    ("green", 0xff008000),
    ("grey", 0xff808080),
    ("indigo", 0xff4b0082),
    ("khaki", 0xfff0e68c),
    ("lavender", 0xffe6e6fa),
    ("lime", 0xff00ff00),
    ("magenta", 0xffff00ff),
    ("maroon", 0xff800000),
    ("navy", 0xff000080),
    ("olive", 0xff808000),
    ("orange", 0xffffa500),
    ("orchid", 0xffda70d6),
    ("pink", 0xffffc0cb),
    ("plum", 0xffdda0dd),
    ("purple", 0xff800080),
    ("red", 0xffff0000),
    ("salmon", 0xfffa8072),
    ("silver", 0xffc0c0c0),
    ("skyblue", 0xff87ceeb),
    ("teal", 0xff008080),
    ("tomato", 0xffff6347),
    ("transparent", 0x00000000),
    ("turquoise", 0xff40e0d0),
    ("violet", 0xffee82ee),
    ("white", 0xffffffff),
    ("yellow", 0xffffff00),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_six_digits() {
        assert_eq!(to_native("#3174f1"), Some(0xff3174f1));
        assert_eq!(to_native("#3174F1"), Some(0xff3174f1));
    }

    #[test]
    fn test_hex_shorthand() {
        assert_eq!(to_native("#fff"), Some(0xffffffff));
        assert_eq!(to_native("#f00"), Some(0xffff0000));
        // #rgba shorthand carries its alpha
        assert_eq!(to_native("#f008"), Some(0x88ff0000));
    }

    #[test]
    fn test_hex_with_alpha() {
        assert_eq!(to_native("#3174f180"), Some(0x803174f1));
    }

    #[test]
    fn test_named() {
        assert_eq!(to_native("red"), Some(0xffff0000));
        assert_eq!(to_native("SkyBlue"), Some(0xff87ceeb));
        assert_eq!(to_native("transparent"), Some(0x00000000));
    }

    #[test]
    fn test_functional() {
        assert_eq!(to_native("rgb(49, 116, 241)"), Some(0xff3174f1));
        assert_eq!(to_native("rgba(255, 0, 0, 0.5)"), Some(0x80ff0000));
        assert_eq!(to_native("rgba(0, 0, 0, 0)"), Some(0x00000000));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(to_native(""), None);
        assert_eq!(to_native("#12345"), None);
        assert_eq!(to_native("#zzzzzz"), None);
        assert_eq!(to_native("blurple"), None);
        assert_eq!(to_native("rgb(1, 2)"), None);
        assert_eq!(to_native("rgba(1, 2, 3, 1.5)"), None);
        assert_eq!(to_native("rgb(300, 0, 0)"), None);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(to_native("  #000  "), Some(0xff000000));
    }
}
