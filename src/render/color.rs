//! Hex color parsing for the gap fill

use image::Rgb;

/// Parse `#rgb` or `#rrggbb` (the `#` is optional)
///
/// Returns `None` for any other length or for non-hex digits
pub fn parse_hex_color(text: &str) -> Option<Rgb<u8>> {
    let digits = text.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return None,
    };

    let bytes = hex::decode(expanded).ok()?;
    match bytes.as_slice() {
        &[r, g, b] => Some(Rgb([r, g, b])),
        _ => None,
    }
}
