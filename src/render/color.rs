//! Color constants and `#RRGGBB` hex parsing

use image::Rgb;

use crate::io::error::{Result, invalid_parameter};

/// Solid black, the default stroke color
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Solid white, the default background color
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Parse a `#RRGGBB` hex color, with the leading `#` optional
///
/// # Errors
///
/// Returns `InvalidParameter` (named after `parameter`) when the string is
/// not exactly six hexadecimal digits.
pub fn parse_hex_color(parameter: &'static str, value: &str) -> Result<Rgb<u8>> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid_parameter(
            parameter,
            &value,
            &"expected a #RRGGBB hex color",
        ));
    }

    let mut channels = [0_u8; 3];
    for (index, channel) in channels.iter_mut().enumerate() {
        let pair = digits.get(index * 2..index * 2 + 2).ok_or_else(|| {
            invalid_parameter(parameter, &value, &"expected a #RRGGBB hex color")
        })?;
        *channel = u8::from_str_radix(pair, 16).map_err(|err| {
            invalid_parameter(parameter, &value, &format!("not a hex color: {err}"))
        })?;
    }
    Ok(Rgb(channels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_hex_colors_with_and_without_hash() {
        assert_eq!(parse_hex_color("stroke-color", "#000000").ok(), Some(BLACK));
        assert_eq!(parse_hex_color("stroke-color", "FFFFFF").ok(), Some(WHITE));
        assert_eq!(
            parse_hex_color("stroke-color", "#1a2B3c").ok(),
            Some(Rgb([0x1a, 0x2b, 0x3c]))
        );
    }

    #[test]
    fn test_rejects_malformed_hex_colors() {
        for bad in ["", "#fff", "#ggg000", "#1234567", "red"] {
            assert!(parse_hex_color("background-color", bad).is_err(), "{bad}");
        }
    }
}
