// SPDX-License-Identifier: MIT
//
// Textual color input.
//
// Accepted notations (case-insensitive, surrounding whitespace ignored):
//
//   #rgb  #rrggbb  rrggbb       hex, 4 or 8 bits per channel
//   rgb(255, 128, 0)            8-bit integer channels
//   hsv(30, 100%, 50%)          degrees, percent, percent ('%' optional)

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Hsv, Rgb};
use crate::error::ParseColorError;

static HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex regex")
});

static RGB_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("valid rgb() regex")
});

static HSV_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsv\(\s*(-?\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)%?\s*,\s*(\d+(?:\.\d+)?)%?\s*\)$",
    )
    .expect("valid hsv() regex")
});

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Parse any supported notation into an [`Rgb`].
///
/// # Errors
///
/// [`ParseColorError::Empty`] for blank input,
/// [`ParseColorError::ChannelOutOfRange`] for `rgb()` channels above 255 or
/// `hsv()` saturation/value above 100, and
/// [`ParseColorError::Unrecognized`] otherwise.
pub fn parse_color(input: &str) -> Result<Rgb, ParseColorError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if let Some(caps) = HEX.captures(s) {
        return parse_hex(&caps[1]).ok_or_else(|| ParseColorError::unrecognized(s));
    }

    if let Some(caps) = RGB_FN.captures(s) {
        let mut channels = [0u8; 3];
        for (i, name) in ['r', 'g', 'b'].into_iter().enumerate() {
            let value: u16 = caps[i + 1]
                .parse()
                .map_err(|_| ParseColorError::unrecognized(s))?;
            channels[i] = u8::try_from(value).map_err(|_| ParseColorError::ChannelOutOfRange {
                channel: name,
                value: f32::from(value),
            })?;
        }
        return Ok(Rgb::rgb8(channels[0], channels[1], channels[2]));
    }

    if let Some(caps) = HSV_FN.captures(s) {
        let number = |i: usize| -> Result<f32, ParseColorError> {
            caps[i].parse().map_err(|_| ParseColorError::unrecognized(s))
        };
        let h = number(1)?;
        let sat = number(2)?;
        let val = number(3)?;
        for (channel, value) in [('s', sat), ('v', val)] {
            if value > 100.0 {
                return Err(ParseColorError::ChannelOutOfRange { channel, value });
            }
        }
        return Ok(Hsv::from_degrees(h, sat, val).to_rgb());
    }

    Err(ParseColorError::unrecognized(s))
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

fn parse_hex(digits: &str) -> Option<Rgb> {
    let bytes = digits.as_bytes();
    match bytes.len() {
        // rgb
        3 => {
            let r = hex_digit(bytes[0])?;
            let g = hex_digit(bytes[1])?;
            let b = hex_digit(bytes[2])?;
            Some(Rgb::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // rrggbb
        6 => Some(Rgb::rgb8(
            hex_byte(&bytes[0..2])?,
            hex_byte(&bytes[2..4])?,
            hex_byte(&bytes[4..6])?,
        )),
        _ => None,
    }
}

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn hex_byte(bytes: &[u8]) -> Option<u8> {
    Some(hex_digit(bytes[0])? << 4 | hex_digit(bytes[1])?)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_long_and_short() {
        assert_eq!("#ff8000".parse::<Rgb>().map(Rgb::to_rgb8), Ok((255, 128, 0)));
        assert_eq!("FF8000".parse::<Rgb>().map(Rgb::to_rgb8), Ok((255, 128, 0)));
        assert_eq!("#f80".parse::<Rgb>().map(Rgb::to_rgb8), Ok((255, 136, 0)));
    }

    #[test]
    fn rgb_function() {
        assert_eq!(
            " RGB( 12, 34 ,56 ) ".parse::<Rgb>().map(Rgb::to_rgb8),
            Ok((12, 34, 56))
        );
    }

    #[test]
    fn rgb_channel_out_of_range() {
        assert_eq!(
            "rgb(0, 256, 0)".parse::<Rgb>(),
            Err(ParseColorError::ChannelOutOfRange {
                channel: 'g',
                value: 256.0,
            })
        );
    }

    #[test]
    fn hsv_function() {
        let rgb: Rgb = "hsv(120, 100%, 100%)".parse().unwrap_or_default();
        assert!(rgb.approx_eq(Rgb::new(0.0, 1.0, 0.0), 1e-5), "{rgb:?}");

        let wrapped: Rgb = "hsv(-240, 100, 100)".parse().unwrap_or_default();
        assert!(wrapped.approx_eq(rgb, 1e-5), "{wrapped:?}");
    }

    #[test]
    fn hsv_value_out_of_range() {
        assert_eq!(
            "hsv(0, 50%, 101%)".parse::<Rgb>(),
            Err(ParseColorError::ChannelOutOfRange {
                channel: 'v',
                value: 101.0,
            })
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<Rgb>(), Err(ParseColorError::Empty));
        assert_eq!("   ".parse::<Rgb>(), Err(ParseColorError::Empty));
        assert_eq!(
            "#12345".parse::<Rgb>(),
            Err(ParseColorError::unrecognized("#12345"))
        );
        assert_eq!(
            "teal".parse::<Rgb>(),
            Err(ParseColorError::unrecognized("teal"))
        );
    }

    #[test]
    fn notation_patterns_compile() {
        assert!(HEX.is_match("#0af"));
        assert!(RGB_FN.is_match("rgb(1, 2, 3)"));
        assert!(HSV_FN.is_match("hsv(-30, 50%, 75)"));
    }

    #[test]
    fn error_message_names_channel() {
        let err = ParseColorError::ChannelOutOfRange {
            channel: 'b',
            value: 300.0,
        };
        assert_eq!(err.to_string(), "channel 'b' out of range: 300");
    }
}
