//! Color string parsing and format auto-detection.
//!
//! [`parse`] applies one declared format strictly: the input either
//! matches that format's grammar with every component in range, or the
//! call fails with a [`ColorParseError`] naming what went wrong. There is
//! no fallback between formats and no default color.
//!
//! [`parse_any`] runs the ordered detection table instead: hex first
//! (leading `#` or a bare run of 3/6 hex digits), then rgb, then hsl,
//! each recognized by its leading keyword. The first predicate that
//! matches commits to that format's parser - a detected-but-malformed
//! input reports that format's error rather than falling through to the
//! next candidate.

pub mod values;

use nom::combinator::all_consuming;

use crate::error::ColorParseError;
use crate::types::{Format, Hsl, Rgb};

/// Ordered detection table: the first matching predicate decides which
/// parser runs. Priority (hex, then rgb, then hsl) is part of the public
/// contract.
const DETECTORS: &[(Format, fn(&str) -> bool)] = &[
    (Format::Hex, looks_like_hex),
    (Format::Rgb, looks_like_rgb),
    (Format::Hsl, looks_like_hsl),
];

/// Parses `input` as the declared `format`.
///
/// Leading and trailing whitespace is ignored; anything else unconsumed
/// by the grammar is an error.
///
/// # Examples
///
/// ```
/// use colorspec::{Format, Rgb, parse};
///
/// assert_eq!(parse("#FFF", Format::Hex).unwrap(), Rgb::WHITE);
/// assert_eq!(parse("hsl(0, 100%, 50%)", Format::Hsl).unwrap(), Rgb::new(255, 0, 0));
/// assert!(parse("not-a-color", Format::Hex).is_err());
/// ```
pub fn parse(input: &str, format: Format) -> Result<Rgb, ColorParseError> {
    let input = input.trim();
    match format {
        Format::Hex => parse_hex(input),
        Format::Rgb => parse_rgb(input),
        Format::Hsl => parse_hsl(input),
    }
}

/// Returns the format `input` structurally resembles, if any.
///
/// Detection is purely structural (prefix sniffing); the returned format
/// is a claim about shape, not a guarantee that parsing will succeed.
pub fn detect(input: &str) -> Option<Format> {
    let input = input.trim();
    DETECTORS
        .iter()
        .find(|(_, predicate)| predicate(input))
        .map(|(format, _)| *format)
}

/// Parses `input` in whatever format it is detected as.
///
/// Fails with [`ColorParseError::Unrecognized`] when no format matches
/// structurally; once a format is detected, that parser's verdict is
/// final.
pub fn parse_any(input: &str) -> Result<Rgb, ColorParseError> {
    let trimmed = input.trim();
    match detect(trimmed) {
        Some(format) => parse(trimmed, format),
        None => Err(ColorParseError::Unrecognized {
            input: trimmed.to_string(),
        }),
    }
}

fn looks_like_hex(input: &str) -> bool {
    input.starts_with('#')
        || ((input.len() == 3 || input.len() == 6)
            && input.bytes().all(|b| b.is_ascii_hexdigit()))
}

fn looks_like_rgb(input: &str) -> bool {
    input
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb"))
}

fn looks_like_hsl(input: &str) -> bool {
    input
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("hsl"))
}

/// Hex grammar: optional `#`, then exactly 3 or 6 hex digits.
fn parse_hex(input: &str) -> Result<Rgb, ColorParseError> {
    let invalid = || ColorParseError::InvalidFormat {
        format: Format::Hex,
        input: input.to_string(),
    };

    let digits: Vec<char> = input.strip_prefix('#').unwrap_or(input).chars().collect();
    match digits.len() {
        3 => {
            // Shorthand: each nibble duplicated, #abc -> #aabbcc.
            let r = hex_digit(digits[0]).ok_or_else(invalid)?;
            let g = hex_digit(digits[1]).ok_or_else(invalid)?;
            let b = hex_digit(digits[2]).ok_or_else(invalid)?;
            Ok(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = hex_pair(digits[0], digits[1]).ok_or_else(invalid)?;
            let g = hex_pair(digits[2], digits[3]).ok_or_else(invalid)?;
            let b = hex_pair(digits[4], digits[5]).ok_or_else(invalid)?;
            Ok(Rgb::new(r, g, b))
        }
        _ => Err(invalid()),
    }
}

fn hex_digit(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

fn hex_pair(high: char, low: char) -> Option<u8> {
    Some(hex_digit(high)? * 16 + hex_digit(low)?)
}

fn parse_rgb(input: &str) -> Result<Rgb, ColorParseError> {
    let (_, (r, g, b)) =
        all_consuming(values::rgb_components)(input).map_err(|_| ColorParseError::InvalidFormat {
            format: Format::Rgb,
            input: input.to_string(),
        })?;

    Ok(Rgb::new(
        in_range("red", r, 0, 255)? as u8,
        in_range("green", g, 0, 255)? as u8,
        in_range("blue", b, 0, 255)? as u8,
    ))
}

fn parse_hsl(input: &str) -> Result<Rgb, ColorParseError> {
    let (_, (h, s, l)) =
        all_consuming(values::hsl_components)(input).map_err(|_| ColorParseError::InvalidFormat {
            format: Format::Hsl,
            input: input.to_string(),
        })?;

    let hsl = Hsl::new(
        in_range("hue", h, 0, 360)? as u16,
        in_range("saturation", s, 0, 100)? as u8,
        in_range("lightness", l, 0, 100)? as u8,
    );
    Ok(hsl.to_rgb())
}

fn in_range(
    component: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<i64, ColorParseError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ColorParseError::OutOfRange {
            component,
            value,
            min,
            max,
        })
    }
}
