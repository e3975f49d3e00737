//! The textual encodings the codec understands.

use std::fmt;
use std::str::FromStr;

/// A textual color encoding.
///
/// Used both to declare the format an input should be parsed as and to
/// select the encoding a color is rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// `#RRGGBB` / `#RGB` hexadecimal.
    Hex,
    /// `rgb(r, g, b)` decimal channels.
    Rgb,
    /// `hsl(h, s%, l%)` cylindrical coordinates.
    Hsl,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Hsl => "hsl",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Ok(Format::Hex),
            "rgb" => Ok(Format::Rgb),
            "hsl" => Ok(Format::Hsl),
            other => Err(format!("unknown color format: {other}")),
        }
    }
}
