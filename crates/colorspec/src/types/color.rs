//! Canonical color values and the RGB/HSL conversion math.
//!
//! [`Rgb`] is the representation everything else converts through. [`Hsl`]
//! is derived on demand for lightness adjustments and converted straight
//! back; it is never the stored form.

use std::fmt;

use crate::types::Format;

/// A color as three 8-bit sRGB channels.
///
/// The `u8` channels make the 0-255 range invariant unrepresentable-by-
/// construction. `Rgb` is a plain value: two instances with equal channels
/// are interchangeable.
///
/// # Examples
///
/// ```
/// use colorspec::{Format, Rgb};
///
/// let coral = Rgb::new(255, 127, 80);
/// assert_eq!(coral.format(Format::Hex), "#FF7F50");
/// assert_eq!(coral.to_hsl().h, 16);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Rgb {
    /// Pure black, the darkest fallback text color.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Pure white, the lightest fallback text color.
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts to cylindrical HSL coordinates, rounded to integer degree
    /// and percent.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            // Achromatic: hue is meaningless, zero by convention.
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Hsl {
            h: (h * 360.0).round() as u16,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }

    /// Renders the color in the requested textual encoding.
    ///
    /// Hex output is always six uppercase digits with a `#` prefix; rgb
    /// and hsl use the function syntax with decimal integers.
    pub fn format(self, format: Format) -> String {
        match format {
            Format::Hex => format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
            Format::Rgb => format!("rgb({}, {}, {})", self.r, self.g, self.b),
            Format::Hsl => {
                let hsl = self.to_hsl();
                format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
            }
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A color in cylindrical HSL coordinates.
///
/// Intermediate representation for perceptually intuitive adjustment:
/// shifting `l` moves luminance while `h` and `s` keep the color
/// recognizable. `h` is a degree in 0..=360 (360 is a full turn,
/// equivalent to 0); `s` and `l` are percentages in 0..=100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees (0-360).
    pub h: u16,
    /// Saturation in percent (0-100).
    pub s: u8,
    /// Lightness in percent (0-100).
    pub l: u8,
}

impl Hsl {
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Converts back to RGB, rounding each channel to the nearest integer.
    ///
    /// Round-trips through [`Rgb::to_hsl`] reproduce the original channels
    /// to within the integer-rounding tolerance (+/-1 for most colors).
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;

        if s == 0.0 {
            // Achromatic: all channels carry the lightness.
            let v = (l * 255.0).round() as u8;
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::new(
            channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            channel(hue_to_rgb(p, q, h)),
            channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

/// The piecewise helper of the standard HSL-to-RGB transform.
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
