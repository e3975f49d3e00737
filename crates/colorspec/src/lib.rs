//! # colorspec - Color parsing and conversion
//!
//! The canonical color model behind the contrast analyzer. Every textual
//! encoding converts through [`Rgb`], a plain triple of 8-bit sRGB
//! channels; [`Hsl`] exists only as an intermediate for perceptual
//! adjustments (shifting lightness while holding hue and saturation).
//!
//! ## Quick Start
//!
//! ```rust
//! use colorspec::{Format, parse, parse_any};
//!
//! // Declared format
//! let teal = parse("#008080", Format::Hex).expect("valid hex");
//! assert_eq!((teal.r, teal.g, teal.b), (0, 128, 128));
//!
//! // Auto-detected format
//! let same = parse_any("rgb(0, 128, 128)").expect("valid rgb");
//! assert_eq!(teal, same);
//!
//! // Render in any encoding
//! assert_eq!(teal.format(Format::Hex), "#008080");
//! assert_eq!(teal.format(Format::Hsl), "hsl(180, 100%, 25%)");
//! ```
//!
//! ## Supported Formats
//!
//! - **Hex**: `#RGB`, `#RRGGBB`, with or without the leading `#`
//! - **RGB**: `rgb(r, g, b)` - keyword and parentheses optional,
//!   components separated by commas and/or whitespace
//! - **HSL**: `hsl(h, s%, l%)` - same shape, `%` optional on input
//!
//! Parsing is strict: a declared format is authoritative, components must
//! be in range, and trailing garbage is rejected. There is no default
//! color; every failure is a [`ColorParseError`] the caller can match on.
//!
//! ## Modules
//!
//! - [`types`]: `Rgb`, `Hsl` and the `Format` selector
//! - [`parser`]: the grammar and format auto-detection
//! - [`error`]: parse failure kinds

pub mod error;
pub mod parser;
pub mod types;

pub use error::ColorParseError;
pub use parser::{detect, parse, parse_any};
pub use types::{Format, Hsl, Rgb};
