//! Error types for color parsing.
//!
//! Parsing is the only fallible operation in this crate: once an
//! [`Rgb`](crate::types::Rgb) exists it is valid by construction, and the
//! conversions between representations cannot fail.

use thiserror::Error;

use crate::types::Format;

/// Errors that can occur when parsing a color string.
///
/// # Examples
///
/// ```rust
/// use colorspec::{ColorParseError, Format, parse};
///
/// let err = parse("rgb(999, 0, 0)", Format::Rgb).unwrap_err();
/// assert!(matches!(err, ColorParseError::OutOfRange { .. }));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input does not match the grammar of the declared or detected format.
    #[error("invalid {format} color: {input:?}")]
    InvalidFormat {
        /// The format whose grammar the input failed to match.
        format: Format,
        /// The offending input, trimmed.
        input: String,
    },

    /// A component lexed as an integer but fell outside its legal domain.
    #[error("{component} value {value} out of range ({min}..={max})")]
    OutOfRange {
        /// Which component violated its domain (`"red"`, `"hue"`, ...).
        component: &'static str,
        /// The parsed value.
        value: i64,
        /// Smallest legal value.
        min: i64,
        /// Largest legal value.
        max: i64,
    },

    /// Auto-detection could not classify the input as hex, rgb or hsl.
    #[error("unrecognized color: {input:?}")]
    Unrecognized {
        /// The offending input, trimmed.
        input: String,
    },
}
