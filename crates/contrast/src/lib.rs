//! # contrast - WCAG 2.0 contrast analysis
//!
//! Pure functions over [`colorspec::Rgb`] values: relative luminance,
//! contrast ratio, classification against the WCAG 2.0 thresholds, and a
//! bounded search for alternative colors when a pair falls short.
//!
//! Everything here assumes already-valid colors and cannot fail; parse
//! user input with `colorspec` first.
//!
//! ## Quick Start
//!
//! ```rust
//! use colorspec::Rgb;
//! use contrast::{TextSize, WcagLevel, classify, contrast_ratio, suggest};
//!
//! let background = Rgb::WHITE;
//! let text = Rgb::new(200, 200, 200);
//!
//! let ratio = contrast_ratio(background, text);
//! let compliance = classify(ratio, TextSize::Normal);
//! assert_eq!(compliance.level, WcagLevel::Fail);
//!
//! // Every suggestion reaches the 4.5:1 target.
//! let alternatives = suggest(background, text, 4.5);
//! assert!(alternatives.iter().all(|s| s.ratio >= 4.5));
//! ```

pub mod luminance;
pub mod suggest;
pub mod wcag;

pub use luminance::{contrast_ratio, relative_luminance};
pub use suggest::{Suggestion, SuggestionKind, suggest};
pub use wcag::{Compliance, PassFlags, TextSize, WcagLevel, classify};
