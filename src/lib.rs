//! Contrast.Pro - WCAG color contrast analysis.
//!
//! Façade over the two engine crates plus the end-to-end pipeline:
//!
//! - [`colorspec`]: parsing, validation and hex/rgb/hsl conversion
//! - [`contrast`]: luminance, contrast ratio, WCAG classification and
//!   the alternative-color search
//! - [`report`]: one call from a parsed color pair to a full
//!   [`ContrastReport`]
//!
//! ```rust
//! use contrast_pro::{ContrastReport, TextSize, WcagLevel, parse_any};
//!
//! let background = parse_any("#FFFFFF").unwrap();
//! let text = parse_any("rgb(200, 200, 200)").unwrap();
//!
//! let report = ContrastReport::analyze(background, text, TextSize::Normal);
//! assert_eq!(report.compliance.level, WcagLevel::Fail);
//! assert!(!report.suggestions.is_empty());
//! ```

pub mod error;
pub mod log_init;
pub mod report;

pub use colorspec::{ColorParseError, Format, Hsl, Rgb, detect, parse, parse_any};
pub use contrast::{
    Compliance, PassFlags, Suggestion, SuggestionKind, TextSize, WcagLevel, classify,
    contrast_ratio, relative_luminance, suggest,
};
pub use error::{AppError, Result};
pub use report::ContrastReport;
