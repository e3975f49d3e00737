//! WCAG 2.0 thresholds and compliance classification.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

/// AA threshold for normal-size text (success criterion 1.4.3).
pub const AA_NORMAL: f64 = 4.5;
/// AA threshold for large text (success criterion 1.4.3).
pub const AA_LARGE: f64 = 3.0;
/// AAA threshold for normal-size text (success criterion 1.4.6).
pub const AAA_NORMAL: f64 = 7.0;
/// AAA threshold for large text (success criterion 1.4.6).
pub const AAA_LARGE: f64 = 4.5;

/// The text size a contrast requirement applies to.
///
/// WCAG relaxes both thresholds for large text (18pt, or 14pt bold).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl TextSize {
    /// The AA (minimum) threshold for this size.
    pub fn aa_threshold(self) -> f64 {
        match self {
            TextSize::Normal => AA_NORMAL,
            TextSize::Large => AA_LARGE,
        }
    }

    /// The AAA (enhanced) threshold for this size.
    pub fn aaa_threshold(self) -> f64 {
        match self {
            TextSize::Normal => AAA_NORMAL,
            TextSize::Large => AAA_LARGE,
        }
    }
}

impl FromStr for TextSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(TextSize::Normal),
            "large" => Ok(TextSize::Large),
            other => Err(format!("unknown text size: {other}")),
        }
    }
}

/// Conformance level reached by a contrast ratio at a given text size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WcagLevel {
    /// Below the AA minimum.
    Fail,
    /// Meets AA but not AAA.
    Aa,
    /// Meets the enhanced AAA requirement.
    Aaa,
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WcagLevel::Fail => "FAIL",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        };
        write!(f, "{name}")
    }
}

bitflags! {
    /// Which of the four WCAG success criteria a ratio satisfies.
    ///
    /// Each flag is derived from its own absolute threshold, independent
    /// of the text size passed to [`classify`]; a ratio of 3.5 sets
    /// `LARGE_TEXT` even when the classification ran for normal text.
    ///
    /// # Example
    ///
    /// ```
    /// use contrast::{PassFlags, TextSize, classify};
    ///
    /// let compliance = classify(3.5, TextSize::Normal);
    /// assert!(compliance.passes.contains(PassFlags::LARGE_TEXT));
    /// assert!(!compliance.passes.contains(PassFlags::NORMAL_TEXT));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PassFlags: u8 {
        /// AA, normal text: ratio >= 4.5.
        const NORMAL_TEXT          = 0b0000_0001;
        /// AA, large text: ratio >= 3.0.
        const LARGE_TEXT           = 0b0000_0010;
        /// AAA, normal text: ratio >= 7.0.
        const ENHANCED_NORMAL_TEXT = 0b0000_0100;
        /// AAA, large text: ratio >= 4.5.
        const ENHANCED_LARGE_TEXT  = 0b0000_1000;
    }
}

/// The outcome of classifying one contrast ratio.
///
/// Produced fresh by [`classify`]; carries no state beyond the call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Compliance {
    /// The ratio that was classified.
    pub ratio: f64,
    /// Level for the text size the classification ran at.
    pub level: WcagLevel,
    /// Size-independent pass flags for all four criteria.
    pub passes: PassFlags,
}

impl Compliance {
    pub fn passes_normal_text(&self) -> bool {
        self.passes.contains(PassFlags::NORMAL_TEXT)
    }

    pub fn passes_large_text(&self) -> bool {
        self.passes.contains(PassFlags::LARGE_TEXT)
    }

    pub fn passes_enhanced_normal_text(&self) -> bool {
        self.passes.contains(PassFlags::ENHANCED_NORMAL_TEXT)
    }

    pub fn passes_enhanced_large_text(&self) -> bool {
        self.passes.contains(PassFlags::ENHANCED_LARGE_TEXT)
    }
}

/// Classifies `ratio` against the WCAG thresholds for `size`.
///
/// The level uses the size-appropriate thresholds; the pass flags are
/// absolute so callers can report the full picture regardless of the
/// size the check ran at.
pub fn classify(ratio: f64, size: TextSize) -> Compliance {
    let level = if ratio >= size.aaa_threshold() {
        WcagLevel::Aaa
    } else if ratio >= size.aa_threshold() {
        WcagLevel::Aa
    } else {
        WcagLevel::Fail
    };

    let mut passes = PassFlags::empty();
    passes.set(PassFlags::NORMAL_TEXT, ratio >= AA_NORMAL);
    passes.set(PassFlags::LARGE_TEXT, ratio >= AA_LARGE);
    passes.set(PassFlags::ENHANCED_NORMAL_TEXT, ratio >= AAA_NORMAL);
    passes.set(PassFlags::ENHANCED_LARGE_TEXT, ratio >= AAA_LARGE);

    Compliance {
        ratio,
        level,
        passes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries_for_normal_text() {
        assert_eq!(classify(4.5, TextSize::Normal).level, WcagLevel::Aa);
        assert_eq!(classify(4.49999, TextSize::Normal).level, WcagLevel::Fail);
        assert_eq!(classify(7.0, TextSize::Normal).level, WcagLevel::Aaa);
        assert_eq!(classify(6.99, TextSize::Normal).level, WcagLevel::Aa);
    }

    #[test]
    fn level_boundaries_for_large_text() {
        assert_eq!(classify(3.0, TextSize::Large).level, WcagLevel::Aa);
        assert_eq!(classify(2.99, TextSize::Large).level, WcagLevel::Fail);
        assert_eq!(classify(4.5, TextSize::Large).level, WcagLevel::Aaa);
    }

    #[test]
    fn pass_flags_ignore_the_classification_size() {
        // 3.5 fails AA for normal text but the large-text criterion still
        // passes, and the flags say so either way.
        let normal = classify(3.5, TextSize::Normal);
        let large = classify(3.5, TextSize::Large);
        assert_eq!(normal.passes, large.passes);
        assert!(normal.passes_large_text());
        assert!(!normal.passes_normal_text());
        assert_eq!(normal.level, WcagLevel::Fail);
        assert_eq!(large.level, WcagLevel::Aa);
    }

    #[test]
    fn all_flags_set_at_maximum_contrast() {
        let compliance = classify(21.0, TextSize::Normal);
        assert_eq!(compliance.passes, PassFlags::all());
        assert_eq!(compliance.level, WcagLevel::Aaa);
    }

    #[test]
    fn no_flags_set_at_minimum_contrast() {
        let compliance = classify(1.0, TextSize::Normal);
        assert_eq!(compliance.passes, PassFlags::empty());
        assert_eq!(compliance.level, WcagLevel::Fail);
    }

    #[test]
    fn enhanced_large_equals_minimum_normal() {
        // The 4.5 threshold serves double duty.
        let compliance = classify(4.5, TextSize::Normal);
        assert!(compliance.passes_normal_text());
        assert!(compliance.passes_enhanced_large_text());
        assert!(!compliance.passes_enhanced_normal_text());
    }

    #[test]
    fn text_size_from_str() {
        assert_eq!("normal".parse::<TextSize>().unwrap(), TextSize::Normal);
        assert_eq!("Large".parse::<TextSize>().unwrap(), TextSize::Large);
        assert!("huge".parse::<TextSize>().is_err());
    }

    #[test]
    fn level_display() {
        assert_eq!(WcagLevel::Fail.to_string(), "FAIL");
        assert_eq!(WcagLevel::Aa.to_string(), "AA");
        assert_eq!(WcagLevel::Aaa.to_string(), "AAA");
    }
}
