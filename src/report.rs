//! End-to-end analysis of one background/text pair.

use colorspec::Rgb;
use contrast::{Compliance, Suggestion, TextSize, WcagLevel, classify, contrast_ratio, suggest};
use log::debug;

/// The complete analysis of one background/text pair.
///
/// Bundles the classified ratio with the alternative-color search so a
/// front end only makes one call per input change.
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastReport {
    /// The background color the analysis ran against.
    pub background: Rgb,
    /// The text color the analysis ran against.
    pub text: Rgb,
    /// Ratio, level and pass flags for the pair.
    pub compliance: Compliance,
    /// Replacement candidates, best first. Empty at AAA.
    pub suggestions: Vec<Suggestion>,
}

impl ContrastReport {
    /// Runs the full pipeline: ratio, classification, and the suggestion
    /// search toward the next level up.
    ///
    /// A pair failing AA is pushed toward the AA threshold for `size`; a
    /// pair at AA is pushed toward AAA; a pair at AAA needs nothing.
    pub fn analyze(background: Rgb, text: Rgb, size: TextSize) -> Self {
        let ratio = contrast_ratio(background, text);
        let compliance = classify(ratio, size);

        let suggestions = match compliance.level {
            WcagLevel::Aaa => Vec::new(),
            WcagLevel::Aa => suggest(background, text, size.aaa_threshold()),
            WcagLevel::Fail => suggest(background, text, size.aa_threshold()),
        };
        debug!(
            "analyzed {background} on {text}: ratio {ratio:.2}, level {}, {} suggestions",
            compliance.level,
            suggestions.len()
        );

        Self {
            background,
            text,
            compliance,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aaa_pair_gets_no_suggestions() {
        let report = ContrastReport::analyze(Rgb::WHITE, Rgb::BLACK, TextSize::Normal);
        assert_eq!(report.compliance.level, WcagLevel::Aaa);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn failing_pair_targets_the_aa_threshold() {
        let report =
            ContrastReport::analyze(Rgb::WHITE, Rgb::new(200, 200, 200), TextSize::Normal);
        assert_eq!(report.compliance.level, WcagLevel::Fail);
        assert!(!report.suggestions.is_empty());
        assert!(report.suggestions.iter().all(|s| s.ratio >= 4.5));
    }

    #[test]
    fn aa_pair_targets_aaa() {
        // 6.19:1 on white - passes AA, misses AAA.
        let report = ContrastReport::analyze(Rgb::WHITE, Rgb::new(97, 97, 97), TextSize::Normal);
        assert_eq!(report.compliance.level, WcagLevel::Aa);
        assert!(report.suggestions.iter().all(|s| s.ratio >= 7.0));
        assert!(!report.suggestions.is_empty());
    }

    #[test]
    fn large_text_uses_the_relaxed_thresholds() {
        // 3.4:1 fails normal AA but passes large AA; for large text the
        // search then aims at the 4.5 large-AAA threshold.
        let report = ContrastReport::analyze(Rgb::WHITE, Rgb::new(140, 140, 140), TextSize::Large);
        assert_eq!(report.compliance.level, WcagLevel::Aa);
        assert!(report.suggestions.iter().all(|s| s.ratio >= 4.5));
    }
}
