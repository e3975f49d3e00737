//! Alternative-color search for pairs that miss a target ratio.
//!
//! The search only moves lightness: hue and saturation stay fixed so a
//! brand color remains recognizable, and lightness is the channel that
//! moves relative luminance the most. Black and white are always tried as
//! text colors on top of the four adjustments, so whenever the target is
//! reachable at all the result is non-empty.
//!
//! This is a bounded heuristic, not an exhaustive search: a fixed
//! +/-40-point shift can overshoot or undershoot, and no passing
//! combination is guaranteed to be found even when one exists.

use colorspec::{Hsl, Rgb};
use log::debug;

use crate::luminance::contrast_ratio;

/// Lightness shift applied to each candidate, in percentage points.
const LIGHTNESS_STEP: u8 = 40;

/// Which color of the pair a suggestion replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    /// Replace the text color, keep the background.
    Text,
    /// Replace the background, keep the text color.
    Background,
}

/// A replacement color that lifts the pair over the target ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Suggestion {
    /// Which side of the pair to change.
    pub kind: SuggestionKind,
    /// The replacement color.
    pub color: Rgb,
    /// Ratio against the unmodified partner, rounded to two decimals.
    pub ratio: f64,
}

/// Searches for replacement colors that raise the pair's contrast to
/// `target`.
///
/// Returns an empty list when the pair already meets the target.
/// Otherwise generates four lightness-shifted candidates (text darker,
/// text lighter, background lighter, background darker) plus black and
/// white as text fallbacks, keeps those that both improve on the current
/// ratio and reach the target, and sorts them by descending ratio.
///
/// Deterministic: equal inputs produce equal results.
///
/// # Examples
///
/// ```
/// use colorspec::Rgb;
/// use contrast::suggest;
///
/// let suggestions = suggest(Rgb::WHITE, Rgb::new(200, 200, 200), 4.5);
/// assert!(!suggestions.is_empty());
/// assert!(suggestions.windows(2).all(|w| w[0].ratio >= w[1].ratio));
/// ```
pub fn suggest(background: Rgb, text: Rgb, target: f64) -> Vec<Suggestion> {
    let current = contrast_ratio(background, text);
    if current >= target {
        return Vec::new();
    }

    let bg_hsl = background.to_hsl();
    let text_hsl = text.to_hsl();

    let candidates = [
        (SuggestionKind::Text, darken(text_hsl)),
        (SuggestionKind::Text, lighten(text_hsl)),
        (SuggestionKind::Background, lighten(bg_hsl)),
        (SuggestionKind::Background, darken(bg_hsl)),
    ];

    let mut suggestions = Vec::new();
    for (kind, hsl) in candidates {
        let color = hsl.to_rgb();
        let ratio = match kind {
            SuggestionKind::Text => contrast_ratio(background, color),
            SuggestionKind::Background => contrast_ratio(color, text),
        };
        keep_if_improved(&mut suggestions, kind, color, ratio, current, target);
    }

    // High-contrast fallbacks: at least one of black or white reaches any
    // target that is reachable against this background.
    for fallback in [Rgb::BLACK, Rgb::WHITE] {
        let ratio = contrast_ratio(background, fallback);
        keep_if_improved(
            &mut suggestions,
            SuggestionKind::Text,
            fallback,
            ratio,
            current,
            target,
        );
    }

    suggestions.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    suggestions
}

fn keep_if_improved(
    out: &mut Vec<Suggestion>,
    kind: SuggestionKind,
    color: Rgb,
    ratio: f64,
    current: f64,
    target: f64,
) {
    if ratio > current && ratio >= target {
        out.push(Suggestion {
            kind,
            color,
            ratio: round2(ratio),
        });
    } else {
        debug!("dropping {kind:?} candidate {color}: ratio {ratio:.2} (current {current:.2}, target {target:.2})");
    }
}

fn darken(hsl: Hsl) -> Hsl {
    Hsl {
        l: hsl.l.saturating_sub(LIGHTNESS_STEP),
        ..hsl
    }
}

fn lighten(hsl: Hsl) -> Hsl {
    Hsl {
        l: (hsl.l + LIGHTNESS_STEP).min(100),
        ..hsl
    }
}

fn round2(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}
