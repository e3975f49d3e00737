//! Integration tests for the alternative-color search.

use colorspec::Rgb;
use contrast::{SuggestionKind, contrast_ratio, suggest};

// ============================================================================
// THE SPECIFIED SCENARIO: LIGHT GRAY ON WHITE
// ============================================================================

#[test]
fn light_gray_on_white_gets_passing_sorted_suggestions() {
    let background = Rgb::WHITE;
    let text = Rgb::new(200, 200, 200);
    assert!(contrast_ratio(background, text) < 2.0, "precondition");

    let suggestions = suggest(background, text, 4.5);
    assert!(!suggestions.is_empty());
    for suggestion in &suggestions {
        assert!(suggestion.ratio >= 4.5, "{suggestion:?}");
    }
    assert!(suggestions.windows(2).all(|w| w[0].ratio >= w[1].ratio));
}

#[test]
fn suggested_ratios_hold_against_the_unmodified_partner() {
    let background = Rgb::WHITE;
    let text = Rgb::new(200, 200, 200);

    for suggestion in suggest(background, text, 4.5) {
        let actual = match suggestion.kind {
            SuggestionKind::Text => contrast_ratio(background, suggestion.color),
            SuggestionKind::Background => contrast_ratio(suggestion.color, text),
        };
        // Stored ratio is the actual one, only rounded.
        assert!((actual - suggestion.ratio).abs() < 0.005, "{suggestion:?} vs {actual}");
    }
}

// ============================================================================
// GENERAL BEHAVIOR
// ============================================================================

#[test]
fn compliant_pairs_return_nothing() {
    assert!(suggest(Rgb::WHITE, Rgb::BLACK, 7.0).is_empty());
    assert!(suggest(Rgb::BLACK, Rgb::WHITE, 7.0).is_empty());
}

#[test]
fn suggestions_are_deterministic() {
    let background = Rgb::new(70, 130, 180);
    let text = Rgb::new(100, 149, 237);
    assert_eq!(
        suggest(background, text, 4.5),
        suggest(background, text, 4.5)
    );
}

#[test]
fn dark_background_gets_a_white_text_fallback() {
    // Near-black text on near-black background: lightening the text and
    // the white fallback are the viable directions.
    let background = Rgb::new(20, 20, 30);
    let text = Rgb::new(40, 40, 50);

    let suggestions = suggest(background, text, 4.5);
    assert!(!suggestions.is_empty());
    assert!(
        suggestions
            .iter()
            .any(|s| s.kind == SuggestionKind::Text && s.color == Rgb::WHITE)
    );
    for suggestion in &suggestions {
        assert!(suggestion.ratio >= 4.5);
    }
}
