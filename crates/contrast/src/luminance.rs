//! Relative luminance and contrast ratio, per WCAG 2.0.

use colorspec::Rgb;

/// Linearizes one 8-bit sRGB channel.
///
/// Uses the 0.03928 breakpoint from the WCAG 2.0 definition of relative
/// luminance, not the 0.04045 of the sRGB standard.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in `[0.0, 1.0]`.
///
/// `L = 0.2126 R + 0.7152 G + 0.0722 B` over the linearized channels.
/// White is exactly 1.0 and black exactly 0.0.
///
/// # Examples
///
/// ```
/// use colorspec::Rgb;
/// use contrast::relative_luminance;
///
/// assert_eq!(relative_luminance(Rgb::WHITE), 1.0);
/// assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
/// ```
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio between two colors, in `[1.0, 21.0]`.
///
/// `(lighter + 0.05) / (darker + 0.05)` over the two relative luminances;
/// symmetric in its arguments. Identical colors give 1.0, white on black
/// gives 21.0.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_reference_values() {
        assert_eq!(relative_luminance(Rgb::WHITE), 1.0);
        assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
    }

    #[test]
    fn luminance_stays_in_unit_interval() {
        let samples = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(1, 1, 1),
            Rgb::new(254, 254, 254),
            Rgb::new(13, 222, 99),
        ];
        for color in samples {
            let l = relative_luminance(color);
            assert!((0.0..=1.0).contains(&l), "{color} -> {l}");
        }
    }

    #[test]
    fn green_dominates_the_weighting() {
        let green = relative_luminance(Rgb::new(0, 255, 0));
        let red = relative_luminance(Rgb::new(255, 0, 0));
        let blue = relative_luminance(Rgb::new(0, 0, 255));
        assert!(green > red);
        assert!(red > blue);
    }

    #[test]
    fn ratio_white_on_black_is_21() {
        assert_eq!(contrast_ratio(Rgb::WHITE, Rgb::BLACK), 21.0);
    }

    #[test]
    fn ratio_is_symmetric() {
        let pairs = [
            (Rgb::new(255, 127, 80), Rgb::new(0, 64, 128)),
            (Rgb::new(200, 200, 200), Rgb::WHITE),
            (Rgb::new(97, 97, 97), Rgb::new(98, 98, 98)),
        ];
        for (a, b) in pairs {
            assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }
    }

    #[test]
    fn ratio_of_identical_colors_is_one() {
        let gray = Rgb::new(128, 128, 128);
        assert_eq!(contrast_ratio(gray, gray), 1.0);
    }

    #[test]
    fn ratio_stays_in_range() {
        let samples = [
            (Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)),
            (Rgb::new(1, 2, 3), Rgb::new(250, 250, 250)),
            (Rgb::WHITE, Rgb::new(255, 255, 254)),
        ];
        for (a, b) in samples {
            let ratio = contrast_ratio(a, b);
            assert!((1.0..=21.0).contains(&ratio), "{a} vs {b} -> {ratio}");
        }
    }
}
