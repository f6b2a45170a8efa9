//! WCAG contrast math and tone adjustment.
//!
//! Contrast is measured with the WCAG 2.x relative-luminance formula in sRGB.
//! Tone adjustment comes in two flavours:
//!
//! - [`adjust_tone`] shifts every RGB channel by the same amount. This is a
//!   cheap approximation of lighten/darken, not a perceptual one, and its
//!   output is kept stable so generated token files do not churn.
//! - [`ensure_contrast`] searches HSL lightness (hue and saturation fixed)
//!   for the closest color that reaches a minimum contrast ratio.

use crate::color::{Color, Hsl};

/// Binary search steps per direction in [`ensure_contrast`]
const SEARCH_STEPS: usize = 24;

fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x, in [0.0, 1.0]
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let [r, g, b] = color.to_unit();
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0] regardless of argument order.
#[must_use]
pub fn contrast_ratio(foreground: Color, background: Color) -> f64 {
    let a = relative_luminance(foreground);
    let b = relative_luminance(background);
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Add `amount` to each RGB channel, clamping to [0, 255].
///
/// `amount` is clamped to [-255, 255] first.
#[must_use]
pub fn adjust_tone(color: Color, amount: i32) -> Color {
    let amount = amount.clamp(-255, 255);
    let shift = |channel: u8| (i32::from(channel) + amount).clamp(0, 255) as u8;
    Color::rgb(shift(color.r), shift(color.g), shift(color.b))
}

/// Find a color at least `min_ratio` contrast against `background`,
/// starting from `seed`.
///
/// A seed that already passes is returned unchanged. Otherwise the seed's
/// HSL lightness is searched both toward white and toward black, and the
/// passing candidate closest in lightness to the seed wins. When neither
/// direction can reach the ratio, the higher-contrast extreme (white or
/// black) is returned.
#[must_use]
pub fn ensure_contrast(seed: Color, background: Color, min_ratio: f64) -> Color {
    if contrast_ratio(seed, background) >= min_ratio {
        return seed;
    }

    let hsl = seed.to_hsl();
    let lighter = search_lightness(hsl, 1.0, background, min_ratio);
    let darker = search_lightness(hsl, 0.0, background, min_ratio);

    match (lighter, darker) {
        (Some((light, light_delta)), Some((dark, dark_delta))) => {
            if light_delta <= dark_delta {
                light
            } else {
                dark
            }
        }
        (Some((light, _)), None) => light,
        (None, Some((dark, _))) => dark,
        (None, None) => {
            let white = contrast_ratio(Color::WHITE, background);
            let black = contrast_ratio(Color::BLACK, background);
            let fallback = if white >= black {
                Color::WHITE
            } else {
                Color::BLACK
            };
            tracing::warn!(
                %seed,
                %background,
                min_ratio,
                best = white.max(black),
                "contrast target unreachable, using {fallback}"
            );
            fallback
        }
    }
}

/// Binary search lightness between `hsl.l` (failing) and `target` (0.0 or
/// 1.0). Returns the passing color nearest the seed and its lightness delta,
/// or `None` if even the extreme fails.
fn search_lightness(hsl: Hsl, target: f64, background: Color, min_ratio: f64) -> Option<(Color, f64)> {
    let extreme = Color::from_hsl(hsl.with_lightness(target));
    if contrast_ratio(extreme, background) < min_ratio {
        return None;
    }

    let mut failing = hsl.l;
    let mut passing = target;
    let mut best = extreme;

    for _ in 0..SEARCH_STEPS {
        let mid = (failing + passing) * 0.5;
        let candidate = Color::from_hsl(hsl.with_lightness(mid));
        if contrast_ratio(candidate, background) >= min_ratio {
            passing = mid;
            best = candidate;
        } else {
            failing = mid;
        }
    }

    Some((best, (passing - hsl.l).abs()))
}
