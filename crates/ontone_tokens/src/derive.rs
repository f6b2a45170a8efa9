//! On-color derivation
//!
//! The seed is a fixed channel shift of the background: lighter when the
//! background already contrasts with white at the required ratio, darker
//! otherwise. The seed is then refined by [`ensure_contrast`] against the
//! background itself.

use ontone_core::{adjust_tone, contrast_ratio, ensure_contrast, Color};

use crate::spec::RatioKey;

/// Channel shift applied to the background to seed the search
pub const SEED_TONE_SHIFT: i32 = 60;

/// Initial on-color guess for `background`. Not guaranteed to pass.
pub fn seed_on_color(background: Color, ratio_key: RatioKey) -> Color {
    if contrast_ratio(background, Color::WHITE) >= ratio_key.threshold() {
        adjust_tone(background, SEED_TONE_SHIFT)
    } else {
        adjust_tone(background, -SEED_TONE_SHIFT)
    }
}

/// Derive an on-color meeting `ratio_key` against `background` whenever one
/// is reachable, or the best-contrast fallback otherwise.
pub fn derive_on_color(background: Color, ratio_key: RatioKey) -> Color {
    let seed = seed_on_color(background, ratio_key);
    ensure_contrast(seed, background, ratio_key.threshold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_background_seeds_lighter() {
        let background = Color::from_hex(0x663399);
        assert_eq!(
            seed_on_color(background, RatioKey::Small),
            Color::from_hex(0xA26FD5)
        );
    }

    #[test]
    fn light_background_seeds_darker() {
        let background = Color::from_hex(0xF9F9F9);
        assert_eq!(
            seed_on_color(background, RatioKey::Small),
            Color::from_hex(0xBDBDBD)
        );
    }

    #[test]
    fn black_background_gets_passing_on_color() {
        let on = derive_on_color(Color::BLACK, RatioKey::Small);
        assert!(contrast_ratio(on, Color::BLACK) >= 4.5, "{on}");
    }

    #[test]
    fn derived_colors_pass_for_sample_palette() {
        for hex in [0x663399, 0x5FA51A, 0x201782, 0xF9F9F9, 0x123456, 0xFFFFFF, 0x808080] {
            let background = Color::from_hex(hex);
            for key in [RatioKey::Small, RatioKey::Large] {
                let on = derive_on_color(background, key);
                let ratio = contrast_ratio(on, background);
                assert!(
                    ratio >= key.threshold(),
                    "{background} ({key}) -> {on}: {ratio}"
                );
            }
        }
    }

    #[test]
    fn large_key_allows_closer_colors() {
        let background = Color::from_hex(0x5FA51A);
        let small = derive_on_color(background, RatioKey::Small);
        let large = derive_on_color(background, RatioKey::Large);
        assert!(contrast_ratio(large, background) <= contrast_ratio(small, background));
    }
}
