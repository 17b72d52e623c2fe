//! Color filter policy
//!
//! Filters decide which colors may appear in an extracted palette. They run
//! twice: once over the histogram colors before quantization, and again over
//! each box's averaged color, since averaging can drift into an excluded
//! region.

use palette_core::colorspace::Hsl;
use palette_core::Color32;

/// Decides whether a color is allowed in a palette.
pub trait Filter {
    /// Return `false` to exclude `rgb` (given with its HSL representation)
    /// from the palette.
    fn is_allowed(&self, rgb: Color32, hsl: Hsl) -> bool;
}

/// Lightness at or below which a color counts as near-black.
const BLACK_MAX_LIGHTNESS: f32 = 0.05;
/// Lightness at or above which a color counts as near-white.
const WHITE_MIN_LIGHTNESS: f32 = 0.95;
/// Hue band of the red I-line.
const I_LINE_HUE_MIN: f32 = 10.0;
const I_LINE_HUE_MAX: f32 = 37.0;
/// Saturation at or below which an I-line hue is rejected.
const I_LINE_MAX_SATURATION: f32 = 0.82;

/// The default palette policy.
///
/// Rejects near-black and near-white colors, and the desaturated
/// red-orange band around the I-line (hue 10°-37°), which tends to pick up
/// skin tones that make poor accent colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFilter;

impl DefaultFilter {
    fn is_black(hsl: Hsl) -> bool {
        hsl.l <= BLACK_MAX_LIGHTNESS
    }

    fn is_white(hsl: Hsl) -> bool {
        hsl.l >= WHITE_MIN_LIGHTNESS
    }

    fn is_near_red_i_line(hsl: Hsl) -> bool {
        (I_LINE_HUE_MIN..=I_LINE_HUE_MAX).contains(&hsl.h) && hsl.s <= I_LINE_MAX_SATURATION
    }
}

impl Filter for DefaultFilter {
    fn is_allowed(&self, _rgb: Color32, hsl: Hsl) -> bool {
        !Self::is_black(hsl) && !Self::is_white(hsl) && !Self::is_near_red_i_line(hsl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_core::colorspace::rgb_to_hsl;

    fn allowed(r: u8, g: u8, b: u8) -> bool {
        DefaultFilter.is_allowed(
            palette_core::color::compose_rgb(r, g, b),
            rgb_to_hsl(r, g, b),
        )
    }

    #[test]
    fn test_rejects_near_black_and_white() {
        assert!(!allowed(0, 0, 0));
        assert!(!allowed(10, 10, 10));
        assert!(!allowed(255, 255, 255));
        assert!(!allowed(250, 250, 250));
    }

    #[test]
    fn test_rejects_i_line_band() {
        // h = 20°, s = 0.6: inside the band.
        assert!(!allowed(204, 102, 51));
    }

    #[test]
    fn test_allows_saturated_orange() {
        // h ≈ 24°, s = 1.0: inside the hue band but above the saturation cut.
        assert!(allowed(255, 102, 0));
    }

    #[test]
    fn test_allows_plain_colors() {
        assert!(allowed(51, 102, 204));
        assert!(allowed(0, 200, 80));
        assert!(allowed(128, 128, 128));
    }
}
