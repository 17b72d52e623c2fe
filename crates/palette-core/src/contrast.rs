//! WCAG 2.0 luminance and contrast
//!
//! Implements relative luminance, contrast ratios, and a bounded
//! binary search for the minimum overlay alpha that reaches a contrast
//! target. Luminance math runs in f64.

use crate::color::{self, Color32};

/// Iteration cap for the minimum-alpha binary search.
const MIN_ALPHA_SEARCH_MAX_ITERATIONS: u32 = 10;
/// Precision floor for the minimum-alpha binary search, in alpha steps.
const MIN_ALPHA_SEARCH_PRECISION: u32 = 10;

/// WCAG 2.0 relative luminance of a color, in [0.0, 1.0].
///
/// Each sRGB channel is linearized (`v / 12.92` below the 0.03928 knee,
/// gamma 2.4 above it) and the channels are combined with the 0.2126 /
/// 0.7152 / 0.0722 weights. The alpha byte is ignored.
pub fn relative_luminance(c: Color32) -> f64 {
    let (r, g, b) = color::extract_rgb(c);
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

#[inline]
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v < 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio between a foreground and an opaque background.
///
/// A translucent foreground is composited over the background first. The
/// result is in [1.0, 21.0] regardless of argument order. The background
/// must be opaque.
pub fn contrast_ratio(foreground: Color32, background: Color32) -> f64 {
    debug_assert!(
        color::alpha(background) == 0xFF,
        "background must be opaque"
    );

    let foreground = if color::alpha(foreground) < 0xFF {
        color::composite(foreground, background)
    } else {
        foreground
    };

    let l1 = relative_luminance(foreground);
    let l2 = relative_luminance(background);
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

/// Minimum alpha for `foreground`, drawn over the opaque `background`, to
/// reach `min_contrast_ratio`.
///
/// Returns `None` when even the fully opaque foreground falls short.
/// Otherwise binary-searches the alpha byte, stopping after at most 10
/// iterations or once the bracket narrows to 10 alpha steps, and returns
/// the upper (known-passing) end of the final bracket. The search is
/// deliberately approximate; the returned alpha always satisfies the
/// target, but may exceed the true minimum by up to the precision floor.
pub fn min_alpha_for_contrast(
    foreground: Color32,
    background: Color32,
    min_contrast_ratio: f64,
) -> Option<u8> {
    debug_assert!(
        color::alpha(background) == 0xFF,
        "background must be opaque"
    );

    // If fully opaque does not pass, no alpha will.
    let opaque = color::set_alpha(foreground, 0xFF);
    if contrast_ratio(opaque, background) < min_contrast_ratio {
        return None;
    }

    let mut num_iterations = 0;
    let mut min_alpha: u32 = 0;
    let mut max_alpha: u32 = 255;

    while num_iterations <= MIN_ALPHA_SEARCH_MAX_ITERATIONS
        && (max_alpha - min_alpha) > MIN_ALPHA_SEARCH_PRECISION
    {
        let test_alpha = (min_alpha + max_alpha) / 2;
        let test = color::set_alpha(foreground, test_alpha as u8);
        if contrast_ratio(test, background) < min_contrast_ratio {
            min_alpha = test_alpha;
        } else {
            max_alpha = test_alpha;
        }
        num_iterations += 1;
    }

    Some(max_alpha as u8)
}
