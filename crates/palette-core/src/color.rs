//! Packed ARGB color words
//!
//! All colors cross the engine as 32-bit packed ARGB words: alpha in bits
//! 24-31, red in 16-23, green in 8-15, blue in 0-7. This module provides
//! free-function channel access, composition and alpha blending on those
//! words.

/// A 32-bit packed ARGB color word.
pub type Color32 = u32;

/// Opaque black.
pub const BLACK: Color32 = 0xFF00_0000;
/// Opaque white.
pub const WHITE: Color32 = 0xFFFF_FFFF;

/// Compose an ARGB word from its four channels.
#[inline]
pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> Color32 {
    (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Compose an opaque ARGB word from red, green and blue.
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> Color32 {
    compose_argb(0xFF, r, g, b)
}

/// Alpha channel of a packed word.
#[inline]
pub fn alpha(c: Color32) -> u8 {
    (c >> 24) as u8
}

/// Red channel of a packed word.
#[inline]
pub fn red(c: Color32) -> u8 {
    (c >> 16) as u8
}

/// Green channel of a packed word.
#[inline]
pub fn green(c: Color32) -> u8 {
    (c >> 8) as u8
}

/// Blue channel of a packed word.
#[inline]
pub fn blue(c: Color32) -> u8 {
    c as u8
}

/// Extract the red, green and blue channels.
#[inline]
pub fn extract_rgb(c: Color32) -> (u8, u8, u8) {
    (red(c), green(c), blue(c))
}

/// Extract all four channels as (a, r, g, b).
#[inline]
pub fn extract_argb(c: Color32) -> (u8, u8, u8, u8) {
    (alpha(c), red(c), green(c), blue(c))
}

/// Replace the alpha byte of a packed word.
#[inline]
pub fn set_alpha(c: Color32, a: u8) -> Color32 {
    (c & 0x00FF_FFFF) | (u32::from(a) << 24)
}

/// Composite `foreground` over `background` (source-over).
///
/// Uses the standard source-over formula: the result alpha is
/// `a_f + a_b * (1 - a_f)`, and each channel is blended premultiplied and
/// then un-premultiplied. Arithmetic is done in f64 and the final channels
/// are rounded to nearest and clamped.
pub fn composite(foreground: Color32, background: Color32) -> Color32 {
    let fg_alpha = f64::from(alpha(foreground)) / 255.0;
    let bg_alpha = f64::from(alpha(background)) / 255.0;
    let out_alpha = fg_alpha + bg_alpha * (1.0 - fg_alpha);

    let blend = |fg: u8, bg: u8| -> u8 {
        if out_alpha <= 0.0 {
            return 0;
        }
        let c = (f64::from(fg) * fg_alpha + f64::from(bg) * bg_alpha * (1.0 - fg_alpha)) / out_alpha;
        c.round().clamp(0.0, 255.0) as u8
    };

    compose_argb(
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
        blend(red(foreground), red(background)),
        blend(green(foreground), green(background)),
        blend(blue(foreground), blue(background)),
    )
}
