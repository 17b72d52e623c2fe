//! Synthetic pixel buffers for regression tests
//!
//! The engine consumes raw ARGB words, so test inputs are generated rather
//! than decoded from files. All fixtures are deterministic.

use palette_core::color::{self, Color32};

/// A buffer of `count` identical pixels.
pub fn solid(c: Color32, count: usize) -> Vec<Color32> {
    vec![c; count]
}

/// A `w` x `h` two-axis color gradient: red along x, green along y, blue
/// fixed at 128.
pub fn gradient(w: u32, h: u32) -> Vec<Color32> {
    let mut pixels = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            let r = ((x * 255) / w.max(1)) as u8;
            let g = ((y * 255) / h.max(1)) as u8;
            pixels.push(color::compose_rgb(r, g, 128));
        }
    }
    pixels
}

/// One pixel per combination of the given channel values: `values.len()^3`
/// distinct colors.
pub fn color_cube(red_values: &[u8], green_values: &[u8], blue_values: &[u8]) -> Vec<Color32> {
    let mut pixels = Vec::with_capacity(red_values.len() * green_values.len() * blue_values.len());
    for &r in red_values {
        for &g in green_values {
            for &b in blue_values {
                pixels.push(color::compose_rgb(r, g, b));
            }
        }
    }
    pixels
}
