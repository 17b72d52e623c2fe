//! RGB ↔ HSL regression test
//!
//! Checks known conversions and the round-trip guarantee (≤ 1 step per
//! 8-bit channel) over randomized colors.

use palette_core::colorspace::{hsl_to_rgb, rgb_to_hsl};
use palette_test::RegParams;
use rand::Rng;

#[test]
fn colorspace_reg() {
    let mut rp = RegParams::new("colorspace");

    // --- Known values ---
    let red = rgb_to_hsl(255, 0, 0);
    rp.compare_values(0.0, f64::from(red.h), 1e-3);
    rp.compare_values(1.0, f64::from(red.s), 1e-6);
    rp.compare_values(0.5, f64::from(red.l), 1e-6);

    let green = rgb_to_hsl(0, 255, 0);
    rp.compare_values(120.0, f64::from(green.h), 1e-3);

    let blue = rgb_to_hsl(0, 0, 255);
    rp.compare_values(240.0, f64::from(blue.h), 1e-3);

    let gray = rgb_to_hsl(64, 64, 64);
    rp.compare_values(0.0, f64::from(gray.s), 1e-6);
    rp.compare_values(64.0 / 255.0, f64::from(gray.l), 1e-6);

    // Mid-saturation sample: #3366CC.
    let hsl = rgb_to_hsl(51, 102, 204);
    rp.compare_values(220.0, f64::from(hsl.h), 0.5);
    rp.compare_values(0.6, f64::from(hsl.s), 1e-3);
    rp.compare_values(0.5, f64::from(hsl.l), 1e-3);

    // --- Hue stays in [0, 360) ---
    let mut rng = rand::rng();
    for _ in 0..500 {
        let (r, g, b) = (rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>());
        let hsl = rgb_to_hsl(r, g, b);
        rp.assert_true(
            (0.0..360.0).contains(&hsl.h),
            &format!("hue in range for ({}, {}, {})", r, g, b),
        );
        rp.assert_true(
            (0.0..=1.0).contains(&hsl.s) && (0.0..=1.0).contains(&hsl.l),
            &format!("s/l in range for ({}, {}, {})", r, g, b),
        );
    }

    // --- Round trip within one step per channel ---
    for _ in 0..500 {
        let (r, g, b) = (rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>());
        let (r2, g2, b2) = hsl_to_rgb(rgb_to_hsl(r, g, b));
        let close = (i16::from(r) - i16::from(r2)).abs() <= 1
            && (i16::from(g) - i16::from(g2)).abs() <= 1
            && (i16::from(b) - i16::from(b2)).abs() <= 1;
        rp.assert_true(
            close,
            &format!("round trip ({}, {}, {}) -> ({}, {}, {})", r, g, b, r2, g2, b2),
        );
    }

    assert!(rp.cleanup(), "colorspace regression test failed");
}
