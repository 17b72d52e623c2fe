//! Swatch text-color regression test
//!
//! Exercises the overlay generation rules: white pair on dark swatches,
//! black pair on light ones, the fall-through when white satisfies the
//! title target but not the body target, and the contract that every
//! generated overlay actually meets its contrast ratio.

use palette_core::color;
use palette_core::contrast::contrast_ratio;
use palette_quant::Swatch;
use palette_test::RegParams;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(swatch: &Swatch) -> u64 {
    let mut hasher = DefaultHasher::new();
    swatch.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn swatch_reg() {
    let mut rp = RegParams::new("swatch");

    // --- Dark swatch: white pair ---
    let dark = Swatch::new(color::compose_rgb(24, 32, 72), 10);
    let title = dark.title_text_color().unwrap();
    let body = dark.body_text_color().unwrap();
    rp.assert_true(title.is_white() && body.is_white(), "white pair on dark");

    // --- Light swatch: black pair ---
    let light = Swatch::new(color::compose_rgb(224, 224, 192), 10);
    let title = light.title_text_color().unwrap();
    let body = light.body_text_color().unwrap();
    rp.assert_true(!title.is_white() && !body.is_white(), "black pair on light");

    // --- Mid gray: white reaches 3.0 but not 4.5, so the pair rule falls
    //     through to black for both roles; both fields are populated ---
    let gray = Swatch::new(color::compose_rgb(128, 128, 128), 10);
    rp.assert_true(
        contrast_ratio(color::WHITE, gray.rgb()) >= 3.0,
        "white alone satisfies the title target on mid gray",
    );
    rp.assert_true(
        contrast_ratio(color::WHITE, gray.rgb()) < 4.5,
        "white alone misses the body target on mid gray",
    );
    let title = gray.title_text_color();
    let body = gray.body_text_color();
    rp.assert_true(title.is_some() && body.is_some(), "both overlays resolve");
    rp.assert_true(
        !title.unwrap().is_white() && !body.unwrap().is_white(),
        "black pair on mid gray",
    );

    // --- Generated overlays always meet their targets ---
    for &(r, g, b) in &[
        (248u8, 0u8, 0u8),
        (128, 128, 128),
        (24, 32, 72),
        (224, 224, 192),
        (0, 200, 80),
        (104, 112, 136),
    ] {
        let swatch = Swatch::new(color::compose_rgb(r, g, b), 1);
        if let Some(title) = swatch.title_text_color() {
            let ratio = contrast_ratio(title.to_argb(), swatch.rgb());
            rp.assert_true(
                ratio >= 3.0,
                &format!("title contrast over ({}, {}, {}) = {}", r, g, b, ratio),
            );
        }
        if let Some(body) = swatch.body_text_color() {
            let ratio = contrast_ratio(body.to_argb(), swatch.rgb());
            rp.assert_true(
                ratio >= 4.5,
                &format!("body contrast over ({}, {}, {}) = {}", r, g, b, ratio),
            );
        }
    }

    // --- Equality and hashing use only color and population ---
    let a = Swatch::new(color::compose_rgb(10, 20, 30), 7);
    let b = Swatch::new(color::compose_rgb(10, 20, 30), 7);
    let _ = a.body_text_color();
    rp.assert_true(a == b, "equality ignores memoized overlays");
    rp.assert_true(hash_of(&a) == hash_of(&b), "hash ignores memoized overlays");

    let c = Swatch::new(color::compose_rgb(10, 20, 31), 7);
    rp.assert_true(a != c, "different colors are unequal");
    let d = Swatch::new(color::compose_rgb(10, 20, 30), 8);
    rp.assert_true(a != d, "different populations are unequal");

    assert!(rp.cleanup(), "swatch regression test failed");
}
