//! Palette-rs - image palette extraction for Rust
//!
//! Extracts a small set of representative colors ("swatches") from a raster
//! image's pixel buffer, for image-driven theming:
//!
//! - Modified median-cut color quantization over a 5-bit-per-channel
//!   histogram
//! - A filter policy that drops near-black, near-white and skin-tone-band
//!   colors
//! - WCAG 2.0 contrast math, including minimum-alpha text overlays per
//!   swatch
//! - Themed swatch selection (vibrant / muted and their dark / light
//!   variants)
//!
//! Image decoding is out of scope: the caller supplies a buffer of 32-bit
//! ARGB words.
//!
//! # Example
//!
//! ```
//! use palette_rs::extract_palette;
//!
//! let pixels = vec![0xFF2244EEu32; 100];
//! let swatches = extract_palette(&pixels, 16).unwrap();
//! assert_eq!(swatches.len(), 1);
//! assert!(swatches[0].title_text_color().is_some());
//! ```

// Re-export the color primitives
pub use palette_core::*;

// Re-export the extraction engine
pub use palette_quant::*;
