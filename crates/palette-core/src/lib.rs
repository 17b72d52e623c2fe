//! Palette-core - color primitives for palette extraction
//!
//! This crate provides the low-level color machinery shared by the palette
//! engine:
//!
//! - **Packed ARGB words** ([`color`]): compose, extract and composite 32-bit
//!   ARGB colors
//! - **Color space conversion** ([`colorspace`]): RGB ↔ HSL
//! - **Luminance & contrast** ([`contrast`]): WCAG 2.0 relative luminance,
//!   contrast ratios, and minimum-alpha search for readable text overlays
//!
//! # Example
//!
//! ```
//! use palette_core::{color, contrast_ratio};
//!
//! // Black on white is the maximum possible contrast.
//! let ratio = contrast_ratio(color::BLACK, color::WHITE);
//! assert!((ratio - 21.0).abs() < 0.01);
//! ```

pub mod color;
pub mod colorspace;
pub mod contrast;

pub use color::Color32;
pub use colorspace::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use contrast::{contrast_ratio, min_alpha_for_contrast, relative_luminance};
