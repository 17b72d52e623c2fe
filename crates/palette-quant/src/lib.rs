//! Palette extraction from raster pixel buffers
//!
//! Given a buffer of ARGB pixels, this crate produces a small set of
//! representative colors ("swatches"), each carrying its pixel population
//! and WCAG-compliant text overlay colors:
//!
//! - **Histogram** ([`histogram`]): 5-bit-per-channel pixel tally
//! - **Quantization** ([`quantize`]): modified median-cut over color boxes
//! - **Filtering** ([`filter`]): policy excluding near-black, near-white and
//!   skin-tone-band colors
//! - **Swatches** ([`swatch`]): output records with lazy title/body text
//!   colors
//! - **Targets** ([`target`], [`palette`]): vibrant/muted themed swatch
//!   selection and the [`Palette`] builder
//!
//! # Example
//!
//! ```
//! use palette_quant::extract_palette;
//!
//! let pixels = vec![0xFF2244EEu32; 100];
//! let swatches = extract_palette(&pixels, 4).unwrap();
//! assert_eq!(swatches.len(), 1);
//! assert_eq!(swatches[0].population(), 100);
//! ```

pub mod error;
pub mod filter;
pub mod histogram;
pub mod palette;
pub mod quantize;
pub mod swatch;
pub mod target;

// Re-export error types
pub use error::{PaletteError, PaletteResult};

// Re-export the quantization entry point
pub use quantize::extract_palette;

// Re-export palette types
pub use filter::{DefaultFilter, Filter};
pub use histogram::Histogram;
pub use palette::{Palette, PaletteBuilder};
pub use swatch::{Swatch, TextColor};
pub use target::{Target, TargetRange};
