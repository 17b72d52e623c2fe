//! palette-test - Regression test framework for palette-rs
//!
//! This crate provides a small regression test harness supporting three
//! modes:
//!
//! - **Generate**: record results as the new baseline (baselines are inline
//!   constants, so this behaves like Compare)
//! - **Compare**: compare results against inline baselines (default)
//! - **Display**: log mismatches but never fail the suite
//!
//! plus deterministic pixel-buffer fixtures used across the workspace's
//! regression suites.
//!
//! # Usage
//!
//! ```
//! use palette_test::{fixtures, RegParams};
//!
//! let mut rp = RegParams::new("example");
//! let pixels = fixtures::solid(0xFF336699, 10);
//! rp.compare_values(10.0, pixels.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

pub mod fixtures;
mod params;

pub use params::{RegParams, RegTestMode};
