//! Error types for palette-quant

use thiserror::Error;

/// Errors that can occur during palette extraction
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PaletteError {
    /// Requested palette size is below the minimum
    #[error("max_colors must be at least 1, got {0}")]
    InvalidMaxColors(u32),
}

/// Result type for palette operations
pub type PaletteResult<T> = Result<T, PaletteError>;
