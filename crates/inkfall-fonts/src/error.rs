//! Font loading errors.

use thiserror::Error;

/// Errors raised while loading an outline font.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read.
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),
    /// The bytes are not a font swash can parse.
    #[error("invalid or unsupported font data")]
    InvalidFontData,
}

/// Result alias for font operations.
pub type Result<T> = std::result::Result<T, FontError>;
