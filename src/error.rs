//! Error types for board-side background handling.
//!
//! The interaction engine itself has no fatal errors; the only fallible
//! boundary is turning delivered background bytes into a drawable image.

use thiserror::Error;

/// Errors that can occur while resolving a background image.
#[derive(Error, Debug)]
pub enum BackgroundError {
    /// Decoding the supplied bytes failed
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// The external fetch reported failure
    #[error("background fetch failed: {0}")]
    Fetch(String),
}
