//! Error types for opening an editing session

use thiserror::Error;

/// The supplied bitmap could not be turned into editing surfaces.
///
/// When this is returned the editor stays closed; no partially initialised
/// session is ever kept around.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("malformed data URL: {0}")]
    InvalidDataUrl(String),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("unsupported image encoding: {0}")]
    UnsupportedFormat(String),

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("image is too large to annotate ({width}x{height})")]
    TooLarge { width: u32, height: u32 },
}
