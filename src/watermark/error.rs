//! Watermark error types.
//!
//! Defines errors that can occur while compositing a watermark and
//! writing the watermarked image to disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during watermark processing.
#[derive(Error, Debug)]
pub enum WatermarkError {
    /// Failed to decode the base image or the overlay image
    #[error("Failed to decode image {path}: {message}")]
    DecodeError { path: PathBuf, message: String },

    /// Failed to render text watermark
    #[error("Failed to render text watermark: {0}")]
    RenderError(String),

    /// Output extension does not map to a known encoder
    #[error("Unsupported output format for {0}")]
    UnsupportedFormat(PathBuf),

    /// Failed to encode the watermarked image
    #[error("Failed to encode to {format}: {message}")]
    EncodeError { format: String, message: String },

    /// Failed to write the output file
    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WatermarkError {
    pub fn decode(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::DecodeError {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn encode(format: impl Into<String>, message: impl ToString) -> Self {
        Self::EncodeError {
            format: format.into(),
            message: message.to_string(),
        }
    }
}
