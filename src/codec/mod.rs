//! Reading and writing image files.
//!
//! Decoding detects the format from the file contents; encoding picks the
//! encoder from the output path's extension. File handles live only inside
//! these functions, so they are closed on every return path.

pub mod encoder;

pub use encoder::{EncoderQuality, FormatEncoder, OutputFormat};

use crate::watermark::WatermarkError;
use image::io::Reader as ImageReader;
use image::RgbaImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Decode the image at `path` into an RGBA buffer.
pub fn load_image(path: &Path) -> Result<RgbaImage, WatermarkError> {
    let reader = ImageReader::open(path)
        .map_err(|e| WatermarkError::decode(path, e))?
        .with_guessed_format()
        .map_err(|e| WatermarkError::decode(path, e))?;

    let decoded = reader
        .decode()
        .map_err(|e| WatermarkError::decode(path, e))?;

    tracing::debug!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        "image decoded"
    );

    Ok(decoded.to_rgba8())
}

/// Encode `image` in the format named by `path`'s extension and write it.
pub fn save_image(
    image: &RgbaImage,
    path: &Path,
    quality: EncoderQuality,
) -> Result<PathBuf, WatermarkError> {
    let format = OutputFormat::from_path(path)
        .ok_or_else(|| WatermarkError::UnsupportedFormat(path.to_path_buf()))?;

    if !format.keeps_alpha() && image.pixels().any(|p| p[3] < u8::MAX) {
        tracing::debug!(
            path = %path.display(),
            format = format.name(),
            "format has no alpha channel, transparency is dropped"
        );
    }

    let bytes = format.encoder().encode(image, quality)?;

    let write_err = |source| WatermarkError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    tracing::debug!(
        path = %path.display(),
        format = format.name(),
        bytes = bytes.len(),
        "image written"
    );

    Ok(path.to_path_buf())
}
