//! Output encoders, one per writable format.
//!
//! The format is chosen from the output file's extension, so a watermarked
//! `photo.jpg` is written back as JPEG and `logo.png` as PNG.

use crate::watermark::WatermarkError;
use image::{ColorType, ImageEncoder, RgbaImage};
use std::path::Path;

/// Formats the tool can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
    Gif,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Jpeg,
        OutputFormat::Png,
        OutputFormat::WebP,
        OutputFormat::Gif,
    ];

    /// Format implied by the extension of `path`, case-insensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "png" => Some(OutputFormat::Png),
            "webp" => Some(OutputFormat::WebP),
            "gif" => Some(OutputFormat::Gif),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
            OutputFormat::Gif => "gif",
        }
    }

    /// Whether the alpha channel survives encoding. GIF keeps it as 1-bit
    /// transparency.
    pub fn keeps_alpha(self) -> bool {
        !matches!(self, OutputFormat::Jpeg)
    }

    pub fn encoder(self) -> Box<dyn FormatEncoder> {
        match self {
            OutputFormat::Jpeg => Box::new(JpegOutput),
            OutputFormat::Png => Box::new(PngOutput),
            OutputFormat::WebP => Box::new(WebPOutput),
            OutputFormat::Gif => Box::new(GifOutput),
        }
    }
}

/// Encoder quality, 1 to 100. Watermarked images are written at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderQuality {
    pub quality: u8,
}

impl Default for EncoderQuality {
    fn default() -> Self {
        Self::maximum()
    }
}

impl EncoderQuality {
    /// Out-of-range values are clamped into 1..=100.
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn maximum() -> Self {
        Self { quality: 100 }
    }
}

/// Turns a finished image into the bytes of one file format.
pub trait FormatEncoder: Send + Sync {
    fn format(&self) -> OutputFormat;

    fn encode(&self, image: &RgbaImage, quality: EncoderQuality)
        -> Result<Vec<u8>, WatermarkError>;
}

/// Baseline JPEG. Alpha is dropped, not flattened.
pub struct JpegOutput;

impl FormatEncoder for JpegOutput {
    fn format(&self) -> OutputFormat {
        OutputFormat::Jpeg
    }

    fn encode(
        &self,
        image: &RgbaImage,
        quality: EncoderQuality,
    ) -> Result<Vec<u8>, WatermarkError> {
        let rgb: Vec<u8> = image
            .as_raw()
            .chunks_exact(4)
            .flat_map(|px| px[..3].iter().copied())
            .collect();

        let mut bytes = Vec::new();
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut bytes, quality.quality)
            .write_image(&rgb, image.width(), image.height(), ColorType::Rgb8)
            .map_err(|e| WatermarkError::encode(self.format().name(), e))?;
        Ok(bytes)
    }
}

/// Lossless PNG; quality has no effect.
pub struct PngOutput;

impl FormatEncoder for PngOutput {
    fn format(&self) -> OutputFormat {
        OutputFormat::Png
    }

    fn encode(&self, image: &RgbaImage, _: EncoderQuality) -> Result<Vec<u8>, WatermarkError> {
        let mut bytes = Vec::new();
        write_rgba(
            image::codecs::png::PngEncoder::new(&mut bytes),
            image,
            self.format(),
        )?;
        Ok(bytes)
    }
}

/// Lossless WebP; quality has no effect.
pub struct WebPOutput;

impl FormatEncoder for WebPOutput {
    fn format(&self) -> OutputFormat {
        OutputFormat::WebP
    }

    fn encode(&self, image: &RgbaImage, _: EncoderQuality) -> Result<Vec<u8>, WatermarkError> {
        let mut bytes = Vec::new();
        write_rgba(
            image::codecs::webp::WebPEncoder::new_lossless(&mut bytes),
            image,
            self.format(),
        )?;
        Ok(bytes)
    }
}

/// Single-frame GIF, palette-quantized by the encoder.
pub struct GifOutput;

impl FormatEncoder for GifOutput {
    fn format(&self) -> OutputFormat {
        OutputFormat::Gif
    }

    fn encode(&self, image: &RgbaImage, _: EncoderQuality) -> Result<Vec<u8>, WatermarkError> {
        let mut bytes = Vec::new();
        {
            // The trailer is written when the encoder is dropped.
            let mut encoder = image::codecs::gif::GifEncoder::new(&mut bytes);
            encoder
                .encode(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
                .map_err(|e| WatermarkError::encode(self.format().name(), e))?;
        }
        Ok(bytes)
    }
}

fn write_rgba<E: ImageEncoder>(
    encoder: E,
    image: &RgbaImage,
    format: OutputFormat,
) -> Result<(), WatermarkError> {
    encoder
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .map_err(|e| WatermarkError::encode(format.name(), e))
}
