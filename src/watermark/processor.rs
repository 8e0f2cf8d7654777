//! Watermark processor: stamp the watermark, then encode and write.
//!
//! Exactly one watermark is applied per run. The `stamp_*` functions only
//! touch pixels; the `apply_*` functions additionally write the result at
//! maximum quality, which makes them the terminal step of the pipeline.

use super::compositor::{blend_layer, WatermarkLayer};
use super::position::{ImageDimensions, PlacementPosition, TextBox, WatermarkDimensions};
use super::text_renderer::{render_text, Color, TextRenderOptions};
use super::WatermarkError;
use crate::codec::{self, EncoderQuality};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// The watermark chosen for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatermarkSpec {
    Text { content: String },
    Image { path: PathBuf },
}

/// Text watermark layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextWatermarkOptions {
    /// Top-left corner of the text box; the box is as large as the image.
    pub origin: PlacementPosition,
    /// Upscale factor of the 8x8 bitmap font.
    pub scale: u32,
    pub color: Color,
}

impl Default for TextWatermarkOptions {
    fn default() -> Self {
        Self {
            origin: PlacementPosition::new(10, 10),
            scale: 4,
            color: Color::black(),
        }
    }
}

/// Image watermark blending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageWatermarkOptions {
    /// Multiplied with the overlay's own alpha.
    pub opacity: f32,
}

impl Default for ImageWatermarkOptions {
    fn default() -> Self {
        Self { opacity: 0.5 }
    }
}

/// Everything the compositor needs besides the image and the spec.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatermarkSettings {
    pub text: TextWatermarkOptions,
    pub image: ImageWatermarkOptions,
    pub quality: EncoderQuality,
}

/// Draw `text` onto `image`, centred in the text box.
///
/// Returns where the rendered text block was placed.
pub fn stamp_text(
    image: &mut RgbaImage,
    text: &str,
    options: &TextWatermarkOptions,
) -> Result<PlacementPosition, WatermarkError> {
    let dims = ImageDimensions::of(image);
    let text_box = TextBox::covering(&dims, options.origin);

    let block = render_text(&TextRenderOptions {
        text: text.to_string(),
        scale: options.scale,
        color: options.color,
        max_width: text_box.width,
    })?;

    let position = text_box.center(&WatermarkDimensions::of(&block));
    let layer = WatermarkLayer {
        image: block,
        position,
        opacity: 1.0,
    };
    tracing::debug!(?layer, "stamping text watermark");
    blend_layer(image, &layer);

    Ok(position)
}

/// Blend `overlay` centred over `image`.
///
/// Returns where the overlay's top-left corner landed; it may be negative.
pub fn stamp_image(
    image: &mut RgbaImage,
    overlay: RgbaImage,
    options: &ImageWatermarkOptions,
) -> PlacementPosition {
    let layer = WatermarkLayer::centered(overlay, &ImageDimensions::of(image), options.opacity);

    if !super::position::is_visible(
        &layer.position,
        &ImageDimensions::of(image),
        &WatermarkDimensions::of(&layer.image),
    ) {
        tracing::warn!(?layer, "image watermark falls entirely outside the image");
    }

    tracing::debug!(?layer, "stamping image watermark");
    blend_layer(image, &layer);
    layer.position
}

/// Stamp a text watermark and write the result to `output_path`.
pub fn apply_text_watermark(
    image: &mut RgbaImage,
    output_path: &Path,
    text: &str,
    settings: &WatermarkSettings,
) -> Result<PathBuf, WatermarkError> {
    stamp_text(image, text, &settings.text)?;
    codec::save_image(image, output_path, settings.quality)
}

/// Decode the overlay at `watermark_path`, stamp it and write the result.
pub fn apply_image_watermark(
    image: &mut RgbaImage,
    output_path: &Path,
    watermark_path: &Path,
    settings: &WatermarkSettings,
) -> Result<PathBuf, WatermarkError> {
    let overlay = codec::load_image(watermark_path)?;
    stamp_image(image, overlay, &settings.image);
    codec::save_image(image, output_path, settings.quality)
}

/// Apply whichever watermark `spec` names.
pub fn apply_watermark(
    image: &mut RgbaImage,
    output_path: &Path,
    spec: &WatermarkSpec,
    settings: &WatermarkSettings,
) -> Result<PathBuf, WatermarkError> {
    match spec {
        WatermarkSpec::Text { content } => {
            apply_text_watermark(image, output_path, content, settings)
        }
        WatermarkSpec::Image { path } => apply_image_watermark(image, output_path, path, settings),
    }
}
