//! Watermark module for applying a text or image watermark to an image.
//!
//! # Features
//!
//! - **Text watermarks** drawn with a fixed bitmap font, word-wrapped and
//!   centred in a text box inset from the top-left corner
//! - **Image watermarks** centred over the image and blended at a fixed
//!   opacity (no clamping; oversized overlays are clipped)
//! - Source-over alpha compositing for both kinds
//!
//! # Example
//!
//! ```ignore
//! use watermark_manager::watermark::{apply_watermark, WatermarkSettings, WatermarkSpec};
//!
//! let spec = WatermarkSpec::Text { content: "All rights reserved".into() };
//! apply_watermark(&mut image, Path::new("img/test-with-watermark.jpg"), &spec, &WatermarkSettings::default())?;
//! ```

pub mod compositor;
pub mod error;
pub mod position;
pub mod processor;
pub mod text_renderer;

// Re-export main types for convenience
pub use compositor::{blend_layer, blend_pixels, WatermarkLayer};
pub use error::WatermarkError;
pub use position::{
    calculate_centered_position, centered_offset, is_visible, ImageDimensions,
    PlacementPosition, TextBox, WatermarkDimensions,
};
pub use processor::{
    apply_image_watermark, apply_text_watermark, apply_watermark, stamp_image, stamp_text,
    ImageWatermarkOptions, TextWatermarkOptions, WatermarkSettings, WatermarkSpec,
};
pub use text_renderer::{measure_text, parse_hex_color, render_text, wrap_lines, Color, TextRenderOptions};

/// Menu entries for the watermark type question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatermarkKind {
    Text,
    Image,
}

impl crate::prompt::Choice for WatermarkKind {
    const ALL: &'static [Self] = &[WatermarkKind::Text, WatermarkKind::Image];

    fn label(self) -> &'static str {
        match self {
            WatermarkKind::Text => "Text watermark",
            WatermarkKind::Image => "Image watermark",
        }
    }
}
