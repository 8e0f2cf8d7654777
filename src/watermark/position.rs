//! Position calculation for watermark placement.
//!
//! Image overlays are centred over the base image. Text is laid out inside a
//! text box whose origin is inset from the top-left corner and whose size is
//! the full image size; each line is centred within that box.
//!
//! Placement is computed in floating point and rounded to the nearest pixel
//! (halves round up). No clamping is done: coordinates may be negative or
//! past the far edge when the watermark is larger than the image, and the
//! compositor clips whatever falls outside.
//!
//! # Example
//!
//! ```ignore
//! use watermark_manager::watermark::position::{calculate_centered_position, ImageDimensions, WatermarkDimensions};
//!
//! let image = ImageDimensions { width: 200, height: 100 };
//! let watermark = WatermarkDimensions { width: 50, height: 50 };
//!
//! let pos = calculate_centered_position(&image, &watermark);
//! assert_eq!((pos.x, pos.y), (75, 25));
//! ```

/// Dimensions of the target image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn of(image: &image::RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

/// Dimensions of the watermark to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatermarkDimensions {
    pub width: u32,
    pub height: u32,
}

impl WatermarkDimensions {
    pub fn of(image: &image::RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

/// A single position where a watermark should be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPosition {
    pub x: i32,
    pub y: i32,
}

impl PlacementPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Box that text is aligned within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBox {
    pub origin: PlacementPosition,
    pub width: u32,
    pub height: u32,
}

impl TextBox {
    /// Box anchored at `origin` with the same size as the image.
    pub fn covering(image: &ImageDimensions, origin: PlacementPosition) -> Self {
        Self {
            origin,
            width: image.width,
            height: image.height,
        }
    }

    /// Top-left corner for a block of `block` size centred in this box.
    pub fn center(&self, block: &WatermarkDimensions) -> PlacementPosition {
        PlacementPosition::new(
            self.origin
                .x
                .saturating_add(centered_offset(self.width, block.width)),
            self.origin
                .y
                .saturating_add(centered_offset(self.height, block.height)),
        )
    }
}

/// Position that centres the watermark over the image:
/// `x = W/2 - w/2`, `y = H/2 - h/2`.
pub fn calculate_centered_position(
    image: &ImageDimensions,
    watermark: &WatermarkDimensions,
) -> PlacementPosition {
    PlacementPosition::new(
        centered_offset(image.width, watermark.width),
        centered_offset(image.height, watermark.height),
    )
}

/// `outer/2 - inner/2`, rounded half up. Negative when `inner > outer`.
pub fn centered_offset(outer: u32, inner: u32) -> i32 {
    round_half_up(f64::from(outer) / 2.0 - f64::from(inner) / 2.0)
}

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Check if a position is at least partially visible within the image.
pub fn is_visible(
    pos: &PlacementPosition,
    image: &ImageDimensions,
    watermark: &WatermarkDimensions,
) -> bool {
    let wm_right = pos.x + watermark.width as i32;
    let wm_bottom = pos.y + watermark.height as i32;

    pos.x < image.width as i32 && pos.y < image.height as i32 && wm_right > 0 && wm_bottom > 0
}
