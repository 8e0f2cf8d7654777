//! Watermark compositor for blending watermarks onto images.
//!
//! Layers are blended with the Porter-Duff "source-over" operator. A layer's
//! opacity multiplies the alpha of each of its pixels, so a 50% layer made of
//! half-transparent pixels contributes at 25%.
//!
//! # Example
//!
//! ```ignore
//! use watermark_manager::watermark::compositor::{blend_layer, WatermarkLayer};
//! use watermark_manager::watermark::position::PlacementPosition;
//!
//! let layer = WatermarkLayer {
//!     image: logo,
//!     position: PlacementPosition::new(75, 25),
//!     opacity: 0.5,
//! };
//! blend_layer(&mut target, &layer);
//! ```

use super::position::{
    calculate_centered_position, ImageDimensions, PlacementPosition, WatermarkDimensions,
};
use image::{Rgba, RgbaImage};

/// A watermark layer to be composited onto an image.
#[derive(Clone)]
pub struct WatermarkLayer {
    /// The watermark image (RGBA).
    pub image: RgbaImage,
    /// Position of the layer's top-left corner on the target.
    pub position: PlacementPosition,
    /// Opacity to apply (0.0 to 1.0). Applied on top of image's alpha channel.
    pub opacity: f32,
}

impl std::fmt::Debug for WatermarkLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatermarkLayer")
            .field("dimensions", &(self.image.width(), self.image.height()))
            .field("position", &self.position)
            .field("opacity", &self.opacity)
            .finish()
    }
}

impl WatermarkLayer {
    /// Layer centred over an image of `target` size.
    pub fn centered(image: RgbaImage, target: &ImageDimensions, opacity: f32) -> Self {
        let position = calculate_centered_position(target, &WatermarkDimensions::of(&image));
        Self {
            image,
            position,
            opacity,
        }
    }
}

/// Blend a single watermark layer onto the target image.
///
/// Only the part of the layer that overlaps the target is touched.
pub fn blend_layer(target: &mut RgbaImage, layer: &WatermarkLayer) {
    let target_width = target.width() as i64;
    let target_height = target.height() as i64;

    let wm_width = layer.image.width() as i64;
    let wm_height = layer.image.height() as i64;

    let pos_x = layer.position.x as i64;
    let pos_y = layer.position.y as i64;

    // Visible region, clamped to target bounds
    let x_start = pos_x.max(0);
    let y_start = pos_y.max(0);
    let x_end = (pos_x + wm_width).min(target_width);
    let y_end = (pos_y + wm_height).min(target_height);

    for ty in y_start..y_end {
        for tx in x_start..x_end {
            let wx = (tx - pos_x) as u32;
            let wy = (ty - pos_y) as u32;

            let wm_pixel = layer.image.get_pixel(wx, wy);
            if wm_pixel[3] == 0 {
                continue;
            }
            let target_pixel = target.get_pixel(tx as u32, ty as u32);

            let blended = blend_pixels(*target_pixel, *wm_pixel, layer.opacity);
            target.put_pixel(tx as u32, ty as u32, blended);
        }
    }
}

/// Source-over of `foreground` (its alpha scaled by `opacity`) onto `background`.
///
/// `a_out = a_src + a_dst * (1 - a_src)` and each colour channel is the
/// alpha-weighted mix divided by `a_out`. A fully transparent result is
/// transparent black.
pub fn blend_pixels(background: Rgba<u8>, foreground: Rgba<u8>, opacity: f32) -> Rgba<u8> {
    let Rgba([sr, sg, sb, sa]) = foreground;
    let Rgba([dr, dg, db, da]) = background;

    let src_weight = f32::from(sa) / 255.0 * opacity.clamp(0.0, 1.0);
    let dst_weight = f32::from(da) / 255.0 * (1.0 - src_weight);
    let coverage = src_weight + dst_weight;

    if coverage < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let mix = |src: u8, dst: u8| {
        quantize((f32::from(src) * src_weight + f32::from(dst) * dst_weight) / coverage)
    };

    Rgba([mix(sr, dr), mix(sg, dg), mix(sb, db), quantize(coverage * 255.0)])
}

fn quantize(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
