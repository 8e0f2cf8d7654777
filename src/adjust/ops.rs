//! Pointwise pixel transforms.
//!
//! Every operation rewrites the R, G and B channels of each pixel in place
//! and leaves alpha untouched. None of them can fail.

use image::RgbaImage;
use std::f64::consts::FRAC_PI_4;

/// Rec. 709 luma weights.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Brighten or darken by `factor` in [-1.0, 1.0].
///
/// Negative factors scale channels toward black (`v * (1 + f)`), positive
/// factors move them toward white (`v + (255 - v) * f`). A factor of zero is
/// the identity.
pub fn apply_brightness(image: &mut RgbaImage, factor: f32) {
    let factor = factor.clamp(-1.0, 1.0);
    map_rgb(image, |v| {
        let v = f32::from(v);
        let out = if factor < 0.0 {
            v * (1.0 + factor)
        } else {
            v + (255.0 - v) * factor
        };
        to_channel(out as f64)
    });
}

/// Stretch or flatten around mid-grey by `factor` in [-1.0, 1.0].
///
/// `v' = (v - 128) * tan((f + 1) * PI/4) + 128`, so zero is the identity,
/// -1 collapses everything to 128 and +1 pushes every channel to 0 or 255.
pub fn apply_contrast(image: &mut RgbaImage, factor: f32) {
    let slope = ((f64::from(factor.clamp(-1.0, 1.0)) + 1.0) * FRAC_PI_4).tan();
    let slope = if slope.is_finite() && slope >= 0.0 {
        slope
    } else {
        f64::MAX
    };
    map_rgb(image, |v| {
        let centered = f64::from(v) - 128.0;
        if centered == 0.0 {
            return v;
        }
        to_channel(centered * slope + 128.0)
    });
}

/// Replace R, G and B with the pixel's luma.
pub fn apply_greyscale(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        let luma = LUMA_R * f32::from(r) + LUMA_G * f32::from(g) + LUMA_B * f32::from(b);
        let grey = to_channel(luma as f64);
        pixel.0[0] = grey;
        pixel.0[1] = grey;
        pixel.0[2] = grey;
    }
}

/// `v' = 255 - v` on every colour channel.
pub fn apply_invert(image: &mut RgbaImage) {
    map_rgb(image, |v| 255 - v);
}

fn map_rgb(image: &mut RgbaImage, f: impl Fn(u8) -> u8) {
    for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut().take(3) {
            *channel = f(*channel);
        }
    }
}

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
