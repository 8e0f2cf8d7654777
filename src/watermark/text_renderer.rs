//! Text watermark rendering.
//!
//! Text is drawn with the fixed 8x8 bitmap glyphs from `font8x8`, scaled up
//! by an integer factor with nearest-neighbour sampling, onto a transparent
//! RGBA canvas that the compositor then blends onto the target image.
//!
//! # Features
//!
//! - Hex color parsing (#RGB and #RRGGBB formats)
//! - Greedy word wrapping to a maximum width
//! - Each wrapped line centred within the rendered block
//!
//! # Example
//!
//! ```ignore
//! use watermark_manager::watermark::text_renderer::{render_text, Color, TextRenderOptions};
//!
//! let options = TextRenderOptions {
//!     text: "All rights reserved".to_string(),
//!     scale: 4,
//!     color: Color::black(),
//!     max_width: 640,
//! };
//!
//! let block = render_text(&options).unwrap();
//! ```

use super::WatermarkError;
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgba, RgbaImage};

/// Side of a glyph cell in font pixels.
pub const GLYPH_SIZE: u32 = 8;

/// Largest accepted glyph upscale (512px glyphs).
pub const MAX_SCALE: u32 = 64;

/// Upper bound on the pixels of a rendered text block.
const MAX_BLOCK_PIXELS: u64 = 64 * 1024 * 1024;

/// Parsed RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Options for text rendering.
#[derive(Debug, Clone)]
pub struct TextRenderOptions {
    /// The text to render.
    pub text: String,
    /// Integer upscale of the 8x8 glyphs (4 gives 32px glyphs).
    pub scale: u32,
    /// Glyph color; glyphs are fully opaque.
    pub color: Color,
    /// Lines are wrapped to fit this width in pixels.
    pub max_width: u32,
}

impl Default for TextRenderOptions {
    fn default() -> Self {
        Self {
            text: String::new(),
            scale: 4,
            color: Color::black(),
            max_width: u32::MAX,
        }
    }
}

/// Parse a hex color string into RGB components.
///
/// Supports both #RGB and #RRGGBB formats.
pub fn parse_hex_color(hex: &str) -> Result<Color, WatermarkError> {
    let hex = hex
        .strip_prefix('#')
        .ok_or_else(|| WatermarkError::RenderError("Color must start with '#'".to_string()))?;

    let digit = |s: &str| {
        u8::from_str_radix(s, 16)
            .map_err(|_| WatermarkError::RenderError(format!("Invalid hex digit in '{}'", s)))
    };

    if !hex.is_ascii() {
        return Err(WatermarkError::RenderError(
            "Color must contain hex digits only".to_string(),
        ));
    }

    match hex.len() {
        // #RGB: each digit is doubled, 0xF -> 0xFF
        3 => Ok(Color::new(
            digit(&hex[0..1])? * 17,
            digit(&hex[1..2])? * 17,
            digit(&hex[2..3])? * 17,
        )),
        6 => Ok(Color::new(
            digit(&hex[0..2])?,
            digit(&hex[2..4])?,
            digit(&hex[4..6])?,
        )),
        _ => Err(WatermarkError::RenderError(format!(
            "Color must be #RGB or #RRGGBB format, got {} characters",
            hex.len()
        ))),
    }
}

/// Horizontal advance of one glyph at `scale`.
pub fn glyph_advance(scale: u32) -> u32 {
    GLYPH_SIZE.saturating_mul(scale.max(1))
}

/// Calculate the dimensions of a single rendered line.
///
/// Returns (width, height) in pixels.
pub fn measure_text(text: &str, scale: u32) -> (u32, u32) {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    (chars.saturating_mul(glyph_advance(scale)), glyph_advance(scale))
}

/// Split `text` into lines no wider than `max_width` pixels.
///
/// Words are kept whole; a word wider than `max_width` gets a line of its
/// own and overflows. Explicit newlines always break.
pub fn wrap_lines(text: &str, scale: u32, max_width: u32) -> Vec<String> {
    let max_chars = (max_width / glyph_advance(scale)).max(1) as usize;
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Render text to an RGBA image.
///
/// The canvas is as wide as the longest wrapped line and as tall as all
/// lines stacked; every line is centred horizontally in it. Background is
/// transparent.
pub fn render_text(options: &TextRenderOptions) -> Result<RgbaImage, WatermarkError> {
    let lines = wrap_lines(&options.text, options.scale, options.max_width);
    if lines.is_empty() {
        return Err(WatermarkError::RenderError(
            "Cannot render empty text".to_string(),
        ));
    }

    if options.scale > MAX_SCALE {
        return Err(WatermarkError::RenderError(format!(
            "Text scale {} exceeds the maximum of {}",
            options.scale, MAX_SCALE
        )));
    }

    let scale = options.scale.max(1);
    let line_height = glyph_advance(scale);
    let block_width = lines
        .iter()
        .map(|line| measure_text(line, scale).0)
        .max()
        .unwrap_or(0)
        .max(1);
    let block_height = u32::try_from(lines.len())
        .unwrap_or(u32::MAX)
        .saturating_mul(line_height);

    if u64::from(block_width) * u64::from(block_height) > MAX_BLOCK_PIXELS {
        return Err(WatermarkError::RenderError(format!(
            "Text block of {}x{} pixels is too large",
            block_width, block_height
        )));
    }

    let mut canvas = RgbaImage::new(block_width, block_height);
    let ink = Rgba([options.color.r, options.color.g, options.color.b, 255]);

    for (row, line) in lines.iter().enumerate() {
        let (line_width, _) = measure_text(line, scale);
        let mut cursor_x = (block_width - line_width) / 2;
        let top = row as u32 * line_height;

        for c in line.chars() {
            draw_glyph(&mut canvas, glyph_for(c), cursor_x, top, scale, ink);
            cursor_x += glyph_advance(scale);
        }
    }

    Ok(canvas)
}

/// Bitmap for `c`, falling back to '?' for characters the font lacks.
fn glyph_for(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn draw_glyph(canvas: &mut RgbaImage, glyph: [u8; 8], left: u32, top: u32, scale: u32, ink: Rgba<u8>) {
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..GLYPH_SIZE {
            // Bit 0 is the leftmost pixel.
            if (bits >> col) & 1 == 0 {
                continue;
            }
            let base_x = left + col * scale;
            let base_y = top + row as u32 * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    let (x, y) = (base_x + dx, base_y + dy);
                    if x < canvas.width() && y < canvas.height() {
                        canvas.put_pixel(x, y, ink);
                    }
                }
            }
        }
    }
}
