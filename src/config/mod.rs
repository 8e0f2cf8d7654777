// Configuration module

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::adjust::ContrastMode;
use crate::codec::EncoderQuality;
use crate::logging::LogFormat;
use crate::naming::DEFAULT_SUFFIX;
use crate::watermark::text_renderer::MAX_SCALE;
use crate::watermark::{
    parse_hex_color, ImageWatermarkOptions, PlacementPosition, TextWatermarkOptions,
    WatermarkSettings,
};

/// Bound on each text origin coordinate, in pixels.
const MAX_TEXT_ORIGIN: i32 = 100_000;

/// Runtime configuration. Every field has a default, so an empty file (or no
/// file at all) is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory input images are read from and outputs are written to
    #[serde(default = "default_img_dir")]
    pub img_dir: PathBuf,

    /// Defaults offered by the prompts
    #[serde(default)]
    pub defaults: PromptDefaults,

    /// Inserted between base name and extension of the output file
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Encoder quality, 1-100
    #[serde(default = "default_quality")]
    pub quality: u8,

    #[serde(default)]
    pub text: TextConfig,

    #[serde(default)]
    pub image: ImageConfig,

    #[serde(default)]
    pub contrast_mode: ContrastMode,

    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptDefaults {
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_watermark")]
    pub watermark: String,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            input: default_input(),
            text: default_text(),
            watermark: default_watermark(),
        }
    }
}

/// Text watermark appearance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextConfig {
    /// Upscale factor of the 8x8 bitmap font (4 gives 32px glyphs)
    #[serde(default = "default_text_scale")]
    pub scale: u32,
    /// Top-left corner of the text box, `[x, y]`
    #[serde(default = "default_text_origin")]
    pub origin: [i32; 2],
    /// `#RGB` or `#RRGGBB`
    #[serde(default = "default_text_color")]
    pub color: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            scale: default_text_scale(),
            origin: default_text_origin(),
            color: default_text_color(),
        }
    }
}

/// Image watermark blending
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageConfig {
    /// Opacity multiplied with the overlay's own alpha (0.0 to 1.0)
    #[serde(default = "default_image_opacity")]
    pub opacity: f32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            opacity: default_image_opacity(),
        }
    }
}

fn default_img_dir() -> PathBuf {
    PathBuf::from("./img")
}

fn default_output_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

fn default_quality() -> u8 {
    100
}

fn default_input() -> String {
    "test.jpg".to_string()
}

fn default_text() -> String {
    "All rights reserved".to_string()
}

fn default_watermark() -> String {
    "logo.png".to_string()
}

fn default_text_scale() -> u32 {
    4
}

fn default_text_origin() -> [i32; 2] {
    [10, 10]
}

fn default_text_color() -> String {
    "#000000".to_string()
}

fn default_image_opacity() -> f32 {
    0.5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            img_dir: default_img_dir(),
            defaults: PromptDefaults::default(),
            output_suffix: default_output_suffix(),
            quality: default_quality(),
            text: TextConfig::default(),
            image: ImageConfig::default(),
            contrast_mode: ContrastMode::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        // An empty document deserializes to unit, not to an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_yaml(&yaml)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.img_dir.as_os_str().is_empty() {
            return Err("img_dir cannot be empty".to_string());
        }

        if self.output_suffix.is_empty() {
            return Err("output_suffix cannot be empty".to_string());
        }

        if !(1..=100).contains(&self.quality) {
            return Err(format!(
                "quality must be between 1 and 100, got {}",
                self.quality
            ));
        }

        if !(1..=MAX_SCALE).contains(&self.text.scale) {
            return Err(format!(
                "text.scale must be between 1 and {}, got {}",
                MAX_SCALE, self.text.scale
            ));
        }

        if self
            .text
            .origin
            .iter()
            .any(|v| !(-MAX_TEXT_ORIGIN..=MAX_TEXT_ORIGIN).contains(v))
        {
            return Err(format!(
                "text.origin coordinates must be between -{0} and {0}, got {1:?}",
                MAX_TEXT_ORIGIN, self.text.origin
            ));
        }

        parse_hex_color(&self.text.color).map_err(|e| format!("text.color: {}", e))?;

        if !(0.0..=1.0).contains(&self.image.opacity) {
            return Err(format!(
                "image.opacity must be between 0.0 and 1.0, got {}",
                self.image.opacity
            ));
        }

        Ok(())
    }

    /// Compositor settings derived from this configuration.
    pub fn watermark_settings(&self) -> Result<WatermarkSettings, String> {
        let color = parse_hex_color(&self.text.color).map_err(|e| format!("text.color: {}", e))?;

        Ok(WatermarkSettings {
            text: TextWatermarkOptions {
                origin: PlacementPosition::new(self.text.origin[0], self.text.origin[1]),
                scale: self.text.scale,
                color,
            },
            image: ImageWatermarkOptions {
                opacity: self.image.opacity,
            },
            quality: EncoderQuality::with_quality(self.quality),
        })
    }

    /// Path of `filename` inside the image directory.
    pub fn image_path(&self, filename: &str) -> PathBuf {
        self.img_dir.join(filename)
    }
}
