//! Image adjustments applied before watermarking.
//!
//! The user picks adjustments one at a time from a menu; each pick is turned
//! into an [`Adjustment`] and applied to the working image immediately. The
//! menu ends when "Done adjusting" is chosen.
//!
//! ```ignore
//! use watermark_manager::adjust::{Adjustment, AdjustmentEngine, ContrastMode};
//!
//! let engine = AdjustmentEngine::new(ContrastMode::Curve);
//! engine.apply(&mut image, Adjustment::Brightness(0.3));
//! engine.apply(&mut image, Adjustment::Invert);
//! ```

pub mod ops;

pub use ops::{apply_brightness, apply_contrast, apply_greyscale, apply_invert};

use crate::prompt::{choose, Choice, PromptError, Prompter};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Bounds of the integer level the user types for brightness and contrast.
pub const LEVEL_MIN: i32 = -10;
pub const LEVEL_MAX: i32 = 10;

/// A single pointwise transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Delta in [-1.0, 1.0]
    Brightness(f32),
    /// Delta in [-1.0, 1.0]
    Contrast(f32),
    Greyscale,
    Invert,
}

impl Adjustment {
    /// Convert a user level in [-10, 10] to a delta in [-1.0, 1.0].
    pub fn level_to_delta(level: i32) -> f32 {
        level as f32 / 10.0
    }
}

/// Entries of the adjustment menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentChoice {
    Brightness,
    Contrast,
    Greyscale,
    Invert,
    Done,
}

impl Choice for AdjustmentChoice {
    const ALL: &'static [Self] = &[
        AdjustmentChoice::Brightness,
        AdjustmentChoice::Contrast,
        AdjustmentChoice::Greyscale,
        AdjustmentChoice::Invert,
        AdjustmentChoice::Done,
    ];

    fn label(self) -> &'static str {
        match self {
            AdjustmentChoice::Brightness => "Adjust brightness",
            AdjustmentChoice::Contrast => "Adjust contrast",
            AdjustmentChoice::Greyscale => "Black & white",
            AdjustmentChoice::Invert => "Invert image",
            AdjustmentChoice::Done => "Done adjusting",
        }
    }
}

/// How "Adjust contrast" is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    /// Tangent curve around mid-grey
    #[default]
    Curve,
    /// Legacy behaviour: contrast requests are applied as brightness
    Brightness,
}

/// Applies adjustments to an image in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjustmentEngine {
    contrast_mode: ContrastMode,
}

impl AdjustmentEngine {
    pub fn new(contrast_mode: ContrastMode) -> Self {
        Self { contrast_mode }
    }

    pub fn apply(&self, image: &mut RgbaImage, adjustment: Adjustment) {
        match adjustment {
            Adjustment::Brightness(delta) => apply_brightness(image, delta),
            Adjustment::Contrast(delta) => match self.contrast_mode {
                ContrastMode::Curve => apply_contrast(image, delta),
                ContrastMode::Brightness => apply_brightness(image, delta),
            },
            Adjustment::Greyscale => apply_greyscale(image),
            Adjustment::Invert => apply_invert(image),
        }
    }

    /// Run the adjustment menu until the user picks "Done adjusting".
    ///
    /// Returns the adjustments in the order they were applied.
    pub fn run_menu(
        &self,
        image: &mut RgbaImage,
        prompter: &mut dyn Prompter,
    ) -> Result<Vec<Adjustment>, PromptError> {
        let mut applied = Vec::new();

        loop {
            let choice: AdjustmentChoice =
                choose(prompter, "What adjustment would you like to make?")?;

            let adjustment = match choice {
                AdjustmentChoice::Brightness => {
                    Adjustment::Brightness(ask_delta(prompter, "brightness")?)
                }
                AdjustmentChoice::Contrast => Adjustment::Contrast(ask_delta(prompter, "contrast")?),
                AdjustmentChoice::Greyscale => Adjustment::Greyscale,
                AdjustmentChoice::Invert => Adjustment::Invert,
                AdjustmentChoice::Done => break,
            };

            self.apply(image, adjustment);
            tracing::debug!(?adjustment, "adjustment applied");
            applied.push(adjustment);
        }

        Ok(applied)
    }
}

/// Ask for a level in [-10, 10] until one is given, then scale it to a delta.
fn ask_delta(prompter: &mut dyn Prompter, what: &str) -> Result<f32, PromptError> {
    let message = format!(
        "Enter {} value between {} and {}",
        what, LEVEL_MIN, LEVEL_MAX
    );
    loop {
        let level = prompter.number(&message, 0)?;
        if (LEVEL_MIN..=LEVEL_MAX).contains(&level) {
            return Ok(Adjustment::level_to_delta(level));
        }
        prompter.warn(&format!(
            "{} is out of range, use a value between {} and {}.",
            level, LEVEL_MIN, LEVEL_MAX
        ));
    }
}
