//! Interactive run: load, adjust, watermark, save.
//!
//! [`run`] walks the user through one session. Every expected way a session
//! can end (declining, a missing file, a failed watermark) is a
//! [`RunOutcome`]; only prompt failures and an undecodable input image are
//! returned as errors.

use crate::adjust::AdjustmentEngine;
use crate::codec;
use crate::config::Config;
use crate::error::AppError;
use crate::naming::output_filename_with_suffix;
use crate::prompt::{choose, Prompter};
use crate::watermark::{apply_watermark, WatermarkKind, WatermarkSpec};
use std::path::PathBuf;

pub const MISSING_INPUT: &str = "The specified input file does not exist. Please try again.";
pub const MISSING_WATERMARK: &str =
    "The specified watermark image does not exist. Please try again.";
pub const SUCCESS: &str = "Watermark added successfully!";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The user was not ready; nothing was read or written.
    Declined,
    /// The input image does not exist.
    MissingInput(PathBuf),
    /// The overlay image does not exist; nothing was written.
    MissingWatermark(PathBuf),
    /// The watermarked image was written here.
    Watermarked(PathBuf),
    /// Watermarking failed; the reason was reported to the user.
    Failed(String),
}

pub fn welcome_message(config: &Config) -> String {
    format!(
        "Hi! Welcome to \"Watermark manager\". Copy your image files to `{}` folder. \
         Then you'll be able to use them in the app. Are you ready?",
        config.img_dir.display()
    )
}

/// Run one interactive session against `config`.
pub fn run(config: &Config, prompter: &mut dyn Prompter) -> Result<RunOutcome, AppError> {
    let settings = config.watermark_settings().map_err(AppError::Config)?;

    if !prompter.confirm(&welcome_message(config), true)? {
        return Ok(RunOutcome::Declined);
    }

    let input_name = prompter.input("What file do you want to mark?", &config.defaults.input)?;
    let kind: WatermarkKind = choose(prompter, "What type of watermark do you want to add?")?;

    let input_path = config.image_path(&input_name);
    if !input_path.is_file() {
        tracing::warn!(path = %input_path.display(), "input image not found");
        prompter.warn(MISSING_INPUT);
        return Ok(RunOutcome::MissingInput(input_path));
    }

    let mut image = codec::load_image(&input_path)?;
    tracing::info!(
        path = %input_path.display(),
        width = image.width(),
        height = image.height(),
        "input image loaded"
    );

    if prompter.confirm(
        "Do you want to adjust the image before adding a watermark?",
        true,
    )? {
        let applied = AdjustmentEngine::new(config.contrast_mode).run_menu(&mut image, prompter)?;
        tracing::info!(count = applied.len(), ?applied, "adjustments applied");
    }

    let output_path = config.image_path(&output_filename_with_suffix(
        &input_name,
        &config.output_suffix,
    ));

    let spec = match kind {
        WatermarkKind::Text => WatermarkSpec::Text {
            content: prompter.input("Type your watermark text:", &config.defaults.text)?,
        },
        WatermarkKind::Image => {
            let name = prompter.input("Type your watermark name:", &config.defaults.watermark)?;
            let path = config.image_path(&name);
            if !path.is_file() {
                tracing::warn!(path = %path.display(), "watermark image not found");
                prompter.warn(MISSING_WATERMARK);
                return Ok(RunOutcome::MissingWatermark(path));
            }
            WatermarkSpec::Image { path }
        }
    };

    match apply_watermark(&mut image, &output_path, &spec, &settings) {
        Ok(written) => {
            tracing::info!(output = %written.display(), ?kind, "watermark written");
            prompter.say(match kind {
                WatermarkKind::Text => "Text watermark added successfully!",
                WatermarkKind::Image => "Image watermark added successfully!",
            });
            prompter.say(SUCCESS);
            Ok(RunOutcome::Watermarked(written))
        }
        Err(e) => {
            tracing::error!(error = %e, output = %output_path.display(), ?kind, "watermarking failed");
            let label = match kind {
                WatermarkKind::Text => "text",
                WatermarkKind::Image => "image",
            };
            prompter.warn(&format!("Error adding {} watermark: {}", label, e));
            Ok(RunOutcome::Failed(e.to_string()))
        }
    }
}
