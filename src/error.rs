// Error types module

use crate::prompt::PromptError;
use crate::watermark::WatermarkError;
use thiserror::Error;

/// Errors that end a run at the outermost boundary.
///
/// Missing files and watermark failures are handled inside the run and
/// reported as a [`crate::app::RunOutcome`]; only these escape it.
#[derive(Error, Debug)]
pub enum AppError {
    /// Unusable configuration file or flag combination
    #[error("Configuration error: {0}")]
    Config(String),

    /// The prompt stream failed or closed mid-run
    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),

    /// The input image could not be loaded
    #[error(transparent)]
    Load(#[from] WatermarkError),
}
