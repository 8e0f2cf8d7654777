use clap::Parser;
use std::path::PathBuf;
use watermark_manager::app::{self, RunOutcome};
use watermark_manager::config::Config;
use watermark_manager::logging::{init_subscriber, LogFormat};
use watermark_manager::prompt::TerminalPrompter;

/// Watermark Manager - adjust an image and stamp it with a text or image watermark
#[derive(Parser, Debug)]
#[command(name = "watermark-manager")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding input images and receiving outputs
    #[arg(long)]
    img_dir: Option<PathBuf>,

    /// Diagnostic log format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn main() {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }),
        None => Config::default(),
    };

    if let Some(img_dir) = args.img_dir {
        config.img_dir = img_dir;
    }
    if let Some(log_format) = args.log_format {
        config.log_format = log_format;
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = init_subscriber(config.log_format) {
        eprintln!("Failed to initialize logging subsystem: {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        config_file = ?args.config,
        img_dir = %config.img_dir.display(),
        quality = config.quality,
        contrast_mode = ?config.contrast_mode,
        "Configuration loaded successfully"
    );

    let mut prompter = TerminalPrompter::stdio();
    match app::run(&config, &mut prompter) {
        Ok(outcome) => {
            if let RunOutcome::Watermarked(path) = &outcome {
                tracing::info!(output = %path.display(), "Run finished");
            } else {
                tracing::debug!(?outcome, "Run finished without output");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Run aborted");
            eprintln!("An unexpected error occurred: {}", e);
            std::process::exit(1);
        }
    }
}
