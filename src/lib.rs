// Watermark Manager library
// Adjusts a single image and stamps it with a text or image watermark.

pub mod adjust;
pub mod app;
pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod naming;
pub mod prompt;
pub mod watermark;
