// Configuration module unit tests

use std::io::Write;
use std::path::PathBuf;
use watermark_manager::adjust::ContrastMode;
use watermark_manager::config::*;
use watermark_manager::logging::LogFormat;
use watermark_manager::watermark::{Color, PlacementPosition};

#[test]
fn test_can_deserialize_full_yaml_config() {
    let yaml = r##"
img_dir: ./photos
defaults:
  input: beach.jpg
  text: "(c) 2024 Example"
  watermark: brand.png
output_suffix: "_wm"
quality: 85
text:
  scale: 2
  origin: [0, 20]
  color: "#336699"
image:
  opacity: 0.8
contrast_mode: curve
log_format: json
"##;
    let config = Config::from_yaml(yaml).expect("Failed to deserialize YAML");

    assert_eq!(config.img_dir, PathBuf::from("./photos"));
    assert_eq!(config.defaults.input, "beach.jpg");
    assert_eq!(config.defaults.text, "(c) 2024 Example");
    assert_eq!(config.defaults.watermark, "brand.png");
    assert_eq!(config.output_suffix, "_wm");
    assert_eq!(config.quality, 85);
    assert_eq!(config.text.scale, 2);
    assert_eq!(config.text.origin, [0, 20]);
    assert_eq!(config.image.opacity, 0.8);
    assert_eq!(config.contrast_mode, ContrastMode::Curve);
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_watermark_settings_follow_config() {
    let yaml = r##"
quality: 70
text:
  scale: 3
  origin: [5, 6]
  color: "#336699"
"##;
    let config = Config::from_yaml(yaml).unwrap();
    let settings = config.watermark_settings().unwrap();

    assert_eq!(settings.text.scale, 3);
    assert_eq!(settings.text.origin, PlacementPosition::new(5, 6));
    assert_eq!(settings.text.color, Color::new(0x33, 0x66, 0x99));
    assert_eq!(settings.image.opacity, 0.5);
    assert_eq!(settings.quality.quality, 70);
}

#[test]
fn test_can_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "img_dir: /tmp/watermarks").unwrap();
    writeln!(file, "output_suffix: -marked").unwrap();

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.img_dir, PathBuf::from("/tmp/watermarks"));
    assert_eq!(config.output_suffix, "-marked");
    assert_eq!(config.quality, 100);
}

#[test]
fn test_empty_config_file_gives_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_unknown_contrast_mode_is_rejected() {
    assert!(Config::from_yaml("contrast_mode: sigmoid").is_err());
}

#[test]
fn test_validation_rejects_empty_img_dir() {
    let config = Config {
        img_dir: PathBuf::new(),
        ..Config::default()
    };
    assert!(config.validate().unwrap_err().contains("img_dir"));
}

#[test]
fn test_oversized_text_scale_fails_validation() {
    let config = Config::from_yaml("text:\n  scale: 4294967295\n").unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.contains("text.scale"));

    let mut config = Config::default();
    config.text.scale = 64;
    assert!(config.validate().is_ok());
    config.text.scale = 65;
    assert!(config.validate().is_err());
}

#[test]
fn test_far_text_origin_fails_validation() {
    let mut config = Config::default();
    config.text.origin = [i32::MAX, 10];
    assert!(config.validate().unwrap_err().contains("text.origin"));

    config.text.origin = [-100_000, 100_000];
    assert!(config.validate().is_ok());
}

#[test]
fn test_opacity_bounds_are_inclusive() {
    let mut config = Config::default();
    config.image.opacity = 0.0;
    assert!(config.validate().is_ok());
    config.image.opacity = 1.0;
    assert!(config.validate().is_ok());
    config.image.opacity = -0.1;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_round_trips_through_yaml() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}
