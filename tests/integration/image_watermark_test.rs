// Image watermark end-to-end tests

use super::test_harness::{Answer, ImageDir, ScriptedPrompter};
use image::{Rgba, RgbaImage};
use watermark_manager::app::{self, RunOutcome, SUCCESS};

fn image_script(input: &str, watermark: &str) -> Vec<Answer> {
    vec![
        Answer::Confirm(true),
        Answer::input(input),
        Answer::Select(1),
        Answer::Confirm(false),
        Answer::input(watermark),
    ]
}

#[test]
fn test_logo_is_centred_at_half_opacity() {
    let dir = ImageDir::new();
    dir.write_solid("photo.png", 200, 100, [255, 255, 255, 255]);
    dir.write_solid("logo.png", 50, 50, [0, 0, 0, 255]);
    let mut prompter = ScriptedPrompter::new(image_script("photo.png", "logo.png"));

    let outcome = app::run(&dir.config, &mut prompter).unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Watermarked(dir.path("photo-with-watermark.png"))
    );
    assert_eq!(
        prompter.said,
        vec!["Image watermark added successfully!", SUCCESS]
    );

    let output = dir.read("photo-with-watermark.png");
    // Logo covers x 75..125, y 25..75
    assert_eq!(output.get_pixel(75, 25), &Rgba([128, 128, 128, 255]));
    assert_eq!(output.get_pixel(124, 74), &Rgba([128, 128, 128, 255]));
    assert_eq!(output.get_pixel(74, 25), &Rgba([255, 255, 255, 255]));
    assert_eq!(output.get_pixel(125, 50), &Rgba([255, 255, 255, 255]));
    assert_eq!(output.get_pixel(100, 24), &Rgba([255, 255, 255, 255]));
    assert_eq!(output.get_pixel(100, 75), &Rgba([255, 255, 255, 255]));
}

#[test]
fn test_default_watermark_name_is_logo_png() {
    let dir = ImageDir::new();
    dir.write_solid("photo.png", 20, 20, [255, 255, 255, 255]);
    dir.write_solid("logo.png", 4, 4, [0, 0, 0, 255]);
    let mut prompter = ScriptedPrompter::new(image_script("photo.png", ""));

    let outcome = app::run(&dir.config, &mut prompter).unwrap();

    assert!(matches!(outcome, RunOutcome::Watermarked(_)));
    assert_eq!(prompter.questions.last().unwrap(), "Type your watermark name:");
}

#[test]
fn test_overlay_alpha_is_respected() {
    let dir = ImageDir::new();
    dir.write_solid("photo.png", 10, 10, [255, 255, 255, 255]);
    let mut logo = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0]));
    logo.put_pixel(5, 5, Rgba([0, 0, 0, 255]));
    dir.write("mark.png", &logo);
    let mut prompter = ScriptedPrompter::new(image_script("photo.png", "mark.png"));

    app::run(&dir.config, &mut prompter).unwrap();
    let output = dir.read("photo-with-watermark.png");

    assert_eq!(output.get_pixel(5, 5), &Rgba([128, 128, 128, 255]));
    let untouched = output
        .enumerate_pixels()
        .filter(|(x, y, _)| (*x, *y) != (5, 5))
        .all(|(_, _, p)| *p == Rgba([255, 255, 255, 255]));
    assert!(untouched);
}

#[test]
fn test_oversized_logo_is_clipped() {
    let dir = ImageDir::new();
    dir.write_solid("photo.png", 20, 20, [255, 255, 255, 255]);
    dir.write_solid("logo.png", 60, 60, [0, 0, 0, 255]);
    let mut prompter = ScriptedPrompter::new(image_script("photo.png", "logo.png"));

    app::run(&dir.config, &mut prompter).unwrap();
    let output = dir.read("photo-with-watermark.png");

    assert_eq!(output.dimensions(), (20, 20));
    assert!(output.pixels().all(|p| *p == Rgba([128, 128, 128, 255])));
}

#[test]
fn test_full_opacity_from_config() {
    let mut dir = ImageDir::new();
    dir.config.image.opacity = 1.0;
    dir.write_solid("photo.png", 10, 10, [255, 255, 255, 255]);
    dir.write_solid("logo.png", 10, 10, [0, 0, 255, 255]);
    let mut prompter = ScriptedPrompter::new(image_script("photo.png", "logo.png"));

    app::run(&dir.config, &mut prompter).unwrap();

    let output = dir.read("photo-with-watermark.png");
    assert!(output.pixels().all(|p| *p == Rgba([0, 0, 255, 255])));
}

#[test]
fn test_undecodable_logo_is_reported_as_failure() {
    let dir = ImageDir::new();
    dir.write_solid("photo.png", 10, 10, [255, 255, 255, 255]);
    std::fs::write(dir.path("logo.png"), b"garbage").unwrap();
    let mut prompter = ScriptedPrompter::new(image_script("photo.png", "logo.png"));

    let outcome = app::run(&dir.config, &mut prompter).unwrap();

    assert!(matches!(outcome, RunOutcome::Failed(_)));
    assert!(prompter.warnings[0].starts_with("Error adding image watermark: "));
    assert_eq!(dir.files(), vec!["logo.png", "photo.png"]);
}
