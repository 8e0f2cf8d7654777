// Adjustment menu followed by watermarking

use super::test_harness::{Answer, ImageDir, ScriptedPrompter};
use image::Rgba;
use watermark_manager::adjust::ContrastMode;
use watermark_manager::app::{self, RunOutcome};

const BRIGHTNESS: usize = 0;
const CONTRAST: usize = 1;
const GREYSCALE: usize = 2;
const INVERT: usize = 3;
const DONE: usize = 4;

/// Adjust with `menu`, then stamp a fully transparent logo so only the
/// adjustments show in the output.
fn run_with_adjustments(dir: &ImageDir, menu: Vec<Answer>) -> (RunOutcome, ScriptedPrompter) {
    dir.write_solid("clear.png", 4, 4, [0, 0, 0, 0]);

    let mut script = vec![
        Answer::Confirm(true),
        Answer::input("photo.png"),
        Answer::Select(1),
        Answer::Confirm(true),
    ];
    script.extend(menu);
    script.push(Answer::input("clear.png"));

    let mut prompter = ScriptedPrompter::new(script);
    let outcome = app::run(&dir.config, &mut prompter).unwrap();
    assert_eq!(prompter.remaining(), 0);
    (outcome, prompter)
}

#[test]
fn test_darkening_reprompts_out_of_range_level() {
    let dir = ImageDir::new();
    dir.write_solid("photo.png", 8, 8, [255, 255, 255, 255]);

    let (outcome, prompter) = run_with_adjustments(
        &dir,
        vec![
            Answer::Select(BRIGHTNESS),
            Answer::Number(15),
            Answer::Number(-5),
            Answer::Select(DONE),
        ],
    );

    assert!(matches!(outcome, RunOutcome::Watermarked(_)));
    assert_eq!(prompter.warnings.len(), 1);
    assert!(prompter.warnings[0].contains("15"));
    assert!(prompter
        .questions
        .iter()
        .any(|q| q == "Enter brightness value between -10 and 10"));

    let output = dir.read("photo-with-watermark.png");
    assert!(output.pixels().all(|p| *p == Rgba([128, 128, 128, 255])));
}

#[test]
fn test_adjustments_apply_in_order() {
    let dir = ImageDir::new();
    dir.write_solid("photo.png", 8, 8, [255, 0, 0, 255]);

    run_with_adjustments(
        &dir,
        vec![
            Answer::Select(GREYSCALE),
            Answer::Select(INVERT),
            Answer::Select(DONE),
        ],
    );

    // Red greys to 54, which inverts to 201
    let output = dir.read("photo-with-watermark.png");
    assert_eq!(output.get_pixel(0, 0), &Rgba([201, 201, 201, 255]));
}

#[test]
fn test_repeated_invert_restores_image() {
    let dir = ImageDir::new();
    dir.write_solid("photo.png", 8, 8, [12, 34, 56, 255]);

    run_with_adjustments(
        &dir,
        vec![
            Answer::Select(INVERT),
            Answer::Select(INVERT),
            Answer::Select(DONE),
        ],
    );

    let output = dir.read("photo-with-watermark.png");
    assert!(output.pixels().all(|p| *p == Rgba([12, 34, 56, 255])));
}

#[test]
fn test_full_contrast_pushes_to_extremes() {
    let dir = ImageDir::new();
    let mut image = image::RgbaImage::from_pixel(2, 1, Rgba([100, 100, 100, 255]));
    image.put_pixel(1, 0, Rgba([200, 200, 200, 255]));
    dir.write("photo.png", &image);

    run_with_adjustments(
        &dir,
        vec![
            Answer::Select(CONTRAST),
            Answer::Number(10),
            Answer::Select(DONE),
        ],
    );

    let output = dir.read("photo-with-watermark.png");
    assert_eq!(output.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    assert_eq!(output.get_pixel(1, 0), &Rgba([255, 255, 255, 255]));
}

#[test]
fn test_brightness_contrast_mode_treats_contrast_as_brightness() {
    let mut dir = ImageDir::new();
    dir.config.contrast_mode = ContrastMode::Brightness;
    dir.write_solid("photo.png", 4, 4, [255, 255, 255, 255]);

    run_with_adjustments(
        &dir,
        vec![
            Answer::Select(CONTRAST),
            Answer::Number(-5),
            Answer::Select(DONE),
        ],
    );

    let output = dir.read("photo-with-watermark.png");
    assert!(output.pixels().all(|p| *p == Rgba([128, 128, 128, 255])));
}

#[test]
fn test_done_immediately_leaves_image_unchanged() {
    let dir = ImageDir::new();
    dir.write_solid("photo.png", 4, 4, [10, 20, 30, 255]);

    let (_, prompter) = run_with_adjustments(&dir, vec![Answer::Select(DONE)]);

    assert!(prompter.warnings.is_empty());
    let output = dir.read("photo-with-watermark.png");
    assert!(output.pixels().all(|p| *p == Rgba([10, 20, 30, 255])));
}
