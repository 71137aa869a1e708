mod common;

use std::path::Path;

use image::Rgb;

use common::fixtures::{
    StubReader, TEST_BACKGROUND, create_corrupt_image, create_test_image, make_detection,
};
use platelens::annotate::AnnotateConfig;
use platelens::error::PipelineError;
use platelens::pipeline::recognize;

const GREEN: Rgb<u8> = Rgb([0, 255, 0]);

fn default_config() -> AnnotateConfig {
    AnnotateConfig::default()
}

#[test]
fn missing_path_never_reaches_the_reader() {
    let reader = StubReader::new(vec![make_detection(
        [(10, 10), (50, 10), (50, 30), (10, 30)],
        "ABC123",
        0.9,
    )]);

    let err = recognize(
        Path::new("/definitely/not/here.png"),
        &reader,
        &default_config(),
    )
    .unwrap_err();

    assert!(matches!(err, PipelineError::PathNotFound(_)));
    assert_eq!(reader.calls(), 0);
}

#[test]
fn corrupt_file_is_a_decode_failure() {
    let file = create_corrupt_image();
    let reader = StubReader::new(vec![]);

    let err = recognize(file.path(), &reader, &default_config()).unwrap_err();

    assert!(matches!(err, PipelineError::DecodeFailure { .. }));
    assert_eq!(reader.calls(), 0);
}

#[test]
fn zero_detections_reports_no_plate_found() {
    let file = create_test_image(320, 240);
    let reader = StubReader::new(vec![]);

    let err = recognize(file.path(), &reader, &default_config()).unwrap_err();

    assert!(matches!(err, PipelineError::NoDetection));
    assert_eq!(reader.calls(), 1);
    assert_eq!(err.to_string(), "no license plate found");
}

#[test]
fn highest_confidence_detection_wins() {
    let file = create_test_image(320, 240);
    // Returned in low-confidence-first order on purpose: the displayed
    // detection must not depend on sequence position.
    let reader = StubReader::new(vec![
        make_detection([(5, 5), (45, 5), (45, 25), (5, 25)], "LOW", 0.4),
        make_detection([(60, 60), (140, 60), (140, 90), (60, 90)], "HIGH", 0.95),
        make_detection([(150, 150), (190, 150), (190, 170), (150, 170)], "MID", 0.7),
    ]);

    let report = recognize(file.path(), &reader, &default_config()).unwrap();

    assert_eq!(report.best().text, "HIGH");
    assert_eq!(report.best().label(), "plate number: HIGH");
    // The plate crop follows the same preference: 80x30 region at 2x.
    let plate = report.plate.expect("crop should succeed");
    assert_eq!(plate.dimensions(), (160, 60));
}

#[test]
fn empty_region_is_skipped_without_aborting() {
    let file = create_test_image(100, 80);
    let reader = StubReader::new(vec![
        // Lies entirely outside the 100x80 image; its crop is empty.
        make_detection([(300, 300), (340, 300), (340, 320), (300, 320)], "GHOST", 0.99),
        make_detection([(10, 10), (50, 10), (50, 30), (10, 30)], "REAL", 0.5),
    ]);

    let report = recognize(file.path(), &reader, &default_config()).unwrap();

    // The remaining detection still produces the enlarged crop (40x20 at 2x).
    let plate = report.plate.expect("fallback crop should succeed");
    assert_eq!(plate.dimensions(), (80, 40));
    assert_eq!(report.detections.len(), 2);
}

#[test]
fn all_regions_empty_still_completes() {
    let file = create_test_image(64, 64);
    let reader = StubReader::new(vec![make_detection(
        [(200, 200), (240, 200), (240, 220), (200, 220)],
        "GONE",
        0.8,
    )]);

    let report = recognize(file.path(), &reader, &default_config()).unwrap();

    assert!(report.plate.is_none());
    assert_eq!(report.best().text, "GONE");
}

#[test]
fn single_plate_scenario() {
    let file = create_test_image(640, 480);
    let reader = StubReader::new(vec![make_detection(
        [(10, 10), (110, 10), (110, 40), (10, 40)],
        "ABC123",
        0.99,
    )]);

    let report = recognize(file.path(), &reader, &default_config()).unwrap();

    // Rectangle drawn with inclusive corners (10,10)-(110,40).
    assert_eq!(*report.annotated.get_pixel(10, 10), GREEN);
    assert_eq!(*report.annotated.get_pixel(110, 40), GREEN);
    assert_eq!(*report.annotated.get_pixel(60, 25), TEST_BACKGROUND);

    // Cropped region is 100x30, enlarged at k=2 to 200x60.
    let plate = report.plate.as_ref().expect("crop should succeed");
    assert_eq!(plate.dimensions(), (200, 60));

    assert_eq!(report.best().label(), "plate number: ABC123");
}
