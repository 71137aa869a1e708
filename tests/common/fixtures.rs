use std::sync::atomic::{AtomicUsize, Ordering};

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};
use tempfile::NamedTempFile;

use platelens::detection::PlateReader;
use platelens::models::{Detection, Point};

/// Background color used for generated test images.
pub const TEST_BACKGROUND: Rgb<u8> = Rgb([30, 30, 30]);

/// Creates a uniform test image on disk and returns the temp file.
/// The file is cleaned up when dropped.
pub fn create_test_image(width: u32, height: u32) -> NamedTempFile {
    let img: RgbImage = ImageBuffer::from_pixel(width, height, TEST_BACKGROUND);
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Creates a file with an image suffix whose contents are not an image.
pub fn create_corrupt_image() -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp file");
    std::fs::write(file.path(), b"definitely not a png").expect("Failed to write temp file");
    file
}

/// Builds a detection from corner tuples.
pub fn make_detection(points: [(i32, i32); 4], text: &str, confidence: f32) -> Detection {
    Detection {
        polygon: points.map(|(x, y)| Point::new(x, y)),
        text: text.to_string(),
        confidence,
    }
}

/// A `PlateReader` returning canned detections and counting invocations, so
/// tests can assert the detector is never reached on loader failures.
pub struct StubReader {
    detections: Vec<Detection>,
    calls: AtomicUsize,
}

impl StubReader {
    pub fn new(detections: Vec<Detection>) -> Self {
        Self {
            detections,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PlateReader for StubReader {
    fn read_plates(&self, _image: &DynamicImage) -> anyhow::Result<Vec<Detection>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.detections.clone())
    }
}
