pub mod ocr;

use image::DynamicImage;

use crate::models::Detection;

pub use ocr::{OcrPlateReader, RecognizerConfig};

/// Locates and reads license plates in an image.
///
/// The engine behind this is an external collaborator; the pipeline only
/// depends on this seam, which also keeps it testable with stub readers.
/// Implementations are constructed once at startup and shared across
/// invocations, hence `Send + Sync`.
pub trait PlateReader: Send + Sync {
    /// Returns zero or more detections. An empty result means "no plate
    /// found" and is not an error. Ordering is unspecified.
    fn read_plates(&self, image: &DynamicImage) -> anyhow::Result<Vec<Detection>>;
}
