//! The selection → detection → annotation pipeline.
//!
//! One invocation covers a single user interaction: load the chosen file,
//! run the recognizer, annotate a copy of the image, and crop/enlarge the
//! plate region. Everything produced here is owned by the invocation and
//! dropped once the surfaces have been updated.

use std::path::Path;
use std::time::{Duration, Instant};

use image::{DynamicImage, ImageReader, RgbImage};
use tracing::{info, warn};

use crate::annotate::{self, AnnotateConfig};
use crate::detection::PlateReader;
use crate::error::PipelineError;
use crate::models::Detection;

/// Everything one successful run produces for the display surfaces.
#[derive(Debug)]
pub struct RecognitionReport {
    /// All detections, in the order the recognizer returned them.
    pub detections: Vec<Detection>,
    /// Copy of the input with one box and marker per detection.
    pub annotated: RgbImage,
    /// Enlarged crop of the preferred detection, or `None` when every
    /// detection's region clamped to nothing.
    pub plate: Option<RgbImage>,
    /// Wall-clock time spent inside the recognizer. Diagnostic only.
    pub elapsed: Duration,
    best_index: usize,
}

impl RecognitionReport {
    /// The detection shown on the text surface: the highest-confidence one.
    ///
    /// This is an explicit policy; ties keep the recognizer's ordering.
    pub fn best(&self) -> &Detection {
        &self.detections[self.best_index]
    }
}

/// Read and decode the chosen image file.
///
/// A missing path is reported before any decoding is attempted, so a bad
/// selection never reaches the recognizer.
pub fn load_image(path: &Path) -> Result<DynamicImage, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::PathNotFound(path.to_path_buf()));
    }

    let reader = ImageReader::open(path).map_err(|source| PipelineError::DecodeFailure {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(source),
    })?;

    reader.decode().map_err(|source| PipelineError::DecodeFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the full pipeline for one chosen file.
pub fn recognize(
    path: &Path,
    reader: &dyn PlateReader,
    config: &AnnotateConfig,
) -> Result<RecognitionReport, PipelineError> {
    let image = load_image(path)?;

    let started = Instant::now();
    let detections = reader.read_plates(&image)?;
    let elapsed = started.elapsed();
    info!(
        path = %path.display(),
        count = detections.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "plate detection finished"
    );

    if detections.is_empty() {
        return Err(PipelineError::NoDetection);
    }

    let annotated = annotate::draw_detections(&image, &detections, config);

    // Display preference: highest confidence first.
    let mut order: Vec<usize> = (0..detections.len()).collect();
    order.sort_by(|&a, &b| detections[b].confidence.total_cmp(&detections[a].confidence));
    let best_index = order[0];

    // Crop the most confident detection whose region survives clamping.
    // Empty regions are skipped with a diagnostic; they never abort the run.
    let mut plate = None;
    for &index in &order {
        match annotate::extract_plate(&image, &detections[index]) {
            Ok(crop) => {
                plate = Some(annotate::enlarge(&crop, config.magnification));
                break;
            }
            Err(err @ PipelineError::EmptyRegion { .. }) => {
                warn!(%err, "skipping detection with empty region");
            }
            Err(other) => return Err(other),
        }
    }

    Ok(RecognitionReport {
        detections,
        annotated,
        plate,
        elapsed,
        best_index,
    })
}
