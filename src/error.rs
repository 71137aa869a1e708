use std::path::PathBuf;

use thiserror::Error;

/// Failures the recognition pipeline can report.
///
/// Handling is strictly local: callers report the error and stop the current
/// run. None of these are fatal to the process; the window stays usable and
/// ready for another selection.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The chosen path does not exist. Raised before any decoding or
    /// detection work happens.
    #[error("image file not found: {0}")]
    PathNotFound(PathBuf),

    /// The file exists but could not be opened or decoded as an image.
    #[error("failed to decode image {path}: {source}")]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The recognizer returned no detections for a decodable image.
    #[error("no license plate found")]
    NoDetection,

    /// A detection's bounding box clamped to an empty area, so there is
    /// nothing to crop or enlarge for it.
    #[error("region extraction failed for '{text}': bounding box lies outside the image")]
    EmptyRegion { text: String },

    /// The OCR engine itself failed.
    #[error(transparent)]
    Recognition(#[from] anyhow::Error),
}
