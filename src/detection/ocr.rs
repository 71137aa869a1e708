//! ocrs-backed plate reader.
//!
//! Model loading and engine setup follow the ocrs conventions: two `.rten`
//! models (text detection and text recognition) cached under
//! `~/.cache/ocrs`, loaded once at startup and reused for every image.

use image::DynamicImage;
use ocrs::{ImageSource, OcrEngine, OcrEngineParams, TextItem};
use rten::Model;
use std::path::{Path, PathBuf};

use super::PlateReader;
use crate::models::{Detection, Point};

/// The recognize API does not expose a per-line score yet, so detections
/// carry a fixed confidence until the detailed per-character API lands.
const DEFAULT_CONFIDENCE: f32 = 0.9;

/// Which model pair the engine loads at startup.
///
/// This is process-wide initialization state: picked once, reused for all
/// detections. Swapping model files is how a different script/language gets
/// selected.
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    pub detection_model: PathBuf,
    pub recognition_model: PathBuf,
}

impl RecognizerConfig {
    /// Model paths in the standard ocrs cache location.
    pub fn from_cache_dir() -> anyhow::Result<Self> {
        let home_dir = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        let cache_dir = Path::new(&home_dir).join(".cache/ocrs");

        Ok(Self {
            detection_model: cache_dir.join("text-detection.rten"),
            recognition_model: cache_dir.join("text-recognition.rten"),
        })
    }
}

/// Plate reader backed by the ocrs engine.
pub struct OcrPlateReader {
    engine: OcrEngine,
}

impl OcrPlateReader {
    /// Load the configured models and build the engine.
    pub fn new(config: &RecognizerConfig) -> anyhow::Result<Self> {
        if !config.detection_model.exists() || !config.recognition_model.exists() {
            anyhow::bail!(
                "OCR models not found. Please run: ocrs-cli --help (or download models manually)\n\
                 Expected locations:\n  - {}\n  - {}",
                config.detection_model.display(),
                config.recognition_model.display()
            );
        }

        let detection_model = Model::load_file(&config.detection_model)?;
        let recognition_model = Model::load_file(&config.recognition_model)?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })?;

        Ok(Self { engine })
    }
}

impl PlateReader for OcrPlateReader {
    fn read_plates(&self, image: &DynamicImage) -> anyhow::Result<Vec<Detection>> {
        let rgb = image.to_rgb8();
        let source = ImageSource::from_bytes(rgb.as_raw(), rgb.dimensions())?;
        let input = self.engine.prepare_input(source)?;

        let words = self.engine.detect_words(&input)?;
        let line_rects = self.engine.find_text_lines(&input, &words);
        let lines = self.engine.recognize_text(&input, &line_rects)?;

        let mut detections = Vec::new();
        for line in lines.into_iter().flatten() {
            let text = line.to_string().trim().to_string();
            if text.is_empty() {
                continue;
            }

            let corners = line.rotated_rect().corners();
            let polygon =
                corners.map(|corner| Point::new(corner.x.round() as i32, corner.y.round() as i32));

            detections.push(Detection {
                polygon,
                text,
                confidence: DEFAULT_CONFIDENCE,
            });
        }

        Ok(detections)
    }
}
