pub mod annotate;
pub mod detection;
pub mod display;
pub mod error;
pub mod models;
pub mod pipeline;

pub use annotate::AnnotateConfig;
pub use detection::{OcrPlateReader, PlateReader, RecognizerConfig};
pub use error::PipelineError;
pub use models::{BoundingBox, Detection, Point};
pub use pipeline::{RecognitionReport, load_image, recognize};

#[cfg(feature = "gui")]
pub mod gui;
