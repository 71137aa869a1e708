use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use platelens::annotate::AnnotateConfig;
use platelens::detection::{OcrPlateReader, RecognizerConfig};
use platelens::error::PipelineError;
use platelens::pipeline;

#[derive(Parser)]
#[command(name = "platelens")]
#[command(about = "Detect and read vehicle license plates from images")]
struct Cli {
    /// Recognize this image and print the results instead of opening a window
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Path to the text detection model (defaults to ~/.cache/ocrs)
    #[arg(long, value_name = "FILE")]
    detection_model: Option<PathBuf>,

    /// Path to the text recognition model (defaults to ~/.cache/ocrs)
    #[arg(long, value_name = "FILE")]
    recognition_model: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = RecognizerConfig::from_cache_dir()?;
    if let Some(path) = args.detection_model {
        config.detection_model = path;
    }
    if let Some(path) = args.recognition_model {
        config.recognition_model = path;
    }

    // The recognizer is built once and reused for every image within the
    // process lifetime.
    let reader = OcrPlateReader::new(&config)?;

    match args.image_path {
        Some(path) => recognize_to_stdout(&path, &reader),
        None => open_window(reader),
    }
}

fn recognize_to_stdout(path: &Path, reader: &OcrPlateReader) -> anyhow::Result<()> {
    match pipeline::recognize(path, reader, &AnnotateConfig::default()) {
        Ok(report) => {
            println!("Detections: {}", report.detections.len());
            for detection in &report.detections {
                let bbox = detection.bounding_box();
                println!(
                    "  {} at ({}, {}) {}x{} - confidence {:.2}",
                    detection.text, bbox.x, bbox.y, bbox.width, bbox.height, detection.confidence
                );
            }
            println!("{}", report.best().label());
            println!("Processing time: {:.6}s", report.elapsed.as_secs_f64());
            Ok(())
        }
        Err(PipelineError::NoDetection) => {
            println!("No license plate found.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(feature = "gui")]
fn open_window(reader: OcrPlateReader) -> anyhow::Result<()> {
    platelens::gui::run(std::sync::Arc::new(reader))?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn open_window(_reader: OcrPlateReader) -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; pass an image path instead")
}
