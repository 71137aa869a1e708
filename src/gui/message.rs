use std::path::PathBuf;
use std::sync::Arc;

use crate::error::PipelineError;
use crate::pipeline::RecognitionReport;

/// Messages are cloned by the widget tree, so the bulky pipeline payloads
/// travel behind `Arc`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The "select image to recognize" button was pressed.
    SelectImage,
    /// The file dialog closed; `None` means it was cancelled.
    ImagePicked(Option<PathBuf>),
    /// The background pipeline run finished.
    Finished(Result<Arc<RecognitionReport>, Arc<PipelineError>>),
}
