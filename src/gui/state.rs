use iced::widget::image::Handle;

/// UI state machine.
///
/// `Loading` means the file dialog is open, `Processing` means the pipeline
/// is running on a background task. The select button only works in `Idle`,
/// which is the guard against re-entrant invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Idle,
    Loading,
    Processing,
}

/// The three display surfaces.
///
/// Overwritten at the end of a successful run and left untouched on any
/// failure. No history is kept.
#[derive(Debug, Default)]
pub struct Surfaces {
    pub annotated: Option<Handle>,
    pub plate: Option<Handle>,
    pub plate_text: Option<String>,
}
