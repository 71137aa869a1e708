mod app;
mod message;
mod state;

pub use app::App;
pub use message::Message;

use std::sync::Arc;

use crate::detection::PlateReader;

/// Open the recognizer window. Blocks until the window is closed.
pub fn run(reader: Arc<dyn PlateReader>) -> iced::Result {
    iced::application(move || App::new(Arc::clone(&reader)), App::update, App::view)
        .title("License Plate Recognition")
        .window_size((600.0, 400.0))
        .theme(App::theme)
        .run()
}
