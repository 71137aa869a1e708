use std::sync::Arc;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, image as image_widget, row, text};
use iced::{Element, Length, Task, Theme};
use rfd::AsyncFileDialog;
use tracing::error;

use crate::annotate::AnnotateConfig;
use crate::detection::PlateReader;
use crate::display::{self, ANNOTATED_TARGET, DisplayFrame, PLATE_TARGET};
use crate::error::PipelineError;
use crate::pipeline;

use super::message::Message;
use super::state::{Stage, Surfaces};

pub struct App {
    reader: Arc<dyn PlateReader>,
    config: AnnotateConfig,
    stage: Stage,
    surfaces: Surfaces,
}

impl App {
    pub fn new(reader: Arc<dyn PlateReader>) -> Self {
        Self {
            reader,
            config: AnnotateConfig::default(),
            stage: Stage::Idle,
            surfaces: Surfaces::default(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectImage => {
                if self.stage != Stage::Idle {
                    return Task::none();
                }
                self.stage = Stage::Loading;

                Task::perform(
                    AsyncFileDialog::new()
                        .set_title("Select image to recognize")
                        .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "webp"])
                        .pick_file(),
                    |handle| Message::ImagePicked(handle.map(|file| file.path().to_path_buf())),
                )
            }
            Message::ImagePicked(None) => {
                self.stage = Stage::Idle;
                Task::none()
            }
            Message::ImagePicked(Some(path)) => {
                self.stage = Stage::Processing;
                let reader = Arc::clone(&self.reader);
                let config = self.config.clone();

                // Detection can take seconds; keep it off the UI thread and
                // marshal the result back as a message.
                Task::perform(
                    async move {
                        match tokio::task::spawn_blocking(move || {
                            pipeline::recognize(&path, reader.as_ref(), &config)
                        })
                        .await
                        {
                            Ok(result) => result.map(Arc::new).map_err(Arc::new),
                            Err(join_error) => Err(Arc::new(PipelineError::Recognition(
                                anyhow::anyhow!(join_error),
                            ))),
                        }
                    },
                    Message::Finished,
                )
            }
            Message::Finished(Ok(report)) => {
                self.stage = Stage::Idle;
                self.surfaces.annotated = Some(frame_handle(display::prepare_for_display(
                    &report.annotated,
                    ANNOTATED_TARGET,
                )));
                // No usable plate crop leaves the previous plate surface up;
                // only the enlargement/display step is skipped.
                if let Some(plate) = &report.plate {
                    self.surfaces.plate =
                        Some(frame_handle(display::prepare_for_display(plate, PLATE_TARGET)));
                }
                self.surfaces.plate_text = Some(report.best().label());
                Task::none()
            }
            Message::Finished(Err(err)) => {
                // Diagnostic only; the surfaces keep their previous contents
                // and the window stays ready for another selection.
                error!(%err, "recognition failed");
                self.stage = Stage::Idle;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let annotated: Element<'_, Message> = match &self.surfaces.annotated {
            Some(handle) => image_widget(handle.clone()).into(),
            None => text("no image selected").into(),
        };
        let plate: Element<'_, Message> = match &self.surfaces.plate {
            Some(handle) => image_widget(handle.clone()).into(),
            None => text("-").into(),
        };
        let label = text(self.surfaces.plate_text.as_deref().unwrap_or("")).size(20);

        let select = match self.stage {
            Stage::Idle => button("Select image to recognize").on_press(Message::SelectImage),
            Stage::Loading | Stage::Processing => button("Recognizing..."),
        };

        let content = column![
            row![text("original:").width(Length::Fixed(110.0)), annotated].spacing(10),
            row![text("plate region:").width(Length::Fixed(110.0)), plate].spacing(10),
            label,
            select,
        ]
        .spacing(20)
        .padding(20);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn frame_handle(frame: DisplayFrame) -> Handle {
    Handle::from_rgba(frame.width, frame.height, frame.pixels)
}
