//! Demo application: a vertical slider under a large value read-out.
//!
//! The slider starts at 34; the mount-time callbacks bring the displayed
//! value in sync before any interaction.

use iced::widget::{center, column, text};
use iced::{Element, Theme};
use iced_vertical_slider::vertical_slider;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Demo::default, Demo::update, Demo::view)
        .title("Vertical slider demo")
        .theme(Demo::theme)
        .antialiasing(true)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    ProgressChanged(u8),
    StopTrackingTouch(u8),
}

#[derive(Debug, Default)]
struct Demo {
    progress: u8,
}

impl Demo {
    fn update(&mut self, message: Message) {
        match message {
            Message::ProgressChanged(value) => {
                self.progress = value;
            }
            Message::StopTrackingTouch(value) => {
                self.progress = value;
                tracing::info!(value, "slider released");
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        center(
            column![
                text!("{}", self.progress).size(50),
                vertical_slider(Message::ProgressChanged)
                    .value(34)
                    .on_stop_tracking_touch(Message::StopTrackingTouch),
            ]
            .spacing(20)
            .align_x(iced::Center),
        )
        .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
