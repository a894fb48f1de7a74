// SPDX-License-Identifier: MPL-2.0
//! Interactive gallery: enqueue toasts and watch the queue drain one at a
//! time, with the inter-toast gap between them.
//!
//! Run with `cargo run --example gallery`.

use iced::widget::{button, column, container, row, stack, text};
use iced::{alignment, Element, Length, Subscription, Task, Theme};
use iced_toaster::{overlay, DisplayDuration, Settings, Severity, Toaster};
use std::time::Duration;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(Gallery::new, Gallery::update, Gallery::view)
        .title("iced_toaster gallery")
        .theme(Gallery::theme)
        .subscription(Gallery::subscription)
        .run()
}

struct Gallery {
    toaster: Toaster<String>,
    served: u32,
}

#[derive(Debug, Clone)]
enum Message {
    Announce,
    AnnounceBatch,
    ClearAll,
    Toaster(iced_toaster::Message),
}

impl Gallery {
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::preset(Severity::Info)
            .with_display_duration(DisplayDuration::seconds(3.0))
            .with_inter_toast_delay(Duration::from_millis(500));

        (
            Self {
                toaster: Toaster::new(settings),
                served: 0,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Announce => {
                self.served += 1;
                self.toaster.enqueue(format!("Toast #{}", self.served));
            }
            Message::AnnounceBatch => {
                let first = self.served + 1;
                self.served += 5;
                self.toaster
                    .enqueue_all((first..=self.served).map(|i| format!("Toast #{i}")));
            }
            Message::ClearAll => {
                self.toaster.update(iced_toaster::Message::ClearAll);
            }
            Message::Toaster(message) => {
                self.toaster.update(message);
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toaster.subscription().map(Message::Toaster)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = column![
            text("iced_toaster").size(28),
            row![
                button(text("Make toast")).on_press(Message::Announce),
                button(text("Make a batch of 5")).on_press(Message::AnnounceBatch),
                button(text("Clear everything")).on_press(Message::ClearAll),
            ]
            .spacing(8),
            text(format!("{} queued", self.toaster.queued_len())),
        ]
        .spacing(16)
        .align_x(alignment::Horizontal::Center);

        let content = container(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        let toasts = overlay::view(&self.toaster, |message| text(message.as_str()).into())
            .map(Message::Toaster);

        stack![content, toasts].into()
    }
}
