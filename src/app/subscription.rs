// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, window, Size, Subscription};

/// Reports the window size when it opens and whenever it changes.
///
/// Always active: the gallery needs the latest height when a chart is opened,
/// and open chart viewers refit on every change.
pub fn create_resize_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window_event) => {
            viewport_size(&window_event).map(Message::WindowResized)
        }
        _ => None,
    })
}

/// Window size carried by an open or resize event.
fn viewport_size(event: &window::Event) -> Option<Size> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => Some(*size),
        _ => None,
    }
}
