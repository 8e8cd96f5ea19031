// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, window, Subscription};

/// Routes window lifecycle events: size changes feed the layout, close
/// requests trigger teardown.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.height))
        }
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Animation frames, subscribed only while a recomputation or a smooth scroll
/// is pending so an idle page costs nothing.
pub fn create_frame_subscription(active: bool) -> Subscription<Message> {
    if active {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
