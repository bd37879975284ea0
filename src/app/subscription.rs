// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events become navigation keys only while an overlay is open;
//! window events are always routed so the layout class and teardown are seen.

use super::Message;
use crate::navigation::NavigationKey;
use iced::{event, keyboard, window, Subscription};

/// Routes window events, plus navigation keys when `overlay_open`.
pub fn create_event_subscription(overlay_open: bool) -> Subscription<Message> {
    if overlay_open {
        event::listen_with(|event, status, window_id| {
            window_message(&event, window_id).or_else(|| key_message(&event, status))
        })
    } else {
        event::listen_with(|event, _status, window_id| window_message(&event, window_id))
    }
}

fn window_message(event: &event::Event, window_id: window::Id) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized(*size))
        }
        event::Event::Window(window::Event::Closed) => Some(Message::WindowClosed(window_id)),
        _ => None,
    }
}

fn key_message(event: &event::Event, status: event::Status) -> Option<Message> {
    match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => NavigationKey::from_key(key).map(Message::KeyPressed),
        _ => None,
    }
}
