// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The tick subscription only runs while something needs redrawing (an
//! entrance animation or a pending toast); the keyboard subscription only
//! listens while the detail overlay is open, so an idle app subscribes to
//! nothing.

use super::{Message, Screen};
use crate::ui::landing;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Routes Escape to dismiss the detail overlay while it is open on the
/// landing screen.
pub fn create_event_subscription(screen: Screen, overlay_open: bool) -> Subscription<Message> {
    if screen == Screen::Landing && overlay_open {
        event::listen_with(|event, _status, _window_id| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::Landing(landing::Message::DismissOverlay)),
            _ => None,
        })
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for entrance animations and
/// notification auto-dismiss.
pub fn create_tick_subscription(
    is_animating: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_animating || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
