// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes the keys and buttons that mean "back" to the back-press policy and
//! ticks animation frames while a transition plays.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, window, Event, Subscription};

/// Maps back gestures to [`Message::BackPressed`].
///
/// Escape and Backspace only count when no widget captured them, so typing
/// in a text field never navigates. The mouse back button always counts.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| back_gesture(&event, status))
}

fn back_gesture(event: &Event, status: event::Status) -> Option<Message> {
    match (event, status) {
        (
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape | Named::Backspace),
                ..
            }),
            event::Status::Ignored,
        )
        | (Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Back)), _) => {
            Some(Message::BackPressed)
        }
        _ => None,
    }
}

/// Redraw ticks while a transition is on screen.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_mouse_button_is_a_back_press() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Back));
        assert!(matches!(
            back_gesture(&event, event::Status::Captured),
            Some(Message::BackPressed)
        ));
    }

    #[test]
    fn other_mouse_buttons_are_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(back_gesture(&event, event::Status::Ignored).is_none());
    }
}
