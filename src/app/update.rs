// SPDX-License-Identifier: MPL-2.0
//! Update logic: turns messages into navigator calls and animation state.

use super::{App, Message};
use crate::navigation::{BackPress, ContentTransform, Screen, TransitionAnimation};
use crate::ui::{bottom_bar, screens, stage};
use iced::Task;
use std::time::Instant;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Stage(stage::Message::BottomBar(message)) => {
                match bottom_bar::update(message, self.navigator.current()) {
                    bottom_bar::Event::Navigate(screen) => self.navigate(screen),
                    bottom_bar::Event::None => Task::none(),
                }
            }
            Message::Stage(stage::Message::Screen(screens::Message::Open(screen))) => {
                self.navigate(screen)
            }
            Message::Stage(stage::Message::Screen(screens::Message::Back))
            | Message::BackPressed => self.handle_back_press(),
            Message::Frame(now) => {
                self.now = now;
                if self
                    .animation
                    .is_some_and(|animation| animation.is_finished(now))
                {
                    self.animation = None;
                }
                Task::none()
            }
            Message::DismissWarning => {
                self.startup_warning = None;
                Task::none()
            }
        }
    }

    fn navigate(&mut self, target: Screen) -> Task<Message> {
        let from = self.navigator.current();
        if let Some(transform) = self.navigator.navigate(target) {
            self.start_animation(transform, from, target);
        }
        Task::none()
    }

    fn handle_back_press(&mut self) -> Task<Message> {
        let from = self.navigator.current();
        match self.navigator.on_back_press() {
            BackPress::Exit => {
                self.exit_requested = true;
                iced::exit()
            }
            BackPress::Popped(transform) => {
                let to = self.navigator.current();
                self.start_animation(transform, from, to);
                Task::none()
            }
        }
    }

    /// Replaces any transition in flight with `transform`, unless playback is
    /// turned off in the settings.
    fn start_animation(&mut self, transform: ContentTransform, from: Screen, to: Screen) {
        let navigation = &self.config.navigation;
        let duration = navigation.transition_duration();
        if !navigation.animations_enabled() || duration.is_zero() {
            self.animation = None;
            return;
        }

        let started = Instant::now();
        self.now = started;
        self.animation = Some(TransitionAnimation::new(
            transform, from, to, started, duration,
        ));
    }
}
