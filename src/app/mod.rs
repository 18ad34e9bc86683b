// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the navigator and the
//! views.
//!
//! The `App` struct owns the [`Navigator`] and the transition being played,
//! and turns bottom bar taps, screen links, and back presses into navigator
//! calls. Exiting on a back press from the root screen is decided here.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, USAGE};

use crate::config::{self, defaults, Config};
use crate::i18n::fluent::I18n;
use crate::navigation::{Navigator, TransitionAnimation};
use crate::ui::theming::ThemeMode;
use iced::{window, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigator: Navigator,
    config: Config,
    theme_mode: ThemeMode,
    /// Transition currently on screen, if any.
    animation: Option<TransitionAnimation>,
    /// Timestamp of the latest frame; drives animation progress.
    now: Instant,
    /// i18n key of a problem found while starting up.
    startup_warning: Option<String>,
    /// Set once a back press on the root screen asked to close the window.
    exit_requested: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("stack", &self.navigator.stack())
            .field("animating", &self.animation.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(defaults::WINDOW_DEFAULT_WIDTH, defaults::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            defaults::MIN_WINDOW_WIDTH,
            defaults::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; the flags are only taken once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default(), None)
    }
}

impl App {
    /// Initializes application state from the settings file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let mut app = Self::with_config(config, flags.lang);
        app.startup_warning = warning;
        (app, Task::none())
    }

    /// Builds the application around an already loaded config.
    #[must_use]
    pub fn with_config(config: Config, lang: Option<String>) -> Self {
        let i18n = I18n::new(lang, &config);
        let theme_mode = config.general.theme_mode;
        Self {
            i18n,
            navigator: Navigator::new(),
            config,
            theme_mode,
            animation: None,
            now: Instant::now(),
            startup_warning: None,
            exit_requested: false,
        }
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn animation(&self) -> Option<&TransitionAnimation> {
        self.animation.as_ref()
    }

    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen = self.i18n.label(self.navigator.current());
        format!("{screen} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(self.animation.is_some()),
        ])
    }
}
