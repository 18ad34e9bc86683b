// SPDX-License-Identifier: MPL-2.0
//! SVG icons for screens, resolved from [`IconRef`] keys.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. They are drawn with the theme text color, faded
//! along with the layer they sit in.

use crate::navigation::IconRef;
use crate::ui::styles;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(browse, "browse.svg", "Compass.");
define_icon!(library, "library.svg", "Grid of four tiles.");
define_icon!(search, "search.svg", "Magnifying glass.");
define_icon!(more, "more.svg", "Horizontal ellipsis.");
define_icon!(repositories, "repositories.svg", "Database cylinder.");
define_icon!(themes, "themes.svg", "Paint palette.");
define_icon!(back, "back.svg", "Left arrow.");

/// Looks up the handle for a screen icon reference.
#[must_use]
pub fn resolve(icon: IconRef) -> Option<Handle> {
    match icon.key() {
        "browse" => Some(browse()),
        "library" => Some(library()),
        "search" => Some(search()),
        "more" => Some(more()),
        "repositories" => Some(repositories()),
        "themes" => Some(themes()),
        _ => None,
    }
}

/// Square icon tinted with the theme's text color at `opacity`.
pub fn sized(handle: Handle, size: f32, opacity: f32) -> Svg<'static, Theme> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |theme: &Theme, _status: svg::Status| svg::Style {
            color: Some(styles::faded(theme.palette().text, opacity)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ALL_SCREENS;

    #[test]
    fn every_screen_icon_resolves() {
        for screen in ALL_SCREENS {
            assert!(resolve(screen.icon()).is_some(), "{screen}");
        }
    }

    #[test]
    fn handles_are_cached() {
        assert_eq!(browse().id(), browse().id());
    }
}
