// SPDX-License-Identifier: MPL-2.0
//! Screen registry: the closed set of destinations and the bottom-bar order.
//!
//! Every destination the application can show is a variant of [`Screen`].
//! Display metadata (icon and label) is exposed as opaque references that the
//! presentation layer resolves; nothing in the navigation core looks inside them.
//!
//! The [`PRIMARY_ORDER`] slice is the only source of "left" and "right" used by
//! the transition policy: a screen's index in it decides slide direction.

use std::fmt;

// =============================================================================
// Resource References
// =============================================================================

/// Opaque handle to a screen icon asset.
///
/// The wrapped key names an embedded SVG under `assets/icons/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconRef(&'static str);

impl IconRef {
    /// Returns the asset key.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.0
    }
}

/// Opaque handle to a localized screen label.
///
/// The wrapped key is a Fluent message id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelRef(&'static str);

impl LabelRef {
    /// Returns the Fluent message id.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.0
    }
}

// =============================================================================
// Screen
// =============================================================================

/// Destinations the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Browse,
    Library,
    Search,
    More,
    Repositories,
    Themes,
}

/// Every screen, in declaration order.
pub const ALL_SCREENS: [Screen; 6] = [
    Screen::Browse,
    Screen::Library,
    Screen::Search,
    Screen::More,
    Screen::Repositories,
    Screen::Themes,
];

/// Bottom-bar screens, left to right.
pub const PRIMARY_ORDER: [Screen; 4] = [
    Screen::Browse,
    Screen::Library,
    Screen::Search,
    Screen::More,
];

impl Screen {
    /// The screen at the bottom of every back-stack.
    pub const ROOT: Screen = Screen::Browse;

    /// The overflow screen that leads to secondary destinations.
    pub const OVERFLOW: Screen = Screen::More;

    /// Icon shown for this screen in the bottom bar.
    #[must_use]
    pub fn icon(self) -> IconRef {
        IconRef(match self {
            Screen::Browse => "browse",
            Screen::Library => "library",
            Screen::Search => "search",
            Screen::More => "more",
            Screen::Repositories => "repositories",
            Screen::Themes => "themes",
        })
    }

    /// Label shown for this screen in the bottom bar and headers.
    #[must_use]
    pub fn label(self) -> LabelRef {
        LabelRef(match self {
            Screen::Browse => "screen-browse",
            Screen::Library => "screen-library",
            Screen::Search => "screen-search",
            Screen::More => "screen-more",
            Screen::Repositories => "screen-repositories",
            Screen::Themes => "screen-themes",
        })
    }

    /// Whether this screen belongs to the bottom bar.
    #[must_use]
    pub fn is_primary(self) -> bool {
        index_in_primary_order(self).is_some()
    }

    /// Whether the bottom bar is visible while this screen is current.
    #[must_use]
    pub fn shows_bottom_bar(self) -> bool {
        self.is_primary()
    }

    /// The screen a secondary destination is reached from.
    #[must_use]
    pub fn parent(self) -> Option<Screen> {
        match self {
            Screen::Repositories | Screen::Themes => Some(Screen::OVERFLOW),
            Screen::Browse | Screen::Library | Screen::Search | Screen::More => None,
        }
    }

    /// Lowercase name used in logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Screen::Browse => "browse",
            Screen::Library => "library",
            Screen::Search => "search",
            Screen::More => "more",
            Screen::Repositories => "repositories",
            Screen::Themes => "themes",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Registry Queries
// =============================================================================

/// Returns the full closed set of screens.
#[must_use]
pub fn all_screens() -> &'static [Screen] {
    &ALL_SCREENS
}

/// Returns the bottom-bar order.
#[must_use]
pub fn primary_order() -> &'static [Screen] {
    &PRIMARY_ORDER
}

/// Position of `screen` in the bottom-bar order, `None` for secondary screens.
#[must_use]
pub fn index_in_primary_order(screen: Screen) -> Option<usize> {
    position_in(&PRIMARY_ORDER, screen)
}

/// Position of `screen` in an arbitrary ordering.
pub(crate) fn position_in(order: &[Screen], screen: Screen) -> Option<usize> {
    order.iter().position(|candidate| *candidate == screen)
}
