// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: views
//! receive a borrowed context and emit small messages that the application
//! turns into navigator calls.
//!
//! # Components
//!
//! - [`stage`] - Current screen, transition layers, and bottom bar
//! - [`screens`] - Placeholder content for each screen
//! - [`bottom_bar`] - Primary-screen navigation bar
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Container and button styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod bottom_bar;
pub mod design_tokens;
pub mod icons;
pub mod screens;
pub mod stage;
pub mod styles;
pub mod theming;
