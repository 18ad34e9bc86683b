// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default length of a screen transition (in milliseconds).
pub const DEFAULT_TRANSITION_DURATION_MS: u32 = 300;

/// Shortest configurable transition (in milliseconds). Zero disables motion.
pub const MIN_TRANSITION_DURATION_MS: u32 = 0;

/// Longest configurable transition (in milliseconds).
pub const MAX_TRANSITION_DURATION_MS: u32 = 2_000;

/// Whether screen transitions are animated by default.
pub const DEFAULT_ANIMATIONS_ENABLED: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
