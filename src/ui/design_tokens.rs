// SPDX-License-Identifier: MPL-2.0
//! Design system constants shared by the shell widgets.

// ==========================================================================
// Colors
// ==========================================================================

pub mod palette {
    use iced::Color;

    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ==========================================================================
// Spacing
// ==========================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ==========================================================================
// Sizing
// ==========================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    /// Height of the bottom navigation bar.
    pub const BOTTOM_BAR_HEIGHT: f32 = 64.0;
}

// ==========================================================================
// Typography
// ==========================================================================

pub mod typography {
    pub const TITLE_LG: f32 = 28.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const MD: f32 = 12.0;
}
