// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles for the shell.
//!
//! Styles that belong to an animated layer take the layer's opacity and scale
//! every color they paint by it. Layers themselves have no background, so two
//! layers drawn on top of each other blend into a cross-fade; the window
//! background is painted once by [`screen`].

use crate::ui::design_tokens::{palette, radius};
use iced::widget::{button, container};
use iced::widget::text as text_widget;
use iced::{Background, Border, Color, Theme};

/// `color` with its alpha multiplied by `opacity`.
#[must_use]
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

fn accent(theme: &Theme) -> Color {
    if matches!(theme, Theme::Light) {
        palette::PRIMARY_500
    } else {
        palette::PRIMARY_400
    }
}

/// Window background, under every layer.
pub fn screen(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        ..Default::default()
    }
}

/// Bottom bar surface, one step off the window background.
pub fn bottom_bar(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(faded(
                palette.background.weak.color,
                opacity,
            ))),
            ..Default::default()
        }
    }
}

/// Body and title text.
pub fn text(opacity: f32) -> impl Fn(&Theme) -> text_widget::Style {
    move |theme: &Theme| text_widget::Style {
        color: Some(faded(theme.palette().text, opacity)),
    }
}

/// Bottom bar destination; `selected` highlights the current screen.
pub fn bar_item(selected: bool, opacity: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = theme.palette().text;
        let accent = accent(theme);
        let background = match (selected, status) {
            (true, _) => Some(Color { a: 0.18, ..accent }),
            (false, button::Status::Hovered) => Some(Color { a: 0.08, ..text }),
            (false, _) => None,
        };
        button::Style {
            background: background.map(|color| Background::Color(faded(color, opacity))),
            text_color: faded(if selected { accent } else { text }, opacity),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Row entry on the overflow screen.
pub fn list_entry(opacity: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let fill = if matches!(theme, Theme::Light) {
            palette::GRAY_100
        } else {
            palette::GRAY_900
        };
        button::Style {
            background: hovered.then_some(Background::Color(faded(fill, opacity))),
            text_color: faded(theme.palette().text, opacity),
            border: Border {
                radius: radius::MD.into(),
                color: faded(palette::GRAY_400, opacity),
                width: 1.0,
            },
            ..Default::default()
        }
    }
}

/// Strip above the stage for startup problems the user should know about.
pub fn banner(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.danger.weak.color)),
        text_color: Some(palette.danger.weak.text),
        ..Default::default()
    }
}

/// Tooltip bubble, inverted against the window background for contrast.
pub fn tooltip(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        text_color: Some(palette.background.strong.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
