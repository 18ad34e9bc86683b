// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar listing the primary screens.
//!
//! The bar is the only caller of `navigate` for primary screens, so it also
//! carries the guard against re-selecting the current screen.

use crate::i18n::fluent::I18n;
use crate::navigation::{primary_order, Screen};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::{
    alignment::Horizontal,
    widget::{button, container, Column, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
    /// 1.0 when the bar is at rest, lower while it fades in or out.
    pub opacity: f32,
}

/// Messages emitted by the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Turns a tap into a navigation request, dropping taps on the current screen.
pub fn update(message: Message, current: Screen) -> Event {
    match message {
        Message::Select(screen) if screen != current => Event::Navigate(screen),
        Message::Select(_) => Event::None,
    }
}

/// Render the bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let items = primary_order().iter().fold(
        Row::new().spacing(spacing::XS).width(Length::Fill),
        |row, &screen| {
            row.push(item(
                ctx.i18n,
                screen,
                screen == ctx.current,
                ctx.opacity,
            ))
        },
    );

    container(items)
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BOTTOM_BAR_HEIGHT))
        .style(styles::bottom_bar(ctx.opacity))
        .into()
}

fn item<'a>(i18n: &I18n, screen: Screen, selected: bool, opacity: f32) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .width(Length::Fill);
    if let Some(handle) = icons::resolve(screen.icon()) {
        content = content.push(icons::sized(handle, sizing::ICON_MD, opacity));
    }
    content = content.push(Text::new(i18n.label(screen)).size(typography::CAPTION));

    button(content)
        .on_press(Message::Select(screen))
        .width(Length::FillPortion(1))
        .padding(spacing::XXS)
        .style(styles::bar_item(selected, opacity))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_another_screen_navigates() {
        assert_eq!(
            update(Message::Select(Screen::Search), Screen::Browse),
            Event::Navigate(Screen::Search)
        );
    }

    #[test]
    fn selecting_current_screen_is_ignored() {
        assert_eq!(
            update(Message::Select(Screen::Library), Screen::Library),
            Event::None
        );
    }
}
