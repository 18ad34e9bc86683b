// SPDX-License-Identifier: MPL-2.0
//! Placeholder content for every screen.
//!
//! The store's real pages live elsewhere; this module only shows which screen
//! is current and offers the links that exist between screens: the overflow
//! screen opens the secondary ones, and secondary screens can go back.
//!
//! Content is drawn without a background of its own at the given opacity, so
//! a screen fading out stays visible beneath the one fading in.

use crate::i18n::fluent::I18n;
use crate::navigation::Screen;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::{
    alignment::Vertical,
    widget::{button, container, tooltip, Column, Row, Text},
    Element, Length,
};

/// Messages emitted by screen content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Open another screen.
    Open(Screen),
    /// Behave like the system back button.
    Back,
}

/// Render `screen` at `opacity` (1.0 when at rest).
pub fn view<'a>(screen: Screen, i18n: &I18n, opacity: f32) -> Element<'a, Message> {
    let body: Element<'a, Message> = match screen {
        Screen::Browse => placeholder(i18n.tr("browse-placeholder"), opacity),
        Screen::Library => placeholder(i18n.tr("library-placeholder"), opacity),
        Screen::Search => placeholder(i18n.tr("search-placeholder"), opacity),
        Screen::More => Column::new()
            .spacing(spacing::XS)
            .push(entry(
                i18n,
                Screen::Repositories,
                "more-repositories-entry",
                opacity,
            ))
            .push(entry(i18n, Screen::Themes, "more-themes-entry", opacity))
            .into(),
        Screen::Repositories => placeholder(i18n.tr("repositories-placeholder"), opacity),
        Screen::Themes => placeholder(i18n.tr("themes-placeholder"), opacity),
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .push(header(screen, i18n, opacity))
        .push(body)
        .width(Length::Fill);

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header<'a>(screen: Screen, i18n: &I18n, opacity: f32) -> Element<'a, Message> {
    let title = Text::new(i18n.label(screen))
        .size(typography::TITLE_LG)
        .style(styles::text(opacity));

    // Secondary screens have no bottom bar, so they carry their own way back.
    if screen.parent().is_some() {
        let back = button(icons::sized(icons::back(), sizing::ICON_MD, opacity))
            .on_press(Message::Back)
            .padding(spacing::XXS)
            .style(styles::bar_item(false, opacity));
        let back = tooltip(
            back,
            container(Text::new(i18n.tr("navigation-back")).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(styles::tooltip),
            tooltip::Position::Bottom,
        )
        .gap(spacing::XXS);
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(back)
            .push(title)
            .into()
    } else {
        title.into()
    }
}

fn placeholder<'a>(message: String, opacity: f32) -> Element<'a, Message> {
    Text::new(message)
        .size(typography::BODY)
        .style(styles::text(opacity))
        .into()
}

fn entry<'a>(i18n: &I18n, target: Screen, key: &str, opacity: f32) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM).align_y(Vertical::Center);
    if let Some(handle) = icons::resolve(target.icon()) {
        row = row.push(icons::sized(handle, sizing::ICON_LG, opacity));
    }
    row = row.push(Text::new(i18n.tr(key)).size(typography::BODY));

    button(row)
        .on_press(Message::Open(target))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::list_entry(opacity))
        .into()
}
