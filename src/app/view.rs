// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{stage, styles};
use iced::widget::{button, container, Column, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let stage = stage::view(stage::ViewContext {
            i18n: &self.i18n,
            current: self.navigator.current(),
            animation: self
                .animation
                .as_ref()
                .map(|animation| (animation, animation.progress(self.now))),
        })
        .map(Message::Stage);

        let mut column = Column::new().width(Length::Fill).height(Length::Fill);
        if let Some(key) = &self.startup_warning {
            column = column.push(self.warning_banner(key));
        }

        container(column.push(stage))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::screen)
            .into()
    }

    fn warning_banner<'a>(&self, key: &str) -> Element<'a, Message> {
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(self.i18n.tr(key)).size(typography::CAPTION))
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new("×").size(typography::BODY))
                    .on_press(Message::DismissWarning)
                    .padding(spacing::XXS)
                    .style(button::text),
            );

        container(row)
            .padding([spacing::XS, spacing::MD])
            .width(Length::Fill)
            .style(styles::banner)
            .into()
    }
}
