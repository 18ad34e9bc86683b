// SPDX-License-Identifier: MPL-2.0
//! Screen stage: draws the current screen, or both screens while a transition
//! plays, plus the bottom bar when the current screen has one.
//!
//! Layers are moved with a draw-time translation so a sliding screen keeps its
//! full size. Opacity is handed to the views, which scale the alpha of every
//! color they paint; layers have no background, so the outgoing screen shows
//! through the incoming one until it has faded away.

use crate::i18n::fluent::I18n;
use crate::navigation::{LayerFrame, Screen, TransitionAnimation};
use crate::ui::{bottom_bar, screens};
use iced::widget::{container, float, Column, Stack};
use iced::{Element, Length, Vector};

/// Messages bubbled up from the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    BottomBar(bottom_bar::Message),
    Screen(screens::Message),
}

/// Contextual data needed to render the stage.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
    /// Transition in flight and its linear progress.
    pub animation: Option<(&'a TransitionAnimation, f32)>,
}

/// Render the stage.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.animation {
        Some((animation, progress)) => {
            let outgoing = screen_layer(animation.from, ctx.i18n, animation.exit_frame(progress));
            let incoming = screen_layer(animation.to, ctx.i18n, animation.enter_frame(progress));
            Stack::new()
                .push(outgoing)
                .push(incoming)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        None => screen_layer(ctx.current, ctx.i18n, LayerFrame::IDENTITY),
    };

    let mut column = Column::new().push(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true),
    );

    if let Some(bar) = bottom_bar_layer(&ctx) {
        column = column.push(bar);
    }

    column.width(Length::Fill).height(Length::Fill).into()
}

fn screen_layer<'a>(screen: Screen, i18n: &I18n, frame: LayerFrame) -> Element<'a, Message> {
    translated(
        screens::view(screen, i18n, frame.opacity).map(Message::Screen),
        frame,
    )
}

/// The bottom bar, animated while it appears or hides.
fn bottom_bar_layer<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let bar = |current: Screen, frame: LayerFrame| {
        translated(
            bottom_bar::view(bottom_bar::ViewContext {
                i18n: ctx.i18n,
                current,
                opacity: frame.opacity,
            })
            .map(Message::BottomBar),
            frame,
        )
    };

    match ctx.animation {
        Some((animation, progress)) => match animation.bottom_bar_frame(progress) {
            // Hiding: keep highlighting the screen being left.
            Some(frame) if !animation.to.shows_bottom_bar() => Some(bar(animation.from, frame)),
            Some(frame) => Some(bar(animation.to, frame)),
            None => animation
                .to
                .shows_bottom_bar()
                .then(|| bar(animation.to, LayerFrame::IDENTITY)),
        },
        None => ctx
            .current
            .shows_bottom_bar()
            .then(|| bar(ctx.current, LayerFrame::IDENTITY)),
    }
}

/// Offsets `content` by the frame's translation, in fractions of its bounds.
fn translated<'a>(content: Element<'a, Message>, frame: LayerFrame) -> Element<'a, Message> {
    if frame.translate_x == 0.0 && frame.translate_y == 0.0 {
        return content;
    }

    float(content)
        .translate(move |bounds, _viewport| {
            Vector::new(
                frame.translate_x * bounds.width,
                frame.translate_y * bounds.height,
            )
        })
        .into()
}
