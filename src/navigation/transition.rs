// SPDX-License-Identifier: MPL-2.0
//! Transition selection for screen changes.
//!
//! [`select_transition`] is a pure, total function of `(from, to, order)`.
//! It yields a [`ContentTransform`] describing how the incoming screen enters
//! and how the outgoing screen leaves:
//!
//! - both screens in the bottom bar: full-width lateral slide, direction from
//!   their indices;
//! - leaving the overflow screen for a secondary one: short slide plus fade
//!   towards the start edge;
//! - returning to the overflow screen from a secondary one: the mirror image;
//! - anything else: the incoming screen rises from below and fades in while the
//!   outgoing one fades out in place.

use super::screen::{position_in, Screen};

/// Fraction of the container travelled by a bottom-bar slide.
pub const LATERAL_OFFSET: f32 = 1.0;

/// Fraction of the container travelled when drilling into or out of the overflow screen.
pub const DRILL_OFFSET: f32 = 1.0 / 3.0;

/// Fraction of the container height the fallback entrance rises from.
pub const FALLBACK_RISE_OFFSET: f32 = 1.0 / 5.0;

/// Fraction of its own height the bottom bar slides when it appears or hides.
pub const BOTTOM_BAR_OFFSET: f32 = 1.0 / 2.0;

// =============================================================================
// Descriptor Types
// =============================================================================

/// Edge of the container a layer moves towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    /// Towards the leading edge (left in left-to-right layouts).
    Start,
    /// Towards the trailing edge.
    End,
    Up,
    Down,
}

impl SlideDirection {
    /// The opposite edge.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            SlideDirection::Start => SlideDirection::End,
            SlideDirection::End => SlideDirection::Start,
            SlideDirection::Up => SlideDirection::Down,
            SlideDirection::Down => SlideDirection::Up,
        }
    }
}

/// A directional slide covering `offset` of the container extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub direction: SlideDirection,
    pub offset: f32,
}

impl Slide {
    #[must_use]
    pub fn new(direction: SlideDirection, offset: f32) -> Self {
        Self { direction, offset }
    }

    #[must_use]
    fn reversed(self) -> Self {
        Self {
            direction: self.direction.opposite(),
            ..self
        }
    }
}

/// How the incoming screen appears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnterTransition {
    pub slide: Option<Slide>,
    pub fade: bool,
}

/// How the outgoing screen disappears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitTransition {
    pub slide: Option<Slide>,
    pub fade: bool,
}

/// Which selection rule produced a [`ContentTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Both screens are in the bottom bar.
    Lateral,
    /// From the overflow screen into a secondary screen.
    DrillIn,
    /// From a secondary screen back to the overflow screen.
    DrillOut,
    /// No directional relationship between the screens.
    Fallback,
}

/// Paired enter/exit animation for one screen change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentTransform {
    pub kind: TransitionKind,
    pub enter: EnterTransition,
    pub exit: ExitTransition,
}

impl ContentTransform {
    /// Both layers slide the full container width towards `direction`.
    #[must_use]
    pub fn lateral(direction: SlideDirection) -> Self {
        let slide = Some(Slide::new(direction, LATERAL_OFFSET));
        Self {
            kind: TransitionKind::Lateral,
            enter: EnterTransition { slide, fade: false },
            exit: ExitTransition { slide, fade: false },
        }
    }

    /// Both layers slide a third of the width towards `direction` while fading.
    #[must_use]
    pub fn drill(direction: SlideDirection) -> Self {
        let slide = Some(Slide::new(direction, DRILL_OFFSET));
        let kind = match direction {
            SlideDirection::End | SlideDirection::Down => TransitionKind::DrillOut,
            SlideDirection::Start | SlideDirection::Up => TransitionKind::DrillIn,
        };
        Self {
            kind,
            enter: EnterTransition { slide, fade: true },
            exit: ExitTransition { slide, fade: true },
        }
    }

    /// Incoming layer rises and fades in, outgoing layer only fades out.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            kind: TransitionKind::Fallback,
            enter: EnterTransition {
                slide: Some(Slide::new(SlideDirection::Up, FALLBACK_RISE_OFFSET)),
                fade: true,
            },
            exit: ExitTransition {
                slide: None,
                fade: true,
            },
        }
    }

    /// Same animation with every slide direction flipped.
    #[must_use]
    pub fn reversed(self) -> Self {
        let kind = match self.kind {
            TransitionKind::DrillIn => TransitionKind::DrillOut,
            TransitionKind::DrillOut => TransitionKind::DrillIn,
            other => other,
        };
        Self {
            kind,
            enter: EnterTransition {
                slide: self.enter.slide.map(Slide::reversed),
                ..self.enter
            },
            exit: ExitTransition {
                slide: self.exit.slide.map(Slide::reversed),
                ..self.exit
            },
        }
    }

    /// Whether either layer fades.
    #[must_use]
    pub fn fades(&self) -> bool {
        self.enter.fade || self.exit.fade
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Chooses the animation for a change from `from` to `to`.
///
/// Total over every pair, including `from == to`.
#[must_use]
pub fn select_transition(from: Screen, to: Screen, primary_order: &[Screen]) -> ContentTransform {
    let from_index = position_in(primary_order, from);
    let to_index = position_in(primary_order, to);

    match (from_index, to_index) {
        (Some(i), Some(j)) if i < j => ContentTransform::lateral(SlideDirection::Start),
        (Some(_), Some(_)) => ContentTransform::lateral(SlideDirection::End),
        (_, None) if from == Screen::OVERFLOW => ContentTransform::drill(SlideDirection::Start),
        (None, _) if to == Screen::OVERFLOW => ContentTransform::drill(SlideDirection::End),
        _ => ContentTransform::fallback(),
    }
}

// =============================================================================
// Bottom Bar
// =============================================================================

/// Animation for the bottom bar appearing (`visible == true`) or hiding.
///
/// The bar travels half its own height, together with a fade.
#[must_use]
pub fn bottom_bar_transition(visible: bool) -> (Slide, bool) {
    let direction = if visible {
        SlideDirection::Up
    } else {
        SlideDirection::Down
    };
    (Slide::new(direction, BOTTOM_BAR_OFFSET), true)
}
