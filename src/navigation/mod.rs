// SPDX-License-Identifier: MPL-2.0
//! Screen navigation core.
//!
//! This module has no dependency on the GUI toolkit. It contains:
//!
//! - [`screen`]: the closed set of destinations and the bottom-bar order
//! - [`transition`]: selection of the enter/exit animation for a screen change
//! - [`navigator`]: the back-stack and back-press policy
//! - [`animation`]: time-based playback of a selected transition

pub mod animation;
pub mod navigator;
pub mod screen;
pub mod transition;

pub use animation::{LayerFrame, TransitionAnimation};
pub use navigator::{BackPress, Navigator};
pub use screen::{
    all_screens, index_in_primary_order, primary_order, IconRef, LabelRef, Screen,
    ALL_SCREENS, PRIMARY_ORDER,
};
pub use transition::{
    bottom_bar_transition, select_transition, ContentTransform, EnterTransition, ExitTransition,
    Slide, SlideDirection, TransitionKind,
};
