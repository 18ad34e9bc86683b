// SPDX-License-Identifier: MPL-2.0
//! Back-stack navigator.
//!
//! The [`Navigator`] owns the history of visited screens. The top of the stack
//! is always the current screen and the bottom is always [`Screen::ROOT`], which
//! `back` never removes. Every change records the [`ContentTransform`] the
//! presentation layer should play before the next render.

use super::screen::{Screen, PRIMARY_ORDER};
use super::transition::{select_transition, ContentTransform};

/// What a hardware or gesture back press resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackPress {
    /// The root screen is showing; the host should close the application.
    Exit,
    /// The top screen was popped; play this transition.
    Popped(ContentTransform),
}

/// Screen history with transition bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    /// Visited screens, bottom first. Never empty.
    stack: Vec<Screen>,
    /// Transition chosen by the most recent `navigate` or `back`.
    last_transition: Option<ContentTransform>,
}

impl Navigator {
    /// Creates a navigator showing [`Screen::ROOT`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::ROOT],
            last_transition: None,
        }
    }

    /// The screen to display.
    #[must_use]
    pub fn current(&self) -> Screen {
        // The stack is seeded with the root and `back` never pops it.
        self.stack.last().copied().unwrap_or(Screen::ROOT)
    }

    /// The screen directly under the current one, if any.
    #[must_use]
    pub fn previous(&self) -> Option<Screen> {
        self.stack
            .len()
            .checked_sub(2)
            .and_then(|index| self.stack.get(index).copied())
    }

    /// Number of entries on the back-stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The back-stack, bottom first.
    #[must_use]
    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }

    /// Whether only the root screen is left.
    #[must_use]
    pub fn is_at_root(&self) -> bool {
        self.stack.len() == 1
    }

    /// Transition recorded by the latest stack change.
    #[must_use]
    pub fn last_transition(&self) -> Option<&ContentTransform> {
        self.last_transition.as_ref()
    }

    /// Pushes `target` and returns the transition to play.
    ///
    /// Navigating to the current screen changes nothing and returns `None`.
    pub fn navigate(&mut self, target: Screen) -> Option<ContentTransform> {
        let from = self.current();
        if from == target {
            tracing::debug!(screen = %target, "ignoring navigation to the current screen");
            return None;
        }

        self.stack.push(target);
        let transform = select_transition(from, target, &PRIMARY_ORDER);
        self.last_transition = Some(transform);
        tracing::debug!(
            %from,
            to = %target,
            depth = self.stack.len(),
            kind = ?transform.kind,
            "navigated"
        );
        Some(transform)
    }

    /// Pops the current screen and returns the transition to play.
    ///
    /// With only the root left nothing happens and `None` is returned; deciding
    /// whether to leave the application is up to the caller.
    pub fn back(&mut self) -> Option<ContentTransform> {
        if self.is_at_root() {
            tracing::debug!("back requested at root, stack unchanged");
            return None;
        }

        let from = self.stack.pop()?;
        let to = self.current();
        let transform = select_transition(from, to, &PRIMARY_ORDER);
        self.last_transition = Some(transform);
        tracing::debug!(
            %from,
            %to,
            depth = self.stack.len(),
            kind = ?transform.kind,
            "went back"
        );
        Some(transform)
    }

    /// Applies the application's back-press policy.
    ///
    /// Showing the root screen means exit, even when older entries sit below it;
    /// any other screen is popped.
    pub fn on_back_press(&mut self) -> BackPress {
        if self.current() == Screen::ROOT {
            tracing::info!(depth = self.stack.len(), "back pressed on root screen, exiting");
            return BackPress::Exit;
        }

        match self.back() {
            Some(transform) => BackPress::Popped(transform),
            // Only reachable with a non-root screen alone on the stack, which
            // `new` and `back` rule out.
            None => BackPress::Exit,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
