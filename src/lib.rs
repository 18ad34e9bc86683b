// SPDX-License-Identifier: MPL-2.0
//! `storefront` is the screen-navigation core of an app storefront, with a
//! small Iced shell that drives it.
//!
//! The [`navigation`] module is toolkit independent: it knows the six
//! screens, keeps the back-stack, and picks the enter/exit transition for
//! every screen change. The [`app`] and [`ui`] modules render it.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod navigation;
pub mod ui;

#[cfg(test)]
mod test_utils;
