// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Screen labels are Fluent message ids; this module resolves them for the
//! active locale.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded at compile time
//! - Runtime language switching
//! - Fallback to `en-US` when a locale is unavailable

pub mod fluent;
