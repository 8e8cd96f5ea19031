// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the portfolio.
//!
//! This module is the translation collaborator: given the active
//! [`Language`](crate::locale::Language) and a message key it returns the
//! localized text. Choosing *which* language is active is the job of
//! [`crate::locale`].
//!
//! # Features
//!
//! - Embedded `.ftl` translation files, one per supported language
//! - Runtime language switching
//! - Visible `MISSING: <key>` marker for untranslated keys

pub mod fluent;

pub use fluent::I18n;
