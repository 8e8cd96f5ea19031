// SPDX-License-Identifier: MPL-2.0
//! `cosmic_folio` is a single-page portfolio built with the Iced GUI framework.
//!
//! Its core is two pieces of navigation logic: [`locale`] decides which of
//! the supported languages to show and keeps routes prefixed with it, and
//! [`navigation`] tracks which page section is in view while the visitor
//! scrolls. Both are plain Rust and usable without the GUI.

#![doc(html_root_url = "https://docs.rs/cosmic_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod navigation;
pub mod paths;
pub mod storage;
pub mod ui;
