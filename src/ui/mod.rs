// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! `view` takes a read-only context and returns an element emitting its own
//! message type.
//!
//! - [`navbar`] - Section buttons and the language picker
//! - [`sections`] - The scrollable page of stacked sections
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod navbar;
pub mod sections;
pub mod styles;
