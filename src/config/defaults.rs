// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Navigation**: scroll tracking tolerance and smooth-scroll duration
//! - **Window**: initial and minimum window dimensions
//! - **Logging**: default tracing filter

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Distance from the document bottom (in logical pixels) within which the
/// last section is force-selected.
pub const DEFAULT_BOTTOM_TOLERANCE_PX: f32 = 4.0;

/// Minimum bottom tolerance.
pub const MIN_BOTTOM_TOLERANCE_PX: f32 = 0.0;

/// Maximum bottom tolerance.
pub const MAX_BOTTOM_TOLERANCE_PX: f32 = 64.0;

/// Duration of the programmatic smooth scroll to a section.
pub const DEFAULT_SCROLL_DURATION_MS: u64 = 450;

/// Maximum smooth scroll duration. Zero disables the animation.
pub const MAX_SCROLL_DURATION_MS: u64 = 2_000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: u32 = 1100;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Tracing filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
