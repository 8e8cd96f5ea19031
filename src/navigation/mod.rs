// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven navigation: which page section is active, and how to get to
//! one.
//!
//! The layout is treated as a read-only oracle. Each section is registered
//! with a [`SectionHandle`] that reports its current vertical extent on
//! demand; the tracker never mutates layout itself.

pub mod coalesce;
pub mod layout;
pub mod scroll;
pub mod tracker;

pub use coalesce::FrameCoalescer;
pub use layout::{LayoutSlot, SectionLayout};
pub use scroll::ScrollAnimation;
pub use tracker::{
    compute_active_section, ActivationRule, NavigationState, SectionTracker, TrackerSettings,
};

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

// =============================================================================
// SectionId
// =============================================================================

/// Stable identifier of a page section (e.g. `"about"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(Cow<'static, str>);

impl SectionId {
    /// Creates an id from a static string without allocating.
    #[must_use]
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(Cow::Owned(id.to_string()))
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Vertical extent of a section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    #[must_use]
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }

    /// Height of the intersection with `[viewport_top, viewport_top + viewport_height]`,
    /// never negative.
    #[must_use]
    pub fn visible_height(&self, viewport_top: f32, viewport_height: f32) -> f32 {
        let top = self.top.max(viewport_top);
        let bottom = self.bottom.min(viewport_top + viewport_height);
        (bottom - top).max(0.0)
    }

    /// Whether `y` lies within `[top, bottom)`.
    #[must_use]
    pub fn contains(&self, y: f32) -> bool {
        self.top <= y && y < self.bottom
    }

    fn is_finite(&self) -> bool {
        self.top.is_finite() && self.bottom.is_finite()
    }
}

/// Scroll position and size of the visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Scroll offset of the viewport's top edge.
    pub top: f32,
    pub height: f32,
    /// Total scrollable content height.
    pub document_height: f32,
}

impl ViewportMetrics {
    #[must_use]
    pub fn new(top: f32, height: f32, document_height: f32) -> Self {
        Self {
            top,
            height,
            document_height,
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.document_height - self.height).max(0.0)
    }

    fn is_finite(&self) -> bool {
        self.top.is_finite() && self.height.is_finite() && self.document_height.is_finite()
    }
}

// =============================================================================
// SectionHandle
// =============================================================================

/// Live reference to a rendered section, re-read on every query.
pub trait SectionHandle {
    /// Current extent, or `None` while the section is not laid out.
    fn bounds(&self) -> Option<Bounds>;
}

impl SectionHandle for Bounds {
    fn bounds(&self) -> Option<Bounds> {
        Some(*self)
    }
}

impl<T: SectionHandle + ?Sized> SectionHandle for Rc<T> {
    fn bounds(&self) -> Option<Bounds> {
        (**self).bounds()
    }
}
