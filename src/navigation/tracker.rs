// SPDX-License-Identifier: MPL-2.0
//! Active-section tracking.
//!
//! [`compute_active_section`] is the pure decision over a snapshot of
//! section extents; [`SectionTracker`] owns the registered sections and the
//! [`NavigationState`] that the navigation UI reads.

use super::{Bounds, SectionHandle, SectionId, ViewportMetrics};
use crate::config::DEFAULT_BOTTOM_TOLERANCE_PX;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// How the winning section is chosen among visible ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivationRule {
    /// The section covering the most viewport height wins.
    #[default]
    MostVisible,
    /// The section under the viewport's top edge wins; sections in a gap
    /// fall back to [`ActivationRule::MostVisible`].
    ViewportTop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerSettings {
    /// Distance from the document bottom within which the last section is
    /// forced active.
    pub bottom_tolerance: f32,
    pub rule: ActivationRule,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            bottom_tolerance: DEFAULT_BOTTOM_TOLERANCE_PX,
            rule: ActivationRule::default(),
        }
    }
}

/// Picks the active section for `viewport`.
///
/// `sections` must be in registration order. Rules, in order of precedence:
///
/// 1. If the first section is the topmost one and the viewport has scrolled
///    less than half its height, the first section wins.
/// 2. If the viewport bottom is within `bottom_tolerance` of the document
///    end, the last section wins.
/// 3. Otherwise the rule in `settings` picks among sections with positive
///    overlap; ties go to the earlier section.
/// 4. With no overlap at all, `previous` is kept.
#[must_use]
pub fn compute_active_section(
    sections: &[(SectionId, Bounds)],
    viewport: ViewportMetrics,
    previous: &SectionId,
    settings: TrackerSettings,
) -> SectionId {
    let (Some((first_id, first_bounds)), Some((last_id, _))) = (sections.first(), sections.last())
    else {
        return previous.clone();
    };
    if !viewport.is_finite() {
        return previous.clone();
    }

    let first_is_topmost = sections
        .iter()
        .all(|(_, bounds)| first_bounds.top <= bounds.top);
    if first_is_topmost && viewport.top < viewport.height / 2.0 {
        return first_id.clone();
    }

    if viewport.document_height > 0.0
        && viewport.bottom() >= viewport.document_height - settings.bottom_tolerance
    {
        return last_id.clone();
    }

    if settings.rule == ActivationRule::ViewportTop {
        let under_top = sections.iter().find(|(_, bounds)| {
            bounds.contains(viewport.top) && bounds.visible_height(viewport.top, viewport.height) > 0.0
        });
        if let Some((id, _)) = under_top {
            return id.clone();
        }
    }

    let mut best: Option<(&SectionId, f32)> = None;
    for (id, bounds) in sections {
        if !bounds.is_finite() {
            continue;
        }
        let visible = bounds.visible_height(viewport.top, viewport.height);
        if visible <= 0.0 {
            continue;
        }
        // Strictly greater keeps the earlier section on ties
        if best.is_none_or(|(_, best_visible)| visible > best_visible) {
            best = Some((id, visible));
        }
    }

    best.map_or_else(|| previous.clone(), |(id, _)| id.clone())
}

// =============================================================================
// NavigationState
// =============================================================================

/// The active section, readable and observable by the navigation UI.
///
/// Only the tracker writes it; readers either poll [`NavigationState::active`]
/// or hold a [`watch::Receiver`] from [`NavigationState::subscribe`].
#[derive(Debug)]
pub struct NavigationState {
    sender: watch::Sender<SectionId>,
}

impl NavigationState {
    pub fn new(initial: SectionId) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self { sender }
    }

    #[must_use]
    pub fn active(&self) -> SectionId {
        self.sender.borrow().clone()
    }

    #[must_use]
    pub fn is_active(&self, id: &SectionId) -> bool {
        *self.sender.borrow() == *id
    }

    pub fn subscribe(&self) -> watch::Receiver<SectionId> {
        self.sender.subscribe()
    }

    /// Returns `true` if the value changed.
    fn set(&self, id: SectionId) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == id {
                false
            } else {
                *current = id;
                true
            }
        })
    }
}

// =============================================================================
// SectionTracker
// =============================================================================

struct RegisteredSection {
    id: SectionId,
    handle: Box<dyn SectionHandle>,
}

/// Owns registered sections and the navigation state derived from them.
pub struct SectionTracker {
    sections: Vec<RegisteredSection>,
    state: NavigationState,
    settings: TrackerSettings,
}

impl std::fmt::Debug for SectionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionTracker")
            .field(
                "sections",
                &self.sections.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            )
            .field("active", &self.state.active())
            .field("settings", &self.settings)
            .finish()
    }
}

impl SectionTracker {
    /// Creates a tracker whose state starts at `default_section`, which
    /// should be the first section registered.
    pub fn new(default_section: SectionId, settings: TrackerSettings) -> Self {
        Self {
            sections: Vec::new(),
            state: NavigationState::new(default_section),
            settings,
        }
    }

    /// Associates `id` with a live handle. Registering an id again replaces
    /// its handle and keeps its original position.
    pub fn register_section(&mut self, id: SectionId, handle: impl SectionHandle + 'static) {
        let handle: Box<dyn SectionHandle> = Box::new(handle);
        match self.sections.iter_mut().find(|section| section.id == id) {
            Some(existing) => existing.handle = handle,
            None => self.sections.push(RegisteredSection { id, handle }),
        }
    }

    #[must_use]
    pub fn is_registered(&self, id: &SectionId) -> bool {
        self.sections.iter().any(|section| section.id == *id)
    }

    /// Registered ids in registration order.
    pub fn section_ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter().map(|section| &section.id)
    }

    /// Current extents of every laid-out section, in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(SectionId, Bounds)> {
        self.sections
            .iter()
            .filter_map(|section| section.handle.bounds().map(|b| (section.id.clone(), b)))
            .collect()
    }

    /// Recomputes the active section for `viewport` and stores it.
    pub fn update(&mut self, viewport: ViewportMetrics) -> SectionId {
        let previous = self.state.active();
        let active = compute_active_section(&self.snapshot(), viewport, &previous, self.settings);
        if self.state.set(active.clone()) {
            tracing::debug!(from = %previous, to = %active, "Active section changed");
        }
        active
    }

    /// Marks `id` active immediately and returns the scroll offset of its
    /// top edge.
    ///
    /// Unregistered or not-yet-laid-out sections are ignored: nothing changes
    /// and `None` is returned.
    pub fn scroll_to_section(&mut self, id: &SectionId) -> Option<f32> {
        let Some(section) = self.sections.iter().find(|section| section.id == *id) else {
            tracing::debug!(section = %id, "Ignoring scroll to unregistered section");
            return None;
        };
        let Some(bounds) = section.handle.bounds() else {
            tracing::debug!(section = %id, "Ignoring scroll to section without layout");
            return None;
        };

        self.state.set(id.clone());
        Some(bounds.top)
    }

    #[must_use]
    pub fn active(&self) -> SectionId {
        self.state.active()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn subscribe(&self) -> watch::Receiver<SectionId> {
        self.state.subscribe()
    }

    pub fn settings(&self) -> TrackerSettings {
        self.settings
    }
}
