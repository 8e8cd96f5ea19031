// SPDX-License-Identifier: MPL-2.0
use cosmic_folio::config::{self, Config};
use cosmic_folio::content::{self, SECTIONS};
use cosmic_folio::navigation::{
    ActivationRule, FrameCoalescer, SectionId, SectionLayout, SectionTracker, ViewportMetrics,
};
use std::fs;
use tempfile::tempdir;

const VIEWPORT_HEIGHT: f32 = 800.0;

/// Registers every catalog section against a fresh layout, like the app does.
fn portfolio(config: &Config) -> (SectionTracker, SectionLayout) {
    let mut layout = SectionLayout::new();
    let mut tracker =
        SectionTracker::new(content::default_section(), config.navigation.tracker_settings());
    for section in SECTIONS.iter() {
        let slot = layout.push(section.id.clone(), section.min_height());
        tracker.register_section(section.id.clone(), slot);
    }
    (tracker, layout)
}

fn viewport(layout: &SectionLayout, top: f32) -> ViewportMetrics {
    ViewportMetrics::new(top, VIEWPORT_HEIGHT, layout.document_height())
}

#[test]
fn scrolling_through_the_page_visits_every_section_in_order() {
    let (mut tracker, mut layout) = portfolio(&Config::default());
    layout.relayout(VIEWPORT_HEIGHT);

    let mut visited: Vec<SectionId> = Vec::new();
    let max_scroll = layout.document_height() - VIEWPORT_HEIGHT;
    let mut top = 0.0;
    while top <= max_scroll {
        let active = tracker.update(viewport(&layout, top));
        if visited.last() != Some(&active) {
            visited.push(active);
        }
        top += 50.0;
    }

    let expected: Vec<SectionId> = SECTIONS.iter().map(|section| section.id.clone()).collect();
    assert_eq!(visited, expected);
}

#[test]
fn tracker_reads_fresh_geometry_after_relayout() {
    let (mut tracker, mut layout) = portfolio(&Config::default());

    // Before layout nothing is measurable and the default stays active.
    assert_eq!(tracker.update(ViewportMetrics::new(1000.0, 800.0, 0.0)), content::HOME);
    assert_eq!(tracker.scroll_to_section(&content::ABOUT), None);

    layout.relayout(VIEWPORT_HEIGHT);
    assert_eq!(tracker.scroll_to_section(&content::ABOUT), Some(800.0));

    // A taller viewport moves every section further down.
    layout.relayout(1000.0);
    assert_eq!(tracker.scroll_to_section(&content::ABOUT), Some(1000.0));
    assert_eq!(
        tracker.update(ViewportMetrics::new(2000.0, 1000.0, layout.document_height())),
        content::TIMELINE
    );
}

#[test]
fn last_section_wins_within_bottom_tolerance() {
    let (mut tracker, mut layout) = portfolio(&Config::default());
    // A tall viewport leaves every block at the viewport height.
    layout.relayout(VIEWPORT_HEIGHT);
    let bottom = layout.document_height() - VIEWPORT_HEIGHT;

    assert_eq!(tracker.update(viewport(&layout, bottom)), content::CONTACT);
    assert_eq!(tracker.update(viewport(&layout, bottom - 2.0)), content::CONTACT);
}

#[test]
fn viewport_top_rule_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[navigation]\nactivation = \"viewport-top\"\nbottom_tolerance_px = 0.0\n",
    )
    .expect("Failed to write settings");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.navigation.activation, ActivationRule::ViewportTop);

    let (mut tracker, mut layout) = portfolio(&config);
    layout.relayout(VIEWPORT_HEIGHT);

    // One pixel above the second section's top, the first section is active.
    assert_eq!(tracker.update(viewport(&layout, 799.0)), content::HOME);
    assert_eq!(tracker.update(viewport(&layout, 800.0)), content::ABOUT);
}

#[test]
fn coalesced_burst_triggers_one_recomputation() {
    let (mut tracker, mut layout) = portfolio(&Config::default());
    layout.relayout(VIEWPORT_HEIGHT);
    let mut changes = tracker.subscribe();
    changes.mark_unchanged();

    let mut coalescer = FrameCoalescer::new();
    let mut frame_requests = 0;
    for step in 0..=20 {
        if coalescer.submit(viewport(&layout, step as f32 * 80.0)) {
            frame_requests += 1;
        }
    }
    assert_eq!(frame_requests, 1);
    assert_eq!(coalescer.dropped(), 20);

    let latest = coalescer.flush().expect("one value pending");
    assert_eq!(tracker.update(latest), content::TIMELINE);
    assert!(changes.has_changed().expect("tracker alive"));
    assert_eq!(*changes.borrow_and_update(), content::TIMELINE);
    assert!(coalescer.flush().is_none());
}
