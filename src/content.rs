// SPDX-License-Identifier: MPL-2.0
//! Static catalog of the portfolio's page sections.
//!
//! Sections are listed in document order. Each one carries its navigation
//! identifier (also used as the route segment) and the translation keys the
//! UI renders. Copy lives in the `.ftl` files, never here.

use crate::navigation::SectionId;

/// Years shown by the `about-experience` message.
pub const YEARS_OF_EXPERIENCE: u32 = 8;

/// Title and detail keys of one entry inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub title_key: &'static str,
    pub detail_key: &'static str,
}

const fn entry(title_key: &'static str, detail_key: &'static str) -> Entry {
    Entry {
        title_key,
        detail_key,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub nav_key: &'static str,
    pub title_key: &'static str,
    pub intro_key: &'static str,
    pub entries: &'static [Entry],
}

// Vertical space reserved per block, in logical pixels.
const HEADER_HEIGHT: f32 = 180.0;
const ENTRY_HEIGHT: f32 = 96.0;

impl Section {
    /// Height needed to show the section without clipping.
    #[must_use]
    pub fn min_height(&self) -> f32 {
        HEADER_HEIGHT + ENTRY_HEIGHT * self.entries.len() as f32
    }
}

pub const HOME: SectionId = SectionId::from_static("home");
pub const ABOUT: SectionId = SectionId::from_static("about");
pub const TIMELINE: SectionId = SectionId::from_static("timeline");
pub const PROJECTS: SectionId = SectionId::from_static("projects");
pub const SKILLS: SectionId = SectionId::from_static("skills");
pub const SERVICES: SectionId = SectionId::from_static("services");
pub const BLOG: SectionId = SectionId::from_static("blog");
pub const CONTACT: SectionId = SectionId::from_static("contact");

/// Every section in document order.
pub static SECTIONS: [Section; 8] = [
    Section {
        id: HOME,
        nav_key: "nav-home",
        title_key: "home-title",
        intro_key: "home-intro",
        entries: &[],
    },
    Section {
        id: ABOUT,
        nav_key: "nav-about",
        title_key: "about-title",
        intro_key: "about-intro",
        entries: &[],
    },
    Section {
        id: TIMELINE,
        nav_key: "nav-timeline",
        title_key: "timeline-title",
        intro_key: "timeline-intro",
        entries: &[
            entry("timeline-1-title", "timeline-1-detail"),
            entry("timeline-2-title", "timeline-2-detail"),
            entry("timeline-3-title", "timeline-3-detail"),
        ],
    },
    Section {
        id: PROJECTS,
        nav_key: "nav-projects",
        title_key: "projects-title",
        intro_key: "projects-intro",
        entries: &[
            entry("project-1-title", "project-1-detail"),
            entry("project-2-title", "project-2-detail"),
            entry("project-3-title", "project-3-detail"),
        ],
    },
    Section {
        id: SKILLS,
        nav_key: "nav-skills",
        title_key: "skills-title",
        intro_key: "skills-intro",
        entries: &[
            entry("skill-1-title", "skill-1-detail"),
            entry("skill-2-title", "skill-2-detail"),
            entry("skill-3-title", "skill-3-detail"),
        ],
    },
    Section {
        id: SERVICES,
        nav_key: "nav-services",
        title_key: "services-title",
        intro_key: "services-intro",
        entries: &[
            entry("service-1-title", "service-1-detail"),
            entry("service-2-title", "service-2-detail"),
            entry("service-3-title", "service-3-detail"),
        ],
    },
    Section {
        id: BLOG,
        nav_key: "nav-blog",
        title_key: "blog-title",
        intro_key: "blog-intro",
        entries: &[
            entry("blog-1-title", "blog-1-detail"),
            entry("blog-2-title", "blog-2-detail"),
        ],
    },
    Section {
        id: CONTACT,
        nav_key: "nav-contact",
        title_key: "contact-title",
        intro_key: "contact-intro",
        entries: &[
            entry("contact-email-title", "contact-email-detail"),
            entry("contact-social-title", "contact-social-detail"),
        ],
    },
];

/// The section shown before any scroll position is known.
#[must_use]
pub fn default_section() -> SectionId {
    HOME
}

/// Looks a section up by its route segment.
#[must_use]
pub fn find(slug: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.id.as_str() == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;
    use crate::locale::Language;
    use std::collections::HashSet;

    #[test]
    fn identifiers_are_unique() {
        let ids: HashSet<&str> = SECTIONS.iter().map(|section| section.id.as_str()).collect();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn first_section_is_the_default() {
        assert_eq!(SECTIONS[0].id, default_section());
    }

    #[test]
    fn find_matches_route_segments() {
        assert_eq!(find("projects").map(|section| &section.id), Some(&PROJECTS));
        assert!(find("Projects").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn every_key_is_translated() {
        for language in Language::ALL {
            let i18n = I18n::new(language);
            for section in &SECTIONS {
                let mut keys = vec![section.nav_key, section.title_key, section.intro_key];
                for entry in section.entries {
                    keys.push(entry.title_key);
                    keys.push(entry.detail_key);
                }
                for key in keys {
                    assert!(
                        !i18n.tr(key).starts_with("MISSING"),
                        "{key} missing for {}",
                        language.code()
                    );
                }
            }
        }
    }

    #[test]
    fn min_height_grows_with_entries() {
        assert!(find("timeline").map(Section::min_height) > find("about").map(Section::min_height));
    }
}
