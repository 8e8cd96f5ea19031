// SPDX-License-Identifier: MPL-2.0
//! Language-prefixed routes.
//!
//! Every route starts with the language code as its first segment
//! (`/pt/projects`, `/en/about`). Switching language rewrites that segment in
//! place; a route without a recognized language segment gets one prepended.

use super::Language;

/// Performs the actual route change for a language switch.
pub trait Router {
    fn current_path(&self) -> &str;
    fn navigate(&mut self, path: String);
}

/// Router that keeps every visited path; the last one is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRouter {
    history: Vec<String>,
}

impl HistoryRouter {
    pub fn new(initial_path: &str) -> Self {
        Self {
            history: vec![initial_path.to_string()],
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Router for HistoryRouter {
    fn current_path(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("/")
    }

    fn navigate(&mut self, path: String) {
        self.history.push(path);
    }
}

/// Splits `/a/b?x#y` into (`a/b`, `?x#y`).
fn split_suffix(path: &str) -> (&str, &str) {
    let cut = path.find(['?', '#']).unwrap_or(path.len());
    let (body, suffix) = path.split_at(cut);
    (body.trim_start_matches('/'), suffix)
}

/// Returns `path` with its first segment set to `language`.
///
/// An existing supported language segment is replaced, otherwise one is
/// prepended. Query strings and fragments are preserved. The function is
/// idempotent for a fixed language.
#[must_use]
pub fn localize_path(path: &str, language: Language) -> String {
    let (body, suffix) = split_suffix(path);

    let rest = match body.split_once('/') {
        Some((first, rest)) if Language::from_code(first).is_some() => rest,
        None if Language::from_code(body).is_some() => "",
        _ => body,
    };

    if rest.is_empty() {
        format!("/{}{}", language.code(), suffix)
    } else {
        format!("/{}/{}{}", language.code(), rest, suffix)
    }
}

/// A parsed `/<language>/<section>` route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    pub language: Option<Language>,
    pub section: Option<String>,
}

impl Route {
    /// Parses a route; both segments are optional and unknown languages are
    /// treated as the section segment.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let (body, _) = split_suffix(path);
        let mut segments = body.split('/').filter(|segment| !segment.is_empty());

        let first = segments.next();
        let (language, section) = match first.and_then(Language::from_code) {
            Some(language) => (Some(language), segments.next()),
            None => (None, first),
        };

        Self {
            language,
            section: section.map(str::to_string),
        }
    }

    #[must_use]
    pub fn new(language: Language, section: Option<&str>) -> Self {
        Self {
            language: Some(language),
            section: section.map(str::to_string),
        }
    }

    /// Renders the route back to a path.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        if let Some(language) = self.language {
            path.push('/');
            path.push_str(language.code());
        }
        if let Some(section) = &self.section {
            path.push('/');
            path.push_str(section);
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_existing_language_segment() {
        assert_eq!(localize_path("/pt/projects", Language::En), "/en/projects");
        assert_eq!(localize_path("/es", Language::Pt), "/pt");
        assert_eq!(localize_path("/EN/about", Language::Es), "/es/about");
    }

    #[test]
    fn prepends_when_no_language_segment() {
        assert_eq!(localize_path("/projects", Language::En), "/en/projects");
        assert_eq!(localize_path("/", Language::Es), "/es");
        assert_eq!(localize_path("", Language::Pt), "/pt");
        assert_eq!(localize_path("/fr/blog", Language::En), "/en/fr/blog");
    }

    #[test]
    fn keeps_query_and_fragment() {
        assert_eq!(
            localize_path("/pt/projects?tab=web#top", Language::En),
            "/en/projects?tab=web#top"
        );
        assert_eq!(localize_path("/?ref=cv", Language::Es), "/es?ref=cv");
    }

    #[test]
    fn localize_is_idempotent() {
        for path in ["/", "/pt/projects", "/about", "/es/", "/en/a/b?c"] {
            let once = localize_path(path, Language::En);
            assert_eq!(localize_path(&once, Language::En), once, "path={path}");
        }
    }

    #[test]
    fn route_parse_reads_language_and_section() {
        assert_eq!(
            Route::parse("/en/projects"),
            Route::new(Language::En, Some("projects"))
        );
        assert_eq!(
            Route::parse("/contact"),
            Route {
                language: None,
                section: Some("contact".to_string()),
            }
        );
        assert_eq!(Route::parse("/"), Route::default());
        assert_eq!(Route::parse("/pt/"), Route::new(Language::Pt, None));
    }

    #[test]
    fn route_path_round_trips_through_parse() {
        let route = Route::new(Language::Es, Some("skills"));
        assert_eq!(route.path(), "/es/skills");
        assert_eq!(Route::parse(&route.path()), route);
        assert_eq!(Route::default().path(), "/");
    }

    #[test]
    fn history_router_tracks_current_path() {
        let mut router = HistoryRouter::new("/pt");
        router.navigate("/en".to_string());
        assert_eq!(router.current_path(), "/en");
        assert_eq!(router.history().len(), 2);
    }
}
