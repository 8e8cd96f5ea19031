// SPDX-License-Identifier: MPL-2.0
//! Language resolution and selection.
//!
//! The [`LocaleResolver`] decides once, at start-up, which supported
//! [`Language`] to present, and lets the visitor override that choice later.
//! Resolution follows a strict precedence:
//!
//! 1. a supported code persisted in durable storage,
//! 2. the primary subtag of the system language, if supported,
//! 3. the configured default.
//!
//! Explicit selections are persisted under [`LANGUAGE_STORAGE_KEY`] and
//! re-prefix the current route with the new code (see [`route`]).

pub mod route;

use crate::error::{Error, Result};
use crate::storage::{PreferenceStore, LANGUAGE_STORAGE_KEY};
use route::{localize_path, Router};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

// =============================================================================
// Language
// =============================================================================

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
}

impl Language {
    /// Every supported language, in picker order.
    pub const ALL: [Language; 3] = [Language::Pt, Language::En, Language::Es];

    /// Short code used in storage and as the first route segment.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Looks up a supported language by its code (ASCII case-insensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
    }

    /// Name of the language in that language, for the picker.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Pt => "Português",
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    /// Fluent language identifier for this language.
    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| Error::InvalidLocale(s.to_string()))
    }
}

/// Extracts the supported language from a system or browser language tag.
///
/// Accepts BCP 47 tags (`en-US`) as well as POSIX locale names
/// (`pt_BR.UTF-8`, `es_ES@euro`); only the primary subtag is considered.
#[must_use]
pub fn language_from_tag(tag: &str) -> Option<Language> {
    let tag = tag.trim();
    let tag = tag.split(['.', '@']).next().unwrap_or(tag).replace('_', "-");

    match tag.parse::<LanguageIdentifier>() {
        Ok(langid) => Language::from_code(langid.language.as_str()),
        Err(_) => tag.split('-').next().and_then(Language::from_code),
    }
}

// =============================================================================
// Preference
// =============================================================================

/// Where a resolved language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    /// Chosen by the visitor (language picker, `--lang`, deep link).
    Explicit,
    /// Read back from durable storage.
    Persisted,
    /// Derived from the system language.
    Inferred,
    /// Fixed fallback.
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePreference {
    pub code: Language,
    pub source: LanguageSource,
}

impl LanguagePreference {
    #[must_use]
    pub fn new(code: Language, source: LanguageSource) -> Self {
        Self { code, source }
    }
}

/// Lifecycle of the resolver's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    Unresolved,
    /// Resolved for this session but not yet written to storage.
    Resolved(LanguagePreference),
    Persisted(LanguagePreference),
}

// =============================================================================
// Environment
// =============================================================================

/// Read-only view of the host's language settings.
pub trait LanguageEnvironment {
    /// The system's preferred language tag, if known.
    fn language_tag(&self) -> Option<String>;
}

/// Reads the operating system locale through `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl<T: LanguageEnvironment + ?Sized> LanguageEnvironment for Box<T> {
    fn language_tag(&self) -> Option<String> {
        (**self).language_tag()
    }
}

impl LanguageEnvironment for SystemLocale {
    fn language_tag(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Environment reporting a fixed tag. `None` models missing locale data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocale(pub Option<String>);

impl FixedLocale {
    pub fn new(tag: &str) -> Self {
        Self(Some(tag.to_string()))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl LanguageEnvironment for FixedLocale {
    fn language_tag(&self) -> Option<String> {
        self.0.clone()
    }
}

// =============================================================================
// LocaleResolver
// =============================================================================

/// Owns the language decision: reads storage and environment, persists
/// explicit selections, and drives route changes.
#[derive(Debug)]
pub struct LocaleResolver<S, E> {
    store: S,
    environment: E,
    default_language: Language,
    state: ResolutionState,
}

impl<S: PreferenceStore, E: LanguageEnvironment> LocaleResolver<S, E> {
    pub fn new(store: S, environment: E, default_language: Language) -> Self {
        Self {
            store,
            environment,
            default_language,
            state: ResolutionState::Unresolved,
        }
    }

    /// Computes the initial language without side effects.
    ///
    /// Always returns a supported language: persisted beats inferred beats
    /// default. Invalid persisted values and unknown system tags are skipped.
    pub fn resolve_initial_language(&self) -> LanguagePreference {
        if let Some(code) = self
            .store
            .get(LANGUAGE_STORAGE_KEY)
            .as_deref()
            .and_then(Language::from_code)
        {
            return LanguagePreference::new(code, LanguageSource::Persisted);
        }

        if let Some(code) = self
            .environment
            .language_tag()
            .as_deref()
            .and_then(language_from_tag)
        {
            return LanguagePreference::new(code, LanguageSource::Inferred);
        }

        LanguagePreference::new(self.default_language, LanguageSource::Default)
    }

    /// Resolves the initial language and records it.
    ///
    /// With `persist` set, an inferred or default result is written to
    /// storage so the next start reads it back. A failed write leaves the
    /// state at `Resolved` and is only logged.
    pub fn initialize(&mut self, persist: bool) -> LanguagePreference {
        let preference = self.resolve_initial_language();

        self.state = match preference.source {
            LanguageSource::Persisted => ResolutionState::Persisted(preference),
            _ if persist => match self.store.set(LANGUAGE_STORAGE_KEY, preference.code.code()) {
                Ok(()) => ResolutionState::Persisted(preference),
                Err(err) => {
                    tracing::warn!("Failed to persist resolved language: {err}");
                    ResolutionState::Resolved(preference)
                }
            },
            _ => ResolutionState::Resolved(preference),
        };

        tracing::info!(
            language = preference.code.code(),
            source = ?preference.source,
            "Resolved initial language"
        );
        preference
    }

    /// Explicitly selects `code`, persists it and navigates to the current
    /// route re-prefixed with the new language.
    ///
    /// Unsupported codes fail with [`Error::InvalidLocale`] before anything is
    /// mutated. Calling twice with the same code yields the same stored value
    /// and the same route.
    pub fn select_language<R: Router + ?Sized>(
        &mut self,
        code: &str,
        router: &mut R,
    ) -> Result<LanguagePreference> {
        let language = Language::from_code(code).ok_or_else(|| Error::InvalidLocale(code.to_string()))?;
        let preference = LanguagePreference::new(language, LanguageSource::Explicit);

        match self.store.set(LANGUAGE_STORAGE_KEY, language.code()) {
            Ok(()) => self.state = ResolutionState::Persisted(preference),
            Err(err) => {
                tracing::warn!(language = language.code(), "Failed to persist language: {err}");
                self.state = ResolutionState::Resolved(preference);
            }
        }

        let destination = localize_path(router.current_path(), language);
        if destination != router.current_path() {
            router.navigate(destination);
        }

        tracing::info!(language = language.code(), "Language selected");
        Ok(preference)
    }

    /// The language last resolved or selected, if any.
    pub fn current(&self) -> Option<LanguagePreference> {
        match self.state {
            ResolutionState::Unresolved => None,
            ResolutionState::Resolved(preference) | ResolutionState::Persisted(preference) => {
                Some(preference)
            }
        }
    }

    /// The language in effect: the last resolved or selected one, otherwise
    /// what [`Self::resolve_initial_language`] would pick now.
    pub fn current_language(&self) -> Language {
        self.current()
            .map_or_else(|| self.resolve_initial_language().code, |preference| preference.code)
    }

    pub fn state(&self) -> ResolutionState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
