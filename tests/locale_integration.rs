// SPDX-License-Identifier: MPL-2.0
use cosmic_folio::config;
use cosmic_folio::error::Error;
use cosmic_folio::locale::route::{HistoryRouter, Router};
use cosmic_folio::locale::{
    FixedLocale, Language, LanguageSource, LocaleResolver, ResolutionState,
};
use cosmic_folio::storage::{FileStore, MemoryStore, PreferenceStore, LANGUAGE_STORAGE_KEY};
use std::fs;
use tempfile::tempdir;

#[test]
fn selection_survives_a_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let data_dir = dir.path().to_path_buf();

    // First run: nothing stored, the system says Spanish.
    let (store, warning) = FileStore::open_in(Some(data_dir.clone()));
    assert!(warning.is_none());
    let mut resolver = LocaleResolver::new(store, FixedLocale::new("es-ES"), Language::Pt);
    let initial = resolver.initialize(true);
    assert_eq!(initial.code, Language::Es);
    assert_eq!(initial.source, LanguageSource::Inferred);

    let mut router = HistoryRouter::new("/es/blog");
    resolver
        .select_language("en", &mut router)
        .expect("en is supported");
    assert_eq!(router.current_path(), "/en/blog");

    // Second run: the stored choice beats the system language.
    let (store, warning) = FileStore::open_in(Some(data_dir));
    assert!(warning.is_none());
    assert_eq!(store.get(LANGUAGE_STORAGE_KEY).as_deref(), Some("en"));

    let mut resolver = LocaleResolver::new(store, FixedLocale::new("es-ES"), Language::Pt);
    let restarted = resolver.initialize(true);
    assert_eq!(restarted.code, Language::En);
    assert_eq!(restarted.source, LanguageSource::Persisted);
    assert_eq!(resolver.state(), ResolutionState::Persisted(restarted));
}

#[test]
fn corrupt_storage_falls_back_to_inference_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("storage.cbor"), b"\xff\x00 definitely not cbor")
        .expect("Failed to write corrupt storage");

    let (store, warning) = FileStore::open_in(Some(dir.path().to_path_buf()));
    assert_eq!(warning.as_deref(), Some("warning-storage-load"));

    let resolver = LocaleResolver::new(store, FixedLocale::new("pt_BR.UTF-8"), Language::En);
    let preference = resolver.resolve_initial_language();
    assert_eq!(preference.code, Language::Pt);
    assert_eq!(preference.source, LanguageSource::Inferred);
}

#[test]
fn configured_default_applies_when_nothing_else_is_known() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\ndefault_language = \"es\"\n",
    )
    .expect("Failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let resolver = LocaleResolver::new(
        MemoryStore::new(),
        FixedLocale::unavailable(),
        config.general.default_language,
    );
    let preference = resolver.resolve_initial_language();
    assert_eq!(preference.code, Language::Es);
    assert_eq!(preference.source, LanguageSource::Default);
}

#[test]
fn stale_stored_value_is_replaced_by_the_next_selection() {
    let store = MemoryStore::with_entries([(LANGUAGE_STORAGE_KEY, "de")]);
    let mut resolver = LocaleResolver::new(store, FixedLocale::new("fr-FR"), Language::Pt);

    let preference = resolver.resolve_initial_language();
    assert_eq!(preference.code, Language::Pt);
    assert_eq!(preference.source, LanguageSource::Default);

    let mut router = HistoryRouter::new("/");
    let err = resolver
        .select_language("de", &mut router)
        .expect_err("de is unsupported");
    assert_eq!(err, Error::InvalidLocale("de".to_string()));
    assert_eq!(router.history(), ["/"]);

    resolver
        .select_language("es", &mut router)
        .expect("es is supported");
    assert_eq!(
        resolver.store().get(LANGUAGE_STORAGE_KEY).as_deref(),
        Some("es")
    );
    assert_eq!(router.history(), ["/", "/es"]);
}
