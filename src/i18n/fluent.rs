// SPDX-License-Identifier: MPL-2.0
use crate::locale::Language;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current_language: Language,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_language", &self.current_language)
            .field("loaded", &self.bundles.len())
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

fn load_bundle(language: Language) -> Option<FluentBundle<FluentResource>> {
    let file = Asset::get(&format!("{}.ftl", language.code()))?;
    let source = String::from_utf8_lossy(file.data.as_ref()).to_string();

    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(
                language = language.code(),
                count = errors.len(),
                "Translation file has syntax errors; keeping valid entries"
            );
            resource
        }
    };

    let mut bundle = FluentBundle::new(vec![language.langid()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(
            language = language.code(),
            count = errors.len(),
            "Duplicate translation entries ignored"
        );
    }
    Some(bundle)
}

impl I18n {
    /// Loads every embedded translation and activates `language`.
    pub fn new(language: Language) -> Self {
        let bundles = Language::ALL
            .into_iter()
            .filter_map(|language| load_bundle(language).map(|bundle| (language, bundle)))
            .collect();

        Self {
            bundles,
            current_language: language,
        }
    }

    /// Switches the active language. Languages without a loaded bundle are
    /// ignored.
    pub fn set_language(&mut self, language: Language) {
        if self.bundles.contains_key(&language) {
            self.current_language = language;
        }
    }

    pub fn current_language(&self) -> Language {
        self.current_language
    }

    /// Languages with a loaded translation, in picker order.
    pub fn available_languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|language| self.bundles.contains_key(language))
            .collect()
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &FluentArgs) -> String {
        self.format(key, Some(args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_language) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}
