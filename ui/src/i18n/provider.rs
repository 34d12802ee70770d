//! The active language and everything that changes with it.

use crate::core::document::{HtmlRoot, LangAttribute};
use crate::core::storage::{self, PreferenceStore};

use super::{Catalog, I18nConfig, LanguageCode};

/// Application-wide language state: created once at the root, changed only
/// through [`LanguageState::set_language`].
///
/// Every operation is total. Storage and document failures are logged and
/// never undo an in-memory change.
pub struct LanguageState {
    language: LanguageCode,
    catalog: Catalog,
    store: Box<dyn PreferenceStore>,
    document: Box<dyn LangAttribute>,
    config: I18nConfig,
}

impl LanguageState {
    /// Restore the persisted language (or the configured default) and apply it.
    pub fn initialize(
        catalog: Catalog,
        store: Box<dyn PreferenceStore>,
        document: Box<dyn LangAttribute>,
        config: I18nConfig,
    ) -> Self {
        let language = restore(store.as_ref(), &config);
        let mut state = Self {
            language,
            catalog,
            store,
            document,
            config,
        };
        state.apply();
        state
    }

    /// Embedded dictionaries, the platform's preference store and the real
    /// document root.
    pub fn initialize_default() -> Self {
        let catalog = Catalog::embedded().unwrap_or_else(|err| {
            tracing::error!(%err, "failed to load dictionaries; keys will render as-is");
            Catalog::empty()
        });
        Self::initialize(
            catalog,
            storage::default_store(),
            Box::new(HtmlRoot),
            I18nConfig::default(),
        )
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn set_language(&mut self, language: LanguageCode) {
        tracing::info!(from = %self.language, to = %language, "switching language");
        self.language = language;
        self.apply();
    }

    /// Look up `key` in the active language; a miss returns `key` itself.
    pub fn translate(&self, key: &str) -> String {
        self.catalog.translate(self.language, key)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn apply(&mut self) {
        let code = self.language.code();
        self.document.set_lang(code);
        if let Err(err) = self.store.save(&self.config.storage_key, code) {
            tracing::warn!(%err, code, "could not persist language preference");
        }
    }
}

fn restore(store: &dyn PreferenceStore, config: &I18nConfig) -> LanguageCode {
    let saved = match store.load(&config.storage_key) {
        Ok(saved) => saved,
        Err(err) => {
            tracing::warn!(%err, "could not read language preference");
            None
        }
    };
    match saved.map(|raw| raw.parse::<LanguageCode>()) {
        Some(Ok(language)) => language,
        Some(Err(err)) => {
            tracing::debug!(%err, "ignoring persisted language");
            config.default_language
        }
        None => config.default_language,
    }
}
