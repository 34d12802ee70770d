//! Per-language dictionaries backed by Fluent bundles.
//!
//! Each [`LanguageCode`] gets its own bundle built from
//! `i18n/<code>/kisan-ui.ftl`. Bundles are independent: a key missing from one
//! language is never looked up in another.

use std::collections::HashMap;

use fluent::{FluentBundle, FluentResource};
use rust_embed::Embed;

use super::LanguageCode;

/// Fluent "domain" (matches the crate / the FTL filename in every locale folder).
const DOMAIN: &str = "kisan-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no dictionary embedded for `{0}`")]
    Missing(LanguageCode),
    #[error("dictionary for `{0}` is not valid UTF-8")]
    Encoding(LanguageCode),
    #[error("dictionary for `{lang}` failed to parse: {}", errors.join("; "))]
    Parse {
        lang: LanguageCode,
        errors: Vec<String>,
    },
    #[error("dictionary for `{lang}` has conflicting entries: {}", errors.join("; "))]
    Conflict {
        lang: LanguageCode,
        errors: Vec<String>,
    },
}

/// All dictionaries known to the application.
pub struct Catalog {
    bundles: HashMap<LanguageCode, FluentBundle<FluentResource>>,
}

impl Catalog {
    /// A catalog that resolves nothing; every lookup misses.
    pub fn empty() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    /// Load the dictionaries compiled into the binary, one per [`LanguageCode`].
    pub fn embedded() -> Result<Self, CatalogError> {
        let mut catalog = Self::empty();
        for lang in LanguageCode::ALL {
            let path = format!("{}/{DOMAIN}.ftl", lang.code());
            let file = Localizations::get(&path).ok_or(CatalogError::Missing(lang))?;
            let source = String::from_utf8(file.data.into_owned())
                .map_err(|_| CatalogError::Encoding(lang))?;
            catalog.insert(lang, source)?;
        }
        tracing::debug!(languages = catalog.bundles.len(), "loaded embedded dictionaries");
        Ok(catalog)
    }

    /// Build from in-memory FTL sources. Languages without a source stay empty.
    pub fn from_sources(sources: &[(LanguageCode, &str)]) -> Result<Self, CatalogError> {
        let mut catalog = Self::empty();
        for (lang, source) in sources {
            catalog.insert(*lang, source.to_string())?;
        }
        Ok(catalog)
    }

    fn insert(&mut self, lang: LanguageCode, source: String) -> Result<(), CatalogError> {
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| CatalogError::Parse {
            lang,
            errors: errors.iter().map(|e| format!("{e:?}")).collect(),
        })?;

        let mut bundle = FluentBundle::new(vec![lang.langid()]);
        // Plain text only; isolation marks would leak into rendered strings.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| CatalogError::Conflict {
                lang,
                errors: errors.iter().map(|e| format!("{e:?}")).collect(),
            })?;

        self.bundles.insert(lang, bundle);
        Ok(())
    }

    /// Look up `key` in `lang`'s dictionary only.
    pub fn lookup(&self, lang: LanguageCode, key: &str) -> Option<String> {
        let id = message_id(key)?;
        let bundle = self.bundles.get(&lang)?;
        let pattern = bundle.get_message(&id)?.value()?;

        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::debug!(%lang, key, ?errors, "formatting reported errors");
        }
        Some(value.into_owned())
    }

    pub fn contains(&self, lang: LanguageCode, key: &str) -> bool {
        message_id(key)
            .zip(self.bundles.get(&lang))
            .is_some_and(|(id, bundle)| bundle.has_message(&id))
    }

    /// Translate with identity fallback: a miss returns `key` unchanged.
    pub fn translate(&self, lang: LanguageCode, key: &str) -> String {
        match self.lookup(lang, key) {
            Some(value) => value,
            None => {
                tracing::debug!(%lang, key, "missing translation");
                key.to_string()
            }
        }
    }
}

/// Map a dotted dictionary key to its Fluent message id (`a.b.c` -> `a-b-c`).
///
/// Only canonical keys map: ASCII alphanumerics and `_` in non-empty
/// dot-separated segments, starting with a letter. Anything else (including
/// keys already containing `-`) has no message id.
fn message_id(key: &str) -> Option<String> {
    let starts_with_letter = key.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    let segments_ok = key.split('.').all(|segment| {
        !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    });
    (starts_with_letter && segments_ok).then(|| key.replace('.', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = "cta-button = Get Started Now\nonly-en = English only\n";
    const HI: &str = "cta-button = अभी शुरू करें\n";

    fn small() -> Catalog {
        Catalog::from_sources(&[(LanguageCode::En, EN), (LanguageCode::Hi, HI)]).unwrap()
    }

    #[test]
    fn message_ids_replace_dots() {
        assert_eq!(message_id("home").as_deref(), Some("home"));
        assert_eq!(
            message_id("advice.results.newAdvice").as_deref(),
            Some("advice-results-newAdvice")
        );
        assert_eq!(message_id("a.1").as_deref(), Some("a-1"));
    }

    #[test]
    fn non_canonical_keys_have_no_id() {
        for key in ["", ".a", "a.", "a..b", "1a", "cta-button", "hero title", "ключ"] {
            assert_eq!(message_id(key), None, "{key:?}");
        }
    }

    #[test]
    fn lookup_is_per_language() {
        let catalog = small();
        assert_eq!(
            catalog.lookup(LanguageCode::En, "cta.button").as_deref(),
            Some("Get Started Now")
        );
        assert_eq!(
            catalog.lookup(LanguageCode::Hi, "cta.button").as_deref(),
            Some("अभी शुरू करें")
        );
        assert_eq!(catalog.lookup(LanguageCode::Hi, "only.en"), None);
    }

    #[test]
    fn hyphenated_key_does_not_reach_message() {
        let catalog = small();
        assert!(catalog.contains(LanguageCode::En, "cta.button"));
        assert!(!catalog.contains(LanguageCode::En, "cta-button"));
        assert_eq!(catalog.translate(LanguageCode::En, "cta-button"), "cta-button");
    }

    #[test]
    fn translate_falls_back_to_key() {
        let catalog = small();
        assert_eq!(catalog.translate(LanguageCode::Hi, "only.en"), "only.en");
        assert_eq!(Catalog::empty().translate(LanguageCode::En, "cta.button"), "cta.button");
    }

    #[test]
    fn parse_errors_are_reported() {
        let err = Catalog::from_sources(&[(LanguageCode::En, "= no id\n")])
            .err()
            .expect("parse should fail");
        assert!(matches!(err, CatalogError::Parse { lang: LanguageCode::En, .. }));
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let err = Catalog::from_sources(&[(LanguageCode::En, "a = one\na = two\n")])
            .err()
            .expect("duplicate should fail");
        assert!(matches!(err, CatalogError::Conflict { .. }));
    }

    #[test]
    fn embedded_dictionaries_load() {
        let catalog = Catalog::embedded().expect("embedded dictionaries parse");
        for lang in LanguageCode::ALL {
            assert!(catalog.contains(lang, lang.name_key()));
        }
    }
}
