use super::LanguageCode;

/// Where the language preference lives and what to use without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
    /// Key under which the language code is persisted.
    pub storage_key: String,
    /// Language used when nothing valid is persisted.
    pub default_language: LanguageCode,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            storage_key: "language".to_string(),
            default_language: LanguageCode::En,
        }
    }
}
