//! Supported display languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// A display language with its own dictionary.
///
/// Adding a language means adding a variant here and a matching
/// `i18n/<code>/kisan-ui.ftl` file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Hi,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 2] = [LanguageCode::En, LanguageCode::Hi];

    /// Short code, as persisted and as written to the document `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
        }
    }

    /// Dictionary key holding the language's own name (shown in the switcher).
    pub fn name_key(self) -> &'static str {
        match self {
            LanguageCode::En => "language.en",
            LanguageCode::Hi => "language.hi",
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code `{0}`")]
pub struct UnknownLanguage(pub String);

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        LanguageCode::ALL
            .into_iter()
            .find(|lang| lang.code() == normalized)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(LanguageCode::default(), LanguageCode::En);
    }

    #[test]
    fn parses_codes_loosely() {
        assert_eq!("hi".parse(), Ok(LanguageCode::Hi));
        assert_eq!(" EN ".parse(), Ok(LanguageCode::En));
    }

    #[test]
    fn rejects_unknown_codes() {
        for raw in ["", "fr", "en-US", "hindi"] {
            assert!(raw.parse::<LanguageCode>().is_err(), "{raw} should not parse");
        }
    }

    #[test]
    fn serializes_as_bare_code() {
        assert_eq!(serde_json::to_string(&LanguageCode::Hi).unwrap(), "\"hi\"");
    }

    #[test]
    fn langid_matches_code() {
        for lang in LanguageCode::ALL {
            assert_eq!(lang.langid().to_string(), lang.code());
        }
    }
}
