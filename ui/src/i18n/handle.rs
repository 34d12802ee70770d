use dioxus::prelude::*;

use super::{LanguageCode, LanguageState};

/// Handle to the root-owned [`LanguageState`], passed to components as a prop.
///
/// Reading through the handle subscribes the calling component, so a
/// language change re-renders every consumer in the same pass.
#[derive(Clone, Copy, PartialEq)]
pub struct I18n {
    state: Signal<LanguageState>,
}

impl I18n {
    pub fn language(&self) -> LanguageCode {
        self.state.read().language()
    }

    pub fn t(&self, key: &str) -> String {
        self.state.read().translate(key)
    }

    pub fn set_language(&self, language: LanguageCode) {
        let mut state = self.state;
        state.write().set_language(language);
    }
}

/// Create the application's language state once, at the composition root.
pub fn use_i18n_root(init: impl FnOnce() -> LanguageState) -> I18n {
    let state = use_signal(init);
    I18n { state }
}
