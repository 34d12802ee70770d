use dioxus::prelude::*;

use crate::i18n::{I18n, LanguageCode};

/// Drop-down listing every supported language by its own name.
#[component]
pub fn LanguageSwitcher(i18n: I18n) -> Element {
    let current = i18n.language();

    let on_change = move |evt: FormEvent| match evt.value().parse::<LanguageCode>() {
        Ok(language) => i18n.set_language(language),
        Err(err) => tracing::debug!(%err, "ignoring language selection"),
    };

    rsx! {
        div { class: "locale",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                {i18n.t("language.switch")}
            }
            select {
                id: "locale-select",
                class: "locale__select",
                value: "{current}",
                oninput: on_change,
                for language in LanguageCode::ALL {
                    option {
                        key: "{language}",
                        value: "{language}",
                        selected: language == current,
                        {i18n.t(language.name_key())}
                    }
                }
            }
        }
    }
}
