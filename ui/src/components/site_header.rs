use dioxus::prelude::*;

use super::LanguageSwitcher;
use crate::i18n::I18n;

/// In-page sections the header links to, paired with their label keys.
const NAV_LINKS: [(&str, &str); 4] = [
    ("#top", "home"),
    ("#services", "services"),
    ("#about", "about"),
    ("#contact", "contact"),
];

/// Top bar: brand, section links, language switcher and the login action.
#[component]
pub fn SiteHeader(i18n: I18n) -> Element {
    let mut menu_open = use_signal(|| false);
    let links_class = if menu_open() {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#top",
                    span { class: "navbar__brand-mark", "Kisan Bhasha Bandhu" }
                }

                nav { class: "{links_class}",
                    for (href, key) in NAV_LINKS {
                        a {
                            key: "{key}",
                            class: "navbar__link",
                            href: "{href}",
                            onclick: move |_| menu_open.set(false),
                            {i18n.t(key)}
                        }
                    }
                }

                div { class: "navbar__actions",
                    LanguageSwitcher { i18n }
                    a { class: "button button--primary", href: "#contact", {i18n.t("login")} }
                    button {
                        class: "navbar__menu-toggle",
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }
        }
    }
}
