use dioxus::prelude::*;

use crate::i18n::I18n;

/// Service cards, by dictionary namespace (`features.<id>.title` etc.).
pub(crate) const SERVICES: [&str; 4] = ["consult", "visit", "advice", "tips"];

/// Landing page: hero, services grid and closing call to action.
#[component]
pub fn Home(i18n: I18n) -> Element {
    rsx! {
        main { id: "top", class: "page page-home",
            Hero { i18n }
            Services { i18n }
            CallToAction { i18n }
        }
    }
}

#[component]
fn Hero(i18n: I18n) -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero__title", {i18n.t("hero.title")} }
            p { class: "hero__subtitle", {i18n.t("hero.subtitle")} }
            div { class: "hero__actions",
                a { class: "button button--primary", href: "#services", {i18n.t("hero.cta")} }
                a { class: "button button--secondary", href: "#about", {i18n.t("hero.secondary")} }
            }
        }
    }
}

#[component]
fn Services(i18n: I18n) -> Element {
    rsx! {
        section { id: "services", class: "services",
            h2 { {i18n.t("features.title")} }
            p { class: "services__subtitle", {i18n.t("features.subtitle")} }
            div { class: "services__grid",
                for id in SERVICES {
                    article { key: "{id}", class: "service-card service-card--{id}",
                        h3 { {i18n.t(&format!("features.{id}.title"))} }
                        p { {i18n.t(&format!("features.{id}.desc"))} }
                        a { class: "service-card__cta", href: "#contact",
                            {i18n.t(&format!("features.{id}.cta"))}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CallToAction(i18n: I18n) -> Element {
    rsx! {
        section { id: "about", class: "cta",
            h2 { {i18n.t("cta.title")} }
            p { {i18n.t("cta.subtitle")} }
            a { class: "button button--primary", href: "#contact", {i18n.t("cta.button")} }
        }
    }
}
