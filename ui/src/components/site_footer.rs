use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::i18n::I18n;
use crate::views::SERVICES;

/// Section anchors repeated in the footer, with their label keys.
const QUICK_LINKS: [(&str, &str); 4] = [
    ("#top", "home"),
    ("#about", "about"),
    ("#services", "services"),
    ("#contact", "contact"),
];

const ADDRESS: [&str; 4] = [
    "123 Farming Road",
    "Agricultural District",
    "hello@kisanbhashabandhu.com",
    "+91 98765 43210",
];

#[component]
pub fn SiteFooter(i18n: I18n) -> Element {
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { id: "contact", class: "footer",
            div { class: "footer__inner",
                div { class: "footer__columns",
                    div { class: "footer__column footer__column--brand",
                        span { class: "footer__brand", "Kisan Bhasha Bandhu" }
                        p { class: "footer__tagline", {i18n.t("hero.subtitle")} }
                    }

                    nav { class: "footer__column footer__column--links",
                        ul { class: "footer__list",
                            for (href, key) in QUICK_LINKS {
                                li { key: "{key}",
                                    a { href: "{href}", {i18n.t(key)} }
                                }
                            }
                        }
                    }

                    div { class: "footer__column footer__column--services",
                        h4 { class: "footer__heading", {i18n.t("services")} }
                        ul { class: "footer__list",
                            for id in SERVICES {
                                li { key: "{id}",
                                    a { href: "#services", {i18n.t(&format!("features.{id}.title"))} }
                                }
                            }
                        }
                    }

                    div { class: "footer__column footer__column--contact",
                        h4 { class: "footer__heading", {i18n.t("contact")} }
                        address { class: "footer__address",
                            for line in ADDRESS {
                                p { key: "{line}", "{line}" }
                            }
                        }
                    }
                }

                div { class: "footer__bottom",
                    p { class: "footer__rights",
                        "© {year} Kisan Bhasha Bandhu. "
                        {i18n.t("footer.rights")}
                    }
                    nav { class: "footer__links",
                        a { href: "#privacy", {i18n.t("footer.privacy")} }
                        a { href: "#terms", {i18n.t("footer.terms")} }
                    }
                }
            }
        }
    }
}
