use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::components::{SiteFooter, SiteHeader};
use ui::i18n::{use_i18n_root, LanguageState};
use ui::views::Home;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    tracing::info!("starting Kisan Bhasha Bandhu web");
    dioxus::launch(App);
}

/// Composition root: owns the language state and hands it to every section.
#[component]
fn App() -> Element {
    let i18n = use_i18n_root(LanguageState::initialize_default);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        SiteHeader { i18n }
        Home { i18n }
        SiteFooter { i18n }
    }
}
