#![cfg(not(target_arch = "wasm32"))]
//! Components re-render through the `I18n` handle: after a language switch
//! the whole tree shows the new language, with nothing left over from the old.

use std::collections::HashMap;

use dioxus::prelude::*;
use ui::components::SiteFooter;
use ui::core::document::HtmlRoot;
use ui::core::storage::MemoryStore;
use ui::i18n::{use_i18n_root, Catalog, I18n, I18nConfig, LanguageCode, LanguageState};
use ui::views::Home;

const EN_FTL: &str = include_str!("../i18n/en/kisan-ui.ftl");
const HI_FTL: &str = include_str!("../i18n/hi/kisan-ui.ftl");

fn dictionary(src: &str) -> HashMap<String, String> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once(" = "))
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect()
}

/// English values that read differently in Hindi.
fn english_only_values() -> Vec<String> {
    let en = dictionary(EN_FTL);
    let hi = dictionary(HI_FTL);
    en.into_iter()
        .filter(|(id, value)| hi.get(id).is_some_and(|translated| translated != value))
        .map(|(_, value)| value)
        .collect()
}

fn page() -> Element {
    let i18n = use_i18n_root(|| {
        LanguageState::initialize(
            Catalog::embedded().expect("embedded dictionaries parse"),
            Box::new(MemoryStore::new()),
            Box::new(HtmlRoot),
            I18nConfig::default(),
        )
    });
    use_hook(|| provide_root_context(i18n));

    rsx! {
        Home { i18n }
        SiteFooter { i18n }
    }
}

fn switch_to(dom: &mut VirtualDom, language: LanguageCode) {
    dom.in_runtime(|| {
        let i18n = ScopeId::ROOT
            .consume_context::<I18n>()
            .expect("page provides the handle");
        i18n.set_language(language);
    });
    dom.render_immediate_to_vec();
}

#[test]
fn first_render_uses_the_default_language() {
    let mut dom = VirtualDom::new(page);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Get Started Now"));
    assert!(html.contains("All rights reserved"));
    assert!(html.contains("Farming Tips"));
}

#[test]
fn switching_language_rerenders_every_consumer() {
    let mut dom = VirtualDom::new(page);
    dom.rebuild_in_place();
    switch_to(&mut dom, LanguageCode::Hi);
    let html = dioxus_ssr::render(&dom);

    // Home, footer services column and footer bottom bar.
    assert!(html.contains("अभी शुरू करें"));
    assert!(html.contains("खेती के टिप्स"));
    assert!(html.contains("सर्वाधिकार सुरक्षित"));

    let leftovers: Vec<_> = english_only_values()
        .into_iter()
        .filter(|value| html.contains(value.as_str()))
        .collect();
    assert!(leftovers.is_empty(), "English text after switching: {leftovers:?}");
}

#[test]
fn switching_back_restores_english() {
    let mut dom = VirtualDom::new(page);
    dom.rebuild_in_place();
    switch_to(&mut dom, LanguageCode::Hi);
    switch_to(&mut dom, LanguageCode::En);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Get Started Now"));
    assert!(!html.contains("अभी शुरू करें"));
    assert!(!html.contains("सर्वाधिकार सुरक्षित"));
}
