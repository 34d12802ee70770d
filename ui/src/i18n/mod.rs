//! Internationalization (i18n) support for `kisan-ui`.
//!
//! This module wires together:
//! - `fluent` (one bundle per language, plain-text messages)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - a [`PreferenceStore`](crate::core::storage::PreferenceStore) that keeps
//!   the chosen language across reloads
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en/kisan-ui.ftl   (default language)
//!   hi/kisan-ui.ftl
//! ```
//!
//! Keys are dot-namespaced (`advice.form.title`); in the FTL files the dots
//! are written as hyphens (`advice-form-title`) because Fluent ids cannot
//! contain dots.
//!
//! Lookups never fail. A key missing from the active language renders as the
//! key itself, even when another language has it.
//!
//! Usage at the application root:
//! ```ignore
//! let i18n = ui::i18n::use_i18n_root(LanguageState::initialize_default);
//! rsx! { SiteHeader { i18n } }
//! ```
//! and inside a component that received the handle:
//! ```ignore
//! rsx! { h1 { {i18n.t("hero.title")} } }
//! ```
//!
//! To add a language:
//! 1. Add a [`LanguageCode`] variant.
//! 2. Copy `en/kisan-ui.ftl` to `i18n/<code>/kisan-ui.ftl` and translate each value.
//! 3. Run tests to see which keys are still missing.

mod catalog;
mod config;
mod handle;
mod language;
mod provider;

pub use catalog::{Catalog, CatalogError};
pub use config::I18nConfig;
pub use handle::{use_i18n_root, I18n};
pub use language::{LanguageCode, UnknownLanguage};
pub use provider::LanguageState;
