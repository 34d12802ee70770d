//! Shared UI crate for Kisan Bhasha Bandhu: localization, preference storage
//! and the components every page is built from.

use dioxus::prelude::*;

pub mod components;
pub mod core;
pub mod i18n;
pub mod views;

/// Shared theme stylesheet (`ui/assets/theme/main.css`).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
