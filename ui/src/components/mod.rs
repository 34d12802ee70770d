//! Chrome shared by every page. Each component takes the [`I18n`](crate::i18n::I18n)
//! handle as a prop.

mod language_switcher;
pub use language_switcher::LanguageSwitcher;

mod site_footer;
pub use site_footer::SiteFooter;

mod site_header;
pub use site_header::SiteHeader;
