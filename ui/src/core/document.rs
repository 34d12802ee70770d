//! Document-level attributes written outside the component tree.

/// Receives the active language code for the document root's `lang` attribute.
pub trait LangAttribute {
    fn set_lang(&self, code: &str);
}

/// The real `<html>` element. Outside the browser there is no document and
/// this only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRoot;

impl LangAttribute for HtmlRoot {
    #[cfg(target_arch = "wasm32")]
    fn set_lang(&self, code: &str) {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        match root {
            Some(root) => {
                if let Err(err) = root.set_attribute("lang", code) {
                    tracing::debug!(?err, "failed to set document lang");
                }
            }
            None => tracing::debug!("no document element; lang attribute not set"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set_lang(&self, code: &str) {
        tracing::trace!(code, "document lang (no DOM on this platform)");
    }
}
