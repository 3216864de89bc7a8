//! Mirrors the current [`Theme`] onto the document's `data-theme` attribute,
//! which the stylesheet keys its colour variables off.

use store::Theme;

/// Presentation side channel for the active theme.
pub trait ThemeAttribute {
    fn apply(&self, theme: Theme);
}

/// Sets `data-theme` on `<html>` of the running document.
///
/// On the web this goes straight through `web_sys`; other renderers run the
/// equivalent script through [`dioxus::document::eval`], so it must be called
/// from inside the Dioxus runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DocumentTheme;

impl ThemeAttribute for DocumentTheme {
    fn apply(&self, theme: Theme) {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                if el.set_attribute("data-theme", theme.as_str()).is_err() {
                    tracing::warn!("Failed to set data-theme={}", theme);
                }
            }
        }
        #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
        {
            let _ = dioxus::document::eval(&format!(
                "document.documentElement.setAttribute('data-theme', '{}');",
                theme.as_str()
            ));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every applied theme.
    #[derive(Default)]
    pub(crate) struct RecordingTheme {
        pub applied: RefCell<Vec<Theme>>,
    }

    impl RecordingTheme {
        pub fn current(&self) -> Option<Theme> {
            self.applied.borrow().last().copied()
        }
    }

    impl ThemeAttribute for RecordingTheme {
        fn apply(&self, theme: Theme) {
            self.applied.borrow_mut().push(theme);
        }
    }
}
