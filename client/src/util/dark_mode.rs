//! Browser backend for the theme store.
//!
//! Reads the saved preference from `localStorage` and the
//! `prefers-color-scheme` media query, and toggles the `dark` class on the
//! `<html>` element.
//!
//! Without the `hydrate` feature there is no window: `load` and `ambient`
//! report nothing, `apply` does nothing, and `save` returns
//! `StorageError::Unavailable`. `ThemeStore` then keeps the theme in memory
//! only.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{StorageError, Theme, ThemeBackend};

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document element for the dark variant.
pub const DARK_CLASS: &str = "dark";

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `ThemeBackend` over `window.localStorage` and the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTheme;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl ThemeBackend for BrowserTheme {
    fn load(&self) -> Option<Theme> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
            Theme::parse(&raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn ambient(&self) -> Option<Theme> {
        #[cfg(feature = "hydrate")]
        {
            let query = web_sys::window()?.match_media(DARK_QUERY).ok().flatten()?;
            Some(if query.matches() { Theme::Dark } else { Theme::Light })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn apply(&self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = el.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }

    fn save(&self, theme: Theme) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(STORAGE_KEY, theme.as_str())
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
            Err(StorageError::Unavailable)
        }
    }
}
