//! Light/dark preference store.
//!
//! DESIGN
//! ======
//! The store owns the resolved theme and routes every change through a
//! `ThemeBackend`, which applies the presentation flag and persists the
//! value. Browser wiring lives in `util::dark_mode`; tests use in-memory
//! backends.
//!
//! Persistence is best-effort: a failed save is logged and the theme still
//! applies for the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Two-valued presentation preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `light` or `dark` is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from the persistent key-value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage rejected write: {0}")]
    Rejected(String),
}

/// Host integration for the preference store.
pub trait ThemeBackend {
    /// Previously saved preference, if any.
    fn load(&self) -> Option<Theme>;
    /// The host's ambient light/dark signal, if the host exposes one.
    fn ambient(&self) -> Option<Theme>;
    /// Switch the root presentation flag.
    fn apply(&self, theme: Theme);
    /// Persist the preference.
    fn save(&self, theme: Theme) -> Result<(), StorageError>;
}

/// Where the initial theme came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeSource {
    Saved,
    Ambient,
    #[default]
    Fallback,
}

/// Pick the startup theme: saved value, then ambient signal, then dark.
pub fn resolve(saved: Option<Theme>, ambient: Option<Theme>) -> (Theme, ThemeSource) {
    match (saved, ambient) {
        (Some(theme), _) => (theme, ThemeSource::Saved),
        (None, Some(theme)) => (theme, ThemeSource::Ambient),
        (None, None) => (Theme::Dark, ThemeSource::Fallback),
    }
}

/// Resolved preference plus the backend it is applied through.
#[derive(Clone, Debug)]
pub struct ThemeStore<B> {
    theme: Theme,
    source: ThemeSource,
    initialized: bool,
    persisted: bool,
    backend: B,
}

impl<B: ThemeBackend> ThemeStore<B> {
    /// Unresolved store. Reports the fallback theme until `init` runs.
    pub fn new(backend: B) -> Self {
        Self {
            theme: Theme::default(),
            source: ThemeSource::Fallback,
            initialized: false,
            persisted: false,
            backend,
        }
    }

    /// Resolve the startup theme, apply it, and persist it.
    pub fn init(&mut self) -> Theme {
        let (theme, source) = resolve(self.backend.load(), self.backend.ambient());
        self.theme = theme;
        self.source = source;
        self.initialized = true;
        self.commit();
        log::debug!("theme {} from {:?} (persisted: {})", self.theme, self.source, self.persisted);
        theme
    }

    /// Switch light <-> dark, apply, and persist.
    pub fn flip(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        self.commit();
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> ThemeSource {
        self.source
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the last change reached persistent storage.
    #[cfg(test)]
    pub(crate) fn is_persisted(&self) -> bool {
        self.persisted
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    fn commit(&mut self) {
        self.backend.apply(self.theme);
        match self.backend.save(self.theme) {
            Ok(()) => self.persisted = true,
            Err(e) => {
                log::debug!("theme not persisted: {e}");
                self.persisted = false;
            }
        }
    }
}
