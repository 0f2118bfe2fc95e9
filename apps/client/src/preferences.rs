//! Theme and cookie consent, persisted in the local store.

use std::fmt;

use crate::storage::{keys, KeyValueStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "auto" => Some(Theme::Auto),
            _ => None,
        }
    }

    /// light -> dark -> auto -> light
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Auto,
            Theme::Auto => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "automatic",
        }
    }

    /// The concrete palette; `Auto` follows the system preference.
    pub fn resolve(self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::Auto if prefers_dark => ResolvedTheme::Dark,
            Theme::Auto => ResolvedTheme::Light,
        }
    }

    /// Stored theme, `Auto` when absent or unrecognised.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        store
            .get(keys::THEME)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default()
    }

    pub fn save(self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(keys::THEME, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Declined,
}

impl Consent {
    pub fn as_str(self) -> &'static str {
        match self {
            Consent::Accepted => "accepted",
            Consent::Declined => "declined",
        }
    }

    /// `None` until a decision has been stored.
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        match store.get(keys::GDPR)?.as_str() {
            "accepted" => Some(Consent::Accepted),
            "declined" => Some(Consent::Declined),
            _ => None,
        }
    }

    pub fn save(self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(keys::GDPR, self.as_str())
    }
}
