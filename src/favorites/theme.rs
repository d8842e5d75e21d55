//! Color theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::THEME_KEY;
use crate::core::DirectoryError;

use super::store::KeyValueStore;

/// Light, dark, or follow the operating system.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(DirectoryError::InvalidTheme {
                name: s.to_string(),
            }),
        }
    }
}

/// Theme preference kept under the `theme` key.
pub struct ThemeStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored preference; missing or unrecognized values read as `System`.
    pub fn get(&self) -> ThemePreference {
        match self.store.get(THEME_KEY) {
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring unknown stored theme {:?}", value);
                ThemePreference::System
            }),
            None => ThemePreference::System,
        }
    }

    /// Store `theme`. `System` removes the key instead of storing it.
    pub fn set(&mut self, theme: ThemePreference) -> Result<(), DirectoryError> {
        match theme {
            ThemePreference::System => self.store.remove(THEME_KEY),
            other => self.store.set(THEME_KEY, other.as_str().to_string()),
        }
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
