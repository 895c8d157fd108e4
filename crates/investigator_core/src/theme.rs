use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph of the toggle control: it shows the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeStoreError::InvalidValue(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("stored theme `{0}` is neither `light` nor `dark`")]
    InvalidValue(String),
    #[error("theme store unavailable: {0}")]
    Unavailable(String),
}

/// Client-local storage of the theme preference.
pub trait ThemeStore {
    /// The persisted theme, or `None` when nothing usable is stored.
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme) -> Result<(), ThemeStoreError>;
}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    theme: Option<Theme>,
    saves: usize,
}

impl MemoryThemeStore {
    pub fn new(theme: Option<Theme>) -> Self {
        Self { theme, saves: 0 }
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.theme
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        self.theme = Some(theme);
        self.saves += 1;
        Ok(())
    }
}
