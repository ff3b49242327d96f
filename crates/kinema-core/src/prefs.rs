use serde::{Deserialize, Serialize};

use crate::store::SlotStore;

pub const THEME_KEY: &str = "theme_v1";

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable display preferences, independent of all other state.
#[derive(Debug, Default)]
pub struct Preferences {
    theme: Theme,
}

impl Preferences {
    /// Load the persisted theme. Unrecognized or missing tokens keep the
    /// default.
    pub fn load(store: &impl SlotStore) -> Self {
        let theme = store
            .get(THEME_KEY)
            .ok()
            .flatten()
            .and_then(|raw| Theme::from_token(&raw))
            .unwrap_or_default();
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Update and persist the theme. A failed write keeps the in-memory
    /// value and is logged only.
    pub fn set_theme(&mut self, store: &impl SlotStore, theme: Theme) {
        self.theme = theme;
        if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
            tracing::warn!("failed to persist theme: {e}");
        }
    }

    pub fn toggle_theme(&mut self, store: &impl SlotStore) {
        self.set_theme(store, self.theme.toggled());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;

    #[test]
    fn test_defaults_to_dark() {
        let store = SqliteStore::open_memory().unwrap();
        assert_eq!(Preferences::load(&store).theme(), Theme::Dark);
    }

    #[test]
    fn test_theme_survives_reload() {
        let store = SqliteStore::open_memory().unwrap();
        let mut prefs = Preferences::load(&store);

        prefs.set_theme(&store, Theme::Light);
        assert_eq!(Preferences::load(&store).theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let store = SqliteStore::open_memory().unwrap();
        let mut prefs = Preferences::load(&store);

        prefs.toggle_theme(&store);
        assert_eq!(prefs.theme(), Theme::Light);
        prefs.toggle_theme(&store);
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_unrecognized_token_keeps_default() {
        let store = SqliteStore::open_memory().unwrap();
        store.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(Preferences::load(&store).theme(), Theme::Dark);
    }
}
