//! User preference models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
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

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Vnd,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppSettings {
    pub theme: Theme,
    pub language: Language,
    pub currency: Currency,
    /// Whether pop-up notifications are enabled.
    pub notifications: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::En,
            currency: Currency::Usd,
            notifications: true,
        }
    }
}

/// Partial settings update. `None` = no change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSettings {
    pub theme: Option<Theme>,
    pub language: Option<Language>,
    pub currency: Option<Currency>,
    pub notifications: Option<bool>,
}

impl UpdateSettings {
    pub fn apply_to(self, settings: &mut AppSettings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(language) = self.language {
            settings.language = language;
        }
        if let Some(currency) = self.currency {
            settings.currency = currency;
        }
        if let Some(notifications) = self.notifications {
            settings.notifications = notifications;
        }
    }
}

/// Canonical persisted settings shape: top-level `theme` and
/// `notifications` mirror the nested `settings` object, which is the
/// source of truth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SettingsState {
    pub theme: Theme,
    pub notifications: bool,
    pub settings: AppSettings,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::from_settings(AppSettings::default())
    }
}

impl SettingsState {
    pub fn from_settings(settings: AppSettings) -> Self {
        Self {
            theme: settings.theme,
            notifications: settings.notifications,
            settings,
        }
    }

    /// Copy the nested values back into the top-level mirrors.
    pub fn resync(&mut self) {
        self.theme = self.settings.theme;
        self.notifications = self.settings.notifications;
    }

    pub fn is_in_sync(&self) -> bool {
        self.theme == self.settings.theme && self.notifications == self.settings.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run() {
        let s = AppSettings::default();
        assert_eq!(s.theme, Theme::Light);
        assert_eq!(s.language, Language::En);
        assert_eq!(s.currency, Currency::Usd);
        assert!(s.notifications);
    }

    #[test]
    fn partial_update_merges() {
        let mut s = AppSettings::default();
        UpdateSettings {
            currency: Some(Currency::Vnd),
            ..Default::default()
        }
        .apply_to(&mut s);
        assert_eq!(s.currency, Currency::Vnd);
        assert_eq!(s.theme, Theme::Light);
    }

    #[test]
    fn resync_takes_nested_values() {
        let mut state: SettingsState =
            serde_json::from_str(r#"{"theme":"light","settings":{"theme":"dark","notifications":false}}"#)
                .unwrap();
        assert!(!state.is_in_sync());
        state.resync();
        assert_eq!(state.theme, Theme::Dark);
        assert!(!state.notifications);
        assert_eq!(state.settings.currency, Currency::Usd);
    }

    #[test]
    fn currency_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Currency::Vnd).unwrap(), "\"VND\"");
    }
}
