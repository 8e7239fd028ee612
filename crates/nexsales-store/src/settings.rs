//! Persisted user preferences.

use std::sync::Arc;

use nexsales_core::models::settings::{AppSettings, SettingsState, Theme, UpdateSettings};
use nexsales_core::persist::{load_json, persist_or_warn};
use nexsales_core::repository::{KeyValueStore, SETTINGS_STORAGE_KEY};
use tokio::sync::watch;
use tracing::{debug, info};

/// Settings store over the canonical [`SettingsState`] shape.
///
/// Every mutation keeps the top-level mirrors in sync with the nested
/// settings object and writes the whole shape to storage.
#[derive(Clone)]
pub struct SettingsStore {
    state: Arc<watch::Sender<SettingsState>>,
    storage: Arc<dyn KeyValueStore>,
}

impl SettingsStore {
    /// Load persisted settings over defaults.
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        let state = match load_json::<SettingsState>(storage.as_ref(), SETTINGS_STORAGE_KEY) {
            Some(mut persisted) => {
                persisted.resync();
                info!(theme = persisted.theme.as_str(), "Restored settings");
                persisted
            }
            None => SettingsState::default(),
        };

        Self {
            state: Arc::new(watch::Sender::new(state)),
            storage,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SettingsState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SettingsState {
        *self.state.borrow()
    }

    pub fn settings(&self) -> AppSettings {
        self.state.borrow().settings
    }

    pub fn theme(&self) -> Theme {
        self.state.borrow().theme
    }

    pub fn notifications_enabled(&self) -> bool {
        self.state.borrow().notifications
    }

    /// Flip light/dark and return the new theme.
    pub fn toggle_theme(&self) -> Theme {
        self.mutate(|s| s.settings.theme = s.settings.theme.toggled());
        self.theme()
    }

    /// Flip notifications on/off and return the new value.
    pub fn toggle_notifications(&self) -> bool {
        self.mutate(|s| s.settings.notifications = !s.settings.notifications);
        self.notifications_enabled()
    }

    pub fn update_settings(&self, update: UpdateSettings) {
        self.mutate(|s| update.apply_to(&mut s.settings));
    }

    fn mutate(&self, f: impl FnOnce(&mut SettingsState)) {
        self.state.send_modify(|s| {
            f(s);
            s.resync();
        });
        let snapshot = self.snapshot();
        debug!(?snapshot, "Settings changed");
        persist_or_warn(self.storage.as_ref(), SETTINGS_STORAGE_KEY, &snapshot);
    }
}
