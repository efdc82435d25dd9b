use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{CalendarView, LayoutWidth, Theme};

use crate::config::AppConfig;
use crate::services::logging::Logger;

/// Typed access to the preferences kept in `localStorage`
#[derive(Clone, Debug, PartialEq)]
pub struct PreferenceStore {
    theme_key: String,
    full_width_key: String,
    view_key: String,
}

impl PreferenceStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            theme_key: config.theme_key.clone(),
            full_width_key: config.full_width_key.clone(),
            view_key: config.view_key.clone(),
        }
    }

    pub fn load_theme(&self) -> Theme {
        read_or_default(&self.theme_key)
    }

    pub fn save_theme(&self, theme: Theme) {
        write(&self.theme_key, &theme);
    }

    pub fn load_layout_width(&self) -> LayoutWidth {
        LayoutWidth::from(read_or_default::<bool>(&self.full_width_key))
    }

    pub fn save_layout_width(&self, width: LayoutWidth) {
        write(&self.full_width_key, &width.is_full());
    }

    pub fn load_view(&self) -> CalendarView {
        read_or_default(&self.view_key)
    }

    pub fn save_view(&self, view: CalendarView) {
        write(&self.view_key, &view);
    }

    /// Forget every stored preference
    pub fn clear(&self) {
        for key in [&self.theme_key, &self.full_width_key, &self.view_key] {
            LocalStorage::delete(key);
        }
    }
}

fn read_or_default<T>(key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match LocalStorage::get::<T>(key) {
        Ok(value) => value,
        Err(StorageError::KeyNotFound(_)) => T::default(),
        Err(e) => {
            Logger::warn_with_component(
                "storage",
                &format!("Ignoring unreadable value for '{}': {}", key, e),
            );
            T::default()
        }
    }
}

fn write<T: Serialize>(key: &str, value: &T) {
    if let Err(e) = LocalStorage::set(key, value) {
        Logger::error_with_component("storage", &format!("Failed to persist '{}': {}", key, e));
    }
}
