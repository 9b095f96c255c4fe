//! Local Preferences
//!
//! Small UI preferences persisted as JSON under fixed local-storage keys.
//! Access goes through `KeyValueStore` so the typed layer is testable off-browser.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "loatodo:theme";
pub const TOKEN_KEY: &str = "loatodo:token";
pub const TODO_COLUMNS_KEY: &str = "loatodo:todo-columns";
pub const FRIEND_COLUMNS_KEY: &str = "loatodo:friend-columns";
pub const SEASONAL_EFFECT_KEY: &str = "loatodo:seasonal-effect";

pub const MIN_COLUMNS: u8 = 1;
pub const MAX_COLUMNS: u8 = 6;
pub const DEFAULT_COLUMNS: u8 = 3;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("invalid stored value: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw string key/value persistence
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// In-memory store for tests and for browsers with storage disabled
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

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

    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "라이트 모드",
            Theme::Dark => "다크 모드",
        }
    }
}

/// Override for the winter snow effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalEffect {
    #[default]
    Auto,
    On,
    Off,
}

impl SeasonalEffect {
    pub fn next(self) -> Self {
        match self {
            SeasonalEffect::Auto => SeasonalEffect::On,
            SeasonalEffect::On => SeasonalEffect::Off,
            SeasonalEffect::Off => SeasonalEffect::Auto,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeasonalEffect::Auto => "눈: 자동",
            SeasonalEffect::On => "눈: 켜짐",
            SeasonalEffect::Off => "눈: 꺼짐",
        }
    }

    /// Whether snow shows in `month` (1-12)
    pub fn is_active(self, month: u32) -> bool {
        match self {
            SeasonalEffect::Auto => matches!(month, 12 | 1 | 2),
            SeasonalEffect::On => true,
            SeasonalEffect::Off => false,
        }
    }
}

fn clamp_columns(n: u8) -> u8 {
    n.clamp(MIN_COLUMNS, MAX_COLUMNS)
}

/// Typed preference access
pub struct Preferences<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Read a value, falling back to the default on a missing or broken entry
    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.read(key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!("[STORAGE] ignoring {}: {}", key, e);
                T::default()
            }
        }
    }

    pub fn theme(&self) -> Theme {
        self.read_or_default(THEME_KEY)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.write(THEME_KEY, &theme)
    }

    pub fn token(&self) -> Option<String> {
        self.read_or_default(TOKEN_KEY)
    }

    pub fn set_token(&self, token: Option<&str>) -> Result<(), StorageError> {
        match token {
            Some(token) => self.write(TOKEN_KEY, &token),
            None => self.store.remove(TOKEN_KEY),
        }
    }

    pub fn todo_columns(&self) -> u8 {
        self.columns(TODO_COLUMNS_KEY)
    }

    pub fn set_todo_columns(&self, n: u8) -> Result<u8, StorageError> {
        self.set_columns(TODO_COLUMNS_KEY, n)
    }

    pub fn friend_columns(&self) -> u8 {
        self.columns(FRIEND_COLUMNS_KEY)
    }

    pub fn set_friend_columns(&self, n: u8) -> Result<u8, StorageError> {
        self.set_columns(FRIEND_COLUMNS_KEY, n)
    }

    fn columns(&self, key: &str) -> u8 {
        self.read_or_default::<Option<u8>>(key)
            .map(clamp_columns)
            .unwrap_or(DEFAULT_COLUMNS)
    }

    fn set_columns(&self, key: &str, n: u8) -> Result<u8, StorageError> {
        let n = clamp_columns(n);
        self.write(key, &n)?;
        Ok(n)
    }

    pub fn seasonal_effect(&self) -> SeasonalEffect {
        self.read_or_default(SEASONAL_EFFECT_KEY)
    }

    pub fn set_seasonal_effect(&self, effect: SeasonalEffect) -> Result<(), StorageError> {
        self.write(SEASONAL_EFFECT_KEY, &effect)
    }
}

/// Preferences backed by the browser, or memory when storage is blocked
pub fn browser_preferences() -> Preferences<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!("[STORAGE] falling back to memory: {}", e);
            Box::new(MemoryStorage::default())
        }
    };
    Preferences::new(store)
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> Preferences<MemoryStorage> {
        Preferences::new(MemoryStorage::default())
    }

    #[test]
    fn test_defaults_when_empty() {
        let prefs = prefs();
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.token(), None);
        assert_eq!(prefs.todo_columns(), DEFAULT_COLUMNS);
        assert_eq!(prefs.seasonal_effect(), SeasonalEffect::Auto);
    }

    #[test]
    fn test_values_are_stored_as_json() {
        let prefs = prefs();
        prefs.set_theme(Theme::Dark).unwrap();
        prefs.set_token(Some("abc")).unwrap();
        assert_eq!(prefs.store.get(THEME_KEY).unwrap().as_deref(), Some("\"dark\""));
        assert_eq!(prefs.store.get(TOKEN_KEY).unwrap().as_deref(), Some("\"abc\""));
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_clearing_token_removes_key() {
        let prefs = prefs();
        prefs.set_token(Some("abc")).unwrap();
        prefs.set_token(None).unwrap();
        assert_eq!(prefs.store.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_columns_are_clamped() {
        let prefs = prefs();
        assert_eq!(prefs.set_todo_columns(9).unwrap(), MAX_COLUMNS);
        assert_eq!(prefs.todo_columns(), MAX_COLUMNS);
        prefs.store.set(FRIEND_COLUMNS_KEY, "0").unwrap();
        assert_eq!(prefs.friend_columns(), MIN_COLUMNS);
    }

    #[test]
    fn test_corrupt_value_falls_back_to_default() {
        let prefs = prefs();
        prefs.store.set(THEME_KEY, "not json").unwrap();
        prefs.store.set(TODO_COLUMNS_KEY, "\"wide\"").unwrap();
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.todo_columns(), DEFAULT_COLUMNS);
    }

    #[test]
    fn test_seasonal_effect_months() {
        assert!(SeasonalEffect::Auto.is_active(12));
        assert!(SeasonalEffect::Auto.is_active(2));
        assert!(!SeasonalEffect::Auto.is_active(7));
        assert!(SeasonalEffect::On.is_active(7));
        assert!(!SeasonalEffect::Off.is_active(1));
        assert_eq!(SeasonalEffect::Off.next(), SeasonalEffect::Auto);
    }
}
