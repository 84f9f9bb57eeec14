// SPDX-License-Identifier: MPL-2.0
//! The persisted theme preference.
//!
//! One key (`"theme"`) in a key/value [`Storage`]. The [`PreferenceStore`]
//! keeps an in-memory mirror of the last value so the session keeps working
//! when the backing storage is unavailable: failures are logged, never
//! returned to the caller.
//!
//! # Backends
//!
//! - [`FileStorage`]: TOML table in the app data directory
//! - [`MemoryStorage`]: process-local map, optionally refusing every access

use crate::config::paths;
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningType};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

/// Preference file name within the app data directory.
const PREFERENCES_FILE: &str = "preferences.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parses a stored value. Anything but `"light"` or `"dark"` is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value store backing the preference cell.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
    unavailable: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that fails every read and write, like a browser with storage
    /// disabled.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            values: BTreeMap::new(),
            unavailable: true,
        }
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            Err(Error::Storage("storage is unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage persisted as a flat TOML table.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage file inside the app data directory (see
    /// [`paths::get_app_data_dir_with_override`]).
    #[must_use]
    pub fn in_data_dir(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(PREFERENCES_FILE);
            Self::new(path)
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|err| Error::Storage(err.to_string()))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later write
        let mut table = self.read_table().unwrap_or_default();
        table.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(&table)?)?;
        Ok(())
    }
}

/// The shared theme cell.
///
/// Last write wins; every widget reading it sees the same value.
pub struct PreferenceStore {
    storage: Box<dyn Storage>,
    mirror: ThemeMode,
    diagnostics: DiagnosticsHandle,
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("mirror", &self.mirror)
            .finish_non_exhaustive()
    }
}

impl PreferenceStore {
    /// Wraps `storage`, seeding the mirror from the persisted value.
    ///
    /// An absent or unreadable value seeds light; so does an unrecognised
    /// one.
    pub fn new(storage: Box<dyn Storage>, diagnostics: DiagnosticsHandle) -> Self {
        let mut store = Self {
            storage,
            mirror: ThemeMode::default(),
            diagnostics,
        };
        match store.storage.get(THEME_KEY) {
            Ok(Some(value)) => store.mirror = ThemeMode::parse(&value).unwrap_or_default(),
            Ok(None) => {}
            Err(err) => store.report("read", &err),
        }
        store
    }

    /// Current theme. After construction the session value is
    /// authoritative, whether or not writes reach the backing store.
    #[must_use]
    pub fn get_theme(&self) -> ThemeMode {
        self.mirror
    }

    /// Persists `mode`. The mirror is updated even when the write fails.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.mirror = mode;
        if let Err(err) = self.storage.set(THEME_KEY, mode.as_str()) {
            self.report("write", &err);
        }
    }

    fn report(&self, operation: &str, err: &Error) {
        eprintln!("Failed to {operation} theme preference: {err}");
        self.diagnostics.log_warning(WarningEvent::new(
            WarningType::Storage,
            format!("theme preference {operation} failed: {err}"),
        ));
    }
}
