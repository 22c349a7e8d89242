//! Key-value settings storage.
//!
//! The store knows nothing about bookmarks or homepages beyond their key
//! names; values travel as JSON and are decoded by [`decode_settings`].

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use panel_logging::{panel_debug, panel_info, panel_warn};
use serde_json::Value;
use sidepanel_core::{Bookmark, Msg, Theme};
use thiserror::Error;

use crate::persist::{read_if_exists, AtomicFileWriter, PersistError};

/// Default file name for [`FileSettingsStore`].
pub const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingKey {
    Bookmarks,
    DefaultHomepage,
    Theme,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::Bookmarks,
        SettingKey::DefaultHomepage,
        SettingKey::Theme,
    ];

    /// Name under which the value is stored.
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::Bookmarks => "bookmarks",
            SettingKey::DefaultHomepage => "defaultHomepage",
            SettingKey::Theme => "theme",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type SettingsMap = BTreeMap<SettingKey, Value>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings file {path:?} could not be read: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("settings file {path:?} is not a JSON object: {reason}")]
    Corrupt { path: PathBuf, reason: String },
    #[error("failed to encode setting {key}: {source}")]
    Encode {
        key: SettingKey,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write settings: {0}")]
    Write(#[from] PersistError),
    #[error("settings store unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous-in-spirit key-value store; callers treat reads as replies
/// and writes as fire-and-forget.
pub trait SettingsStore {
    /// Values for the requested keys. Absent keys are simply missing.
    fn get(&self, keys: &[SettingKey]) -> Result<SettingsMap, StoreError>;
    /// Merges `values` into the store.
    fn set(&mut self, values: SettingsMap) -> Result<(), StoreError>;
}

/// In-memory store, for tests and embedders without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: SettingsMap,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: SettingsMap) -> Self {
        Self { values }
    }

    pub fn value(&self, key: SettingKey) -> Option<&Value> {
        self.values.get(&key)
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, keys: &[SettingKey]) -> Result<SettingsMap, StoreError> {
        Ok(keys
            .iter()
            .filter_map(|key| self.values.get(key).map(|v| (*key, v.clone())))
            .collect())
    }

    fn set(&mut self, values: SettingsMap) -> Result<(), StoreError> {
        self.values.extend(values);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    dir: PathBuf,
    filename: String,
}

impl FileSettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            filename: SETTINGS_FILENAME.to_string(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    fn read_object(&self) -> Result<serde_json::Map<String, Value>, StoreError> {
        let path = self.path();
        let Some(text) = read_if_exists(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?
        else {
            panel_debug!("no settings file at {:?}", path);
            return Ok(serde_json::Map::new());
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(object)) => Ok(object),
            Ok(other) => Err(corrupt(&path, format!("top-level value is {other}"))),
            Err(err) => Err(corrupt(&path, err.to_string())),
        }
    }
}

fn corrupt(path: &Path, reason: String) -> StoreError {
    StoreError::Corrupt {
        path: path.to_path_buf(),
        reason,
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, keys: &[SettingKey]) -> Result<SettingsMap, StoreError> {
        let mut object = self.read_object()?;
        Ok(keys
            .iter()
            .filter_map(|key| object.remove(key.as_str()).map(|v| (*key, v)))
            .collect())
    }

    fn set(&mut self, values: SettingsMap) -> Result<(), StoreError> {
        // Corrupt files are reported, never overwritten.
        let mut object = self.read_object()?;
        for (key, value) in values {
            object.insert(key.as_str().to_string(), value);
        }
        let content =
            serde_json::to_string_pretty(&Value::Object(object)).map_err(StoreError::Serialize)?;
        let written = AtomicFileWriter::new(self.dir.clone()).write(&self.filename, &content)?;
        panel_info!("settings written to {:?}", written);
        Ok(())
    }
}

/// Encodes a single typed value for [`SettingsStore::set`].
pub fn encode_setting<T: serde::Serialize>(
    key: SettingKey,
    value: &T,
) -> Result<SettingsMap, StoreError> {
    let value = serde_json::to_value(value).map_err(|source| StoreError::Encode { key, source })?;
    Ok(SettingsMap::from([(key, value)]))
}

/// Turns a store reply into the message the state machine expects.
///
/// Values that fail to decode are logged and treated as absent.
pub fn decode_settings(mut values: SettingsMap) -> Msg {
    let default_homepage = values
        .remove(&SettingKey::DefaultHomepage)
        .and_then(|value| match value {
            Value::String(homepage) => Some(homepage),
            other => {
                panel_warn!("ignoring non-string defaultHomepage: {}", other);
                None
            }
        });
    let bookmarks = values
        .remove(&SettingKey::Bookmarks)
        .and_then(|value| decode_value::<Vec<Bookmark>>(SettingKey::Bookmarks, value));
    let theme = values
        .remove(&SettingKey::Theme)
        .and_then(|value| decode_value::<Theme>(SettingKey::Theme, value));
    Msg::SettingsLoaded {
        default_homepage,
        bookmarks,
        theme,
    }
}

fn decode_value<T: serde::de::DeserializeOwned>(key: SettingKey, value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            panel_warn!("ignoring undecodable setting {}: {}", key, err);
            None
        }
    }
}
