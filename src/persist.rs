//! File-backed settings store: one TOML document per namespace.
//!
//! Uses `toml_edit` for comment-preserving writes, so a hand-annotated
//! settings file survives `save_state`. Reads go through `toml` value types.
//! Every failure on this path is advisory: reads fall back to `None`, writes
//! log a warning and return. Creates parent directories as needed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::store::{SettingsStore, StoreValue};

/// A [`SettingsStore`] persisting to TOML files under a base directory.
///
/// The default namespace lives in `<app>.toml`; each suite gets its own
/// `<suite>.toml`, so a suite file can be shared between related processes
/// pointing at the same directory.
#[derive(Debug, Clone)]
pub struct TomlStore {
    dir: PathBuf,
    app_name: String,
}

impl TomlStore {
    pub fn new(dir: impl Into<PathBuf>, app_name: &str) -> Self {
        Self {
            dir: dir.into(),
            app_name: app_name.to_string(),
        }
    }

    /// Store rooted at the platform config directory for `app_name`
    /// (XDG on Linux, `~/Library/Application Support` on macOS).
    ///
    /// `None` when no home directory can be determined.
    pub fn for_app(app_name: &str) -> Option<Self> {
        let dirs = directories::ProjectDirs::from("", "", app_name)?;
        Some(Self::new(dirs.config_dir(), app_name))
    }

    /// The file backing a namespace.
    pub fn file_for(&self, suite: Option<&str>) -> PathBuf {
        let stem = suite.unwrap_or(&self.app_name);
        self.dir.join(format!("{stem}.toml"))
    }

    fn read_value(&self, path: &Path, key: &str) -> Option<StoreValue> {
        let content = fs::read_to_string(path).ok()?;
        let table: toml::Table = match toml::from_str(&content) {
            Ok(table) => table,
            Err(err) => {
                log::debug!("ignoring unparsable settings file {}: {err}", path.display());
                return None;
            }
        };
        to_store_value(table.get(key)?)
    }

    fn write_value(&self, path: &Path, key: &str, value: &StoreValue) -> Result<(), StoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(err) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let mut doc: toml_edit::DocumentMut =
            content.parse().map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        doc[key] = match value {
            StoreValue::Bool(b) => toml_edit::value(*b),
            StoreValue::Int(i) => toml_edit::value(*i),
            StoreValue::Text(s) => toml_edit::value(s.as_str()),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, doc.to_string()).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl SettingsStore for TomlStore {
    fn get(&self, suite: Option<&str>, key: &str) -> Option<StoreValue> {
        self.read_value(&self.file_for(suite), key)
    }

    fn set(&self, suite: Option<&str>, key: &str, value: StoreValue) {
        let path = self.file_for(suite);
        if let Err(err) = self.write_value(&path, key, &value) {
            log::warn!("failed to persist debug option '{key}': {err}");
        }
    }
}

fn to_store_value(value: &toml::Value) -> Option<StoreValue> {
    match value {
        toml::Value::Boolean(b) => Some(StoreValue::Bool(*b)),
        toml::Value::Integer(i) => Some(StoreValue::Int(*i)),
        toml::Value::String(s) => Some(StoreValue::Text(s.clone())),
        _ => None,
    }
}
