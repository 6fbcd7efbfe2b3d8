use crate::error::{Result, ShelfError};
use crate::persistence::STORAGE_KEY;
use crate::store::fs::check_key;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for bookshelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Storage slot the collection is saved under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Ask before deleting a book
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

fn default_confirm_delete() -> bool {
    true
}

/// The snapshot lands in `<data dir>/<key>.json`, next to `config.json`, so the
/// key must name a plain file and must not be the config file itself.
fn validate_storage_key(value: &str) -> Result<String> {
    let key = value.trim();
    if key.is_empty() {
        return Err(ShelfError::Api("storage-key cannot be empty".into()));
    }
    check_key(key).map_err(|_| {
        ShelfError::Api(format!("storage-key must be a plain file name: {}", key))
    })?;
    if format!("{}.json", key).eq_ignore_ascii_case(CONFIG_FILENAME) {
        return Err(ShelfError::Api(format!(
            "storage-key {} is reserved for the config file",
            key
        )));
    }
    Ok(key.to_string())
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl ShelfConfig {
    pub const KEYS: [&'static str; 2] = ["storage-key", "confirm-delete"];

    /// Reads `config.json` from `config_dir`. A missing file gives the defaults.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        match fs::read_to_string(config_dir.as_ref().join(CONFIG_FILENAME)) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;
        fs::write(
            config_dir.join(CONFIG_FILENAME),
            serde_json::to_string_pretty(self)?,
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "confirm-delete" => Some(self.confirm_delete.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                self.storage_key = validate_storage_key(value)?;
            }
            "confirm-delete" => {
                self.confirm_delete = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(ShelfError::Api(format!(
                            "Invalid value for confirm-delete: {}",
                            other
                        )))
                    }
                };
            }
            other => return Err(ShelfError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}
