use crate::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORAGE_KEY: &str = "recipes";

/// Whether `key` can name a stored value next to the config file.
///
/// A key maps to `{data dir}/{key}.json`, so it must stay a single path
/// component and must not resolve to `config.json` itself (compared
/// ignoring case, for case-insensitive filesystems).
pub fn is_valid_storage_key(key: &str) -> bool {
    !key.is_empty()
        && !key.contains(['/', '\\'])
        && !key.starts_with('.')
        && !format!("{}.json", key).eq_ignore_ascii_case(CONFIG_FILENAME)
}

/// Configuration for recipebook, stored in `{data dir}/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeConfig {
    /// Key the primary collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Pretty-print the stored collection
    #[serde(default)]
    pub pretty_json: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            pretty_json: false,
        }
    }
}

impl RecipeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RecipeError::Io)?;
        let config: RecipeConfig =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RecipeError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RecipeError::Serialization)?;
        fs::write(config_path, content).map_err(RecipeError::Io)?;
        Ok(())
    }

    /// Set a value by its user-facing key name (`storage-key`, `pretty-json`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if !is_valid_storage_key(value) {
                    return Err(RecipeError::Config(format!("Invalid storage key: {}", value)));
                }
                self.storage_key = value.to_string();
            }
            "pretty-json" => {
                self.pretty_json = match value {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(RecipeError::Config(format!(
                            "Expected true or false, got: {}",
                            other
                        )))
                    }
                };
            }
            other => return Err(RecipeError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    /// Get a value by its user-facing key name.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage-key" => Ok(self.storage_key.clone()),
            "pretty-json" => Ok(self.pretty_json.to_string()),
            other => Err(RecipeError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("storage-key", self.storage_key.clone()),
            ("pretty-json", self.pretty_json.to_string()),
        ]
    }
}
