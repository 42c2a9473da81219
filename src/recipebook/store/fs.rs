use super::KeyValueStore;
use crate::config::is_valid_storage_key;
use crate::error::{RecipeError, Result};
use std::fs;
use std::path::PathBuf;

/// File-backed key-value storage. Each key maps to `{root}/{key}.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RecipeError::Io)?;
        }
        Ok(())
    }

    fn value_path(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_storage_key(key) {
            return Err(RecipeError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RecipeError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.value_path(key)?;

        // Write to a sibling temp file, then rename over the target
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(RecipeError::Io)?;
        fs::rename(&tmp, &path).map_err(RecipeError::Io)?;
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}
