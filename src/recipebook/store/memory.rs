use super::KeyValueStore;
use crate::error::{RecipeError, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    simulate_write_error: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(RecipeError::Store("Simulated write error".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::config::RecipeConfig;
    use crate::model::Recipe;
    use crate::store::save_recipes;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Persist `count` generated recipes under the default key.
        pub fn with_recipes(mut self, count: usize) -> Self {
            let recipes: Vec<Recipe> = (0..count)
                .map(|i| {
                    Recipe::new(
                        (i + 1) as u64,
                        format!("Test Recipe {}", i + 1),
                        format!("Ingredient {}", i + 1),
                    )
                })
                .collect();
            self.with_stored(&recipes)
        }

        pub fn with_stored(mut self, recipes: &[Recipe]) -> Self {
            let key = RecipeConfig::default().storage_key;
            save_recipes(&mut self.store, &key, recipes, false).unwrap();
            self
        }

        pub fn with_raw(mut self, raw: &str) -> Self {
            let key = RecipeConfig::default().storage_key;
            self.store.write(&key, raw).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_written_value() {
        let mut store = InMemoryStore::new();
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn simulated_write_error_keeps_old_value() {
        let mut store = InMemoryStore::new();
        store.write("k", "old").unwrap();
        store.set_simulate_write_error(true);
        assert!(store.write("k", "new").is_err());
        assert_eq!(store.read("k").unwrap().as_deref(), Some("old"));
    }
}
