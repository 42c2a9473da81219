//! # Storage Layer
//!
//! The recipe catalog persists through a plain key-value service, the same
//! shape as a browser's local storage: a string value per string key. The
//! [`KeyValueStore`] trait is that service.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One JSON file per key: `{root}/{key}.json`
//!   - Writes go through a temp file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! The primary collection is stored under a single key as a JSON array:
//!
//! ```text
//! [{"id":1,"name":"Spaghetti Bolognese","ingredients":"Pasta, Tomato, Beef, Cheese","image":""}, ...]
//! ```
//!
//! [`read_recipes`], [`load_recipes`] and [`save_recipes`] encode and decode
//! that value; the backends never look inside it. A value that fails to
//! decode is rejected as a whole, since a partial list would silently drop
//! recipes on the next save.

use crate::error::Result;
use crate::model::Recipe;
use std::path::PathBuf;
use tracing::{debug, warn};

pub mod fs;
pub mod memory;

/// Abstract interface for a string key-value service.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    /// Returns Ok(None) when the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Where the value for `key` lives. For FileStore this is a real path,
    /// for InMemoryStore a virtual one.
    fn location(&self, key: &str) -> PathBuf;
}

/// What [`read_recipes`] found under a key.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredRecipes {
    /// Nothing stored, or the store could not be read.
    Missing,
    Valid(Vec<Recipe>),
    /// A value that does not decode as a recipe list, kept verbatim.
    Corrupt(String),
}

/// Read and decode the recipe collection stored under `key`.
pub fn read_recipes<S: KeyValueStore>(store: &S, key: &str) -> StoredRecipes {
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no stored recipes");
            return StoredRecipes::Missing;
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read stored recipes");
            return StoredRecipes::Missing;
        }
    };

    match serde_json::from_str::<Vec<Recipe>>(&raw) {
        Ok(recipes) => {
            debug!(key, count = recipes.len(), "loaded stored recipes");
            StoredRecipes::Valid(recipes)
        }
        Err(e) => {
            let record = first_bad_record(&raw);
            warn!(
                key,
                record = ?record,
                error = %e,
                "stored recipes are not valid, ignoring them"
            );
            StoredRecipes::Corrupt(raw)
        }
    }
}

/// Load the recipe collection stored under `key`.
///
/// Returns `None` when the key is missing, unreadable or does not decode as a
/// recipe list. Callers fall back to seed data in that case.
pub fn load_recipes<S: KeyValueStore>(store: &S, key: &str) -> Option<Vec<Recipe>> {
    match read_recipes(store, key) {
        StoredRecipes::Valid(recipes) => Some(recipes),
        StoredRecipes::Missing | StoredRecipes::Corrupt(_) => None,
    }
}

/// Position of the first array element that is not a valid recipe. `None`
/// when the value is not a JSON array at all, or every element decodes.
fn first_bad_record(raw: &str) -> Option<usize> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw).ok()?;
    values
        .into_iter()
        .position(|v| serde_json::from_value::<Recipe>(v).is_err())
}

/// Serialize `recipes` and write them under `key`.
pub fn save_recipes<S: KeyValueStore>(
    store: &mut S,
    key: &str,
    recipes: &[Recipe],
    pretty: bool,
) -> Result<()> {
    let value = if pretty {
        serde_json::to_string_pretty(recipes)?
    } else {
        serde_json::to_string(recipes)?
    };
    store.write(key, &value)?;
    debug!(key, count = recipes.len(), "saved recipes");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryStore;
    use super::*;
    use crate::model::seed_recipes;

    #[test]
    fn missing_key_loads_nothing() {
        let store = InMemoryStore::new();
        assert!(load_recipes(&store, "recipes").is_none());
    }

    #[test]
    fn garbage_value_loads_nothing() {
        let mut store = InMemoryStore::new();
        store.write("recipes", "{not json").unwrap();
        assert!(load_recipes(&store, "recipes").is_none());
    }

    #[test]
    fn wrong_shape_loads_nothing() {
        let mut store = InMemoryStore::new();
        store.write("recipes", r#"{"id":1}"#).unwrap();
        assert!(load_recipes(&store, "recipes").is_none());
    }

    #[test]
    fn corrupt_value_is_kept_verbatim() {
        let raw = r#"[{"id":1,"name":"A","ingredients":"B"},{"id":-1,"name":"C","ingredients":"D"}]"#;
        let mut store = InMemoryStore::new();
        store.write("recipes", raw).unwrap();
        assert_eq!(
            read_recipes(&store, "recipes"),
            StoredRecipes::Corrupt(raw.to_string())
        );
    }

    #[test]
    fn first_bad_record_points_at_offending_element() {
        let raw = r#"[{"id":1,"name":"A","ingredients":"B"},{"id":-1,"name":"C","ingredients":"D"}]"#;
        assert_eq!(first_bad_record(raw), Some(1));
        assert_eq!(first_bad_record(r#"[{"id":1}]"#), Some(0));
        assert_eq!(first_bad_record("{not json"), None);
    }

    #[test]
    fn saved_recipes_load_back_field_for_field() {
        let mut store = InMemoryStore::new();
        let mut recipes = seed_recipes();
        recipes.push(
            crate::model::Recipe::new(1_700_000_000_000, "Tacos", "Tortilla, Beef")
                .with_image("https://example.com/tacos.png"),
        );
        save_recipes(&mut store, "recipes", &recipes, false).unwrap();
        assert_eq!(load_recipes(&store, "recipes"), Some(recipes));
    }

    #[test]
    fn pretty_output_is_still_loadable() {
        let mut store = InMemoryStore::new();
        save_recipes(&mut store, "recipes", &seed_recipes(), true).unwrap();
        let raw = store.read("recipes").unwrap().unwrap();
        assert!(raw.contains('\n'));
        assert_eq!(load_recipes(&store, "recipes"), Some(seed_recipes()));
    }
}
