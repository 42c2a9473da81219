//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! owner of the catalog state. Every UI (the terminal client in this crate, a
//! web front end, tests) holds one [`RecipeApi`] and goes through it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`RecipeBook`] and the [`KeyValueStore`]
//! - **Dispatches** to the appropriate command function
//! - **Writes through**: after any command that changed the primary
//!   collection, the full collection is saved under the configured key
//!
//! ## Persistence Is Best Effort
//!
//! Loading falls back to seed data when nothing usable is stored. Saving
//! failures are logged and otherwise ignored: the in-memory state stays
//! authoritative and the next successful save catches storage up.
//!
//! A stored value that could not be decoded is not thrown away: before the
//! first save replaces it, it is copied verbatim to `{storage_key}.bak`.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `RecipeApi<FileStore>`
//! - Testing: `RecipeApi<InMemoryStore>`

use crate::book::RecipeBook;
use crate::commands::{self, CmdResult};
use crate::config::RecipeConfig;
use crate::error::Result;
use crate::model::{seed_recipes, Context, Draft, DraftUpdate, Recipe};
use crate::store::{read_recipes, save_recipes, KeyValueStore, StoredRecipes};
use std::path::PathBuf;
use tracing::{info, warn};

/// The main API facade for recipe operations.
pub struct RecipeApi<S: KeyValueStore> {
    store: S,
    config: RecipeConfig,
    book: RecipeBook,
    pending_backup: Option<String>,
}

impl<S: KeyValueStore> RecipeApi<S> {
    /// Load the primary collection from `store`, or the seed recipes when
    /// nothing usable is stored. Nothing is written until the first change.
    pub fn open(store: S, config: RecipeConfig) -> Self {
        let (primary, pending_backup) = match read_recipes(&store, &config.storage_key) {
            StoredRecipes::Valid(recipes) => (recipes, None),
            StoredRecipes::Missing => {
                info!("using seed recipes");
                (seed_recipes(), None)
            }
            StoredRecipes::Corrupt(raw) => {
                info!("using seed recipes, unreadable data will be backed up on save");
                (seed_recipes(), Some(raw))
            }
        };
        Self {
            store,
            config,
            book: RecipeBook::new(primary),
            pending_backup,
        }
    }

    // --- Reads ---

    pub fn primary(&self) -> &[Recipe] {
        self.book.primary()
    }

    pub fn secondary(&self) -> &[Recipe] {
        self.book.secondary()
    }

    pub fn draft(&self) -> &Draft {
        self.book.draft()
    }

    pub fn is_editing(&self) -> bool {
        self.book.is_editing()
    }

    pub fn editing(&self) -> Option<u64> {
        self.book.editing()
    }

    pub fn search_term(&self) -> &str {
        self.book.search_term()
    }

    pub fn find(&self, id: u64) -> Option<&Recipe> {
        self.book.find(id)
    }

    /// The collection for `context`, filtered by the current search term.
    pub fn visible(&self, context: Context) -> CmdResult {
        commands::query::run(&self.book, context)
    }

    // --- Mutations ---

    pub fn set_draft(&mut self, update: DraftUpdate) -> CmdResult {
        commands::draft::run(&mut self.book, update)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> CmdResult {
        commands::search::run(&mut self.book, term)
    }

    pub fn begin_edit(&mut self, recipe: &Recipe) -> CmdResult {
        commands::edit::run(&mut self.book, recipe)
    }

    /// Begin editing the recipe with `id`, if any collection holds it.
    pub fn begin_edit_by_id(&mut self, id: u64) -> Option<CmdResult> {
        let recipe = self.book.find(id)?.clone();
        Some(self.begin_edit(&recipe))
    }

    pub fn commit(&mut self, context: Context) -> CmdResult {
        let result = commands::commit::run(&mut self.book, context);
        self.persist_if_changed(&result);
        result
    }

    pub fn delete_recipe(&mut self, id: u64) -> CmdResult {
        let result = commands::delete::run(&mut self.book, id);
        self.persist_if_changed(&result);
        result
    }

    // --- Storage ---

    pub fn config(&self) -> &RecipeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Where the primary collection is stored.
    pub fn data_location(&self) -> PathBuf {
        self.store.location(&self.config.storage_key)
    }

    /// Key the unreadable value found at open time is copied to.
    pub fn backup_key(&self) -> String {
        format!("{}.bak", self.config.storage_key)
    }

    /// Save the primary collection now. A pending backup of unreadable data
    /// is written first; if that fails the stored value is left untouched.
    pub fn save(&mut self) -> Result<()> {
        if let Some(raw) = &self.pending_backup {
            let key = self.backup_key();
            self.store.write(&key, raw)?;
            warn!(key = %key, "unreadable recipes backed up");
            self.pending_backup = None;
        }
        save_recipes(
            &mut self.store,
            &self.config.storage_key,
            self.book.primary(),
            self.config.pretty_json,
        )
    }

    fn persist_if_changed(&mut self, result: &CmdResult) {
        if !result.primary_changed {
            return;
        }
        if let Err(e) = self.save() {
            warn!(error = %e, "failed to save recipes");
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel, RecipePaths};

/// Run a config action against the data directory.
pub fn config(paths: &RecipePaths, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(paths, action)
}
