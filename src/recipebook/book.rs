//! # Recipe Book State
//!
//! [`RecipeBook`] is the in-memory state behind every view: the two recipe
//! collections, the draft buffer, the edit pointer and the search term.
//!
//! Fields are only mutated from the command layer (`commands/*.rs`); views get
//! read accessors. Nothing here touches storage.
//!
//! ## Collections
//!
//! - **Primary**: every recipe in the catalog. Loaded from and written to
//!   storage by the API facade.
//! - **Secondary**: recipes added from the "add" page during this session.
//!   Never persisted.
//!
//! A recipe created in the secondary context lives in both collections under
//! the same id, so an edit by id is broadcast to every collection via
//! [`RecipeBook::collections_mut`].

use crate::model::{Context, Draft, Recipe};
use chrono::Utc;
use std::collections::HashSet;

/// Issues recipe ids.
///
/// Ids are derived from wall-clock milliseconds but never repeat: each new id
/// is at least one greater than the previous one, so two creates within the
/// same clock tick still get distinct, increasing ids. Once `u64::MAX` has
/// been issued (or loaded) the source is exhausted and returns `None`.
#[derive(Debug, Clone, Default)]
pub struct IdSource {
    last: u64,
}

impl IdSource {
    /// Start issuing above `floor` (typically the highest id already loaded).
    pub fn above(floor: u64) -> Self {
        Self { last: floor }
    }

    pub fn next_id(&mut self) -> Option<u64> {
        let after_last = self.last.checked_add(1)?;
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(after_last);
        Some(self.last)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    pub(crate) primary: Vec<Recipe>,
    pub(crate) secondary: Vec<Recipe>,
    pub(crate) draft: Draft,
    pub(crate) editing: Option<u64>,
    pub(crate) search: String,
    pub(crate) ids: IdSource,
}

impl RecipeBook {
    /// Build a book around an already loaded primary collection. The secondary
    /// collection always starts empty.
    pub fn new(primary: Vec<Recipe>) -> Self {
        let floor = primary.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            primary,
            ids: IdSource::above(floor),
            ..Self::default()
        }
    }

    pub fn primary(&self) -> &[Recipe] {
        &self.primary
    }

    pub fn secondary(&self) -> &[Recipe] {
        &self.secondary
    }

    pub fn collection(&self, context: Context) -> &[Recipe] {
        match context {
            Context::Primary => &self.primary,
            Context::Secondary => &self.secondary,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing(&self) -> Option<u64> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Look a recipe up by id, checking the primary collection first.
    pub fn find(&self, id: u64) -> Option<&Recipe> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .find(|r| r.id == id)
    }

    /// Every collection, for operations that apply by id to all of them.
    pub(crate) fn collections_mut(&mut self) -> [&mut Vec<Recipe>; 2] {
        [&mut self.primary, &mut self.secondary]
    }

    /// A fresh id for a new recipe. Falls back to the smallest id no
    /// collection uses when the increasing sequence is exhausted.
    pub(crate) fn allocate_id(&mut self) -> u64 {
        if let Some(id) = self.ids.next_id() {
            return id;
        }
        let taken: HashSet<u64> = self
            .primary
            .iter()
            .chain(self.secondary.iter())
            .map(|r| r.id)
            .collect();
        (1..=u64::MAX)
            .find(|id| !taken.contains(id))
            .unwrap_or(0)
    }

    pub(crate) fn reset_draft(&mut self) {
        self.draft = Draft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_recipes;

    #[test]
    fn ids_strictly_increase_within_a_tick() {
        let mut ids = IdSource::default();
        let a = ids.next_id().unwrap();
        let b = ids.next_id().unwrap();
        let c = ids.next_id().unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn ids_start_above_loaded_floor() {
        let far_future = u64::MAX / 2;
        let mut ids = IdSource::above(far_future);
        assert_eq!(ids.next_id(), Some(far_future + 1));
    }

    #[test]
    fn ids_run_out_at_max_instead_of_wrapping() {
        let mut ids = IdSource::above(u64::MAX);
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn exhausted_source_reuses_smallest_free_id() {
        let mut book = RecipeBook::new(vec![
            Recipe::new(1, "One", "a"),
            Recipe::new(u64::MAX, "Max", "Edge"),
        ]);
        book.secondary.push(Recipe::new(2, "Two", "b"));

        assert_eq!(book.allocate_id(), 3);
        book.primary.push(Recipe::new(3, "Three", "c"));
        assert_eq!(book.allocate_id(), 4);
    }

    #[test]
    fn new_book_has_empty_transient_state() {
        let book = RecipeBook::new(seed_recipes());
        assert_eq!(book.primary().len(), 2);
        assert!(book.secondary().is_empty());
        assert_eq!(book.draft(), &Draft::default());
        assert!(!book.is_editing());
        assert_eq!(book.search_term(), "");
        assert_eq!(book.ids.last, 2);
    }

    #[test]
    fn find_checks_both_collections() {
        let mut book = RecipeBook::new(seed_recipes());
        book.secondary.push(Recipe::new(99, "Only here", "Stuff"));
        assert_eq!(book.find(2).map(|r| r.name.as_str()), Some("Pancakes"));
        assert_eq!(book.find(99).map(|r| r.name.as_str()), Some("Only here"));
        assert!(book.find(3).is_none());
    }
}
