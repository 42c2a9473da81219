use crate::book::RecipeBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::Recipe;
use tracing::debug;

/// Remove the recipe with `id` from every collection. Unknown ids are a no-op.
pub fn run(book: &mut RecipeBook, id: u64) -> CmdResult {
    let mut result = CmdResult::default();
    let primary_before = book.primary.len();
    let mut removed: Option<Recipe> = None;

    for collection in book.collections_mut() {
        collection.retain(|r| {
            if r.id == id {
                removed.get_or_insert_with(|| r.clone());
                false
            } else {
                true
            }
        });
    }

    result.primary_changed = book.primary.len() != primary_before;

    match removed {
        Some(recipe) => {
            debug!(id, "recipe deleted");
            result.add_message(CmdMessage::success(format!(
                "Recipe deleted ({}): {}",
                recipe.id, recipe.name
            )));
            result.affected_recipes.push(recipe);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No recipe with id {}", id)));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{commit, draft};
    use crate::model::{seed_recipes, Context, DraftUpdate};

    #[test]
    fn deleting_seed_entry_leaves_the_other() {
        let mut book = RecipeBook::new(seed_recipes());
        let res = run(&mut book, 1);

        assert!(res.primary_changed);
        assert_eq!(book.primary().len(), 1);
        assert_eq!(book.primary()[0].id, 2);
        assert_eq!(book.primary()[0].name, "Pancakes");
    }

    #[test]
    fn removes_from_both_collections_and_is_idempotent() {
        let mut book = RecipeBook::new(seed_recipes());
        draft::run(&mut book, DraftUpdate::new().name("Waffles").ingredients("Flour"));
        commit::run(&mut book, Context::Secondary);
        let id = book.secondary()[0].id;

        run(&mut book, id);
        assert_eq!(book.primary(), seed_recipes().as_slice());
        assert!(book.secondary().is_empty());

        let again = run(&mut book, id);
        assert!(!again.primary_changed);
        assert!(again.affected_recipes.is_empty());
        assert_eq!(book.primary(), seed_recipes().as_slice());
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut book = RecipeBook::new(seed_recipes());
        let res = run(&mut book, 42);
        assert!(!res.primary_changed);
        assert_eq!(book.primary().len(), 2);
    }
}
