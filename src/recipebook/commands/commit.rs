use crate::book::RecipeBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Context, Recipe};
use tracing::debug;

/// Turn the draft into a recipe.
///
/// With an edit in progress, the recipe with the edited id is updated in
/// place in every collection that holds it, whatever `context` says. Without
/// one, a new recipe is appended to the primary collection, and also to the
/// secondary collection when `context` is [`Context::Secondary`].
///
/// A draft with a blank name or blank ingredients changes nothing, not even
/// the edit pointer.
pub fn run(book: &mut RecipeBook, context: Context) -> CmdResult {
    let mut result = CmdResult::default();

    if !book.draft.is_committable() {
        debug!("commit ignored, draft is incomplete");
        result.add_message(CmdMessage::warning(
            "Recipe name and ingredients are required",
        ));
        return result;
    }

    match book.editing.take() {
        Some(id) => update_existing(book, id, &mut result),
        None => create_new(book, context, &mut result),
    }

    book.reset_draft();
    result
}

fn update_existing(book: &mut RecipeBook, id: u64, result: &mut CmdResult) {
    let draft = book.draft.clone();
    let mut updated: Option<Recipe> = None;

    for collection in book.collections_mut() {
        if let Some(recipe) = collection.iter_mut().find(|r| r.id == id) {
            draft.apply_to(recipe);
            updated.get_or_insert_with(|| recipe.clone());
        }
    }

    result.primary_changed = book.primary.iter().any(|r| r.id == id);

    match updated {
        Some(recipe) => {
            debug!(id, "recipe updated");
            result.add_message(CmdMessage::success(format!(
                "Recipe updated ({}): {}",
                recipe.id, recipe.name
            )));
            result.affected_recipes.push(recipe);
        }
        None => {
            debug!(id, "edited recipe no longer exists");
            result.add_message(CmdMessage::info(format!(
                "Recipe {} no longer exists, nothing to update",
                id
            )));
        }
    }
}

fn create_new(book: &mut RecipeBook, context: Context, result: &mut CmdResult) {
    let id = book.allocate_id();
    let recipe = book.draft.to_recipe(id);

    book.primary.push(recipe.clone());
    if context == Context::Secondary {
        book.secondary.push(recipe.clone());
    }
    result.primary_changed = true;

    debug!(id, %context, "recipe created");
    result.add_message(CmdMessage::success(format!(
        "Recipe added ({}): {}",
        recipe.id, recipe.name
    )));
    result.affected_recipes.push(recipe);
}
