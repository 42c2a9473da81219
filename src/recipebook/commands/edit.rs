use crate::book::RecipeBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Draft, Recipe};
use tracing::debug;

/// Start editing `recipe`: point the edit at its id and load its fields into
/// the draft. Any edit already in progress is dropped.
pub fn run(book: &mut RecipeBook, recipe: &Recipe) -> CmdResult {
    if let Some(previous) = book.editing.filter(|&prev| prev != recipe.id) {
        debug!(previous, "discarding unsaved edit");
    }

    book.editing = Some(recipe.id);
    book.draft = Draft::from_recipe(recipe);
    debug!(id = recipe.id, "editing recipe");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Editing ({}): {}",
        recipe.id, recipe.name
    )));
    result
}
