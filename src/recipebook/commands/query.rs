use crate::book::RecipeBook;
use crate::commands::CmdResult;
use crate::model::{Context, Recipe};

/// Recipes in `recipes` whose name contains `term`, ignoring case, in their
/// original order. An empty term matches everything.
pub fn visible<'a>(recipes: &'a [Recipe], term: &str) -> impl Iterator<Item = &'a Recipe> + 'a {
    let needle = term.to_lowercase();
    recipes
        .iter()
        .filter(move |r| r.name.to_lowercase().contains(&needle))
}

/// List the visible part of the collection for `context`, filtered by the
/// book's current search term.
pub fn run(book: &RecipeBook, context: Context) -> CmdResult {
    let listed = visible(book.collection(context), book.search_term())
        .cloned()
        .collect();
    CmdResult::default().with_listed_recipes(listed)
}
