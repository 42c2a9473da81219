use crate::book::RecipeBook;
use crate::commands::CmdResult;

/// Replace the search term verbatim.
pub fn run(book: &mut RecipeBook, term: impl Into<String>) -> CmdResult {
    book.search = term.into();
    CmdResult::default()
}
