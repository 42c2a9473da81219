use crate::book::RecipeBook;
use crate::commands::CmdResult;
use crate::model::DraftUpdate;

/// Merge `update` into the draft. No validation happens until commit.
pub fn run(book: &mut RecipeBook, update: DraftUpdate) -> CmdResult {
    book.draft.merge(update);
    CmdResult::default()
}
