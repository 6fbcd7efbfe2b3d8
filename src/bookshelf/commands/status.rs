use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::BookId;
use crate::shelf::Shelf;
use tracing::debug;

pub fn complete(shelf: &mut Shelf, id: BookId) -> Result<CmdResult> {
    set_state(shelf, id, true)
}

pub fn undo(shelf: &mut Shelf, id: BookId) -> Result<CmdResult> {
    set_state(shelf, id, false)
}

fn set_state(shelf: &mut Shelf, id: BookId, is_completed: bool) -> Result<CmdResult> {
    if !shelf.set_completed(id, is_completed) {
        debug!(%id, "no book with this id, ignoring status change");
        return Ok(CmdResult::default());
    }

    let affected = shelf.find_by_id(id).cloned().into_iter().collect();
    Ok(CmdResult::default().with_affected_books(affected))
}
