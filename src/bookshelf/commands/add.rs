use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookForm;
use crate::shelf::Shelf;

pub fn run(shelf: &mut Shelf, form: &BookForm) -> Result<CmdResult> {
    let book = shelf.add(
        form.title.clone(),
        form.author.clone(),
        form.year().to_string(),
        form.is_completed,
    );

    let mut result = CmdResult::default().with_affected_books(vec![book]);
    result.add_message(CmdMessage::success("Successfully added the book"));
    Ok(result)
}
