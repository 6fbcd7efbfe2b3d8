use crate::commands::CmdResult;
use crate::error::Result;
use crate::shelf::Shelf;
use crate::view;

pub fn run(shelf: &Shelf) -> Result<CmdResult> {
    Ok(CmdResult::default().with_view(view::project(shelf.books())))
}
