use crate::commands::CmdResult;
use crate::error::Result;
use crate::shelf::Shelf;
use crate::view;

/// Filters the shelf by title or author and projects only the matches.
///
/// Surrounding whitespace in the query is ignored. The shelf is not touched.
pub fn run(shelf: &Shelf, query: &str) -> Result<CmdResult> {
    let query = query.trim();
    let matches = shelf.filter(query);
    Ok(CmdResult::default().with_view(view::project_filtered(&matches, query)))
}
