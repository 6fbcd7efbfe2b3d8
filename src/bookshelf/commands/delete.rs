//! Deleting is the only two-step interaction: a request opens a confirmation
//! prompt, and nothing changes until that prompt is answered.
//!
//! [`request`] yields a [`PendingDelete`]. [`resolve`] consumes it together with
//! the user's [`Confirmation`], so a pending delete can be resolved exactly once.
//! There is no timeout: a pending delete stays pending until it is resolved.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::shelf::Shelf;
use tracing::debug;

pub const PROMPT_TITLE: &str = "Are you sure?";
pub const PROMPT_TEXT: &str = "Once deleted, you will not be able to recover this book!";
pub const DELETED_NOTICE: &str = "Poof! Your book has been deleted!";
pub const KEPT_NOTICE: &str = "Your book is safe!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Cancelled
        }
    }
}

/// What the user is asked before a book is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    /// Title of the targeted book, when it exists.
    pub book_title: Option<String>,
}

/// A delete awaiting the user's answer.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending delete does nothing until it is resolved"]
pub struct PendingDelete {
    id: BookId,
    prompt: ConfirmPrompt,
}

impl PendingDelete {
    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn prompt(&self) -> &ConfirmPrompt {
        &self.prompt
    }
}

pub fn request(shelf: &Shelf, id: BookId) -> PendingDelete {
    let book_title = shelf.find_by_id(id).map(|book| book.title.clone());
    PendingDelete {
        id,
        prompt: ConfirmPrompt {
            title: PROMPT_TITLE.to_string(),
            text: PROMPT_TEXT.to_string(),
            book_title,
        },
    }
}

pub fn resolve(
    shelf: &mut Shelf,
    pending: PendingDelete,
    confirmation: Confirmation,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match confirmation {
        Confirmation::Cancelled => {
            result.add_message(CmdMessage::info(KEPT_NOTICE));
        }
        Confirmation::Confirmed => match shelf.remove(pending.id) {
            Some(book) => {
                result.affected_books.push(book);
                result.add_message(CmdMessage::success(DELETED_NOTICE));
            }
            None => {
                debug!(id = %pending.id, "no book with this id, ignoring delete");
            }
        },
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn shelf() -> (Shelf, BookId) {
        let mut shelf = Shelf::new();
        let book = shelf.add("Dune".into(), "Herbert".into(), "1965".into(), false);
        shelf.add("Emma".into(), "Austen".into(), "1815".into(), false);
        (shelf, book.id)
    }

    #[test]
    fn request_does_not_mutate() {
        let (shelf, id) = shelf();
        let before = shelf.clone();

        let pending = request(&shelf, id);

        assert_eq!(shelf, before);
        assert_eq!(pending.id(), id);
        assert_eq!(pending.prompt().title, PROMPT_TITLE);
        assert_eq!(pending.prompt().book_title.as_deref(), Some("Dune"));
    }

    #[test]
    fn confirmed_removes_the_book() {
        let (mut shelf, id) = shelf();
        let pending = request(&shelf, id);

        let result = resolve(&mut shelf, pending, Confirmation::Confirmed).unwrap();

        assert_eq!(shelf.len(), 1);
        assert!(shelf.find_by_id(id).is_none());
        assert_eq!(result.affected_books[0].title, "Dune");
        assert_eq!(result.messages[0].content, DELETED_NOTICE);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn cancelled_keeps_the_book() {
        let (mut shelf, id) = shelf();
        let before = shelf.clone();
        let pending = request(&shelf, id);

        let result = resolve(&mut shelf, pending, Confirmation::Cancelled).unwrap();

        assert_eq!(shelf, before);
        assert!(!result.is_mutation());
        assert_eq!(result.messages[0].content, KEPT_NOTICE);
    }

    #[test]
    fn confirmed_missing_id_is_a_no_op() {
        let (mut shelf, _) = shelf();
        let before = shelf.clone();
        let pending = request(&shelf, BookId(0));
        assert!(pending.prompt().book_title.is_none());

        let result = resolve(&mut shelf, pending, Confirmation::Confirmed).unwrap();

        assert_eq!(shelf, before);
        assert!(!result.is_mutation());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn confirmation_from_bool() {
        assert_eq!(Confirmation::from(true), Confirmation::Confirmed);
        assert_eq!(Confirmation::from(false), Confirmation::Cancelled);
    }
}
