//! # Shelf Projection
//!
//! Turns a list of books into the two visual partitions: unread
//! (`uncompleted`) and read (`completed`). A [`ShelfView`] is rebuilt from scratch
//! on every render signal and holds no state of its own, so projecting the same
//! books twice yields the same view.
//!
//! Every [`BookCard`] carries exactly one status action (mark complete when unread,
//! undo when read) plus a delete action. Actions carry the book id, which is all a
//! client needs to dispatch the matching [`crate::api::ShelfApi`] call.

use crate::model::{Book, BookId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    MarkComplete(BookId),
    UndoComplete(BookId),
    Delete(BookId),
}

impl CardAction {
    pub fn id(&self) -> BookId {
        match self {
            CardAction::MarkComplete(id)
            | CardAction::UndoComplete(id)
            | CardAction::Delete(id) => *id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Uncompleted,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub id: BookId,
    pub title: String,
    pub year: String,
    pub author: String,
    pub status_action: CardAction,
    pub delete_action: CardAction,
}

impl BookCard {
    fn from_book(book: &Book) -> Self {
        let status_action = if book.is_completed {
            CardAction::UndoComplete(book.id)
        } else {
            CardAction::MarkComplete(book.id)
        };

        Self {
            id: book.id,
            title: book.title.clone(),
            year: book.year.clone(),
            author: book.author.clone(),
            status_action,
            delete_action: CardAction::Delete(book.id),
        }
    }
}

/// The rendered state of the shelf at the last render signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShelfView {
    pub uncompleted: Vec<BookCard>,
    pub completed: Vec<BookCard>,
    /// The search query this view was filtered by, if any.
    pub query: Option<String>,
}

impl ShelfView {
    pub fn len(&self) -> usize {
        self.uncompleted.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uncompleted.is_empty() && self.completed.is_empty()
    }

    pub fn partition_of(&self, id: BookId) -> Option<Partition> {
        if self.uncompleted.iter().any(|card| card.id == id) {
            Some(Partition::Uncompleted)
        } else if self.completed.iter().any(|card| card.id == id) {
            Some(Partition::Completed)
        } else {
            None
        }
    }
}

/// Full rebuild of both partitions from `books`, preserving their order.
pub fn project(books: &[Book]) -> ShelfView {
    let mut view = ShelfView::default();
    for book in books {
        let card = BookCard::from_book(book);
        if book.is_completed {
            view.completed.push(card);
        } else {
            view.uncompleted.push(card);
        }
    }
    view
}

/// Same as [`project`], tagging the view with the query that produced `books`.
pub fn project_filtered(books: &[Book], query: &str) -> ShelfView {
    ShelfView {
        query: Some(query.to_string()),
        ..project(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, done: bool) -> Book {
        Book::new(BookId(id), title.into(), "Someone".into(), "1999".into(), done)
    }

    #[test]
    fn splits_by_read_flag_keeping_order() {
        let books = vec![
            book(1, "A", false),
            book(2, "B", true),
            book(3, "C", false),
            book(4, "D", true),
        ];
        let view = project(&books);

        let unread: Vec<_> = view.uncompleted.iter().map(|c| c.title.as_str()).collect();
        let read: Vec<_> = view.completed.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(unread, vec!["A", "C"]);
        assert_eq!(read, vec!["B", "D"]);
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn unread_cards_offer_mark_complete() {
        let view = project(&[book(9, "A", false)]);
        let card = &view.uncompleted[0];
        assert_eq!(card.status_action, CardAction::MarkComplete(BookId(9)));
        assert_eq!(card.delete_action, CardAction::Delete(BookId(9)));
    }

    #[test]
    fn read_cards_offer_undo() {
        let view = project(&[book(9, "A", true)]);
        assert_eq!(
            view.completed[0].status_action,
            CardAction::UndoComplete(BookId(9))
        );
    }

    #[test]
    fn projection_is_idempotent() {
        let books = vec![book(1, "A", false), book(2, "B", true)];
        assert_eq!(project(&books), project(&books));
    }

    #[test]
    fn empty_books_give_empty_partitions() {
        let view = project(&[]);
        assert!(view.is_empty());
        assert_eq!(view.partition_of(BookId(1)), None);
    }

    #[test]
    fn partition_of_reports_location() {
        let view = project(&[book(1, "A", false), book(2, "B", true)]);
        assert_eq!(view.partition_of(BookId(1)), Some(Partition::Uncompleted));
        assert_eq!(view.partition_of(BookId(2)), Some(Partition::Completed));
    }

    #[test]
    fn filtered_projection_keeps_query() {
        let view = project_filtered(&[book(1, "Dune", false)], "dune");
        assert_eq!(view.query.as_deref(), Some("dune"));
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn action_exposes_id() {
        assert_eq!(CardAction::Delete(BookId(4)).id(), BookId(4));
    }
}
