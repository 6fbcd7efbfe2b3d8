//! # The Shelf
//!
//! [`Shelf`] is the single source of truth for the session: an ordered list of
//! [`Book`]s owned by the API facade. All mutation goes through its methods.
//!
//! Lookups are linear scans by [`BookId`]. Missing ids are never errors: index
//! lookups return `None`, and status changes or removals on a missing id leave
//! the shelf untouched.

use crate::model::{Book, BookId};
use chrono::Utc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shelf {
    books: Vec<Book>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a shelf from a previously persisted snapshot, keeping its order.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Appends a new book with a fresh id and returns a copy of it.
    pub fn add(&mut self, title: String, author: String, year: String, is_completed: bool) -> Book {
        let book = Book::new(self.next_id(), title, author, year, is_completed);
        self.books.push(book.clone());
        book
    }

    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn find_index_by_id(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    /// Sets the read flag in place. Returns `false` when no book has `id`.
    pub fn set_completed(&mut self, id: BookId, value: bool) -> bool {
        match self.books.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                book.is_completed = value;
                true
            }
            None => false,
        }
    }

    /// Removes the book with `id`, shifting later entries down.
    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        let index = self.find_index_by_id(id)?;
        Some(self.books.remove(index))
    }

    /// Case-insensitive substring match against title or author.
    ///
    /// An empty query matches every book. The shelf itself is not modified.
    pub fn filter(&self, query: &str) -> Vec<Book> {
        let query = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&query)
                    || book.author.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    // Millisecond timestamps, bumped past the largest id already on the shelf
    // so that adds within the same millisecond stay unique. When the largest id
    // is i64::MAX there is nothing above it, so the first free id below now is
    // used instead.
    fn next_id(&self) -> BookId {
        let now = Utc::now().timestamp_millis();
        match self.books.iter().map(|book| book.id.0).max() {
            None => BookId(now),
            Some(max) => match max.checked_add(1) {
                Some(next) => BookId(now.max(next)),
                None => self.free_id_at_or_below(now),
            },
        }
    }

    fn free_id_at_or_below(&self, start: i64) -> BookId {
        let mut candidate = BookId(start);
        while self.find_by_id(candidate).is_some() {
            candidate = BookId(candidate.0.wrapping_sub(1));
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn shelf_with(titles: &[(&str, &str)]) -> Shelf {
        let mut shelf = Shelf::new();
        for (title, author) in titles {
            shelf.add(title.to_string(), author.to_string(), "2000".into(), false);
        }
        shelf
    }

    #[test]
    fn adds_keep_count_and_unique_ids() {
        let mut shelf = Shelf::new();
        for i in 0..200 {
            shelf.add(format!("Book {}", i), "Anon".into(), "1999".into(), false);
        }

        assert_eq!(shelf.len(), 200);
        let ids: HashSet<_> = shelf.books().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn add_appends_at_the_end() {
        let shelf = shelf_with(&[("First", "A"), ("Second", "B")]);
        assert_eq!(shelf.books()[0].title, "First");
        assert_eq!(shelf.books()[1].title, "Second");
    }

    #[test]
    fn ids_bump_past_hydrated_future_ids() {
        let future = BookId(Utc::now().timestamp_millis() + 60_000);
        let mut shelf = Shelf::from_books(vec![Book::new(
            future,
            "Later".into(),
            "X".into(),
            "2100".into(),
            false,
        )]);
        let added = shelf.add("Now".into(), "Y".into(), "2024".into(), false);
        assert_eq!(added.id, BookId(future.0 + 1));
    }

    #[test]
    fn ids_stay_unique_when_max_id_is_taken() {
        let top = Book::new(BookId(i64::MAX), "Top".into(), "x".into(), "".into(), false);
        let mut shelf = Shelf::from_books(vec![top]);

        let first = shelf.add("A".into(), "x".into(), "".into(), false);
        let second = shelf.add("B".into(), "x".into(), "".into(), false);

        assert_ne!(first.id, BookId(i64::MAX));
        assert_ne!(second.id, BookId(i64::MAX));
        assert_ne!(first.id, second.id);
        let ids: HashSet<_> = shelf.books().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn find_index_distinguishes_missing_from_first() {
        let shelf = shelf_with(&[("Only", "One")]);
        let first = shelf.books()[0].id;

        assert_eq!(shelf.find_index_by_id(first), Some(0));
        assert_eq!(shelf.find_index_by_id(BookId(-1)), None);
        assert_eq!(shelf.find_index_by_id(BookId(0)), None);
    }

    #[test]
    fn find_by_id_returns_match() {
        let shelf = shelf_with(&[("A", "x"), ("B", "y")]);
        let id = shelf.books()[1].id;
        assert_eq!(shelf.find_by_id(id).map(|b| b.title.as_str()), Some("B"));
        assert!(shelf.find_by_id(BookId(1)).is_none());
    }

    #[test]
    fn remove_missing_id_is_a_no_op() {
        let mut shelf = shelf_with(&[("A", "x"), ("B", "y")]);
        let before = shelf.clone();

        assert!(shelf.remove(BookId(12345)).is_none());
        assert_eq!(shelf, before);
    }

    #[test]
    fn remove_shifts_later_entries() {
        let mut shelf = shelf_with(&[("A", "x"), ("B", "y"), ("C", "z")]);
        let middle = shelf.books()[1].id;

        let removed = shelf.remove(middle).unwrap();
        assert_eq!(removed.title, "B");
        let titles: Vec<_> = shelf.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn set_completed_missing_id_is_a_no_op() {
        let mut shelf = shelf_with(&[("A", "x")]);
        let before = shelf.clone();

        assert!(!shelf.set_completed(BookId(7), true));
        assert_eq!(shelf, before);
    }

    #[test]
    fn set_completed_flips_only_the_flag() {
        let mut shelf = shelf_with(&[("A", "x"), ("B", "y")]);
        let id = shelf.books()[0].id;
        let original = shelf.books()[0].clone();

        assert!(shelf.set_completed(id, true));
        let updated = &shelf.books()[0];
        assert!(updated.is_completed);
        assert_eq!(updated.title, original.title);
        assert_eq!(updated.author, original.author);
        assert_eq!(updated.year, original.year);
        assert_eq!(shelf.find_index_by_id(id), Some(0));
    }

    #[test]
    fn filter_matches_title_or_author_case_insensitively() {
        let shelf = shelf_with(&[
            ("Dune", "Frank Herbert"),
            ("Emma", "Jane Austen"),
            ("Persuasion", "Jane Austen"),
        ]);

        let by_title: Vec<_> = shelf.filter("DUNE").into_iter().map(|b| b.title).collect();
        assert_eq!(by_title, vec!["Dune"]);

        let by_author: Vec<_> = shelf.filter("austen").into_iter().map(|b| b.title).collect();
        assert_eq!(by_author, vec!["Emma", "Persuasion"]);

        assert!(shelf.filter("tolkien").is_empty());
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let shelf = shelf_with(&[("A", "x"), ("B", "y"), ("C", "z")]);
        assert_eq!(shelf.filter(""), shelf.books().to_vec());
    }

    #[test]
    fn filter_does_not_mutate() {
        let shelf = shelf_with(&[("A", "x")]);
        let before = shelf.clone();
        let _ = shelf.filter("zzz");
        assert_eq!(shelf, before);
    }
}
