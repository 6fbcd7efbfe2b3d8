use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of characters the form keeps for a publication year.
pub const YEAR_MAX_CHARS: usize = 4;

/// Identity of a book within the collection.
///
/// Ids are derived from the creation time in milliseconds, so they read as
/// plain integers in the stored JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(BookId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    // Older snapshots stored the year as a JSON number.
    #[serde(deserialize_with = "year_from_text_or_number")]
    pub year: String,
    pub is_completed: bool,
}

impl Book {
    pub fn new(
        id: BookId,
        title: String,
        author: String,
        year: String,
        is_completed: bool,
    ) -> Self {
        Self {
            id,
            title,
            author,
            year,
            is_completed,
        }
    }
}

fn year_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearRepr {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match YearRepr::deserialize(deserializer)? {
        YearRepr::Text(text) => text,
        YearRepr::Number(n) => n.to_string(),
    })
}

/// Truncates a year to [`YEAR_MAX_CHARS`] characters.
pub fn cap_year(year: &str) -> String {
    year.chars().take(YEAR_MAX_CHARS).collect()
}

/// The add-book form: the values a user has typed but not yet submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    year: String,
    pub is_completed: bool,
}

impl BookForm {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: &str,
        is_completed: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: cap_year(year),
            is_completed,
        }
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// Sets the year, keeping at most [`YEAR_MAX_CHARS`] characters.
    pub fn set_year(&mut self, year: &str) {
        self.year = cap_year(year);
    }

    /// Resets the text fields after a submit. The read checkbox is reset too.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.author.is_empty() && self.year.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_flag() {
        let book = Book::new(
            BookId(1700000000000),
            "Dune".into(),
            "Herbert".into(),
            "1965".into(),
            false,
        );
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(
            json,
            r#"{"id":1700000000000,"title":"Dune","author":"Herbert","year":"1965","isCompleted":false}"#
        );
    }

    #[test]
    fn reads_numeric_year_as_text() {
        let json = r#"{"id":5,"title":"Emma","author":"Austen","year":1815,"isCompleted":true}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.year, "1815");
        assert!(book.is_completed);
    }

    #[test]
    fn form_caps_year_to_four_chars() {
        let mut form = BookForm::new("Dune", "Herbert", "196512", false);
        assert_eq!(form.year(), "1965");

        form.set_year("20");
        assert_eq!(form.year(), "20");
    }

    #[test]
    fn form_clear_resets_all_fields() {
        let mut form = BookForm::new("Dune", "Herbert", "1965", true);
        form.clear();
        assert!(form.is_blank());
        assert!(!form.is_completed);
    }

    #[test]
    fn book_id_parses_from_text() {
        assert_eq!(" 42 ".parse::<BookId>().unwrap(), BookId(42));
        assert!("abc".parse::<BookId>().is_err());
    }
}
