use super::KeyValueStore;
use crate::error::{Result, ShelfError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
pub struct InMemoryStore {
    slots: HashMap<String, String>,
    available: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            available: true,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that reports itself unavailable and refuses writes.
    pub fn unavailable() -> Self {
        Self {
            slots: HashMap::new(),
            available: false,
        }
    }
}

impl KeyValueStore for InMemoryStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.available {
            return Err(ShelfError::StorageUnavailable(
                "in-memory store is disabled".to_string(),
            ));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, BookId};
    use crate::persistence::STORAGE_KEY;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds the default slot with `count` unread books with ids 1..=count.
        pub fn with_books(mut self, count: usize) -> Self {
            let books: Vec<Book> = (1..=count)
                .map(|i| {
                    Book::new(
                        BookId(i as i64),
                        format!("Test Book {}", i),
                        format!("Author {}", i),
                        "2001".to_string(),
                        false,
                    )
                })
                .collect();
            let raw = serde_json::to_string(&books).unwrap();
            self.store.set(STORAGE_KEY, &raw).unwrap();
            self
        }

        /// Seeds the default slot with an arbitrary (possibly malformed) value.
        pub fn with_raw(mut self, raw: &str) -> Self {
            self.store.set(STORAGE_KEY, raw).unwrap();
            self
        }
    }
}
