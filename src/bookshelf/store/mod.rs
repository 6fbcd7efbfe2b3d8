//! # Storage Layer
//!
//! Durable storage for bookshelf is a plain key-value slot store. The
//! [`KeyValueStore`] trait keeps the persistence adapter decoupled from where the
//! bytes end up.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage. Each key is a `<key>.json` file in
//!   the data directory.
//! - [`memory::InMemoryStore`]: A `HashMap` for tests. It can also be built in an
//!   unavailable state to exercise the memory-only fallback.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── BOOKSHELF-APP.json  # The whole collection (JSON array)
//! └── config.json         # ShelfConfig
//! ```
//!
//! The store knows nothing about books: values are opaque strings. Serializing
//! the collection is the job of [`crate::persistence`].

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface over a durable key-value slot store.
pub trait KeyValueStore {
    /// Whether the backend can be written to at all. Checked once per session.
    fn is_available(&self) -> bool;

    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
