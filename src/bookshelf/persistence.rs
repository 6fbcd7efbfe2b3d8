//! # Persistence Adapter
//!
//! Translates the in-memory collection to and from one durable key-value slot.
//!
//! - [`Persistence::open`] checks storage availability exactly once. When the
//!   backend is unavailable, persistence is disabled for the session and a single
//!   warning is queued for the user (see [`Persistence::take_warning`]).
//! - [`Persistence::load`] never fails: a missing or malformed snapshot reads as
//!   an empty collection.
//! - [`Persistence::save`] writes the whole collection as a compact JSON array.
//!   It is a no-op while persistence is disabled.

use crate::error::Result;
use crate::model::Book;
use crate::store::KeyValueStore;
use tracing::{debug, warn};

/// The well-known slot the collection lives under.
pub const STORAGE_KEY: &str = "BOOKSHELF-APP";

const UNAVAILABLE_WARNING: &str =
    "Your system does not support local storage. Books will not be saved after this session.";

pub struct Persistence<S: KeyValueStore> {
    store: S,
    key: String,
    enabled: bool,
    warning: Option<String>,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn open(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        let enabled = store.is_available();
        let warning = if enabled {
            None
        } else {
            warn!("storage is unavailable, running memory-only");
            Some(UNAVAILABLE_WARNING.to_string())
        };

        Self {
            store,
            key: key.into(),
            enabled,
            warning,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the pending user warning, at most once per session.
    pub fn take_warning(&mut self) -> Option<String> {
        self.warning.take()
    }

    /// Turns persistence off for the rest of the session.
    pub fn disable(&mut self, reason: impl Into<String>) {
        if self.enabled {
            self.enabled = false;
            self.warning = Some(reason.into());
        }
    }

    pub fn load(&self) -> Vec<Book> {
        if !self.enabled {
            return Vec::new();
        }

        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no snapshot found, starting empty");
                return Vec::new();
            }
            Err(e) => {
                debug!(key = %self.key, error = %e, "snapshot unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Book>>(&raw) {
            Ok(books) => {
                debug!(key = %self.key, count = books.len(), "hydrated shelf");
                books
            }
            Err(e) => {
                debug!(key = %self.key, error = %e, "snapshot malformed, starting empty");
                Vec::new()
            }
        }
    }

    pub fn save(&mut self, books: &[Book]) -> Result<()> {
        if !self.enabled {
            debug!("persistence disabled, skipping save");
            return Ok(());
        }

        let raw = serde_json::to_string(books)?;
        self.store.set(&self.key, &raw)?;
        debug!(key = %self.key, count = books.len(), "saved shelf");
        Ok(())
    }
}
