//! # API Facade
//!
//! [`ShelfApi`] is the event coordinator and the single entry point for every
//! bookshelf operation, regardless of the UI in front of it. It owns the session
//! state: the [`Shelf`] and the [`Persistence`] adapter that mirrors it.
//!
//! ## The Synchronization Loop
//!
//! Every mutating call runs the same three steps, in order, before returning:
//!
//! 1. the command mutates the shelf,
//! 2. the whole shelf is saved through the persistence adapter,
//! 3. a fresh [`ShelfView`](crate::view::ShelfView) is projected into
//!    `CmdResult::view` (the render signal).
//!
//! Reads (`list`, `search`) only project. Calls that end up changing nothing
//! (unknown ids, a cancelled delete) neither save nor project.
//!
//! ## Storage Warnings
//!
//! When storage is unavailable at startup, or a save fails later on, a single
//! warning is attached to the next result. It is never repeated in the session.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{BookForm, BookId};
use crate::persistence::Persistence;
use crate::shelf::Shelf;
use crate::store::KeyValueStore;
use crate::view;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub use commands::config::ConfigAction;
pub use commands::delete::{ConfirmPrompt, Confirmation, PendingDelete};
pub use commands::{CmdMessage, CmdResult, MessageLevel};

/// Answers a delete confirmation prompt.
///
/// Implementations may block for as long as the user needs; there is no timeout.
pub trait Confirm {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<Confirmation>;
}

/// A fixed answer, e.g. for `--yes`.
impl Confirm for Confirmation {
    fn confirm(&mut self, _prompt: &ConfirmPrompt) -> Result<Confirmation> {
        Ok(*self)
    }
}

pub struct ShelfApi<S: KeyValueStore> {
    shelf: Shelf,
    persistence: Persistence<S>,
    data_dir: PathBuf,
}

impl<S: KeyValueStore> ShelfApi<S> {
    /// Starts a session: hydrates the shelf from storage before anything renders.
    pub fn new(persistence: Persistence<S>, data_dir: PathBuf) -> Self {
        let shelf = Shelf::from_books(persistence.load());
        debug!(count = shelf.len(), "session started");
        Self {
            shelf,
            persistence,
            data_dir,
        }
    }

    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn list(&mut self) -> Result<CmdResult> {
        let result = commands::list::run(&self.shelf)?;
        Ok(self.finish(result))
    }

    /// Submits the form, then clears it.
    pub fn add_book(&mut self, form: &mut BookForm) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.shelf, form)?;
        let result = self.commit(result);
        form.clear();
        Ok(self.finish(result))
    }

    pub fn complete_book(&mut self, id: BookId) -> Result<CmdResult> {
        let result = commands::status::complete(&mut self.shelf, id)?;
        Ok(self.commit_if_mutated(result))
    }

    pub fn undo_book(&mut self, id: BookId) -> Result<CmdResult> {
        let result = commands::status::undo(&mut self.shelf, id)?;
        Ok(self.commit_if_mutated(result))
    }

    /// Opens the confirmation step for deleting `id`.
    pub fn request_delete(&self, id: BookId) -> PendingDelete {
        commands::delete::request(&self.shelf, id)
    }

    /// Closes the confirmation step, removing the book only when confirmed.
    pub fn resolve_delete(
        &mut self,
        pending: PendingDelete,
        confirmation: Confirmation,
    ) -> Result<CmdResult> {
        let result = commands::delete::resolve(&mut self.shelf, pending, confirmation)?;
        Ok(self.commit_if_mutated(result))
    }

    /// Full delete flow: request, ask `confirmer`, resolve.
    pub fn delete_book<C: Confirm>(&mut self, id: BookId, confirmer: &mut C) -> Result<CmdResult> {
        let pending = self.request_delete(id);
        let answer = confirmer.confirm(pending.prompt())?;
        self.resolve_delete(pending, answer)
    }

    pub fn search(&mut self, query: &str) -> Result<CmdResult> {
        let result = commands::search::run(&self.shelf, query)?;
        Ok(self.finish(result))
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        Ok(self.finish(result))
    }

    fn commit_if_mutated(&mut self, result: CmdResult) -> CmdResult {
        let result = if result.is_mutation() {
            self.commit(result)
        } else {
            result
        };
        self.finish(result)
    }

    // Persist, then raise the render signal.
    fn commit(&mut self, mut result: CmdResult) -> CmdResult {
        if let Err(e) = self.persistence.save(self.shelf.books()) {
            warn!(error = %e, "save failed, continuing memory-only");
            self.persistence.disable(format!(
                "Could not save your books ({}). Changes are kept for this session only.",
                e
            ));
        }
        result.view = Some(view::project(self.shelf.books()));
        result
    }

    fn finish(&mut self, mut result: CmdResult) -> CmdResult {
        if let Some(warning) = self.persistence.take_warning() {
            result.messages.insert(0, CmdMessage::warning(warning));
        }
        result
    }
}
