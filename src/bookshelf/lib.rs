//! # Bookshelf Architecture
//!
//! Bookshelf keeps a reading list: books you have not read yet, and books you have.
//! It is a **UI-agnostic library** with a thin terminal client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders views, asks for confirmation   │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: the Shelf plus its Persistence         │
//! │  - Runs mutate → persist → render signal for every change   │
//! │  - Drives the two-step delete confirmation                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure operations on the Shelf                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (persistence.rs over store/)                       │
//! │  - One JSON snapshot under a fixed key                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering
//!
//! Every change produces a [`view::ShelfView`]: the whole shelf split into unread
//! and read partitions, rebuilt from scratch. Clients never patch a previous view,
//! they redraw from the latest one.
//!
//! ## Missing Ids
//!
//! Operations on an id that is not on the shelf do nothing. They are not errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`shelf`]: The in-memory collection
//! - [`persistence`]: Snapshot save/load with memory-only fallback
//! - [`store`]: Key-value storage backends
//! - [`view`]: Unread/read projection
//! - [`model`]: `Book`, `BookId` and the add form
//! - [`config`]: Configuration management
//! - [`init`]: Session setup for clients
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod persistence;
pub mod shelf;
pub mod store;
pub mod view;
