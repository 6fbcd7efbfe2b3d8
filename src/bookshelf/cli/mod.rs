//! # CLI Layer
//!
//! This module is **one possible UI client** for bookshelf. It is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stdin, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! Every command starts a fresh session: the shelf is hydrated from disk, the
//! command runs through [`bookshelf::api::ShelfApi`], and the resulting view is
//! rendered in full.
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()` and the per-command handlers
//! - `render`: template rendering for views, messages and prompts
//! - `styles` / `templates`: the theme and the template sources
//! - `logging`: tracing subscriber setup for `-v`

mod commands;
mod logging;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
