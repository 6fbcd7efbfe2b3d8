//! # CLI Templates
//!
//! Templates live in their own files under `templates/` and are included here as
//! string constants. They are rendered with `trim_blocks` and `lstrip_blocks` on,
//! so block tags on their own line leave no blank lines behind.
//!
//! Keep layout math (truncation, widths) in Rust and pass the results in. Pick
//! styles in Rust too and hand the template a style name, rather than branching
//! on flags inside the template.

pub const SHELF_TEMPLATE: &str = include_str!("templates/shelf.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const PROMPT_TEMPLATE: &str = include_str!("templates/prompt.tmp");
