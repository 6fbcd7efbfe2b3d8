//! Named styles for terminal output.
//!
//! Templates refer to styles by semantic name through the `style` filter, never
//! to raw colors. A name missing from the theme renders with a `(!?)` marker so
//! typos show up in the output instead of silently falling back to plain text.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const SECTION: &str = "section";
    pub const COUNT: &str = "count";
    pub const CARD_ID: &str = "card-id";
    pub const CARD_TITLE: &str = "card-title";
    pub const CARD_YEAR: &str = "card-year";
    pub const CARD_AUTHOR: &str = "card-author";
    pub const ACTION_COMPLETE: &str = "action-complete";
    pub const ACTION_UNDO: &str = "action-undo";
    pub const ACTION_DELETE: &str = "action-delete";
    pub const EMPTY: &str = "empty";
    pub const QUERY: &str = "query";
    pub const PROMPT: &str = "prompt";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text` as `name`. With `use_color` off only the missing-style
    /// marker is applied.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static SHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::SECTION, Style::new().bold().underlined())
        .add(names::COUNT, Style::new().dim())
        .add(names::CARD_ID, Style::new().color256(244))
        .add(names::CARD_TITLE, Style::new().bold())
        .add(names::CARD_YEAR, Style::new().dim())
        .add(names::CARD_AUTHOR, Style::new().italic())
        .add(names::ACTION_COMPLETE, Style::new().green())
        .add(names::ACTION_UNDO, Style::new().yellow())
        .add(names::ACTION_DELETE, Style::new().red())
        .add(names::EMPTY, Style::new().dim().italic())
        .add(names::QUERY, Style::new().black().on_yellow())
        .add(names::PROMPT, Style::new().yellow().bold())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});
