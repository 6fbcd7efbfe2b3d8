//! # Rendering Module
//!
//! Styled terminal output for shelf views, messages and prompts. Data is shaped
//! in Rust, then passed to minijinja templates whose `style` filter resolves
//! semantic names against [`SHELF_THEME`].
//!
//! Color is detected from stdout unless a caller forces it; tests render with
//! `Some(false)` to get plain text.

use super::styles::{names, SHELF_THEME};
use super::templates::{MESSAGES_TEMPLATE, PROMPT_TEMPLATE, SHELF_TEMPLATE, TEXT_LIST_TEMPLATE};
use bookshelf::api::{CmdMessage, ConfirmPrompt, MessageLevel};
use bookshelf::view::{BookCard, CardAction, ShelfView};
use console::Term;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Titles wider than this are cut with an ellipsis.
pub const TITLE_WIDTH: usize = 60;

pub const UNREAD_HEADING: &str = "Unread";
pub const READ_HEADING: &str = "Read";
pub const EMPTY_UNREAD: &str = "Nothing left to read.";
pub const EMPTY_READ: &str = "No finished books yet.";

#[derive(Serialize)]
struct CardData {
    id: String,
    title: String,
    year: String,
    author: String,
    status_hint: String,
    status_style: &'static str,
    delete_hint: String,
}

#[derive(Serialize)]
struct SectionData {
    heading: &'static str,
    count: String,
    cards: Vec<CardData>,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct ShelfData {
    query: Option<String>,
    sections: Vec<SectionData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct PromptData<'a> {
    title: &'a str,
    text: &'a str,
    book_title: Option<&'a str>,
}

fn render_template<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, Error> {
    let use_color = use_color.unwrap_or_else(|| Term::stdout().features().colors_supported());

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        SHELF_THEME.apply(&name, &value.to_string(), use_color)
    });

    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

/// The hint a card shows for an action, i.e. the subcommand that triggers it.
fn action_hint(action: CardAction) -> String {
    match action {
        CardAction::MarkComplete(id) => format!("complete {}", id),
        CardAction::UndoComplete(id) => format!("undo {}", id),
        CardAction::Delete(id) => format!("delete {}", id),
    }
}

fn card_data(card: &BookCard) -> CardData {
    let status_style = match card.status_action {
        CardAction::UndoComplete(_) => names::ACTION_UNDO,
        _ => names::ACTION_COMPLETE,
    };
    let year = if card.year.is_empty() {
        String::new()
    } else {
        format!(" ({})", card.year)
    };

    CardData {
        id: format!("#{}", card.id),
        title: truncate_to_width(&card.title, TITLE_WIDTH),
        year,
        author: card.author.clone(),
        status_hint: action_hint(card.status_action),
        status_style,
        delete_hint: action_hint(card.delete_action),
    }
}

fn section(heading: &'static str, cards: &[BookCard], empty_message: &'static str) -> SectionData {
    SectionData {
        heading,
        count: format!("({})", cards.len()),
        cards: cards.iter().map(card_data).collect(),
        empty_message,
    }
}

/// Renders both partitions of a view, unread first.
pub fn render_shelf(view: &ShelfView) -> String {
    render_shelf_internal(view, None)
}

fn render_shelf_internal(view: &ShelfView, use_color: Option<bool>) -> String {
    let data = ShelfData {
        query: view.query.clone(),
        sections: vec![
            section(UNREAD_HEADING, &view.uncompleted, EMPTY_UNREAD),
            section(READ_HEADING, &view.completed, EMPTY_READ),
        ],
    };

    render_template(SHELF_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_internal(lines, empty_message, None)
}

fn render_text_list_internal(
    lines: &[String],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

/// Renders command messages with a style per level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_prompt(prompt: &ConfirmPrompt) -> String {
    render_prompt_internal(prompt, None)
}

fn render_prompt_internal(prompt: &ConfirmPrompt, use_color: Option<bool>) -> String {
    let data = PromptData {
        title: &prompt.title,
        text: &prompt.text,
        book_title: prompt.book_title.as_deref(),
    };

    render_template(PROMPT_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n{}\n", prompt.title, prompt.text))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}
