use super::logging::init_logging;
use super::render::{print_messages, render_prompt, render_shelf, render_text_list};
use super::setup::{Cli, Commands};
use bookshelf::api::{CmdResult, ConfigAction, Confirm, ConfirmPrompt, Confirmation};
use bookshelf::error::Result;
use bookshelf::init::{initialize, resolve_data_dir, ShelfContext};
use bookshelf::model::{BookForm, BookId};
use clap::Parser;
use std::io::{self, Write};

/// Asks on the terminal. Anything but `y`/`yes` cancels, including EOF.
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<Confirmation> {
        print!("{}", render_prompt(prompt));
        print!("[y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let answer = input.trim().to_lowercase();
        Ok(Confirmation::from(answer == "y" || answer == "yes"))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let mut ctx = initialize(data_dir);

    match cli.command {
        None | Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::Add {
            title,
            author,
            year,
            completed,
        }) => handle_add(&mut ctx, title.join(" "), author, year, completed),
        Some(Commands::Search { query }) => handle_search(&mut ctx, query.join(" ")),
        Some(Commands::Complete { id }) => handle_complete(&mut ctx, id),
        Some(Commands::Undo { id }) => handle_undo(&mut ctx, id),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn print_result(result: &CmdResult) {
    if let Some(view) = &result.view {
        print!("{}", render_shelf(view));
    }
    print_messages(&result.messages);
}

fn handle_list(ctx: &mut ShelfContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_result(&result);
    Ok(())
}

fn handle_add(
    ctx: &mut ShelfContext,
    title: String,
    author: String,
    year: String,
    completed: bool,
) -> Result<()> {
    let mut form = BookForm::new(title, author, &year, completed);
    let result = ctx.api.add_book(&mut form)?;
    print_result(&result);
    Ok(())
}

fn handle_search(ctx: &mut ShelfContext, query: String) -> Result<()> {
    let result = ctx.api.search(&query)?;
    print_result(&result);
    Ok(())
}

fn handle_complete(ctx: &mut ShelfContext, id: BookId) -> Result<()> {
    let result = ctx.api.complete_book(id)?;
    print_result(&result);
    Ok(())
}

fn handle_undo(ctx: &mut ShelfContext, id: BookId) -> Result<()> {
    let result = ctx.api.undo_book(id)?;
    print_result(&result);
    Ok(())
}

fn handle_delete(ctx: &mut ShelfContext, id: BookId, yes: bool) -> Result<()> {
    let result = if yes || !ctx.config.confirm_delete {
        ctx.api.delete_book(id, &mut Confirmation::Confirmed)?
    } else {
        ctx.api.delete_book(id, &mut TerminalConfirm)?
    };
    print_result(&result);
    Ok(())
}

fn handle_config(ctx: &mut ShelfContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;

    if show_all {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| config.list_all())
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}
