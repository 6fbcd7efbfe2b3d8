use bookshelf::model::BookId;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version)]
#[command(about = "Keep track of the books you have read and the ones still waiting", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Directory holding the shelf and its config [env: BOOKSHELF_HOME]
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show unread and read books
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a book to the shelf
    #[command(alias = "a", display_order = 2)]
    Add {
        /// Title (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Author
        #[arg(short, long, default_value = "")]
        author: String,

        /// Publication year (only the first 4 characters are kept)
        #[arg(short, long, default_value = "")]
        year: String,

        /// Shelve it as already read
        #[arg(short, long)]
        completed: bool,
    },

    /// Show books whose title or author contains the query
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Search words (joined with spaces; empty shows everything)
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// Move a book to the read shelf
    #[command(alias = "done", display_order = 10)]
    Complete {
        /// Book id
        id: BookId,
    },

    /// Move a book back to the unread shelf
    #[command(display_order = 11)]
    Undo {
        /// Book id
        id: BookId,
    },

    /// Delete a book, after confirmation
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Book id
        id: BookId,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Get or set configuration values
    #[command(display_order = 20)]
    Config {
        /// Configuration key (storage-key, confirm-delete)
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bookshelf").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_means_list() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn add_joins_title_and_reads_flags() {
        let cli = parse(&["add", "The", "Left", "Hand", "-a", "Le Guin", "--year", "1969", "-c"]);
        match cli.command {
            Some(Commands::Add {
                title,
                author,
                year,
                completed,
            }) => {
                assert_eq!(title.join(" "), "The Left Hand");
                assert_eq!(author, "Le Guin");
                assert_eq!(year, "1969");
                assert!(completed);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn add_requires_a_title() {
        assert!(Cli::try_parse_from(["bookshelf", "add"]).is_err());
    }

    #[test]
    fn ids_parse_as_book_ids() {
        match parse(&["done", "1700000000000"]).command {
            Some(Commands::Complete { id }) => assert_eq!(id, BookId(1_700_000_000_000)),
            other => panic!("unexpected {:?}", other),
        }
        assert!(Cli::try_parse_from(["bookshelf", "undo", "abc"]).is_err());
    }

    #[test]
    fn delete_accepts_yes() {
        match parse(&["rm", "5", "-y"]).command {
            Some(Commands::Delete { id, yes }) => {
                assert_eq!(id, BookId(5));
                assert!(yes);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = parse(&["list", "-vv", "--data-dir", "/tmp/shelf"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/shelf")));
    }
}
