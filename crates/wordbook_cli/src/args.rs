//! Command-line surface for the `wordbook` binary.
//!
//! # Responsibility
//! - Declare global options and subcommands with their env fallbacks.
//! - Parse ids into `Uuid` so malformed input fails before any DB work.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;
use wordbook_core::DEFAULT_PAGE_LIMIT;

/// Manage bilingual dictionaries stored in a local SQLite file.
#[derive(Debug, Parser)]
#[command(name = "wordbook", version, about)]
pub struct Cli {
    /// SQLite database file, created and migrated on first use
    #[arg(
        long,
        global = true,
        env = "WORDBOOK_DB",
        default_value = "wordbook.sqlite3"
    )]
    pub db: PathBuf,

    /// Log level (trace|debug|info|warn|error); defaults per build mode
    #[arg(long, global = true, env = "WORDBOOK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files; logging is off when absent
    #[arg(long, global = true, env = "WORDBOOK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Health probe; prints "pong" without touching the database
    Ping,
    /// Prints the core library version
    Version,
    /// Dictionary operations
    #[command(subcommand)]
    Dict(DictCommand),
    /// Entry operations
    #[command(subcommand)]
    Entry(EntryCommand),
}

#[derive(Debug, Subcommand)]
pub enum DictCommand {
    /// Create a dictionary
    Create {
        #[arg(long)]
        name: String,
        /// Source language code, e.g. `en`
        #[arg(long)]
        source: String,
        /// Target language code, e.g. `ru`
        #[arg(long)]
        target: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Show one dictionary
    Get { id: Uuid },
    /// List dictionaries in insertion order
    List(PageArgs),
    /// Change the supplied fields of a dictionary
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        target: Option<String>,
    },
    /// Delete a dictionary together with its entries
    Delete { id: Uuid },
}

#[derive(Debug, Subcommand)]
pub enum EntryCommand {
    /// Add an entry to a dictionary
    Add {
        dictionary_id: Uuid,
        #[arg(long)]
        original: String,
        #[arg(long)]
        translated: String,
        /// Usage example sentence
        #[arg(long)]
        example: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show one entry
    Get { id: Uuid },
    /// List the entries of a dictionary in insertion order
    List {
        dictionary_id: Uuid,
        #[command(flatten)]
        page: PageArgs,
    },
}

/// Raw paging input; the service layer normalizes out-of-range values.
#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub skip: i64,
    #[arg(
        long,
        default_value_t = i64::from(DEFAULT_PAGE_LIMIT),
        allow_hyphen_values = true
    )]
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, DictCommand, EntryCommand};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_dict_create_with_global_db() {
        let cli = Cli::try_parse_from([
            "wordbook",
            "--db",
            "/tmp/words.db",
            "dict",
            "create",
            "--name",
            "Idioms",
            "--source",
            "en",
            "--target",
            "ru",
        ])
        .unwrap();

        assert_eq!(cli.db.to_str(), Some("/tmp/words.db"));
        match cli.command {
            Command::Dict(DictCommand::Create {
                name, description, ..
            }) => {
                assert_eq!(name, "Idioms");
                assert_eq!(description, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_accepts_negative_paging_values() {
        let cli = Cli::try_parse_from(["wordbook", "dict", "list", "--skip", "-3", "--limit", "0"])
            .unwrap();
        match cli.command {
            Command::Dict(DictCommand::List(page)) => {
                assert_eq!(page.skip, -3);
                assert_eq!(page.limit, 0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn entry_list_defaults_to_service_page_limit() {
        let cli = Cli::try_parse_from([
            "wordbook",
            "entry",
            "list",
            "123e4567-e89b-42d3-a456-426614174000",
        ])
        .unwrap();
        match cli.command {
            Command::Entry(EntryCommand::List { page, .. }) => {
                assert_eq!(page.skip, 0);
                assert_eq!(page.limit, 100);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(Cli::try_parse_from(["wordbook", "dict", "get", "not-a-uuid"]).is_err());
    }
}
