use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use newsdesk_core::ItemStatus;

/// Main command-line interface for the newsdesk publishing plan tool
///
/// Newsdesk drives a remote publishing plan: it lists a day's candidate
/// posts per platform, advances them through the draft/approved/sent
/// lifecycle, imports bulk CSV data, and runs the dry-run/publish pipeline.
/// All state lives on the server; every mutation here is server-confirmed
/// and followed by a full plan reload.
#[derive(Parser)]
#[command(version, about, name = "nd")]
pub struct Args {
    /// Base URL of the plan service. Defaults to $NEWSDESK_SERVER or
    /// http://127.0.0.1:8000
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Target platform (e.g. telegram, instagram; 'all' for aggregate
    /// reads). Defaults to $NEWSDESK_PLATFORM or telegram
    #[arg(long, global = true)]
    pub platform: Option<String>,

    /// Plan date as YYYY-MM-DD; today when omitted
    #[arg(long, global = true)]
    pub date: Option<String>,

    /// One-shot auth token for this invocation (not persisted)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Path of the token file. Defaults to $XDG_STATE_HOME/newsdesk/token
    #[arg(long, global = true)]
    pub token_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the newsdesk CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect and bulk-edit the plan for a (date, platform) pair
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Move single items through the status lifecycle
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Run the publish pipeline (dry-run or confirmed publish)
    #[command(alias = "r")]
    Run {
        #[command(subcommand)]
        command: RunCommands,
    },
    /// Import a CSV file into the plan
    Import(ImportArgs),
    /// Manage the auth token and probe server auth
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the plan: counts and items
    #[command(alias = "s")]
    Show,
    /// Jump to the most recent date that has a plan for this platform
    #[command(alias = "l")]
    Latest,
    /// Approve every draft item in the plan
    #[command(alias = "a")]
    ApproveAll,
    /// Show read-only dashboard numbers for the plan
    Metrics,
    /// Print the pipeline log recorded for the date
    Logs,
    /// Save the plan as a JSON file
    Export(ExportArgs),
    /// Save the caption export for the date as a text file
    Captions(ExportArgs),
}

/// Where to write a downloaded artifact
#[derive(ClapArgs)]
pub struct ExportArgs {
    /// Output file path
    #[arg(short, long)]
    pub out: PathBuf,
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Set an item's status directly
    Set(SetItemArgs),
    /// Advance an item one step: draft -> approved -> sent -> draft
    Cycle(ItemIdArgs),
    /// Revert an item to its previous status (server-decided)
    Undo(ItemIdArgs),
}

#[derive(ClapArgs)]
pub struct SetItemArgs {
    /// Id of the item to transition
    pub id: String,
    /// Target status
    pub status: StatusArg,
}

#[derive(ClapArgs)]
pub struct ItemIdArgs {
    /// Id of the item
    pub id: String,
}

#[derive(Subcommand)]
pub enum RunCommands {
    /// Compute publish candidates without changing anything
    Preview,
    /// Mark every approved item as sent (irreversible in bulk)
    Publish(PublishArgs),
}

#[derive(ClapArgs)]
pub struct PublishArgs {
    /// Confirm the publish; refused without this flag
    #[arg(long)]
    pub yes: bool,
}

#[derive(ClapArgs)]
pub struct ImportArgs {
    /// CSV file to upload; parsing and merge-by-id happen server-side
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Ask the server whether auth is enabled and which header it reads
    Probe,
    /// Store a token for future invocations
    Set(TokenArgs),
    /// Forget the stored token
    Clear,
}

#[derive(ClapArgs)]
pub struct TokenArgs {
    /// The opaque token value
    pub value: String,
}

/// Command-line representation of item status values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Draft,
    Approved,
    Sent,
}

impl From<StatusArg> for ItemStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Draft => ItemStatus::Draft,
            StatusArg::Approved => ItemStatus::Approved,
            StatusArg::Sent => ItemStatus::Sent,
        }
    }
}
