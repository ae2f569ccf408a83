//! Newsdesk CLI Application
//!
//! Command-line operator console for the newsdesk publishing plan workflow.

mod args;
mod cli;
mod renderer;

use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use args::{
    Args, AuthCommands, Commands, ItemCommands, PlanCommands, RunCommands,
};
use clap::Parser;
use cli::Cli;
use jiff::civil::Date;
use jiff::Zoned;
use log::info;
use newsdesk_core::{NewsroomBuilder, NewsroomError, PlanKey};
use renderer::TerminalRenderer;

const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";
const DEFAULT_PLATFORM: &str = "telegram";

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        // session failures already went through the notification channel
        if err.downcast_ref::<NewsroomError>().is_none() {
            eprintln!("error: {err:#}");
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let server = args
        .server
        .clone()
        .or_else(|| std::env::var("NEWSDESK_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    let platform = args
        .platform
        .clone()
        .or_else(|| std::env::var("NEWSDESK_PLATFORM").ok())
        .unwrap_or_else(|| DEFAULT_PLATFORM.to_string());
    let date = resolve_date(args.date.as_deref())?;

    let mut builder = NewsroomBuilder::new().with_base_url(server);
    if let Some(token) = args
        .token
        .clone()
        .or_else(|| std::env::var("NEWSDESK_TOKEN").ok())
    {
        builder = builder.with_token(token);
    } else if let Some(path) = &args.token_file {
        builder = builder.with_token_file(path);
    }
    let desk = builder
        .build()
        .map_err(|e| anyhow!("failed to initialize session: {e}"))?;

    let renderer = TerminalRenderer::new(!args.no_color);
    let cli = Cli::new(desk, renderer);
    let key = PlanKey::new(date, platform.clone());

    info!("newsdesk started ({}/{})", key.date, key.platform);

    match args.command {
        Commands::Plan { command } => match command {
            PlanCommands::Show => cli.show_plan(&key).await,
            PlanCommands::Latest => cli.show_latest(&platform).await,
            PlanCommands::ApproveAll => cli.approve_all(&key).await,
            PlanCommands::Metrics => cli.metrics(&key).await,
            PlanCommands::Logs => cli.show_logs(key.date).await,
            PlanCommands::Export(export) => cli.export_plan(&key, &export.out).await,
            PlanCommands::Captions(export) => cli.export_captions(key.date, &export.out).await,
        },
        Commands::Item { command } => match command {
            ItemCommands::Set(set) => cli.set_item(&key, set.id, set.status.into()).await,
            ItemCommands::Cycle(item) => cli.cycle_item(&key, &item.id).await,
            ItemCommands::Undo(item) => cli.undo_item(&key, item.id).await,
        },
        Commands::Run { command } => match command {
            RunCommands::Preview => cli.run_preview(&key).await,
            RunCommands::Publish(publish) => cli.run_publish(&key, publish.yes).await,
        },
        Commands::Import(import) => cli.import_csv(&key, &import.file).await,
        Commands::Auth { command } => match command {
            AuthCommands::Probe => cli.auth_probe().await,
            AuthCommands::Set(token) => cli.auth_set(&token.value),
            AuthCommands::Clear => cli.auth_clear(),
        },
    }
}

/// Parses `--date`, falling back to today's local calendar date.
fn resolve_date(date: Option<&str>) -> Result<Date> {
    match date {
        Some(raw) => {
            Date::from_str(raw).with_context(|| format!("invalid date '{raw}' (want YYYY-MM-DD)"))
        }
        None => Ok(Zoned::now().date()),
    }
}
