mod commands;
mod guide;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{ArgAction, Parser, Subcommand};
use festguide_core::grouping::GroupField;

use crate::guide::Guide;

#[derive(Parser)]
#[command(name = "festguide")]
#[command(about = "Browse the festival schedule and keep track of the events you like")]
struct Cli {
    /// Read events from this fixture instead of the configured one
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's upcoming events, tomorrow, and the days after
    Today {
        /// Only show events with this tag (repeat to require several)
        #[arg(short, long)]
        tag: Vec<String>,

        /// Pretend it is this moment (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        now: Option<String>,

        /// Open every day section, not just tomorrow
        #[arg(short, long)]
        all: bool,
    },
    /// Events by host, with a letter index
    Hosts,
    /// Events by location
    Locations {
        /// List the events of every location
        #[arg(short, long)]
        expand: bool,
    },
    /// Events by category
    Categories {
        /// List the events of every category
        #[arg(short, long)]
        expand: bool,
    },
    /// Search names, descriptions, hosts, locations and tags
    Search {
        query: Vec<String>,
    },
    /// Events you liked
    Likes,
    /// Like an event, or unlike it if already liked
    Like {
        id: String,
    },
    /// Like the event you last unliked again
    Undo,
    /// Full details of one event
    Show {
        id: String,
    },
    /// Show configuration paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Config => commands::config::run(),
        Commands::Today { tag, now, all } => {
            let now = resolve_now(now.as_deref())?;
            let guide = Guide::load(cli.fixture)?;
            commands::today::run(&guide, tag, now, all).await
        }
        Commands::Hosts => {
            let guide = Guide::load(cli.fixture)?;
            commands::hosts::run(&guide).await
        }
        Commands::Locations { expand } => {
            let guide = Guide::load(cli.fixture)?;
            commands::sections::run(&guide, GroupField::Location, expand)
        }
        Commands::Categories { expand } => {
            let guide = Guide::load(cli.fixture)?;
            commands::sections::run(&guide, GroupField::Category, expand)
        }
        Commands::Search { query } => {
            let guide = Guide::load(cli.fixture)?;
            commands::search::run(&guide, &query.join(" ")).await
        }
        Commands::Likes => {
            let guide = Guide::load(cli.fixture)?;
            commands::likes::run(&guide).await
        }
        Commands::Like { id } => {
            let guide = Guide::load(cli.fixture)?;
            commands::like::run(&guide, &id).await
        }
        Commands::Undo => {
            let guide = Guide::load(cli.fixture)?;
            commands::undo::run(&guide).await
        }
        Commands::Show { id } => {
            let guide = Guide::load(cli.fixture)?;
            commands::show::run(&guide, &id).await
        }
    }
}

/// The `--now` override, or the local wall clock.
fn resolve_now(now: Option<&str>) -> Result<NaiveDateTime> {
    match now {
        Some(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").map_err(|_| {
            anyhow::anyhow!("Invalid time '{}'. Expected YYYY-MM-DDTHH:MM", s)
        }),
        None => Ok(chrono::Local::now().naive_local()),
    }
}
