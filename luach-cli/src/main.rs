mod commands;
mod context;
mod logging;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use luach_core::{DayTime, EventKind};

use crate::context::Context;

#[derive(Parser)]
#[command(name = "luach", version)]
#[command(about = "Month calendar with Hebrew dates, event markers and onot reports")]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Read settings from this file instead of ~/.config/luach/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use this event file instead of the configured one
    #[arg(long, global = true)]
    events: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid (the current month by default)
    Month {
        #[arg(long)]
        year: Option<i32>,

        /// Month number, 1-12
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Months to move from the selected month (e.g. -1 for the previous one)
        #[arg(long, allow_negative_numbers = true, default_value_t = 0)]
        offset: i32,

        /// Print the month as JSON
        #[arg(long)]
        json: bool,
    },
    /// List and edit events
    Events {
        #[command(subcommand)]
        action: EventsCommand,
    },
    /// Show the Hebrew and Gregorian forms of a date
    Convert {
        /// e.g. "2024-03-15", "15/03/2024", "5/13/5784", "today"
        date: String,
    },
    /// Forbidden-day report
    Onot {
        /// Sighting list ("<date> <0|1>" per line) instead of the event file
        #[arg(long)]
        input: Option<PathBuf>,

        /// Write the report to this file instead of printing it
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommand>,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show resolved paths and settings (the default)
    Show,
    /// Change one setting, e.g. `onot.include_or_zarua false`
    Set {
        /// Dotted setting name
        key: String,

        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Restore the commented-out default config file
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum EventsCommand {
    List {
        /// Show events from this date
        #[arg(long)]
        from: Option<String>,

        /// Show events until this date
        #[arg(long)]
        to: Option<String>,
    },
    Add {
        /// Date of the event (prompted for when omitted)
        date: Option<String>,

        /// menstrual, hefsek, mikveh or other
        #[arg(short, long)]
        kind: Option<EventKind>,

        /// day or night
        #[arg(short, long)]
        time: Option<DayTime>,

        #[arg(short, long)]
        note: Option<String>,
    },
    Update {
        id: String,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        kind: Option<EventKind>,

        #[arg(short, long)]
        time: Option<DayTime>,

        #[arg(short, long)]
        note: Option<String>,
    },
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = Context::load(cli.config, cli.events)?;

    match cli.command {
        None => commands::month::run(&ctx, None, None, 0, false),
        Some(Commands::Month {
            year,
            month,
            offset,
            json,
        }) => commands::month::run(&ctx, year, month, offset, json),
        Some(Commands::Events { action }) => match action {
            EventsCommand::List { from, to } => {
                commands::events::list(&ctx, from.as_deref(), to.as_deref())
            }
            EventsCommand::Add {
                date,
                kind,
                time,
                note,
            } => commands::events::add(&ctx, date, kind, time, note),
            EventsCommand::Update {
                id,
                date,
                kind,
                time,
                note,
            } => commands::events::update(&ctx, &id, date, kind, time, note),
            EventsCommand::Delete { id, yes } => commands::events::delete(&ctx, &id, yes),
        },
        Some(Commands::Convert { date }) => commands::convert::run(&ctx, &date),
        Some(Commands::Onot { input, export }) => {
            commands::onot::run(&ctx, input.as_deref(), export.as_deref())
        }
        Some(Commands::Config { action }) => match action {
            None | Some(ConfigCommand::Show) => commands::config::show(&ctx),
            Some(ConfigCommand::Set { key, value }) => commands::config::set(&ctx, &key, &value),
            Some(ConfigCommand::Reset { yes }) => commands::config::reset(&ctx, yes),
        },
    }
}
