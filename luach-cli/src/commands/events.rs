use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use luach_core::store::{EventUpdate, NewEvent};
use luach_core::{DayTime, EventKind, HebrewDate};
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;
use crate::utils::parse_date;

const KINDS: [EventKind; 4] = [
    EventKind::Menstrual,
    EventKind::Hefsek,
    EventKind::Mikveh,
    EventKind::Other,
];

pub fn list(ctx: &Context, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let today = ctx.today();
    let from = from.map(|s| parse_date(s, today)).transpose()?;
    let to = to.map(|s| parse_date(s, today)).transpose()?;

    let book = ctx.book()?;
    let events: Vec<_> = book.in_range(from, to).collect();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let mut current_date: Option<NaiveDate> = None;

    for event in events {
        if current_date != Some(event.date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label(event.date)?);
            current_date = Some(event.date);
        }
        println!("  {}", event.render());
    }

    Ok(())
}

/// "2026-10-16  ה חשוון תשפ"ז"
fn date_label(date: NaiveDate) -> Result<String> {
    let hebrew = HebrewDate::from_gregorian(date)?;
    Ok(format!("{}  {}", date.format("%Y-%m-%d").bold(), hebrew.render()))
}

pub fn add(
    ctx: &Context,
    date: Option<String>,
    kind: Option<EventKind>,
    time: Option<DayTime>,
    note: Option<String>,
) -> Result<()> {
    let interactive = date.is_none();
    let today = ctx.today();

    // --- Date ---
    let date = match date {
        Some(d) => parse_date(&d, today)?,
        None => prompt_date(today)?,
    };

    // --- Kind ---
    let kind = match kind {
        Some(k) => k,
        None if interactive => {
            let items: Vec<&str> = KINDS.iter().map(|k| k.as_str()).collect();
            let selection = Select::new()
                .with_prompt("  Type")
                .items(&items)
                .default(0)
                .interact()?;
            KINDS[selection]
        }
        None => EventKind::Menstrual,
    };

    // --- Time of day ---
    let day_time = match time {
        Some(t) => t,
        None if interactive => {
            let selection = Select::new()
                .with_prompt("  Time")
                .items(&["day", "night"])
                .default(0)
                .interact()?;
            if selection == 0 { DayTime::Day } else { DayTime::Night }
        }
        None => DayTime::Day,
    };

    // --- Note ---
    let note = match note {
        Some(n) => n,
        None if interactive => Input::new()
            .with_prompt("  Note (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    let mut book = ctx.book()?;
    let event = book
        .create(
            date,
            NewEvent {
                kind,
                day_time,
                note,
            },
        )?
        .clone();
    book.save()?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {} {} on {}", event.kind, event.day_time, date).green());
    println!("  {}", event.id.dimmed());

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_date(today: NaiveDate) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new()
            .with_prompt("  When?")
            .default("today".to_string())
            .interact_text()?;
        match parse_date(&input, today) {
            Ok(date) => return Ok(date),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

pub fn update(
    ctx: &Context,
    id: &str,
    date: Option<String>,
    kind: Option<EventKind>,
    time: Option<DayTime>,
    note: Option<String>,
) -> Result<()> {
    if date.is_none() && kind.is_none() && time.is_none() && note.is_none() {
        anyhow::bail!("Nothing to update. Pass --date, --kind, --time or --note.");
    }

    let date = date.map(|d| parse_date(&d, ctx.today())).transpose()?;

    let mut book = ctx.book()?;
    let event = book
        .update(
            id,
            EventUpdate {
                date,
                kind,
                day_time: time,
                note,
            },
        )?
        .clone();
    book.save()?;

    println!("{}", format!("  Updated: {} {} on {}", event.kind, event.day_time, event.date).yellow());

    Ok(())
}

pub fn delete(ctx: &Context, id: &str, yes: bool) -> Result<()> {
    let mut book = ctx.book()?;

    let Some(event) = book.get(id) else {
        anyhow::bail!("Event '{}' not found", id);
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete {} {} on {}?", event.kind, event.day_time, event.date))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Cancelled".dimmed());
            return Ok(());
        }
    }

    let removed = book.delete(id)?;
    book.save()?;

    println!("{}", format!("  Deleted: {} {} on {}", removed.kind, removed.day_time, removed.date).red());

    Ok(())
}
