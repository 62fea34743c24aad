use std::path::Path;

use anyhow::{Context as _, Result};
use luach_core::EventKind;
use luach_core::input::parse_sighting_list;
use luach_core::onot::{Sighting, compute_onot, format_report, sightings_from_events};
use owo_colors::OwoColorize;
use tracing::info;

use crate::context::Context;

pub fn run(ctx: &Context, input: Option<&Path>, export: Option<&Path>) -> Result<()> {
    let sightings = load_sightings(ctx, input)?;

    if sightings.is_empty() {
        println!("{}", "No sightings found".dimmed());
        return Ok(());
    }

    let report = compute_onot(&sightings, &ctx.config.onot)?;
    let text = format_report(&report, &ctx.config.output);

    match export {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Could not write report to {}", path.display()))?;
            info!(path = %path.display(), sightings = sightings.len(), "exported onot report");
            println!("{}", format!("  Exported to {}", path.display()).green());
        }
        None => {
            println!();
            print!("{}", text);
        }
    }

    Ok(())
}

fn load_sightings(ctx: &Context, input: Option<&Path>) -> Result<Vec<Sighting>> {
    match input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Could not read {}", path.display()))?;
            Ok(parse_sighting_list(&text, ctx.today())?)
        }
        None => {
            let book = ctx.book()?;
            Ok(sightings_from_events(book.of_kind(EventKind::Menstrual))?)
        }
    }
}
