use anyhow::Result;
use chrono::Datelike;
use luach_core::calendar::shift_month;
use luach_core::month_view::MonthView;
use tracing::debug;

use crate::context::Context;
use crate::render::Render;

/// Print one month. `month` is 1-based; missing values come from today.
pub fn run(
    ctx: &Context,
    year: Option<i32>,
    month: Option<u32>,
    offset: i32,
    json: bool,
) -> Result<()> {
    let today = ctx.today();
    let year = year.unwrap_or(today.year());
    let month0 = month.map_or(today.month0(), |m| m - 1);
    let (year, month0) = shift_month(year, month0, offset);

    let book = ctx.book()?;
    debug!(year, month = month0 + 1, events = book.len(), "rendering month");

    let view = MonthView::build(&ctx.calendar(), year, month0, book.events(), today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.render());
    }

    Ok(())
}
