use anyhow::Result;
use chrono::Datelike;
use luach_core::HebrewDate;
use luach_core::hebrew::weekday_name;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;
use crate::utils::parse_date;

pub fn run(ctx: &Context, input: &str) -> Result<()> {
    let date = parse_date(input, ctx.today())?;
    let hebrew = HebrewDate::from_gregorian(date)?;

    println!("{} {}", "Gregorian:".bold(), date.format("%Y-%m-%d"));
    println!("{} {}", "Hebrew:   ".bold(), hebrew.render());
    println!(
        "{} {}/{}/{}",
        "Numeric:  ".bold(),
        hebrew.day(),
        hebrew.month().number(),
        hebrew.year()
    );
    println!("{} {}", "Weekday:  ".bold(), weekday_name(date.weekday()));

    Ok(())
}
