//! Plain-text onot report.

use std::fmt::Write;

use super::{ForbiddenDay, OnotReport};
use crate::config::OutputConfig;
use crate::event::DayTime;
use crate::hebrew::{HebrewDate, weekday_name};

const INTERVALS_TITLE: &str = "רשימת הפלגות:";
const UNBROKEN_TITLE: &str = "הפלגות שלא נעקרו:";

fn when(date: &HebrewDate, onah: DayTime) -> String {
    format!("{} ב{} {}", date, onah.hebrew_label(), weekday_name(date.weekday()))
}

fn line(out: &mut String, indent: &str, day: &ForbiddenDay) {
    let _ = writeln!(out, "{indent}{} - {}", day.restriction, when(&day.date, day.onah));
}

/// Renders a report: the interval list, then one block per sighting
/// closed by the separator line.
pub fn format_report(report: &OnotReport, output: &OutputConfig) -> String {
    let mut out = String::new();

    if output.show_cycle_intervals {
        let _ = writeln!(out, "{INTERVALS_TITLE}");
        let _ = writeln!(out, "{:?}", report.intervals);
        let _ = writeln!(out, "{}", output.separator);
    }

    for entry in &report.sightings {
        let _ = writeln!(out, "{}:", when(&entry.sighting.date, entry.sighting.onah));
        for day in &entry.forbidden {
            line(&mut out, "  ", day);
        }
        if !entry.unbroken.is_empty() {
            let _ = writeln!(out, "  {UNBROKEN_TITLE}");
            for day in &entry.unbroken {
                line(&mut out, "    ", day);
            }
        }
        let _ = writeln!(out, "{}", output.separator);
    }

    out
}
