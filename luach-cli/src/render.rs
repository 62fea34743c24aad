//! TUI rendering traits for luach types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to luach-core types using owo_colors.

use luach_core::month_view::{DayView, MonthView};
use luach_core::{CalendarEvent, DayTime, EventKind, HebrewDate};
use owo_colors::OwoColorize;

/// Width of one grid column, in characters.
const CELL_WIDTH: usize = 10;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventKind {
    fn render(&self) -> String {
        let symbol = marker_symbol(*self);
        match self {
            EventKind::Menstrual => symbol.red().to_string(),
            EventKind::Hefsek => symbol.yellow().to_string(),
            EventKind::Mikveh => symbol.blue().to_string(),
            EventKind::Other => symbol.magenta().to_string(),
        }
    }
}

fn marker_symbol(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Menstrual => "●",
        EventKind::Hefsek => "◐",
        EventKind::Mikveh => "○",
        EventKind::Other => "·",
    }
}

/// Night markers are dimmed so they read apart from day markers.
fn render_marker(event: &CalendarEvent) -> String {
    match event.day_time {
        DayTime::Night => event.kind.render().dimmed().to_string(),
        DayTime::Day => event.kind.render(),
    }
}

impl Render for DayView {
    fn render(&self) -> String {
        let cell = &self.cell;
        let day = format!("{:>2}", cell.day_number);
        let hebrew = format!("{:<3}", self.hebrew_day.as_deref().unwrap_or(""));
        let markers: String = cell.events.iter().map(render_marker).collect();

        let used = day.chars().count() + 1 + hebrew.chars().count() + cell.events.len();
        let padding = " ".repeat(CELL_WIDTH.saturating_sub(used));

        let day = if cell.is_filler() {
            day.dimmed().to_string()
        } else if cell.is_today {
            day.reversed().bold().to_string()
        } else {
            day
        };

        format!("{} {}{}{}", day, hebrew.cyan(), markers, padding)
    }
}

impl Render for MonthView {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{}   {}",
            self.title.bold(),
            self.hebrew_title.cyan().bold()
        ));

        let header: String = self
            .weekdays
            .iter()
            .map(|w| format!("{:<width$}", w, width = CELL_WIDTH))
            .collect();
        lines.push(header.trim_end().bold().to_string());

        for week in self.weeks() {
            let row: String = week.iter().map(Render::render).collect();
            lines.push(row.trim_end().to_string());
        }

        if self.days.iter().any(|d| !d.cell.events.is_empty()) {
            lines.push(String::new());
            lines.push(legend());
        }

        lines.join("\n")
    }
}

fn legend() -> String {
    let entries: Vec<String> = [
        EventKind::Menstrual,
        EventKind::Hefsek,
        EventKind::Mikveh,
        EventKind::Other,
    ]
    .iter()
    .map(|kind| format!("{} {}", kind.render(), kind.as_str().dimmed()))
    .collect();

    format!("{}  {}", entries.join("  "), "(dim = night)".dimmed())
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let mut line = format!(
            "{} {:<9} {:<5}",
            self.kind.render(),
            self.kind.as_str(),
            self.day_time.as_str()
        );
        if !self.note.is_empty() {
            line.push(' ');
            line.push_str(&self.note);
        }
        format!("{}  {}", line, self.id.dimmed())
    }
}

impl Render for HebrewDate {
    fn render(&self) -> String {
        self.to_string().cyan().to_string()
    }
}
