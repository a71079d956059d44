//! Terminal rendering of fetched timetables.

use ansi_term::Colour;
use chrono::Weekday;

use crate::config::Config;
use crate::core::group::{DayGroup, group_by_day};
use crate::core::state::ViewState;
use crate::models::weekday::parse_day;
use crate::ui::messages;
use crate::utils::table::Table;

/// Fixed calendar-day → color table. Purely decorative: grouping order is
/// first occurrence in the response, never calendar order.
fn day_colour(day: &str) -> Colour {
    match parse_day(day) {
        Some(Weekday::Mon) => Colour::Blue,
        Some(Weekday::Tue) => Colour::Cyan,
        Some(Weekday::Wed) => Colour::Green,
        Some(Weekday::Thu) => Colour::Yellow,
        Some(Weekday::Fri) => Colour::Purple,
        Some(Weekday::Sat) => Colour::RGB(255, 153, 51), // orange
        Some(Weekday::Sun) => Colour::Red,
        None => Colour::White,
    }
}

fn render_day(group: &DayGroup, cfg: &Config) {
    let rows = group
        .rows
        .iter()
        .map(|r| {
            vec![
                r.start.clone(),
                r.subject_code.clone(),
                r.room.clone(),
                r.faculty.clone(),
            ]
        })
        .collect();

    let table = Table::fitted(&["Start", "Subject", "Room", "Faculty"], rows);

    println!("\n{}", day_colour(&group.day).bold().paint(group.day.as_str()));
    print!("{}", table.render());
    println!("{}", cfg.separator_char.repeat(table.total_width().max(25)));
}

/// Print the settled view state: either the error message or the grouped
/// per-day tables. An empty successful response renders no day sections.
pub fn render_state(state: &ViewState, batch: &str, cfg: &Config) {
    if let Some(msg) = state.error_message() {
        messages::error(msg);
        return;
    }

    let rows = state.rows();
    messages::success(format!(
        "Timetable for batch {} ({} classes)",
        batch,
        rows.len()
    ));

    for group in group_by_day(rows) {
        render_day(&group, cfg);
    }
}
