//! Text and table output for schedule days

use crate::core::{
    resolver::WeekRange,
    schedule::{DayRecord, SLOT_COUNT, ScheduleTable},
};
use comfy_table::{Table, presets::ASCII_FULL};

/// Line labels for the single-day view, in slot order
pub const DAY_LABELS: [&str; SLOT_COUNT] = [
    "1st",
    "2nd",
    "lun",
    "3rd",
    "4th",
    "5th",
    "nig",
    "-----\nmur",
    "hig",
    "etc",
];

/// Column headers for the week table
pub const TABLE_HEADER: [&str; 8] = ["Date", "1st", "2nd", "lunch", "3rd", "4th", "5th", "night"];

/// Number of slots shown in the week table
const TABLE_SLOTS: usize = TABLE_HEADER.len() - 1;

/// Render one day as its date line followed by one labeled line per slot
///
/// A missing day renders as an empty record.
pub fn format_day(record: Option<&DayRecord>) -> String {
    let empty = DayRecord::default();
    let record = record.unwrap_or(&empty);

    let mut out = record.date.clone();
    for (label, value) in DAY_LABELS.iter().zip(&record.slots) {
        out.push('\n');
        out.push_str(label);
        out.push_str(" : ");
        out.push_str(value);
    }
    out
}

/// Render every day of a week, separated by blank lines
pub fn format_week(table: &ScheduleTable, week: WeekRange) -> String {
    week.days()
        .map(|date| format_day(table.get_date(date)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the week grid; supplementary slots are left out
pub fn week_table(table: &ScheduleTable, week: WeekRange) -> Table {
    let mut grid = Table::new();
    grid.load_preset(ASCII_FULL).set_header(TABLE_HEADER);

    for date in week.days() {
        let record = table.get_date(date).cloned().unwrap_or_default();
        let mut row = Vec::with_capacity(TABLE_HEADER.len());
        row.push(record.date);
        row.extend(record.slots.into_iter().take(TABLE_SLOTS));
        grid.add_row(row);
    }

    grid
}
