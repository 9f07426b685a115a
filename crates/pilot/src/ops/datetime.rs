//! Date, time and text-calendar rendering.

use chrono::{Datelike, Local, NaiveDate};
use pilot_common::DateTimeKind;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render the current timestamp for the requested kind.
pub fn render_now(kind: DateTimeKind) -> String {
    let now = Local::now();
    let formatted = match kind {
        DateTimeKind::Date => now.format("%Y-%m-%d (%A)"),
        DateTimeKind::Time => now.format("%H:%M:%S"),
        DateTimeKind::Full => now.format("%Y-%m-%d %H:%M:%S (%A)"),
    };
    format!("{}: {}", kind.label(), formatted)
}

/// Render a Monday-first month grid, e.g.
///
/// ```text
///      July 2026
/// Mo Tu We Th Fr Sa Su
///        1  2  3  4  5
///  6  7  8  9 10 11 12
/// ```
///
/// The caller validates month and year ranges.
pub fn render_calendar(month: u32, year: i32) -> String {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("validated month/year");
    let days = days_in_month(month, year);
    let lead = first.weekday().num_days_from_monday() as usize;

    let mut lines = Vec::new();
    lines.push(format!("{:^20}", format!("{} {}", MONTH_NAMES[(month - 1) as usize], year)));
    lines.push("Mo Tu We Th Fr Sa Su".to_string());

    let mut cells: Vec<String> = vec!["  ".to_string(); lead];
    cells.extend((1..=days).map(|d| format!("{:>2}", d)));
    for week in cells.chunks(7) {
        lines.push(week.join(" ").trim_end().to_string());
    }
    lines.join("\n")
}

fn days_in_month(month: u32, year: i32) -> u32 {
    let (next_month, next_year) = if month == 12 { (1, year + 1) } else { (month + 1, year) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("validated month/year")
        .pred_opt()
        .expect("date has a predecessor")
        .day()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(1, 2026), 31);
        assert_eq!(days_in_month(2, 2026), 28);
        assert_eq!(days_in_month(2, 2024), 29);
        assert_eq!(days_in_month(12, 2026), 31);
    }

    #[test]
    fn calendar_grid_starts_on_the_right_weekday() {
        // July 2026 starts on a Wednesday.
        let grid = render_calendar(7, 2026);
        let lines: Vec<&str> = grid.lines().collect();
        assert!(lines[0].contains("July 2026"));
        assert_eq!(lines[1], "Mo Tu We Th Fr Sa Su");
        assert_eq!(lines[2], "       1  2  3  4  5");
        assert!(lines.last().unwrap().trim_end().ends_with("31"));
    }

    #[test]
    fn timestamp_carries_its_label() {
        assert!(render_now(DateTimeKind::Date).starts_with("Current Date: "));
        assert!(render_now(DateTimeKind::Time).starts_with("Current Time: "));
        assert!(render_now(DateTimeKind::Full).starts_with("Current Date & Time: "));
    }
}
