// ABOUTME: Calendar widget rendering the current month as a day grid.
// ABOUTME: Pads with adjacent-month days to a fixed six-week frame.

use chrono::{Datelike, Local, NaiveDate};

use crate::registry::{Visual, Widget};

const MONTH_NAMES: [&str; 12] = [
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

const WEEK_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Six weeks of seven days, the fixed frame the grid always fills.
const GRID_CELLS: usize = 42;

pub struct Calendar;

impl Calendar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Calendar {
    fn render(&self) -> Visual {
        month_visual(Local::now().date_naive())
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Weekday column (0 = Sunday) of the first day of the month.
fn first_day_column(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

fn month_visual(today: NaiveDate) -> Visual {
    let year = today.year();
    let month = today.month();

    let leading = first_day_column(year, month);
    let current_days = days_in_month(year, month);
    let (prev_year, prev_month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    let prev_days = days_in_month(prev_year, prev_month);

    let mut cells: Vec<String> = Vec::with_capacity(GRID_CELLS);
    for i in 0..leading {
        cells.push(format!("{:>3} ", prev_days - leading + 1 + i));
    }
    for day in 1..=current_days {
        if day == today.day() {
            cells.push(format!("[{day:>2}]"));
        } else {
            cells.push(format!("{day:>3} "));
        }
    }
    let mut trailing = 1;
    while cells.len() < GRID_CELLS {
        cells.push(format!("{trailing:>3} "));
        trailing += 1;
    }

    let mut lines = vec![WEEK_DAYS.map(|d| format!("{d:>3} ")).concat()];
    for week in cells.chunks(7) {
        lines.push(week.concat());
    }

    let month_name = MONTH_NAMES[(month - 1) as usize];
    Visual {
        title: format!("{month_name} {year}"),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_always_six_weeks() {
        let visual = month_visual(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        // header plus six week rows
        assert_eq!(visual.lines.len(), 7);
        assert_eq!(visual.title, "February 2024");
    }

    #[test]
    fn today_is_bracketed() {
        let visual = month_visual(NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
        let grid = visual.lines.join("\n");
        assert!(grid.contains("[ 7]"));
    }

    #[test]
    fn leading_days_come_from_previous_month() {
        // June 2024 starts on a Saturday; the row begins with May 26-31.
        let visual = month_visual(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(visual.lines[1].trim_start().starts_with("26"));
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }
}
