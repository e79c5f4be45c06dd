//! Plain-text rendering for `--format text` and the calendar grid.

use date_resolver::calendar::weekday_name;
use date_resolver::{MonthGrid, RelativeInfo, ResolvedDate, WeekdayInfo};

/// Width of one calendar cell: a two-digit day plus padding or brackets.
const CELL_WIDTH: usize = 4;

pub fn resolved(result: &ResolvedDate) -> String {
    let mut out = format!(
        "{} ({})\n{}\n{}",
        result.date, result.day_of_week, result.description, result.interpretation
    );
    if let Some(warning) = &result.warning {
        out.push_str(&format!("\nwarning: {warning}"));
    }
    out
}

pub fn weekday(info: &WeekdayInfo) -> String {
    let kind = if info.is_weekend { "weekend" } else { "weekday" };
    format!(
        "{} is a {} (ISO day {}, {kind})",
        info.date, info.day_of_week, info.day_number
    )
}

pub fn relative(info: &RelativeInfo) -> String {
    let days = info.days_from_today;
    let business = info.business_days;
    format!(
        "{} ({}): {}, {days} day{}, {business} business day{}",
        info.date,
        info.day_of_week,
        info.human_readable,
        if days.abs() == 1 { "" } else { "s" },
        if business.abs() == 1 { "" } else { "s" },
    )
}

/// Title centered over the grid, a two-letter weekday header, then one line
/// per week. Today's cell is bracketed: `[ 8]`.
pub fn calendar(grid: &MonthGrid) -> String {
    let width = CELL_WIDTH * 7;
    let mut lines = vec![format!("{:^width$}", grid.title())];

    lines.push(
        grid.weekday_headers()
            .iter()
            .map(|day| format!(" {} ", &weekday_name(*day)[..2]))
            .collect(),
    );

    for week in &grid.weeks {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                Some(day) if day.is_today => format!("[{:>2}]", day.day),
                Some(day) => format!(" {:>2} ", day.day),
                None => " ".repeat(CELL_WIDTH),
            })
            .collect();
        lines.push(line);
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
