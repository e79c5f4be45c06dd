//! Read-only views of a date: weekday lookup, distance from the anchor, and
//! month grids.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::calendar::{
    business_days_between, days_in_month, iso_day_number, is_weekday, is_weekend, month_name,
    weekday_name, WeekStart,
};
use crate::error::{DateError, Result};

// ── weekday_info ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayInfo {
    pub date: NaiveDate,
    pub day_of_week: String,
    /// ISO 8601 numbering: Monday = 1 … Sunday = 7.
    pub day_number: u32,
    pub is_weekend: bool,
    pub is_weekday: bool,
}

pub fn weekday_info(date: NaiveDate) -> WeekdayInfo {
    WeekdayInfo {
        date,
        day_of_week: weekday_name(date.weekday()).to_string(),
        day_number: iso_day_number(date),
        is_weekend: is_weekend(date),
        is_weekday: is_weekday(date),
    }
}

// ── relative ────────────────────────────────────────────────────────────────

/// How far a date is from the anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelativeInfo {
    pub date: NaiveDate,
    pub day_of_week: String,
    /// Negative when `date` is before the anchor.
    pub days_from_today: i64,
    /// Business days from the anchor to `date`, excluding the anchor and
    /// including `date`. Same sign as `days_from_today`.
    pub business_days: i64,
    /// "today", "tomorrow", "in 7 weeks and 3 days", "3 days ago".
    pub human_readable: String,
}

/// Describe `date` relative to `anchor`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use date_resolver::relative;
///
/// let anchor = NaiveDate::from_ymd_opt(2026, 2, 8).unwrap();
/// let info = relative(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(), anchor);
/// assert_eq!(info.days_from_today, 35);
/// assert_eq!(info.business_days, 25);
/// assert_eq!(info.human_readable, "in 5 weeks");
/// ```
pub fn relative(date: NaiveDate, anchor: NaiveDate) -> RelativeInfo {
    let days = (date - anchor).num_days();
    RelativeInfo {
        date,
        day_of_week: weekday_name(date.weekday()).to_string(),
        days_from_today: days,
        business_days: business_days_between(anchor, date),
        human_readable: format_human_distance(days),
    }
}

/// Express a day count in weeks and days with the matching tense.
fn format_human_distance(days: i64) -> String {
    match days {
        0 => return "today".to_string(),
        1 => return "tomorrow".to_string(),
        -1 => return "yesterday".to_string(),
        _ => {}
    }

    let magnitude = days.unsigned_abs();
    let (weeks, rest) = (magnitude / 7, magnitude % 7);
    let mut parts = Vec::new();
    if weeks > 0 {
        parts.push(format!("{} week{}", weeks, if weeks == 1 { "" } else { "s" }));
    }
    if rest > 0 {
        parts.push(format!("{} day{}", rest, if rest == 1 { "" } else { "s" }));
    }
    let span = parts.join(" and ");

    if days > 0 {
        format!("in {span}")
    } else {
        format!("{span} ago")
    }
}

// ── month_grid ──────────────────────────────────────────────────────────────

/// One populated cell of a [`MonthGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDay {
    pub date: NaiveDate,
    pub day: u32,
    pub is_today: bool,
    pub is_weekend: bool,
}

/// A month laid out as rows of seven cells, each row starting on the
/// configured first day of the week. Cells outside the month are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub week_start: WeekStart,
    /// The anchor date, when it falls inside this month.
    pub today: Option<NaiveDate>,
    pub weeks: Vec<[Option<GridDay>; 7]>,
}

impl MonthGrid {
    /// Column order, starting from the week start.
    pub fn weekday_headers(&self) -> [Weekday; 7] {
        let mut headers = [self.week_start.first_day(); 7];
        for i in 1..7 {
            headers[i] = headers[i - 1].succ();
        }
        headers
    }

    /// "February 2026".
    pub fn title(&self) -> String {
        format!("{} {}", self.month_name, self.year)
    }
}

/// Build the grid for `month`/`year`, defaulting either to the anchor's.
///
/// # Errors
///
/// Returns [`DateError::InvalidMonth`] for a month outside 1-12 and
/// [`DateError::OutOfRange`] for a year chrono cannot represent.
pub fn month_grid(
    month: Option<u32>,
    year: Option<i32>,
    anchor: NaiveDate,
    week_start: WeekStart,
) -> Result<MonthGrid> {
    let month = month.unwrap_or_else(|| anchor.month());
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth(month));
    }
    let year = year.unwrap_or_else(|| anchor.year());
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DateError::OutOfRange(format!("year {year}")))?;

    let lead = week_start.days_since_start(first.weekday()) as usize;
    let mut cells: Vec<Option<GridDay>> = vec![None; lead];
    cells.extend(first.iter_days().take(days_in_month(year, month) as usize).map(|date| {
        Some(GridDay {
            date,
            day: date.day(),
            is_today: date == anchor,
            is_weekend: is_weekend(date),
        })
    }));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    let weeks = cells
        .chunks(7)
        .map(|chunk| {
            let mut row = [None; 7];
            row.copy_from_slice(chunk);
            row
        })
        .collect();

    let today = (anchor.year() == year && anchor.month() == month).then_some(anchor);

    Ok(MonthGrid {
        year,
        month,
        month_name: month_name(month),
        week_start,
        today,
        weeks,
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn anchor() -> NaiveDate {
        // Sunday, February 8, 2026
        date(2026, 2, 8)
    }

    // ── weekday_info ────────────────────────────────────────────────────

    #[test]
    fn test_weekday_info_saturday() {
        let info = weekday_info(date(2026, 2, 7));
        assert_eq!(info.day_of_week, "Saturday");
        assert_eq!(info.day_number, 6);
        assert!(info.is_weekend);
        assert!(!info.is_weekday);
    }

    #[test]
    fn test_weekday_info_monday() {
        let info = weekday_info(date(2026, 2, 9));
        assert_eq!(info.day_number, 1);
        assert!(info.is_weekday);
    }

    // ── relative ────────────────────────────────────────────────────────

    #[test]
    fn test_relative_today_and_neighbours() {
        assert_eq!(relative(anchor(), anchor()).human_readable, "today");
        assert_eq!(relative(date(2026, 2, 9), anchor()).human_readable, "tomorrow");
        assert_eq!(relative(date(2026, 2, 7), anchor()).human_readable, "yesterday");
    }

    #[test]
    fn test_relative_weeks_and_days() {
        let info = relative(date(2026, 4, 2), anchor());
        assert_eq!(info.days_from_today, 53);
        assert_eq!(info.human_readable, "in 7 weeks and 4 days");
    }

    #[test]
    fn test_relative_past() {
        let info = relative(date(2026, 2, 5), anchor());
        assert_eq!(info.days_from_today, -3);
        assert_eq!(info.human_readable, "3 days ago");
        // Thu Feb 5, Fri Feb 6 (Sat/Sun are not business days)
        assert_eq!(info.business_days, -2);
    }

    #[test]
    fn test_relative_single_week() {
        assert_eq!(relative(date(2026, 2, 15), anchor()).human_readable, "in 1 week");
        assert_eq!(relative(date(2026, 2, 1), anchor()).human_readable, "1 week ago");
    }

    #[test]
    fn test_relative_long_distance_stays_in_weeks() {
        let far = crate::calendar::add_days(anchor(), 400).unwrap();
        assert_eq!(relative(far, anchor()).human_readable, "in 57 weeks and 1 day");
    }

    #[test]
    fn test_relative_business_days_forward() {
        // Sun Feb 8 → Fri Feb 13: Mon..Fri
        assert_eq!(relative(date(2026, 2, 13), anchor()).business_days, 5);
    }

    // ── month_grid ──────────────────────────────────────────────────────

    #[test]
    fn test_month_grid_february_2026() {
        // Feb 1, 2026 is a Sunday, so the month fills exactly four rows
        let grid = month_grid(None, None, anchor(), WeekStart::Sunday).unwrap();
        assert_eq!(grid.title(), "February 2026");
        assert_eq!(grid.weeks.len(), 4);
        assert_eq!(grid.weeks[0][0].unwrap().day, 1);
        assert_eq!(grid.weeks[3][6].unwrap().day, 28);
        assert_eq!(grid.today, Some(anchor()));
    }

    #[test]
    fn test_month_grid_marks_today() {
        let grid = month_grid(None, None, anchor(), WeekStart::Sunday).unwrap();
        let marked: Vec<u32> = grid
            .weeks
            .iter()
            .flatten()
            .flatten()
            .filter(|cell| cell.is_today)
            .map(|cell| cell.day)
            .collect();
        assert_eq!(marked, vec![8]);
    }

    #[test]
    fn test_month_grid_other_month_has_no_today() {
        let grid = month_grid(Some(3), Some(2026), anchor(), WeekStart::Sunday).unwrap();
        assert!(grid.today.is_none());
        // March 1, 2026 is a Sunday; March 31 a Tuesday in the fifth row
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(grid.weeks[4][2].unwrap().day, 31);
        assert!(grid.weeks[4][3].is_none());
    }

    #[test]
    fn test_month_grid_monday_start() {
        let grid = month_grid(Some(2), Some(2026), anchor(), WeekStart::Monday).unwrap();
        assert_eq!(grid.weekday_headers()[0], Weekday::Mon);
        // Sunday Feb 1 sits in the last column of the first row
        assert!(grid.weeks[0][5].is_none());
        assert_eq!(grid.weeks[0][6].unwrap().day, 1);
    }

    #[test]
    fn test_month_grid_headers_sunday_first() {
        let grid = month_grid(None, None, anchor(), WeekStart::Sunday).unwrap();
        assert_eq!(
            grid.weekday_headers(),
            [
                Weekday::Sun,
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat
            ]
        );
    }

    #[test]
    fn test_month_grid_invalid_month() {
        let err = month_grid(Some(13), None, anchor(), WeekStart::Sunday).unwrap_err();
        assert_eq!(err, DateError::InvalidMonth(13));
        assert!(err.to_string().contains("Invalid month"));
    }
}
