//! Pure calendar arithmetic on naive dates.
//!
//! Every function here is deterministic and takes its reference date as an
//! argument. Month and year arithmetic clamps to the last valid day of the
//! target month; leap years follow the proleptic Gregorian rule.
//!
//! # Business days
//!
//! Saturday and Sunday are the only non-business days (no holiday calendars).
//! Counting always **excludes the starting date and includes the target date**:
//!
//! - [`add_business_days`] steps one calendar day at a time and counts only the
//!   steps that land on a weekday, so a weekend anchor behaves like the adjacent
//!   business day ("next business day" from Saturday is Monday).
//! - [`business_days_between`] counts the weekdays in the same span, which makes
//!   the two functions inverse: `business_days_between(a, add_business_days(a, n)?) == n`.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{DateError, Result};

// ── Week configuration ──────────────────────────────────────────────────────

/// Which day begins a week for period computations ("start of week", "this Friday",
/// calendar grids).
///
/// Does **not** affect "next Monday" or "last Friday", which are always relative
/// to the anchor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// US calendar convention, used by the month grid.
    #[default]
    Sunday,
    /// ISO 8601 convention.
    Monday,
}

impl WeekStart {
    /// The weekday that opens a week.
    pub fn first_day(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// How many days `weekday` is from the start of its week.
    pub fn days_since_start(self, weekday: Weekday) -> i64 {
        match self {
            WeekStart::Sunday => i64::from(weekday.num_days_from_sunday()),
            WeekStart::Monday => i64::from(weekday.num_days_from_monday()),
        }
    }
}

/// A calendar period with well-defined first and last days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    Year,
}

impl Period {
    pub fn name(self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

// ── Month lengths ───────────────────────────────────────────────────────────

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`; 0 for an out-of-range month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

// ── Offsets ─────────────────────────────────────────────────────────────────

/// Shift `date` by `n` calendar days (negative moves backwards).
pub fn add_days(date: NaiveDate, n: i64) -> Result<NaiveDate> {
    let magnitude = Days::new(n.unsigned_abs());
    let shifted = if n >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.ok_or_else(|| out_of_range(date, n, "days"))
}

/// Shift `date` by `n` months, clamping the day to the target month's length.
///
/// `2026-01-31 + 1 month` is `2026-02-28`, never `2026-03-03`.
pub fn add_months(date: NaiveDate, n: i32) -> Result<NaiveDate> {
    let magnitude = Months::new(n.unsigned_abs());
    let shifted = if n >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    };
    shifted.ok_or_else(|| out_of_range(date, i64::from(n), "months"))
}

/// Shift `date` by `n` years. February 29 clamps to February 28 in common years.
pub fn add_years(date: NaiveDate, n: i32) -> Result<NaiveDate> {
    let months = n
        .checked_mul(12)
        .ok_or_else(|| out_of_range(date, i64::from(n), "years"))?;
    add_months(date, months)
}

fn out_of_range(date: NaiveDate, n: i64, unit: &str) -> DateError {
    DateError::OutOfRange(format!("{date} shifted by {n} {unit}"))
}

// ── Weekdays ────────────────────────────────────────────────────────────────

pub fn weekday_of(date: NaiveDate) -> Weekday {
    date.weekday()
}

/// ISO 8601 day number: Monday = 1 … Sunday = 7.
pub fn iso_day_number(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_weekday(date: NaiveDate) -> bool {
    !is_weekend(date)
}

/// Full English name of a weekday ("Monday").
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English name of a month (1-12).
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// First `weekday` strictly after `date` (1 to 7 days ahead).
pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> Result<NaiveDate> {
    let current = i64::from(date.weekday().num_days_from_monday());
    let target = i64::from(weekday.num_days_from_monday());
    let days_ahead = (target - current + 7) % 7;
    let days_ahead = if days_ahead == 0 { 7 } else { days_ahead };
    add_days(date, days_ahead)
}

/// First `weekday` strictly before `date` (1 to 7 days back).
pub fn previous_weekday(date: NaiveDate, weekday: Weekday) -> Result<NaiveDate> {
    let current = i64::from(date.weekday().num_days_from_monday());
    let target = i64::from(weekday.num_days_from_monday());
    let days_back = (current - target + 7) % 7;
    let days_back = if days_back == 0 { 7 } else { days_back };
    add_days(date, -days_back)
}

// ── Business days ───────────────────────────────────────────────────────────

/// Move `n` business days away from `date` (negative moves backwards).
///
/// `date` itself is never counted; `n == 0` returns `date` unchanged even on a
/// weekend. For `n != 0` the result is always a weekday.
pub fn add_business_days(date: NaiveDate, n: i64) -> Result<NaiveDate> {
    if n == 0 {
        return Ok(date);
    }
    let step = n.signum();
    let mut remaining = n.unsigned_abs();

    // Any 7 consecutive days hold exactly 5 weekdays. Jump whole weeks but leave
    // at least one landing for the walk so a weekend jump target is not returned.
    let weeks = (remaining - 1) / 5;
    let jump = i64::try_from(weeks * 7)
        .map_err(|_| out_of_range(date, n, "business days"))?;
    let mut current = add_days(date, step * jump)?;
    remaining -= weeks * 5;

    while remaining > 0 {
        current = add_days(current, step)?;
        if is_weekday(current) {
            remaining -= 1;
        }
    }
    Ok(current)
}

/// Signed number of business days from `from` to `to`, excluding `from` and
/// including `to`. Negative when `to` is before `from`.
pub fn business_days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    if to >= from {
        weekdays_in_span(from, to) - i64::from(is_weekday(from)) + i64::from(is_weekday(to))
    } else {
        -weekdays_in_span(to, from)
    }
}

/// Weekdays in the half-open span `[start, end)`; requires `start <= end`.
fn weekdays_in_span(start: NaiveDate, end: NaiveDate) -> i64 {
    let total = (end - start).num_days();
    let full_weeks = total / 7;
    let remainder = usize::try_from(total % 7).unwrap_or(0);
    let tail_start = start + chrono::Duration::days(full_weeks * 7);
    let tail = tail_start
        .iter_days()
        .take(remainder)
        .filter(|d| is_weekday(*d))
        .count();
    full_weeks * 5 + tail as i64
}

// ── Period boundaries ───────────────────────────────────────────────────────

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date.year(), date.month()))
        .unwrap_or(date)
}

pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

/// First day of the week containing `date`.
///
/// Unlike the month and year boundaries this can leave chrono's representable
/// range (the week of `NaiveDate::MIN`), hence the `Result`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> Result<NaiveDate> {
    add_days(date, -week_start.days_since_start(date.weekday()))
}

/// Last day of the week containing `date` (Saturday for a Sunday-start week).
pub fn end_of_week(date: NaiveDate, week_start: WeekStart) -> Result<NaiveDate> {
    add_days(date, 6 - week_start.days_since_start(date.weekday()))
}

/// First day of the `period` containing `date`.
pub fn period_start(date: NaiveDate, period: Period, week_start: WeekStart) -> Result<NaiveDate> {
    match period {
        Period::Week => start_of_week(date, week_start),
        Period::Month => Ok(start_of_month(date)),
        Period::Year => Ok(start_of_year(date)),
    }
}

/// Last day of the `period` containing `date`.
pub fn period_end(date: NaiveDate, period: Period, week_start: WeekStart) -> Result<NaiveDate> {
    match period {
        Period::Week => end_of_week(date, week_start),
        Period::Month => Ok(end_of_month(date)),
        Period::Year => Ok(end_of_year(date)),
    }
}

/// Move `date` by `n` whole periods (weeks by 7 days, months and years clamped).
pub fn shift_period(date: NaiveDate, period: Period, n: i32) -> Result<NaiveDate> {
    match period {
        Period::Week => add_days(date, i64::from(n) * 7),
        Period::Month => add_months(date, n),
        Period::Year => add_years(date, n),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── month lengths ───────────────────────────────────────────────────

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2026));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_days_in_february() {
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29);
        assert_eq!(days_in_month(2026, 13), 0);
    }

    // ── offsets ─────────────────────────────────────────────────────────

    #[test]
    fn test_add_days_across_year() {
        assert_eq!(add_days(date(2026, 12, 30), 3).unwrap(), date(2027, 1, 2));
        assert_eq!(add_days(date(2026, 1, 1), -1).unwrap(), date(2025, 12, 31));
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_months(date(2026, 1, 31), 1).unwrap(), date(2026, 2, 28));
        assert_eq!(add_months(date(2028, 1, 31), 1).unwrap(), date(2028, 2, 29));
        assert_eq!(add_months(date(2026, 3, 31), -1).unwrap(), date(2026, 2, 28));
    }

    #[test]
    fn test_add_months_across_year() {
        assert_eq!(add_months(date(2026, 11, 15), 3).unwrap(), date(2027, 2, 15));
        assert_eq!(add_months(date(2026, 2, 15), -14).unwrap(), date(2024, 12, 15));
    }

    #[test]
    fn test_add_years_from_leap_day() {
        assert_eq!(add_years(date(2028, 2, 29), 1).unwrap(), date(2029, 2, 28));
        assert_eq!(add_years(date(2028, 2, 29), 4).unwrap(), date(2032, 2, 29));
    }

    #[test]
    fn test_add_days_out_of_range() {
        let err = add_days(NaiveDate::MAX, 1).unwrap_err();
        assert!(matches!(err, DateError::OutOfRange(_)));
    }

    // ── weekdays ────────────────────────────────────────────────────────

    #[test]
    fn test_weekday_of_known_date() {
        // 2026-02-08 is a Sunday
        assert_eq!(weekday_of(date(2026, 2, 8)), Weekday::Sun);
        assert_eq!(iso_day_number(date(2026, 2, 8)), 7);
        assert_eq!(iso_day_number(date(2026, 2, 9)), 1);
    }

    #[test]
    fn test_weekend_detection() {
        assert!(is_weekend(date(2026, 2, 7)));
        assert!(is_weekend(date(2026, 2, 8)));
        assert!(is_weekday(date(2026, 2, 9)));
    }

    #[test]
    fn test_next_weekday_skips_same_day() {
        // Friday → next Friday is a week later
        assert_eq!(
            next_weekday(date(2026, 2, 13), Weekday::Fri).unwrap(),
            date(2026, 2, 20)
        );
        assert_eq!(
            next_weekday(date(2026, 2, 8), Weekday::Tue).unwrap(),
            date(2026, 2, 10)
        );
    }

    #[test]
    fn test_previous_weekday_skips_same_day() {
        assert_eq!(
            previous_weekday(date(2026, 2, 13), Weekday::Fri).unwrap(),
            date(2026, 2, 6)
        );
        assert_eq!(
            previous_weekday(date(2026, 2, 8), Weekday::Sat).unwrap(),
            date(2026, 2, 7)
        );
    }

    // ── business days ───────────────────────────────────────────────────

    #[test]
    fn test_business_days_from_friday() {
        // Fri Feb 13 + 1 business day → Mon Feb 16
        assert_eq!(add_business_days(date(2026, 2, 13), 1).unwrap(), date(2026, 2, 16));
        assert_eq!(add_business_days(date(2026, 2, 13), 5).unwrap(), date(2026, 2, 20));
    }

    #[test]
    fn test_business_days_from_weekend_anchor() {
        // Sat Feb 7 and Sun Feb 8 both reach Mon Feb 9 after one business day
        assert_eq!(add_business_days(date(2026, 2, 7), 1).unwrap(), date(2026, 2, 9));
        assert_eq!(add_business_days(date(2026, 2, 8), 1).unwrap(), date(2026, 2, 9));
        // Five business days from Saturday is the following Friday, not Saturday
        assert_eq!(add_business_days(date(2026, 2, 7), 5).unwrap(), date(2026, 2, 13));
    }

    #[test]
    fn test_business_days_backwards() {
        // Mon Feb 9 - 1 business day → Fri Feb 6
        assert_eq!(add_business_days(date(2026, 2, 9), -1).unwrap(), date(2026, 2, 6));
        // Sat Feb 7 - 1 business day → Fri Feb 6
        assert_eq!(add_business_days(date(2026, 2, 7), -1).unwrap(), date(2026, 2, 6));
    }

    #[test]
    fn test_business_days_zero_is_identity() {
        assert_eq!(add_business_days(date(2026, 2, 7), 0).unwrap(), date(2026, 2, 7));
    }

    #[test]
    fn test_business_days_between_week() {
        // Mon → next Mon: Tue, Wed, Thu, Fri, Mon
        assert_eq!(business_days_between(date(2026, 2, 9), date(2026, 2, 16)), 5);
        assert_eq!(business_days_between(date(2026, 2, 16), date(2026, 2, 9)), -5);
        assert_eq!(business_days_between(date(2026, 2, 9), date(2026, 2, 9)), 0);
    }

    #[test]
    fn test_business_days_between_weekend_only() {
        // Fri → Sun covers only Saturday and Sunday
        assert_eq!(business_days_between(date(2026, 2, 13), date(2026, 2, 15)), 0);
    }

    // ── boundaries ──────────────────────────────────────────────────────

    #[test]
    fn test_month_boundaries() {
        let d = date(2026, 2, 8);
        assert_eq!(start_of_month(d), date(2026, 2, 1));
        assert_eq!(end_of_month(d), date(2026, 2, 28));
        assert_eq!(end_of_month(date(2028, 2, 3)), date(2028, 2, 29));
    }

    #[test]
    fn test_year_boundaries() {
        let d = date(2026, 7, 4);
        assert_eq!(start_of_year(d), date(2026, 1, 1));
        assert_eq!(end_of_year(d), date(2026, 12, 31));
    }

    #[test]
    fn test_week_boundaries_sunday_start() {
        // Wed Feb 11 → week of Sun Feb 8 .. Sat Feb 14
        let d = date(2026, 2, 11);
        assert_eq!(start_of_week(d, WeekStart::Sunday).unwrap(), date(2026, 2, 8));
        assert_eq!(end_of_week(d, WeekStart::Sunday).unwrap(), date(2026, 2, 14));
        // A Sunday starts its own week
        assert_eq!(
            start_of_week(date(2026, 2, 8), WeekStart::Sunday).unwrap(),
            date(2026, 2, 8)
        );
    }

    #[test]
    fn test_week_boundaries_monday_start() {
        let d = date(2026, 2, 8); // Sunday
        assert_eq!(start_of_week(d, WeekStart::Monday).unwrap(), date(2026, 2, 2));
        assert_eq!(end_of_week(d, WeekStart::Monday).unwrap(), date(2026, 2, 8));
    }

    #[test]
    fn test_shift_period_month_clamps() {
        assert_eq!(
            shift_period(date(2026, 1, 31), Period::Month, 1).unwrap(),
            date(2026, 2, 28)
        );
        assert_eq!(
            shift_period(date(2026, 1, 31), Period::Week, -1).unwrap(),
            date(2026, 1, 24)
        );
    }

    // ── properties ──────────────────────────────────────────────────────

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (1900i32..2200, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    proptest! {
        #[test]
        fn prop_business_days_never_weekend(anchor in any_date(), n in 1i64..400) {
            let result = add_business_days(anchor, n).unwrap();
            prop_assert!(is_weekday(result));
        }

        #[test]
        fn prop_business_days_strictly_increasing(anchor in any_date(), n in 2i64..400) {
            let later = add_business_days(anchor, n).unwrap();
            let earlier = add_business_days(anchor, n - 1).unwrap();
            prop_assert!(later > earlier);
        }

        #[test]
        fn prop_business_days_between_inverts_add(anchor in any_date(), n in -400i64..400) {
            let target = add_business_days(anchor, n).unwrap();
            prop_assert_eq!(business_days_between(anchor, target), n);
        }

        #[test]
        fn prop_start_of_month_idempotent(d in any_date()) {
            prop_assert_eq!(start_of_month(start_of_month(d)), start_of_month(d));
        }

        #[test]
        fn prop_add_months_stays_valid(d in any_date(), day in 29u32..=31, n in -36i32..36) {
            let start = NaiveDate::from_ymd_opt(d.year(), d.month(), day).unwrap_or(d);
            let shifted = add_months(start, n).unwrap();
            prop_assert!(shifted.day() <= days_in_month(shifted.year(), shifted.month()));
            prop_assert!(shifted.day() <= start.day());
        }
    }
}
