//! Classification of date expressions into structured intents.
//!
//! [`classify`] normalizes the input, strips a trailing time-of-day token, and
//! then runs an ordered cascade of matchers. The first matcher that recognizes
//! the text decides the result; later matchers never see it. Order matters
//! because the families overlap ("next friday" vs "next week", "march 15" vs
//! "15 march").
//!
//! A matcher answers one of three ways:
//!
//! - `None`: not this family, try the next matcher
//! - `Some(Ok(intent))`: recognized
//! - `Some(Err(_))`: recognized shape but not a real date (e.g. `"2026-02-30"`,
//!   `"february 30"`). Invalid literals are reported, never clamped.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

use crate::calendar::{days_in_month, month_name, Period};
use crate::error::{DateError, Result};

// ── Intent types ────────────────────────────────────────────────────────────

/// Single-word (or fixed phrase) offsets from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedDay {
    Today,
    Tomorrow,
    Yesterday,
    DayAfterTomorrow,
    DayBeforeYesterday,
}

impl FixedDay {
    pub fn offset_days(self) -> i64 {
        match self {
            FixedDay::Today => 0,
            FixedDay::Tomorrow => 1,
            FixedDay::Yesterday => -1,
            FixedDay::DayAfterTomorrow => 2,
            FixedDay::DayBeforeYesterday => -2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FixedDay::Today => "today",
            FixedDay::Tomorrow => "tomorrow",
            FixedDay::Yesterday => "yesterday",
            FixedDay::DayAfterTomorrow => "day after tomorrow",
            FixedDay::DayBeforeYesterday => "day before yesterday",
        }
    }
}

/// How a weekday name is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekdayQualifier {
    /// "next friday": strictly after the anchor.
    Next,
    /// "last friday": strictly before the anchor.
    Last,
    /// "this friday": inside the anchor's week, possibly in the past.
    This,
    /// "friday": ambiguous, resolved by the ambiguity policy.
    Bare,
    /// "3 fridays from now": the n-th occurrence strictly after the anchor.
    NthFromNow(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Future,
    Past,
}

impl Direction {
    pub fn sign(self) -> i64 {
        match self {
            Direction::Future => 1,
            Direction::Past => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetUnit {
    Day,
    Week,
    Month,
    Year,
}

impl OffsetUnit {
    pub fn name(self) -> &'static str {
        match self {
            OffsetUnit::Day => "day",
            OffsetUnit::Week => "week",
            OffsetUnit::Month => "month",
            OffsetUnit::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryEdge {
    Start,
    End,
}

/// Which period a boundary is taken from, relative to the anchor's own period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodRelative {
    Current,
    Next,
    Previous,
}

/// The structured form of a date expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpressionIntent {
    Fixed {
        day: FixedDay,
    },
    WeekdayRelative {
        weekday: Weekday,
        qualifier: WeekdayQualifier,
    },
    UnitOffset {
        unit: OffsetUnit,
        count: u32,
        direction: Direction,
    },
    BusinessOffset {
        count: u32,
        direction: Direction,
    },
    PeriodBoundary {
        period: Period,
        edge: BoundaryEdge,
        relative: PeriodRelative,
    },
    /// Month and day already checked against the longest possible month
    /// (February 29 passes without a year).
    NamedDate {
        month: u32,
        day: u32,
        year: Option<i32>,
    },
    IsoDate {
        date: NaiveDate,
    },
}

/// A classified expression plus what was discarded while classifying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classified {
    /// The caller's input, trimmed.
    pub source: String,
    pub intent: ExpressionIntent,
    /// A trailing time-of-day token ("at 3pm", "morning") was stripped.
    pub has_time_component: bool,
}

// ── Classification ──────────────────────────────────────────────────────────

type Matcher = fn(&str) -> Option<Result<ExpressionIntent>>;

/// Matchers in priority order.
const CASCADE: &[(&str, Matcher)] = &[
    ("iso_date", match_iso_date),
    ("fixed_word", match_fixed_word),
    ("business_days", match_business_days),
    ("weekday_relative", match_weekday_relative),
    ("unit_offset", match_unit_offset),
    ("period_boundary", match_period_boundary),
    ("named_date", match_named_date),
];

/// Classify an expression into exactly one [`ExpressionIntent`].
///
/// # Errors
///
/// - [`DateError::InvalidDateLiteral`] for an ISO or named date that does not exist
/// - [`DateError::UnrecognizedExpression`] when no matcher accepts the input; the
///   `unsupported` field names an out-of-scope feature if one was detected
///
/// # Examples
///
/// ```
/// use date_resolver::expression::{classify, ExpressionIntent, WeekdayQualifier};
/// use chrono::Weekday;
///
/// let classified = classify("Next Tuesday at 3pm").unwrap();
/// assert!(classified.has_time_component);
/// assert_eq!(
///     classified.intent,
///     ExpressionIntent::WeekdayRelative { weekday: Weekday::Tue, qualifier: WeekdayQualifier::Next }
/// );
/// ```
pub fn classify(input: &str) -> Result<Classified> {
    let normalized = normalize_expression(input);
    let (expr, has_time_component) = strip_time_of_day(&normalized);

    for (name, matcher) in CASCADE {
        if let Some(outcome) = matcher(&expr) {
            tracing::debug!(matcher = *name, expression = %expr, "expression matched");
            return outcome.map(|intent| Classified {
                source: input.trim().to_string(),
                intent,
                has_time_component,
            });
        }
    }

    let unsupported = detect_unsupported(&normalized);
    tracing::debug!(expression = %expr, ?unsupported, "no matcher accepted expression");
    Err(DateError::UnrecognizedExpression {
        expression: input.trim().to_string(),
        unsupported,
    })
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`DateError::InvalidDateLiteral`] for any other shape or for a date
/// that does not exist on the calendar.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    match match_iso_date(s) {
        Some(Ok(ExpressionIntent::IsoDate { date })) => Ok(date),
        Some(Err(e)) => Err(e),
        _ => Err(DateError::InvalidDateLiteral(format!(
            "'{s}': expected YYYY-MM-DD"
        ))),
    }
}

// ── Normalization ───────────────────────────────────────────────────────────

/// Lowercase, turn commas into spaces, drop trailing punctuation, collapse
/// whitespace and strip a leading "the ".
fn normalize_expression(s: &str) -> String {
    let lowered = s.trim().to_lowercase().replace(',', " ");
    let trimmed = lowered.trim_end_matches(['.', '!', '?']);
    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.strip_prefix("the ") {
        Some(rest) => rest.to_string(),
        None => collapsed,
    }
}

/// Remove a trailing time-of-day phrase. Returns the remaining expression and
/// whether anything was removed. A phrase is only stripped when something is
/// left in front of it.
fn strip_time_of_day(expr: &str) -> (String, bool) {
    let tokens: Vec<&str> = expr.split_whitespace().collect();
    let keep = time_suffix_start(&tokens);

    match keep {
        Some(n) if n > 0 => {
            let remaining = tokens[..n].join(" ");
            tracing::trace!(from = %expr, to = %remaining, "stripped time of day");
            (remaining, true)
        }
        _ => (expr.to_string(), false),
    }
}

/// Index of the first token of a trailing time phrase, if there is one.
fn time_suffix_start(tokens: &[&str]) -> Option<usize> {
    let len = tokens.len();
    let last = *tokens.last()?;

    // "in the morning"
    if len >= 3
        && tokens[len - 3] == "in"
        && tokens[len - 2] == "the"
        && matches!(last, "morning" | "afternoon" | "evening")
    {
        return Some(len - 3);
    }

    if matches!(last, "morning" | "afternoon" | "evening" | "night" | "tonight") {
        return Some(len - 1);
    }

    // "3 o'clock", "3 pm", "3:30 pm"
    let clock_len = if len >= 2 && last == "o'clock" && is_clock_hour(tokens[len - 2]) {
        2
    } else if len >= 2
        && matches!(last, "am" | "pm")
        && parse_time_token(&format!("{}{last}", tokens[len - 2])).is_some()
    {
        2
    } else if parse_time_token(last).is_some() {
        1
    } else if len >= 2 && tokens[len - 2] == "at" && is_bare_hour(last) {
        // "at 3", "at 15": a bare number is only a time after "at"
        1
    } else {
        return None;
    };

    let start = len - clock_len;
    if start > 0 && tokens[start - 1] == "at" {
        Some(start - 1)
    } else {
        Some(start)
    }
}

fn is_clock_hour(s: &str) -> bool {
    s.parse::<u32>().is_ok_and(|h| (1..=12).contains(&h))
}

/// A 24-hour clock hour written as one or two digits.
fn is_bare_hour(s: &str) -> bool {
    (1..=2).contains(&s.len())
        && s.bytes().all(|b| b.is_ascii_digit())
        && s.parse::<u32>().is_ok_and(|h| h <= 23)
}

/// Parse a clock time: "3pm", "3:30pm", "15:00", "15:00:00", "noon", "midnight".
/// A lone number with no colon or am/pm is never a time, so "march 15" keeps
/// its day.
fn parse_time_token(s: &str) -> Option<NaiveTime> {
    match s {
        "noon" => return NaiveTime::from_hms_opt(12, 0, 0),
        "midnight" => return NaiveTime::from_hms_opt(0, 0, 0),
        _ => {}
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S") {
        return Some(t);
    }
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        return Some(t);
    }

    let (time_part, is_pm) = if let Some(rest) = s.strip_suffix("pm") {
        (rest, true)
    } else if let Some(rest) = s.strip_suffix("am") {
        (rest, false)
    } else {
        return None;
    };

    let mut parts = time_part.split(':');
    let hour: u32 = parts.next()?.parse().ok()?;
    let minute: u32 = match parts.next() {
        Some(m) => m.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() || !(1..=12).contains(&hour) {
        return None;
    }

    let hour24 = match (hour, is_pm) {
        (12, true) => 12,
        (12, false) => 0,
        (h, true) => h + 12,
        (h, false) => h,
    };
    NaiveTime::from_hms_opt(hour24, minute, 0)
}

// ── Matchers ────────────────────────────────────────────────────────────────

fn match_iso_date(s: &str) -> Option<Result<ExpressionIntent>> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return None;
    }

    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;

    Some(
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| ExpressionIntent::IsoDate { date })
            .ok_or_else(|| {
                DateError::InvalidDateLiteral(format!("'{s}' is not a real calendar date"))
            }),
    )
}

fn match_fixed_word(s: &str) -> Option<Result<ExpressionIntent>> {
    let day = match s {
        "today" | "now" => FixedDay::Today,
        "tomorrow" => FixedDay::Tomorrow,
        "yesterday" => FixedDay::Yesterday,
        "day after tomorrow" => FixedDay::DayAfterTomorrow,
        "day before yesterday" => FixedDay::DayBeforeYesterday,
        _ => return None,
    };
    Some(Ok(ExpressionIntent::Fixed { day }))
}

fn match_business_days(s: &str) -> Option<Result<ExpressionIntent>> {
    let (span, direction) = match s {
        "next business day" | "next workday" | "next work day" | "next weekday"
        | "next working day" => (Ok(1), Direction::Future),
        _ => {
            if let Some(rest) = s.strip_prefix("in ") {
                (parse_business_span(rest)?, Direction::Future)
            } else if let Some(rest) = s.strip_suffix(" ago") {
                (parse_business_span(rest)?, Direction::Past)
            } else {
                let rest = strip_from_now(s)?;
                (parse_business_span(rest)?, Direction::Future)
            }
        }
    };
    Some(span.map(|count| ExpressionIntent::BusinessOffset { count, direction }))
}

/// "3 business days", "1 workday", "a working day".
fn parse_business_span(s: &str) -> Option<Result<u32>> {
    let (count, unit) = s.split_once(' ')?;
    match unit {
        "business day" | "business days" | "workday" | "workdays" | "work day" | "work days"
        | "working day" | "working days" => parse_count(count),
        _ => None,
    }
}

fn match_weekday_relative(s: &str) -> Option<Result<ExpressionIntent>> {
    if let Some(weekday) = parse_weekday(s) {
        return Some(Ok(ExpressionIntent::WeekdayRelative {
            weekday,
            qualifier: WeekdayQualifier::Bare,
        }));
    }

    if let Some((modifier, rest)) = s.split_once(' ') {
        let qualifier = match modifier {
            "next" => Some(WeekdayQualifier::Next),
            "last" | "previous" => Some(WeekdayQualifier::Last),
            "this" => Some(WeekdayQualifier::This),
            _ => None,
        };
        if let (Some(qualifier), Some(weekday)) = (qualifier, parse_weekday(rest)) {
            return Some(Ok(ExpressionIntent::WeekdayRelative { weekday, qualifier }));
        }
    }

    // "3 fridays from now"
    let (count, name) = strip_from_now(s)?.split_once(' ')?;
    let weekday = parse_weekday(name).or_else(|| parse_weekday(name.strip_suffix('s')?))?;
    let count = match parse_count(count)? {
        Ok(0) => return None,
        Ok(n) => n,
        Err(e) => return Some(Err(e)),
    };
    Some(Ok(ExpressionIntent::WeekdayRelative {
        weekday,
        qualifier: WeekdayQualifier::NthFromNow(count),
    }))
}

fn match_unit_offset(s: &str) -> Option<Result<ExpressionIntent>> {
    let (span, direction) = if let Some(rest) = s.strip_prefix("in ") {
        (parse_unit_span(rest)?, Direction::Future)
    } else if let Some(rest) = s.strip_suffix(" ago") {
        (parse_unit_span(rest)?, Direction::Past)
    } else {
        (parse_unit_span(strip_from_now(s)?)?, Direction::Future)
    };
    Some(span.map(|(count, unit)| ExpressionIntent::UnitOffset {
        unit,
        count,
        direction,
    }))
}

/// "3 days", "a week", "an year", "two months".
fn parse_unit_span(s: &str) -> Option<Result<(u32, OffsetUnit)>> {
    let (count, unit) = s.split_once(' ')?;
    let unit = parse_unit(unit)?;
    let count = match count {
        "a" | "an" => Ok(1),
        other => parse_count(other)?,
    };
    Some(count.map(|count| (count, unit)))
}

fn parse_unit(s: &str) -> Option<OffsetUnit> {
    match s {
        "day" | "days" => Some(OffsetUnit::Day),
        "week" | "weeks" | "wk" | "wks" => Some(OffsetUnit::Week),
        "month" | "months" | "mo" | "mos" => Some(OffsetUnit::Month),
        "year" | "years" | "yr" | "yrs" => Some(OffsetUnit::Year),
        _ => None,
    }
}

fn match_period_boundary(s: &str) -> Option<Result<ExpressionIntent>> {
    use BoundaryEdge::{End, Start};
    use PeriodRelative::{Current, Next, Previous};

    let (period, edge, relative) = match s {
        "eom" => (Period::Month, End, Current),
        "eoy" => (Period::Year, End, Current),
        "eow" | "weekend" | "this weekend" => (Period::Week, End, Current),
        _ => {
            if let Some((edge, rest)) = split_edge(s) {
                let (relative, period) = parse_period_ref(rest)?;
                (period, edge, relative)
            } else {
                // "next week", "last month": the start of that period
                let (modifier, rest) = s.split_once(' ')?;
                let relative = match modifier {
                    "next" => Next,
                    "last" | "previous" => Previous,
                    _ => return None,
                };
                (parse_period(rest)?, Start, relative)
            }
        }
    };
    Some(Ok(ExpressionIntent::PeriodBoundary {
        period,
        edge,
        relative,
    }))
}

fn split_edge(s: &str) -> Option<(BoundaryEdge, &str)> {
    if let Some(rest) = s.strip_prefix("start of ") {
        Some((BoundaryEdge::Start, rest))
    } else if let Some(rest) = s.strip_prefix("beginning of ") {
        Some((BoundaryEdge::Start, rest))
    } else {
        s.strip_prefix("end of ").map(|rest| (BoundaryEdge::End, rest))
    }
}

/// "month", "the month", "this week", "next year", "last month".
fn parse_period_ref(s: &str) -> Option<(PeriodRelative, Period)> {
    let s = s.strip_prefix("the ").unwrap_or(s);
    match s.split_once(' ') {
        None => Some((PeriodRelative::Current, parse_period(s)?)),
        Some((modifier, rest)) => {
            let relative = match modifier {
                "this" | "current" => PeriodRelative::Current,
                "next" => PeriodRelative::Next,
                "last" | "previous" => PeriodRelative::Previous,
                _ => return None,
            };
            Some((relative, parse_period(rest)?))
        }
    }
}

fn parse_period(s: &str) -> Option<Period> {
    match s {
        "week" => Some(Period::Week),
        "month" => Some(Period::Month),
        "year" => Some(Period::Year),
        _ => None,
    }
}

fn match_named_date(s: &str) -> Option<Result<ExpressionIntent>> {
    let tokens: Vec<&str> = s.split_whitespace().collect();

    // "<month> <day> [year]" or "<day> [of] <month> [year]"
    let (month, day, year_token) = match tokens.as_slice() {
        [m, d, rest @ ..] if parse_month(m).is_some() => (parse_month(m)?, parse_day(d)?, rest),
        [d, "of", m, rest @ ..] | [d, m, rest @ ..] if parse_month(m).is_some() => {
            (parse_month(m)?, parse_day(d)?, rest)
        }
        _ => return None,
    };

    let year = match year_token {
        [] => None,
        [y] if y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()) => Some(y.parse().ok()?),
        _ => return None,
    };

    let valid = match year {
        Some(y) => NaiveDate::from_ymd_opt(y, month, day).is_some(),
        // 2000 is a leap year, so February 29 is allowed without a year
        None => day >= 1 && day <= days_in_month(2000, month),
    };
    if !valid {
        let shown = match year {
            Some(y) => format!("{} {day}, {y}", month_name(month)),
            None => format!("{} {day}", month_name(month)),
        };
        return Some(Err(DateError::InvalidDateLiteral(format!(
            "'{shown}' is not a real calendar date"
        ))));
    }

    Some(Ok(ExpressionIntent::NamedDate { month, day, year }))
}

/// "15", "15th", "1st", "22nd", "3rd".
fn parse_day(s: &str) -> Option<u32> {
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix))
        .unwrap_or(s);
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn strip_from_now(s: &str) -> Option<&str> {
    s.strip_suffix(" from now")
        .or_else(|| s.strip_suffix(" from today"))
}

// ── Unsupported features ────────────────────────────────────────────────────

/// Name the out-of-scope feature an unrecognized expression appears to use.
fn detect_unsupported(s: &str) -> Option<&'static str> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let first = *tokens.first()?;

    if matches!(first, "every" | "each") || tokens.iter().any(|t| *t == "every") {
        return Some("recurring schedules");
    }
    if tokens.iter().any(|t| matches!(*t, "and" | "plus")) {
        return Some("compound expressions");
    }
    if tokens.len() >= 4
        && parse_ordinal(first)
        && parse_weekday(tokens[1]).is_some()
        && tokens[2] == "of"
    {
        return Some("nth-weekday-of-month queries");
    }
    if tokens.iter().any(|t| {
        matches!(
            *t,
            "utc" | "gmt" | "est" | "edt" | "cst" | "cdt" | "mst" | "mdt" | "pst" | "pdt" | "cet"
                | "cest" | "bst" | "timezone"
        )
    }) {
        return Some("timezone conversions");
    }
    let time_only = tokens.iter().all(|t| {
        *t == "at"
            || parse_time_token(t).is_some()
            || (first == "at" && is_bare_hour(t))
            || matches!(*t, "morning" | "afternoon" | "evening" | "night" | "tonight")
    });
    let sub_day_unit = tokens.iter().any(|t| {
        matches!(
            *t,
            "hour" | "hours" | "hr" | "hrs" | "minute" | "minutes" | "min" | "mins" | "second"
                | "seconds"
        )
    });
    if time_only || sub_day_unit {
        return Some("time-of-day expressions");
    }
    None
}

fn parse_ordinal(s: &str) -> bool {
    matches!(
        s,
        "first" | "second" | "third" | "fourth" | "fifth" | "last" | "1st" | "2nd" | "3rd" | "4th"
            | "5th"
    )
}

// ── Vocabulary ──────────────────────────────────────────────────────────────

/// Parse a weekday name (full or abbreviated, lowercase).
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse a month name to its number (1-12).
pub fn parse_month(s: &str) -> Option<u32> {
    match s {
        "january" | "jan" => Some(1),
        "february" | "feb" => Some(2),
        "march" | "mar" => Some(3),
        "april" | "apr" => Some(4),
        "may" => Some(5),
        "june" | "jun" => Some(6),
        "july" | "jul" => Some(7),
        "august" | "aug" => Some(8),
        "september" | "sep" | "sept" => Some(9),
        "october" | "oct" => Some(10),
        "november" | "nov" => Some(11),
        "december" | "dec" => Some(12),
        _ => None,
    }
}

/// Digits or a spelled number up to twelve. A digit string too long for a
/// `u32` is a count, just an out-of-range one.
fn parse_count(s: &str) -> Option<Result<u32>> {
    let spelled = match s {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        _ if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            return Some(
                s.parse()
                    .map_err(|_| DateError::OutOfRange(format!("count {s} is too large"))),
            );
        }
        _ => return None,
    };
    Some(Ok(spelled))
}

// ── Tests ───────────────────────────────────────────────────────────────────
