//! Resolution of classified expressions against an anchor date.
//!
//! The anchor ("today") is always an explicit argument. Nothing in this module
//! reads the system clock, so every result is reproducible from
//! `(expression, anchor, options)` alone.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::{
    add_business_days, add_days, add_months, add_years, month_name, next_weekday, period_end,
    period_start, previous_weekday, shift_period, weekday_name, Period, WeekStart,
};
use crate::error::{DateError, Result};
use crate::expression::{
    classify, BoundaryEdge, Classified, Direction, ExpressionIntent, OffsetUnit, PeriodRelative,
    WeekdayQualifier,
};

/// Warning attached when a time-of-day token was discarded.
pub const TIME_IGNORED_WARNING: &str = "Time component detected but ignored (date-only resolver)";

/// How ambiguous expressions (a bare weekday, a month and day without a year)
/// pick between the occurrence before and after the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Next occurrence: strictly after the anchor for weekdays, on or after it
    /// for named dates.
    #[default]
    PreferFuture,
    /// Most recent occurrence: strictly before the anchor for weekdays, on or
    /// before it for named dates.
    PreferPast,
}

/// The policy every resolution uses unless the caller overrides it.
pub const DEFAULT_AMBIGUITY_POLICY: AmbiguityPolicy = AmbiguityPolicy::PreferFuture;

/// Options for [`resolve_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Which day starts the week for "this friday" and week boundaries.
    pub week_start: WeekStart,
    pub ambiguity: AmbiguityPolicy,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            ambiguity: DEFAULT_AMBIGUITY_POLICY,
        }
    }
}

/// The result of resolving a date expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDate {
    /// The input expression, trimmed.
    pub expression: String,
    pub date: NaiveDate,
    /// Full weekday name ("Tuesday").
    pub day_of_week: String,
    /// `date - anchor` in days; negative for past dates.
    pub days_from_today: i64,
    /// What was understood and how far away it is,
    /// e.g. "next Tuesday (2 days from today, a Tuesday)".
    pub description: String,
    /// Long form of the date, e.g. "Tuesday, February 10, 2026".
    pub interpretation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Resolve a date expression relative to `anchor` with default options.
///
/// # Errors
///
/// Returns [`DateError::UnrecognizedExpression`] when the expression matches no
/// known pattern and [`DateError::InvalidDateLiteral`] for a date that does not
/// exist. This function never guesses a date for input it does not understand.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use date_resolver::resolve;
///
/// let anchor = NaiveDate::from_ymd_opt(2026, 2, 8).unwrap(); // a Sunday
/// let result = resolve("3 fridays from now", anchor).unwrap();
/// assert_eq!(result.date, NaiveDate::from_ymd_opt(2026, 2, 27).unwrap());
/// assert_eq!(result.days_from_today, 19);
/// ```
pub fn resolve(expression: &str, anchor: NaiveDate) -> Result<ResolvedDate> {
    resolve_with_options(expression, anchor, &ResolveOptions::default())
}

/// Resolve a date expression relative to `anchor`.
///
/// # Errors
///
/// See [`resolve`].
pub fn resolve_with_options(
    expression: &str,
    anchor: NaiveDate,
    options: &ResolveOptions,
) -> Result<ResolvedDate> {
    let classified = classify(expression)?;
    resolve_intent(&classified, anchor, options)
}

/// Turn an already classified expression into a concrete date.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if the arithmetic leaves chrono's
/// representable range, and [`DateError::InvalidDateLiteral`] for a named date
/// with an explicit year that does not exist.
pub fn resolve_intent(
    classified: &Classified,
    anchor: NaiveDate,
    options: &ResolveOptions,
) -> Result<ResolvedDate> {
    let (date, label) = resolve_date(&classified.intent, anchor, options)?;
    let days_from_today = (date - anchor).num_days();
    let day_of_week = weekday_name(date.weekday());

    Ok(ResolvedDate {
        expression: classified.source.clone(),
        date,
        day_of_week: day_of_week.to_string(),
        days_from_today,
        description: format!("{label} ({}, a {day_of_week})", describe_distance(days_from_today)),
        interpretation: format_interpretation(date),
        warning: classified
            .has_time_component
            .then(|| TIME_IGNORED_WARNING.to_string()),
    })
}

// ── Handlers ────────────────────────────────────────────────────────────────

fn resolve_date(
    intent: &ExpressionIntent,
    anchor: NaiveDate,
    options: &ResolveOptions,
) -> Result<(NaiveDate, String)> {
    match *intent {
        ExpressionIntent::Fixed { day } => {
            Ok((add_days(anchor, day.offset_days())?, day.label().to_string()))
        }

        ExpressionIntent::WeekdayRelative { weekday, qualifier } => {
            let name = weekday_name(weekday);
            match qualifier {
                WeekdayQualifier::Next => Ok((next_weekday(anchor, weekday)?, format!("next {name}"))),
                WeekdayQualifier::Last => {
                    Ok((previous_weekday(anchor, weekday)?, format!("last {name}")))
                }
                WeekdayQualifier::Bare => match options.ambiguity {
                    AmbiguityPolicy::PreferFuture => {
                        Ok((next_weekday(anchor, weekday)?, format!("next {name}")))
                    }
                    AmbiguityPolicy::PreferPast => {
                        Ok((previous_weekday(anchor, weekday)?, format!("last {name}")))
                    }
                },
                WeekdayQualifier::This => {
                    let week_start = period_start(anchor, Period::Week, options.week_start)?;
                    let date = add_days(week_start, options.week_start.days_since_start(weekday))?;
                    Ok((date, format!("this {name}")))
                }
                WeekdayQualifier::NthFromNow(n) => {
                    let first = next_weekday(anchor, weekday)?;
                    let date = add_days(first, 7 * (i64::from(n) - 1))?;
                    Ok((date, format!("{n} {name}{} from now", plural(i64::from(n)))))
                }
            }
        }

        ExpressionIntent::UnitOffset {
            unit,
            count,
            direction,
        } => {
            let signed = direction.sign() * i64::from(count);
            let date = match unit {
                OffsetUnit::Day => add_days(anchor, signed)?,
                OffsetUnit::Week => add_days(anchor, signed * 7)?,
                OffsetUnit::Month => add_months(anchor, to_i32(signed)?)?,
                OffsetUnit::Year => add_years(anchor, to_i32(signed)?)?,
            };
            let span = format!("{count} {}{}", unit.name(), plural(i64::from(count)));
            Ok((date, directional(&span, direction)))
        }

        ExpressionIntent::BusinessOffset { count, direction } => {
            let date = add_business_days(anchor, direction.sign() * i64::from(count))?;
            let label = if count == 1 && direction == Direction::Future {
                "next business day".to_string()
            } else {
                let span = format!("{count} business day{}", plural(i64::from(count)));
                directional(&span, direction)
            };
            Ok((date, label))
        }

        ExpressionIntent::PeriodBoundary {
            period,
            edge,
            relative,
        } => {
            let (reference, which) = match relative {
                PeriodRelative::Current => (anchor, "this"),
                PeriodRelative::Next => (shift_period(anchor, period, 1)?, "next"),
                PeriodRelative::Previous => (shift_period(anchor, period, -1)?, "last"),
            };
            let (date, edge_name) = match edge {
                BoundaryEdge::Start => (period_start(reference, period, options.week_start)?, "start"),
                BoundaryEdge::End => (period_end(reference, period, options.week_start)?, "end"),
            };
            Ok((date, format!("{edge_name} of {which} {}", period.name())))
        }

        ExpressionIntent::NamedDate { month, day, year } => {
            let date = match year {
                Some(y) => NaiveDate::from_ymd_opt(y, month, day).ok_or_else(|| {
                    DateError::InvalidDateLiteral(format!(
                        "'{} {day}, {y}' is not a real calendar date",
                        month_name(month)
                    ))
                })?,
                None => nearest_occurrence(anchor, month, day, options.ambiguity)?,
            };
            Ok((date, format!("{} {day}, {}", month_name(month), date.year())))
        }

        ExpressionIntent::IsoDate { date } => Ok((date, format!("ISO date {date}"))),
    }
}

/// Closest month/day on or after (or on or before) the anchor. The anchor itself
/// counts, so "march 15" on March 15 is today, not next year.
fn nearest_occurrence(
    anchor: NaiveDate,
    month: u32,
    day: u32,
    policy: AmbiguityPolicy,
) -> Result<NaiveDate> {
    // Leap years are at most 8 years apart (1896 → 1904), which bounds the
    // search for February 29.
    for offset in 0..=8 {
        let candidate = match policy {
            AmbiguityPolicy::PreferFuture => {
                NaiveDate::from_ymd_opt(anchor.year() + offset, month, day)
                    .filter(|d| *d >= anchor)
            }
            AmbiguityPolicy::PreferPast => {
                NaiveDate::from_ymd_opt(anchor.year() - offset, month, day)
                    .filter(|d| *d <= anchor)
            }
        };
        if let Some(date) = candidate {
            return Ok(date);
        }
    }
    Err(DateError::InvalidDateLiteral(format!(
        "'{} {day}' has no occurrence near {anchor}",
        month_name(month)
    )))
}

// ── Formatting helpers ──────────────────────────────────────────────────────

fn to_i32(n: i64) -> Result<i32> {
    i32::try_from(n).map_err(|_| DateError::OutOfRange(format!("offset {n} is too large")))
}

fn plural(n: i64) -> &'static str {
    if n.abs() == 1 {
        ""
    } else {
        "s"
    }
}

fn directional(span: &str, direction: Direction) -> String {
    match direction {
        Direction::Future => format!("in {span}"),
        Direction::Past => format!("{span} ago"),
    }
}

/// "today", "1 day from today", "3 days ago".
fn describe_distance(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        d if d > 0 => format!("{d} day{} from today", plural(d)),
        d => format!("{} day{} ago", -d, plural(d)),
    }
}

/// Format a date as "Tuesday, February 10, 2026".
fn format_interpretation(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

// ── Tests ───────────────────────────────────────────────────────────────────
