//! # date-resolver
//!
//! Deterministic resolution of natural-language relative date expressions.
//!
//! Phrases such as "next tuesday", "3 fridays from now", "end of month" or
//! "in 5 business days" are turned into exact calendar dates against an
//! explicit anchor date. The library never reads the system clock and never
//! guesses: input it does not understand is reported as an error.
//!
//! ## Modules
//!
//! - [`calendar`]: Pure date arithmetic: month/year clamping, weekday search, business days, period boundaries
//! - [`expression`]: Normalization and classification of an expression into a typed intent
//! - [`resolver`]: Intent + anchor → concrete date with a human-readable description
//! - [`report`]: Weekday lookup, distance from the anchor, month grids
//! - [`error`]: Error types

pub mod calendar;
pub mod error;
pub mod expression;
pub mod report;
pub mod resolver;

pub use calendar::{
    add_business_days, add_days, add_months, add_years, business_days_between, days_in_month,
    end_of_month, is_leap_year, is_weekday, is_weekend, next_weekday, period_end, period_start,
    previous_weekday, start_of_month, Period, WeekStart,
};
pub use error::DateError;
pub use expression::{classify, parse_iso_date, Classified, ExpressionIntent};
pub use report::{month_grid, relative, weekday_info, GridDay, MonthGrid, RelativeInfo, WeekdayInfo};
pub use resolver::{
    resolve, resolve_intent, resolve_with_options, AmbiguityPolicy, ResolveOptions, ResolvedDate,
    DEFAULT_AMBIGUITY_POLICY, TIME_IGNORED_WARNING,
};
