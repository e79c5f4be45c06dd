//! Error types for date-resolver operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input matched no known expression family. `unsupported` names the
    /// out-of-scope feature the input appears to use, when one was detected.
    #[error("Unrecognized expression: '{expression}'{}", unsupported_suffix(.unsupported))]
    UnrecognizedExpression {
        expression: String,
        unsupported: Option<&'static str>,
    },

    #[error("Invalid date literal: {0}")]
    InvalidDateLiteral(String),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

fn unsupported_suffix(unsupported: &Option<&'static str>) -> String {
    match unsupported {
        Some(feature) => format!(" ({feature} are not supported)"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, DateError>;
